use crate::dbs::{Database, DbResult};
use async_trait::async_trait;
use shared::models::Character;
use sqlx::{Pool, Postgres, Row, postgres::PgPoolOptions, postgres::PgRow};

const CHARACTER_COLUMNS: &str = "id, name, avatar, age, gender, appearance, personality, description, \
     background, communication_style, interests, nsfw_preferences, created_at";

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn connect(database_url: &str) -> DbResult<Self> {
        let pool = PgPoolOptions::new().connect(database_url).await?;

        let db = Self { pool };
        db.init().await?;
        tracing::info!("Connected to Postgres character store");
        Ok(db)
    }

    async fn init(&self) -> DbResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS characters (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                avatar TEXT NOT NULL,
                age TEXT NOT NULL DEFAULT '',
                gender TEXT NOT NULL DEFAULT '',
                appearance TEXT NOT NULL DEFAULT '',
                personality TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL DEFAULT '',
                background TEXT NOT NULL DEFAULT '',
                communication_style TEXT NOT NULL DEFAULT '',
                interests TEXT NOT NULL DEFAULT '',
                nsfw_preferences TEXT NOT NULL DEFAULT '',
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

fn character_from_row(row: &PgRow) -> Character {
    Character {
        id: row.get("id"),
        name: row.get("name"),
        avatar: row.get("avatar"),
        age: row.get("age"),
        gender: row.get("gender"),
        appearance: row.get("appearance"),
        personality: row.get("personality"),
        description: row.get("description"),
        background: row.get("background"),
        communication_style: row.get("communication_style"),
        interests: row.get("interests"),
        nsfw_preferences: row.get("nsfw_preferences"),
        created_at: Some(row.get("created_at")),
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    async fn get_characters(&self) -> DbResult<Vec<Character>> {
        let rows = sqlx::query(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(character_from_row).collect())
    }

    async fn create_character(&self, character: Character) -> DbResult<Character> {
        let row = sqlx::query(&format!(
            "INSERT INTO characters (id, name, avatar, age, gender, appearance, personality, description, \
             background, communication_style, interests, nsfw_preferences) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {CHARACTER_COLUMNS}"
        ))
        .bind(character.id)
        .bind(character.name)
        .bind(character.avatar)
        .bind(character.age)
        .bind(character.gender)
        .bind(character.appearance)
        .bind(character.personality)
        .bind(character.description)
        .bind(character.background)
        .bind(character.communication_style)
        .bind(character.interests)
        .bind(character.nsfw_preferences)
        .fetch_one(&self.pool)
        .await?;

        Ok(character_from_row(&row))
    }
}
