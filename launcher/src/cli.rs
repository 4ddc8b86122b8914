use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Serves the character persistence and chat completion API")]
pub struct Cli {
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, default_value = "db.json")]
    pub local_db_path: PathBuf,
    /// Use Postgres instead of the local JSON file
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,
    #[arg(long)]
    pub api_base: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
}
