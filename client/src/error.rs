use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Service answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Character needs a name and a personality")]
    Inadmissible,
    #[error("No reply is pending for this conversation")]
    NoPendingDispatch,
}
