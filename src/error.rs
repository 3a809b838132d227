use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitRankError>;

#[derive(Error, Debug)]
pub enum GitRankError {
    #[error("Unknown contributor: {0}")]
    UnknownContributor(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Git command failed: {0}")]
    Git(String),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<gix::discover::Error> for GitRankError {
    fn from(err: gix::discover::Error) -> Self {
        GitRankError::GitDiscover(Box::new(err))
    }
}
