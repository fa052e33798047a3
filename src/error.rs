use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project {0} not found")]
    ProjectNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, Error>;
