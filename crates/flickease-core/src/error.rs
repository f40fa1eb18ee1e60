use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to spawn easing worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("Invalid easing direction: x={x}, y={y}")]
    InvalidDirection { x: i32, y: i32 },

    #[error("Invalid easing interval: {0}ms")]
    InvalidInterval(u64),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
