use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to prepare {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
