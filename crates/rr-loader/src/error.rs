use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("road network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for LoaderError {
    fn from(e: csv::Error) -> Self {
        LoaderError::Parse(e.to_string())
    }
}

pub type LoaderResult<T> = Result<T, LoaderError>;
