use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DirectorError {
    #[error("Director not found: {0}")]
    NotFound(String),
}
