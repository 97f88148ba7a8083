use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("row name is required")]
    EmptyRowName,
    #[error("invalid score: {0}")]
    InvalidScore(f64),
}
