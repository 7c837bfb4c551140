use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("invalid grading scheme: {0}")]
    Configuration(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("subject not found: {0}")]
    NotFound(String),

    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GradeError>;
