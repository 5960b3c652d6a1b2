#[derive(Debug, thiserror::Error)]
pub enum NameError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("name pool exhausted: every adjective/surname combination and numeric suffix is taken")]
    ExhaustedPool,
}

pub type Result<T> = std::result::Result<T, NameError>;
