use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PEM decode error: {0}")]
    Pem(#[from] pem::error::Error),

    #[error(transparent)]
    Oaep(#[from] oaep::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("expected a PUBLIC KEY block, found {0}")]
    UnexpectedLabel(pem::Label),

    #[error("cannot set up logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
