use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImpelError {
    #[error("Processor kind '{kind}' is not registered")]
    UnknownKind { kind: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid run configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ImpelResult<T> = Result<T, ImpelError>;
