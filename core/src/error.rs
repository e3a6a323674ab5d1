use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Cannot read {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown assumption parameter '{name}'")]
    UnknownParameter { name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CalcResult<T> = Result<T, CalcError>;
