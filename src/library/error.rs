use thiserror::Error;

#[derive(Debug, Error)]
pub enum HerbalError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to load model: {0}")]
    ModelLoad(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("label mismatch: {0}")]
    LabelMismatch(String),

    #[error("knowledge table error: {0}")]
    KnowledgeTable(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HerbalResult<T> = Result<T, HerbalError>;
