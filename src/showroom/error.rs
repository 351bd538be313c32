use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowroomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] fragments::Error),

    #[error("Route `{later}` is shadowed by earlier route `{earlier}`")]
    ShadowedRoute { earlier: String, later: String },

    #[error("Unknown content kind: {0} (expected `products` or `blogs`)")]
    UnknownKind(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShowroomError>;
