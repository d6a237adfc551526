use forge_dom::DomError;
use thiserror::Error;

/// Result type alias for make/modify
pub type Result<T> = std::result::Result<T, ForgeError>;

#[derive(Error, Debug)]
pub enum ForgeError {
    /// Raised by the object model: unknown class or property, type mismatch, bad parent, ...
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("Property factory failed: {0}")]
    Factory(#[source] anyhow::Error),

    #[error("Property {0} has no representable value")]
    UnsupportedJson(String),

    #[error("Property bag must be a JSON object")]
    NotAnObject,
}
