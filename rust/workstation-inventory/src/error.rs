use thiserror::Error;

/// Everything that can stop an inventory from being produced.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("required environment variable `{name}` is not set")]
    MissingRequiredInput { name: &'static str },
    #[error("Serialization Error")]
    Serialize(#[from] serde_json::Error),
}
