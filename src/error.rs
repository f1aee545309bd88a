use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("browser storage is not available")]
    StorageUnavailable,

    #[error("storage operation failed: {0}")]
    Storage(String),

    #[error("site content could not be parsed: {0}")]
    Content(#[from] serde_json::Error),
}
