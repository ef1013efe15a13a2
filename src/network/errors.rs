use thiserror::Error;

// * Unified error type for the network layer.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Asset write failed: {0}")]
    AssetWrite(#[from] std::io::Error),
}
