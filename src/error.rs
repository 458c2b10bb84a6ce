use thiserror::Error;

/// Failure of the primary hero request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid request url {url}: {reason}")]
    InvalidRequest { url: String, reason: String },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure of the best-effort portrait fetch. Never reaches the screen.
#[derive(Debug, Error)]
pub enum PortraitError {
    #[error("invalid portrait url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("portrait request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("portrait is not an image: {0}")]
    Image(#[from] image::ImageError),
}
