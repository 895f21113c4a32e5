//! Error types for the site's browser glue.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("no global window")]
    MissingWindow,

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("canvas has no 2d context")]
    NoCanvasContext,

    #[error("invalid site config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;

impl SiteError {
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement(id.into())
    }
}
