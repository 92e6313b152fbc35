use thiserror::Error;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Failed to reach the recipe API
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The recipe API answered with a body we could not decode
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// A meal id did not resolve to a recipe
    #[error("Meal not found: {0}")]
    NotFound(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
