use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicfeedError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("HTTP redirect too deep ({limit} requests) for {url}")]
    TooManyRedirects { limit: usize, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PicfeedResult<T> = Result<T, PicfeedError>;
