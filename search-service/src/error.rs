use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Every way a search can fail. The `Display` text is what the caller sees;
/// sources carry the detail that only goes to the server log.
#[derive(Error, Debug)]
pub enum BooksError {
    #[error("Search string must not be empty! Please try again.")]
    EmptySearch,
    #[error("Page number must be provided as an integer.")]
    InvalidPage,
    #[error("SortBy must be either 'title' or 'author'")]
    InvalidSort,
    #[error("Server Error: Cannot parse URL {0}")]
    InvalidUpstreamUrl(String),
    #[error(transparent)]
    UpstreamTransport(reqwest::Error),
    #[error("Goodreads responded with status {0}")]
    UpstreamStatus(u16),
    #[error("Issue unmarshalling Goodreads XML Response. Please try again")]
    UpstreamParse(#[source] quick_xml::de::DeError),
    #[error("Error marshalling bookList")]
    Serialization(#[from] serde_json::Error),
}

impl BooksError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BooksError::EmptySearch | BooksError::InvalidPage | BooksError::InvalidSort => {
                StatusCode::BAD_REQUEST
            }
            // Includes 4xx from Goodreads: a bad upstream request is our bug.
            BooksError::InvalidUpstreamUrl(_)
            | BooksError::UpstreamTransport(_)
            | BooksError::UpstreamStatus(_)
            | BooksError::UpstreamParse(_)
            | BooksError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Full error chain, for logging only.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            detail.push_str(": ");
            detail.push_str(&err.to_string());
            source = std::error::Error::source(err);
        }
        detail
    }
}

impl IntoResponse for BooksError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
