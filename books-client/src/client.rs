use crate::table::render_books;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;
use tracing::{error, info};

/// Port the search service listens on.
pub const SERVER_PORT: u16 = 8080;

const SEARCH_QUERY_KEY: &str = "q";
const SORT_QUERY_KEY: &str = "s";
const PAGE_QUERY_KEY: &str = "p";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not write results: {0}")]
    Output(#[from] std::io::Error),
}

/// A book as served by the search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub author: String,
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub search: String,
    pub sort: String,
    pub page: u32,
}

/// What the server answered, classified by status code.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    Books(Vec<Book>),
    ServerError(String),
    ClientError(String),
    Malformed(String),
}

pub struct BooksClient {
    client: Client,
    base_url: String,
}

impl BooksClient {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("http://{}:{}", host, port),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, ClientError> {
        info!("Searching {} for {:?}", self.base_url, query.search);

        let page = query.page.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                (SEARCH_QUERY_KEY, query.search.as_str()),
                (SORT_QUERY_KEY, query.sort.as_str()),
                (PAGE_QUERY_KEY, page.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok(classify(status, &body))
    }

    /// Runs the search and prints a table to `out`, or logs why it cannot.
    /// Only transport and output failures are returned as errors.
    pub async fn execute<W: Write>(&self, query: &SearchQuery, out: &mut W) -> Result<(), ClientError> {
        match self.search(query).await? {
            SearchOutcome::Books(books) => render_books(&books, out)?,
            SearchOutcome::ServerError(message) => {
                error!("server error: {}. Please try again later", message)
            }
            SearchOutcome::ClientError(message) => {
                error!("client error: {}. Please check the input and try again.", message)
            }
            SearchOutcome::Malformed(detail) => error!("Unmarshalling error: {}", detail),
        }
        Ok(())
    }
}

fn classify(status: StatusCode, body: &str) -> SearchOutcome {
    let message = body.trim_end_matches('\n').to_string();
    if status.is_server_error() {
        SearchOutcome::ServerError(message)
    } else if status == StatusCode::BAD_REQUEST {
        SearchOutcome::ClientError(message)
    } else {
        match serde_json::from_str::<Vec<Book>>(body) {
            Ok(books) => SearchOutcome::Books(books),
            Err(e) => SearchOutcome::Malformed(e.to_string()),
        }
    }
}
