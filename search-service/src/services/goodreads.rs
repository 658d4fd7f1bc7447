use crate::config::UpstreamConfig;
use crate::error::BooksError;
use crate::models::goodreads::{GoodreadsResponse, Work};
use crate::models::request::{SearchRequest, SortField};
use crate::models::responses::Book;
use async_trait::async_trait;
use quick_xml::de::DeError;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::{Client, Url};
use tokio::time::sleep;
use tracing::{info, warn};

const SEARCH_QUERY_KEY: &str = "q";
const PAGE_QUERY_KEY: &str = "p";
const API_KEY_QUERY_KEY: &str = "key";
const ROOT_ELEMENT: &str = "GoodreadsResponse";

/// Anything that can answer a validated search with an ordered book list.
#[async_trait]
pub trait BookSource {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Book>, BooksError>;
}

/// Queries the Goodreads search API and normalizes its XML into [`Book`]s.
pub struct GoodreadsAdapter {
    client: Client,
    config: UpstreamConfig,
}

impl GoodreadsAdapter {
    pub fn new(config: UpstreamConfig) -> Result<Self, BooksError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(BooksError::UpstreamTransport)?;
        Ok(Self { client, config })
    }

    pub fn search_url(&self, request: &SearchRequest) -> Result<Url, BooksError> {
        let mut url = Url::parse(&self.config.url)
            .map_err(|_| BooksError::InvalidUpstreamUrl(self.config.url.clone()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair(SEARCH_QUERY_KEY, &request.search_text);
            if let Some(page) = request.page {
                query.append_pair(PAGE_QUERY_KEY, &page.to_string());
            }
            query.append_pair(API_KEY_QUERY_KEY, &self.config.api_key);
        }

        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<String, BooksError> {
        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) if is_transient(&e) => {
                warn!(
                    "Goodreads request failed ({}), retrying once in {:?}",
                    e.without_url(),
                    self.config.retry_backoff
                );
                sleep(self.config.retry_backoff).await;
                self.client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| BooksError::UpstreamTransport(e.without_url()))?
            }
            Err(e) => return Err(BooksError::UpstreamTransport(e.without_url())),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(BooksError::UpstreamStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| BooksError::UpstreamTransport(e.without_url()))
    }
}

#[async_trait]
impl BookSource for GoodreadsAdapter {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Book>, BooksError> {
        let url = self.search_url(request)?;
        let body = self.fetch(url).await?;

        let mut books = parse_works(&body)?;
        sort_books(&mut books, request.sort_by);

        info!(
            "Goodreads returned {} books for {:?}",
            books.len(),
            request.search_text
        );
        Ok(books)
    }
}

// Status responses are never retried, only failures to get one at all.
fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}

/// Parses a Goodreads search document into books, in document order.
pub fn parse_works(body: &str) -> Result<Vec<Book>, BooksError> {
    if let Some(root) = foreign_root(body) {
        return Err(BooksError::UpstreamParse(DeError::Custom(format!(
            "expected <{}> root element, found <{}>",
            ROOT_ELEMENT, root
        ))));
    }

    let response: GoodreadsResponse =
        quick_xml::de::from_str(body).map_err(BooksError::UpstreamParse)?;

    Ok(response
        .search
        .results
        .works
        .into_iter()
        .map(Book::from)
        .collect())
}

/// Name of the document's root element when it is not `GoodreadsResponse`.
/// Documents without any element are left for the deserializer to reject.
fn foreign_root(body: &str) -> Option<String> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = e.name();
                return (name.as_ref() != ROOT_ELEMENT.as_bytes())
                    .then(|| String::from_utf8_lossy(name.as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

impl From<Work> for Book {
    fn from(work: Work) -> Self {
        let best_book = work.best_book;
        Book {
            author: best_book.author.name,
            title: best_book.title,
            image: best_book.image_url,
        }
    }
}

/// Stable sort by exact string ordering of the chosen field; no case folding.
pub fn sort_books(books: &mut [Book], sort_by: SortField) {
    match sort_by {
        SortField::Title => books.sort_by(|a, b| a.title.cmp(&b.title)),
        SortField::Author => books.sort_by(|a, b| a.author.cmp(&b.author)),
    }
}
