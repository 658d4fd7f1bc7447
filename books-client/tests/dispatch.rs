use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Router};
use books_client::client::{Book, BooksClient, ClientError, SearchOutcome, SearchQuery};
use std::collections::HashMap;

/// Answers like the search service would, echoing the query back through
/// the returned book so tests can see what was sent.
async fn fake_search(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let q = params.get("q").cloned().unwrap_or_default();
    match q.as_str() {
        "" => (
            StatusCode::BAD_REQUEST,
            "Search string must not be empty! Please try again.\n".to_string(),
        ),
        "outage" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Goodreads responded with status 503\n".to_string(),
        ),
        "garbage" => (StatusCode::OK, "<html>not json</html>".to_string()),
        _ => {
            let books = vec![Book {
                author: format!("sort={}", params.get("s").cloned().unwrap_or_default()),
                title: q,
                image: format!("page={}", params.get("p").cloned().unwrap_or_default()),
            }];
            (StatusCode::OK, serde_json::to_string(&books).unwrap())
        }
    }
}

async fn spawn_server() -> u16 {
    let app = Router::new().route("/", get(fake_search));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    port
}

fn query(search: &str) -> SearchQuery {
    SearchQuery {
        search: search.to_string(),
        sort: "author".to_string(),
        page: 2,
    }
}

#[tokio::test]
async fn sends_search_sort_and_page() {
    let client = BooksClient::new("127.0.0.1", spawn_server().await);
    let outcome = client.search(&query("dune messiah")).await.unwrap();

    assert_eq!(
        outcome,
        SearchOutcome::Books(vec![Book {
            author: "sort=author".to_string(),
            title: "dune messiah".to_string(),
            image: "page=2".to_string(),
        }])
    );
}

#[tokio::test]
async fn renders_table_on_success() {
    let client = BooksClient::new("127.0.0.1", spawn_server().await);
    let mut out = Vec::new();
    client.execute(&query("dune"), &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Author      Title Image Link\nsort=author dune  page=2\n"
    );
}

#[tokio::test]
async fn bad_request_prints_nothing() {
    let client = BooksClient::new("127.0.0.1", spawn_server().await);
    assert_eq!(
        client.search(&query("")).await.unwrap(),
        SearchOutcome::ClientError("Search string must not be empty! Please try again.".to_string())
    );

    let mut out = Vec::new();
    client.execute(&query(""), &mut out).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn server_error_prints_nothing() {
    let client = BooksClient::new("127.0.0.1", spawn_server().await);
    assert_eq!(
        client.search(&query("outage")).await.unwrap(),
        SearchOutcome::ServerError("Goodreads responded with status 503".to_string())
    );

    let mut out = Vec::new();
    client.execute(&query("outage"), &mut out).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn unparseable_body_prints_no_table() {
    let client = BooksClient::new("127.0.0.1", spawn_server().await);
    let mut out = Vec::new();
    client.execute(&query("garbage"), &mut out).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = BooksClient::new("127.0.0.1", port);
    let mut out = Vec::new();
    let err = client.execute(&query("dune"), &mut out).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
