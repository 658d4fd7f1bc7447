use crate::error::BooksError;
use crate::services::goodreads::BookSource;
use crate::services::validation::validate_search_params;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info};

pub type Source = Arc<dyn BookSource + Send + Sync>;

/// `GET /`: validate, query upstream, answer with the sorted books as JSON.
pub async fn search_books(
    Query(params): Query<Vec<(String, String)>>,
    State(source): State<Source>,
) -> Response {
    let request = match validate_search_params(&params) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    info!("Search query: {:?}", request);

    let books = match source.search(&request).await {
        Ok(books) => books,
        Err(e) => {
            error!("Internal error: {}", e.detail());
            return e.into_response();
        }
    };

    match serde_json::to_vec(&books) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            let e = BooksError::from(e);
            error!("Internal error: {}", e.detail());
            e.into_response()
        }
    }
}
