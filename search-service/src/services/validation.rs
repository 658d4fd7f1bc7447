use crate::error::BooksError;
use crate::models::request::{SearchRequest, SortField};

/// Turns the raw query parameters of `GET /` into a [`SearchRequest`].
///
/// `q` is required, `p` must be an integer when present (no range check),
/// and `s` defaults to `title`. When a key repeats, its first value is used.
pub fn validate_search_params(params: &[(String, String)]) -> Result<SearchRequest, BooksError> {
    let search_text = match first(params, "q") {
        Some(q) if !q.is_empty() => q.clone(),
        _ => return Err(BooksError::EmptySearch),
    };

    let page = match first(params, "p").map(String::as_str) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<i64>().map_err(|_| BooksError::InvalidPage)?),
    };

    let sort_by = match first(params, "s").map(String::as_str) {
        None | Some("") | Some("title") => SortField::Title,
        Some("author") => SortField::Author,
        Some(_) => return Err(BooksError::InvalidSort),
    };

    Ok(SearchRequest {
        search_text,
        sort_by,
        page,
    })
}

fn first<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a String> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}
