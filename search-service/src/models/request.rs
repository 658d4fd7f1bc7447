/// Field a search result is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Title,
    Author,
}

/// A validated search, ready to be sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub search_text: String,
    pub sort_by: SortField,
    pub page: Option<i64>,
}
