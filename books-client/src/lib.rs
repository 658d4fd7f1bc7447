//! Command-line client for the book search service.

pub mod cli;
pub mod client;
pub mod table;

/// Log filter used when `RUST_LOG` is unset or empty. Covers both the `books` binary
/// and this library.
pub const DEFAULT_LOG_FILTER: &str = "books=warn,books_client=warn";
