use crate::client::SearchQuery;
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    Title,
    Author,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Title => "title",
            SortBy::Author => "author",
        }
    }
}

/// books - Retrieves a list of books from the search service
#[derive(Debug, Parser)]
#[command(name = "books", version)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// The hostname or ip address where the server can be found
    #[arg(short = 'h', long, default_value = "127.0.0.1")]
    pub host: String,

    /// Search the Goodreads' API and display the results on screen
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sorts the results by the specified field
    #[arg(long, value_enum, default_value_t = SortBy::Title)]
    pub sort: SortBy,

    /// Choose which page of the result to display
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Print help
    // -h is taken by --host
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            search: self.search.clone(),
            sort: self.sort.as_str().to_string(),
            page: self.page,
        }
    }
}
