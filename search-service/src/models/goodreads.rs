//! Shape of the Goodreads `search/index.xml` payload.
//!
//! Only the elements we read are modelled; everything else in the document
//! is skipped by the deserializer.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename = "GoodreadsResponse")]
pub struct GoodreadsResponse {
    #[serde(default)]
    pub search: Search,
}

#[derive(Debug, Default, Deserialize)]
pub struct Search {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub results: Results,
}

#[derive(Debug, Default, Deserialize)]
pub struct Results {
    #[serde(default, rename = "work")]
    pub works: Vec<Work>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub best_book: BestBook,
}

#[derive(Debug, Default, Deserialize)]
pub struct BestBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
}
