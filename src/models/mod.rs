//! Core data models for arXiv feeds and search requests.

mod feed;
mod search;

pub use feed::{Author, Category, Entry, Feed, Link};
pub use search::{QueryFields, SearchRequest, SortBy, SortOrder, DEFAULT_MAX_RESULTS};
