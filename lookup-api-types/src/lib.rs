pub mod search;

pub use search::{SearchQuery, SearchResponse, SearchResultItem};
