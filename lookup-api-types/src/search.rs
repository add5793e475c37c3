use serde::{Deserialize, Serialize};

/// Path of the search endpoint on the site's own origin.
pub const SEARCH_PATH: &str = "/api/search";
/// The endpoint never returns more than this many items.
pub const MAX_RESULT_COUNT: u32 = 100;

/// One entry in a search response.
///
/// `key` and `result_type` are only sent to (and used by) the home page
/// search, so they fall back to empty strings when missing.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct SearchResultItem {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub key: String,
    #[serde(default, rename = "type")]
    pub result_type: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct SearchResponse {
    pub items: Vec<SearchResultItem>,
}

/// Query string of a `GET /api/search` request.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<u32>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            lang: None,
            num: None,
        }
    }

    pub fn with_lang(mut self, lang: Option<String>) -> Self {
        self.lang = lang;
        self
    }

    /// Limits the number of returned items, capped at [`MAX_RESULT_COUNT`].
    pub fn with_limit(mut self, num: Option<u32>) -> Self {
        self.num = num.map(|num| num.min(MAX_RESULT_COUNT));
        self
    }
}
