use lookup_api_types::search::{MAX_RESULT_COUNT, SEARCH_PATH};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// What a widget shows when its latest request fails.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Replace the results with an empty list and close the panel.
    #[default]
    Clear,
    /// Leave whatever was rendered before in place.
    Keep,
}

/// Settings shared by both search widgets.
///
/// Pages pass these as JSON in the `data-search-config` attribute of the
/// widget's host element; every field is optional.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    /// Base url for requests made outside the browser.
    pub origin: String,
    pub limit: Option<u32>,
    pub on_failure: FailurePolicy,
    pub abort_superseded: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: SEARCH_PATH.to_string(),
            origin: "http://localhost:8080".to_string(),
            limit: None,
            on_failure: FailurePolicy::default(),
            abort_superseded: true,
        }
    }
}

impl SearchConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str::<Self>(json)
            .map_err(|e| AppError::Config(e.to_string()))?
            .validate()
    }

    pub fn validate(mut self) -> AppResult<Self> {
        if !self.endpoint.starts_with('/') {
            return Err(AppError::Config(format!(
                "endpoint must be an absolute path, got {:?}",
                self.endpoint
            )));
        }
        if let Some(limit) = self.limit.filter(|limit| *limit > MAX_RESULT_COUNT) {
            log::warn!("search limit {limit} is above {MAX_RESULT_COUNT}, clamping");
            self.limit = Some(MAX_RESULT_COUNT);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(SearchConfig::from_json("{}").unwrap(), SearchConfig::default());
    }

    #[test]
    fn partial_config() {
        let config =
            SearchConfig::from_json(r#"{"on_failure":"keep","limit":10,"abort_superseded":false}"#)
                .unwrap();
        assert_eq!(config.endpoint, "/api/search");
        assert_eq!(config.on_failure, FailurePolicy::Keep);
        assert_eq!(config.limit, Some(10));
        assert!(!config.abort_superseded);
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        assert!(matches!(
            SearchConfig::from_json(r#"{"endpoint":"api/search"}"#),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn limit_is_clamped() {
        let config = SearchConfig::from_json(r#"{"limit":1000}"#).unwrap();
        assert_eq!(config.limit, Some(100));
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(SearchConfig::from_json(r#"{"on_failure":"retry"}"#).is_err());
    }
}
