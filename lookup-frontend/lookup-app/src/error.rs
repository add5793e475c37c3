use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("JSON {0}")]
    Json(String),
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
    #[error("Search endpoint answered with status {0}")]
    Status(u16),
    #[error("Request was aborted")]
    Aborted,
    #[error("Invalid widget configuration: {0}")]
    Config(String),
}

/// This error type implements From's for the transport errors that aren't Clone
/// and keeps them behind an Rc
#[derive(Clone, Debug)]
pub enum SystemError {
    #[cfg(feature = "native")]
    ReqwestError(Rc<reqwest::Error>),
    #[cfg(feature = "csr")]
    GlooError(Rc<gloo_net::Error>),
    QueryString(Rc<serde_qs::Error>),
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Rc::new(value))
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Self::Json(value.to_string());
        }
        Self::SystemError(value.into())
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(e) => Self::Json(e.to_string()),
            gloo_net::Error::JsError(e) if e.name == "AbortError" => Self::Aborted,
            other => Self::SystemError(other.into()),
        }
    }
}

impl From<serde_qs::Error> for SystemError {
    fn from(value: serde_qs::Error) -> Self {
        Self::QueryString(Rc::new(value))
    }
}

impl From<serde_qs::Error> for AppError {
    fn from(value: serde_qs::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "native")]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
            #[cfg(feature = "csr")]
            SystemError::GlooError(g) => write!(f, "{}", g),
            SystemError::QueryString(qs) => write!(f, "{}", qs),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            #[cfg(feature = "native")]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
            #[cfg(feature = "csr")]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
            SystemError::QueryString(qs) => Some(qs.as_ref()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn json_errors_keep_their_message() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Json(_)));
        assert!(app.to_string().starts_with("JSON "));
    }

    #[test]
    fn query_string_errors_are_system_errors() {
        // serde_qs only serializes maps and structs at the top level
        let err = serde_qs::to_string(&"bare string").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::SystemError(SystemError::QueryString(_))));
        assert!(app.to_string().starts_with("System error "));
        let AppError::SystemError(system) = app else {
            unreachable!()
        };
        assert!(error::Error::source(&system).is_some());
    }

    #[test]
    fn status_display() {
        assert_eq!(
            AppError::Status(502).to_string(),
            "Search endpoint answered with status 502"
        );
    }
}
