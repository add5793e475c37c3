use cfg_if::cfg_if;
use lookup_api_types::{SearchQuery, SearchResponse};
use serde::de::DeserializeOwned;

use crate::{
    config::SearchConfig,
    error::{AppError, AppResult},
};

pub fn search_path(endpoint: &str, query: &SearchQuery) -> AppResult<String> {
    let query_string = serde_qs::to_string(query)?;
    Ok(format!("{endpoint}?{query_string}"))
}

pub async fn search(
    config: &SearchConfig,
    query: &SearchQuery,
    in_flight: Option<&InFlight>,
) -> AppResult<SearchResponse> {
    let path = search_path(&config.endpoint, query)?;
    fetch_api(config, &path, in_flight).await
}

// Host builds of the whole workspace enable both features, the browser path
// is only taken when compiling for wasm or when `native` is off.
cfg_if! {
    if #[cfg(all(feature = "native", not(target_arch = "wasm32")))] {
        /// Requests made outside the browser can't be cancelled.
        #[derive(Clone)]
        pub struct InFlight;

        impl InFlight {
            pub fn new() -> Option<Self> {
                Some(Self)
            }

            pub fn abort(&self) {}
        }

        pub async fn fetch_api<T>(
            config: &SearchConfig,
            path: &str,
            _in_flight: Option<&InFlight>,
        ) -> AppResult<T>
        where
            T: DeserializeOwned,
        {
            let url = format!("{}{path}", config.origin.trim_end_matches('/'));
            let response = reqwest::Client::new()
                .get(&url)
                .send()
                .await
                .map_err(|e| {
                    log::error!("Response {e}. {url}");
                    e
                })?;
            let status = response.status();
            if !status.is_success() {
                return Err(AppError::Status(status.as_u16()));
            }
            Ok(response.json::<T>().await?)
        }
    } else if #[cfg(feature = "csr")] {
        /// Lets a widget cancel a request that a newer keystroke made pointless.
        #[derive(Clone)]
        pub struct InFlight {
            controller: web_sys::AbortController,
        }

        impl InFlight {
            pub fn new() -> Option<Self> {
                web_sys::AbortController::new()
                    .ok()
                    .map(|controller| Self { controller })
            }

            pub fn abort(&self) {
                self.controller.abort();
            }
        }

        pub async fn fetch_api<T>(
            _config: &SearchConfig,
            path: &str,
            in_flight: Option<&InFlight>,
        ) -> AppResult<T>
        where
            T: DeserializeOwned,
        {
            let abort_signal = in_flight.map(|in_flight| in_flight.controller.signal());
            let response = gloo_net::http::Request::get(path)
                .abort_signal(abort_signal.as_ref())
                .send()
                .await?;
            if !response.ok() {
                return Err(AppError::Status(response.status()));
            }
            Ok(response.json::<T>().await?)
        }
    } else {
        compile_error!("lookup-app needs either the `csr` or the `native` feature");
    }
}


#[cfg(all(test, feature = "native", not(target_arch = "wasm32")))]
mod fetch_tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        sync::oneshot,
    };

    use super::*;

    /// Answers exactly one request on a loopback port and hands back the
    /// request line it saw.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (SearchConfig, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (seen_tx, seen_rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }
            let request = String::from_utf8_lossy(&request);
            let _ = seen_tx.send(request.lines().next().unwrap_or_default().to_string());
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        let config = SearchConfig {
            origin: format!("http://{addr}"),
            ..Default::default()
        };
        (config, seen_rx)
    }

    #[tokio::test]
    async fn ok_response_is_decoded() {
        let (config, seen) = serve_once(
            "200 OK",
            r#"{"items":[{"url":"/a","title":"Alpha","key":"A1","type":"doc"}]}"#,
        )
        .await;
        let query = SearchQuery::new("Alpha").with_lang(Some("en".to_string()));
        let response = search(&config, &query, None).await.unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].title, "Alpha");
        assert_eq!(
            seen.await.unwrap(),
            "GET /api/search?q=Alpha&lang=en HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let (config, _seen) = serve_once("500 Internal Server Error", "{}").await;
        let result = search(&config, &SearchQuery::new("x"), None).await;
        assert!(matches!(result, Err(AppError::Status(500))));
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_error() {
        let (config, _seen) = serve_once("200 OK", r#"{"items": ["#).await;
        let result = search(&config, &SearchQuery::new("x"), None).await;
        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[tokio::test]
    async fn missing_items_is_a_json_error() {
        let (config, _seen) = serve_once("200 OK", r#"{"results":[]}"#).await;
        let result = search(&config, &SearchQuery::new("x"), None).await;
        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
