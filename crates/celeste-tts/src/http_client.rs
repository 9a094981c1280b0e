use std::{sync::OnceLock, time::Duration};

use reqwest::Client;

/// Shared HTTP client so every speech backend reuses one connection pool
///
/// `reqwest::Client` is reference counted and safe for concurrent use, so
/// clones handed to adapters can serve overlapping synthesis calls.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            let mut headers = http::HeaderMap::new();
            headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

            Client::builder()
                .user_agent(concat!("celeste-tts/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(120))
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(headers)
                .build()
                .expect("Failed to build default HTTP client")
        })
        .clone()
}
