/// Outbound HTTP access.
/// Every stage that talks to the network goes through `HttpSource`, so the
/// pipeline can run against an in-memory source in tests.
use reqwest::Client;
use tracing::debug;

use crate::error::{GenError, GenResult};

/// Something that can GET a URL and hand back the body bytes.
#[allow(async_fn_in_trait)]
pub trait HttpSource {
    /// Fetch `url`. Non-success statuses and connection failures are
    /// reported as `GenError::Network`.
    async fn get(&self, url: &str) -> GenResult<Vec<u8>>;
}

/// reqwest-backed source used by the binary
pub struct ReqwestSource {
    client: Client,
}

impl ReqwestSource {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("fixture-card/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl HttpSource for ReqwestSource {
    async fn get(&self, url: &str) -> GenResult<Vec<u8>> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GenError::Network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenError::Network(format!("{status} for url: {url}")));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

#[cfg(test)]
pub mod fake {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::HttpSource;
    use crate::error::{GenError, GenResult};

    /// In-memory source: canned bodies per URL, unknown URLs answer 404.
    #[derive(Default)]
    pub struct FakeSource {
        routes: HashMap<String, Result<Vec<u8>, u16>>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
            self.routes.insert(url.to_string(), Ok(body.into()));
            self
        }

        pub fn with_status(mut self, url: &str, status: u16) -> Self {
            self.routes.insert(url.to_string(), Err(status));
            self
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpSource for FakeSource {
        async fn get(&self, url: &str) -> GenResult<Vec<u8>> {
            self.requests.lock().unwrap().push(url.to_string());
            match self.routes.get(url) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(status)) => Err(GenError::Network(format!("{status} for url: {url}"))),
                None => Err(GenError::Network(format!("404 Not Found for url: {url}"))),
            }
        }
    }
}
