use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::transport::{ApiRequest, Method, Transport};

/// reqwest-backed transport. The client timeout is the only cancellation the
/// console relies on.
pub struct HttpTransport {
    client: reqwest::Client,
    base: String,
}

impl HttpTransport {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: base.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base, request.path))
            .map_err(|e| ApiError::Transport(format!("invalid URL {}{}: {}", self.base, request.path, e)))?;
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url_for(&request)?;
        debug!(method = %request.method, %url, "sending request");

        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let resp = builder.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                body: text,
            });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_encodes_query() {
        let transport = HttpTransport::new("http://localhost:5000/api/admin/", Duration::from_secs(1)).unwrap();
        let req = ApiRequest::get("/returns").param("status", "Not Sure");
        let url = transport.url_for(&req).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/admin/returns?status=Not+Sure");
    }

    #[test]
    fn test_invalid_base_is_a_transport_error() {
        let transport = HttpTransport::new("not a url", Duration::from_secs(1)).unwrap();
        let err = transport.url_for(&ApiRequest::get("/products")).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
