use crate::errors::TransportError;
use async_trait::async_trait;
use log::{debug, trace};
use po_core::HttpMethod;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Fully resolved request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Raw answer from the server, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup, first match wins
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decode the body into a typed schema
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }

    pub fn json_value(&self) -> serde_json::Result<Value> {
        self.json()
    }
}

/// Executes one HTTP exchange.
///
/// Implementations must return `Ok` for every completed exchange, including
/// 4xx and 5xx answers, and `Err` only when no response was received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxy, TLS roots, ...)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(to_reqwest_method(method), url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            debug!("{} request failed: {:?}", method, e);
            classify(e)
        })?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        trace!("Response headers: {:?}", headers);

        // A connection dropped mid-body is still a transport failure
        let body = response.text().await.map_err(classify)?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Request(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(301, "").is_success());
        assert!(!ApiResponse::new(404, "").is_success());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let mut response = ApiResponse::new(200, "{}");
        response
            .headers
            .push(("content-type".to_string(), "application/json".to_string()));
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_json_body_decoding() {
        let response = ApiResponse::new(404, r#"{"detail": "Not found."}"#);
        let value = response.json_value().unwrap();
        assert_eq!(value["detail"], "Not found.");

        let bad = ApiResponse::new(500, "<html>oops</html>");
        assert!(bad.json_value().is_err());
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_reqwest_method(HttpMethod::Patch), reqwest::Method::PATCH);
        assert_eq!(to_reqwest_method(HttpMethod::Delete), reqwest::Method::DELETE);
    }
}
