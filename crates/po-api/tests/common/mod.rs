//! Recording transport shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use po_api::{
    ApiRequest, ApiResponse, ClientConfig, PoApiClient, Transport, TransportError,
    DEFAULT_BASE_URL,
};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum Reply {
    Respond(ApiResponse),
    Fail,
}

/// Captures every request and answers with a canned reply
#[derive(Clone)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    reply: Reply,
}

impl RecordingTransport {
    pub fn ok() -> Self {
        Self::responding(ApiResponse::new(200, "{}"))
    }

    pub fn responding(response: ApiResponse) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Reply::Respond(response),
        }
    }

    /// Simulates a refused connection on every call
    pub fn failing() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Reply::Fail,
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(&self) -> PoApiClient {
        PoApiClient::with_transport(ClientConfig::new(DEFAULT_BASE_URL).unwrap(), self.clone())
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail => Err(TransportError::Connect("connection refused".to_string())),
        }
    }
}

/// Absolute URL the default client should produce for `path`
pub fn url(path: &str) -> String {
    format!("{}{}", DEFAULT_BASE_URL, path)
}
