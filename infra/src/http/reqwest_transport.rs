//! reqwest transport for the verification backend

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use tracing::{debug, warn};

use kyc_core::{BackendReply, BackendRequest, HttpMethod, KycError, KycResult, VerificationTransport};
use kyc_shared::BackendConfig;

use crate::InfrastructureError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Verification backend transport built on a shared reqwest client
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    /// Fallback bearer token when a request carries none
    json_web_token: String,
}

impl ReqwestTransport {
    /// Create a transport with the configured timeouts and API key
    pub fn new(config: &BackendConfig) -> Result<Self, InfrastructureError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !config.api_key.is_empty() {
            let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
                InfrastructureError::Configuration("API key is not a valid header value".to_string())
            })?;
            api_key.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        debug!(
            request_timeout_secs = config.request_timeout_secs,
            connect_timeout_secs = config.connect_timeout_secs,
            event = "transport_created",
            "Verification backend transport created"
        );

        Ok(Self {
            client,
            json_web_token: config.json_web_token.clone(),
        })
    }

    fn bearer_token<'a>(&'a self, request: &'a BackendRequest) -> Option<&'a str> {
        request
            .bearer_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .or(Some(self.json_web_token.as_str()))
            .filter(|token| !token.is_empty())
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
    }
}

/// User-facing message for a request that produced no response
fn transport_message(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "The request timed out.".to_string()
    } else if error.is_connect() {
        "Could not connect to the server.".to_string()
    } else {
        error.to_string()
    }
}

#[async_trait]
impl VerificationTransport for ReqwestTransport {
    async fn execute(&self, request: BackendRequest) -> KycResult<BackendReply> {
        let mut builder = self
            .client
            .request(method(request.method), request.url.as_str())
            .json(&request.body);
        if let Some(token) = self.bearer_token(&request) {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(
                url = %request.url,
                error = %e,
                event = "transport_error",
                "Request to verification backend failed"
            );
            KycError::Transport {
                message: transport_message(&e),
            }
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| KycError::Transport {
            message: transport_message(&e),
        })?;

        debug!(
            url = %request.url,
            status = status,
            bytes = body.len(),
            event = "transport_reply",
            "Verification backend replied"
        );
        Ok(BackendReply::new(status, body.to_vec()))
    }
}
