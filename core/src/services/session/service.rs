//! Verification session implementation

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Map, Value};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::domain::entities::VerificationResponse;
use crate::errors::{KycError, KycResult, UNKNOWN_ERROR};

use super::config::{
    scenario_name, CAPTURE_METHOD, STATUS_ERROR, STATUS_FAILED, STATUS_FINISHED, STATUS_WAITING,
    STEP_FACE_MATCH, STEP_VERIFY_RESULTS,
};
use super::traits::{MainThreadDispatcher, VerificationTransport};
use super::types::{BackendReply, BackendRequest, CaptureSet, HttpMethod, ResponseHandler, SessionState};

const UNEXPECTED_SERVER_STATE: &str = "Unexpected server state.";
const UNEXPECTED_SERVER_RESPONSE: &str = "Unexpected server response.";
const UNPARSABLE_SERVER_RESPONSE: &str = "Failed to parse server response.";

/// One verification attempt against the backend.
///
/// A session is single use: [`KycSession::run`] consumes it and yields exactly
/// one outcome. No retries are performed; the first failing step ends the
/// session.
pub struct KycSession<T: VerificationTransport + ?Sized> {
    /// Local identifier used for log correlation
    id: Uuid,
    base_url: String,
    captures: CaptureSet,
    transport: Arc<T>,
    /// Overrides the transport's configured token when set
    bearer_token: Option<String>,
    /// Backend session id, refreshed from every reply
    session_id: Option<String>,
    state: SessionState,
}

impl<T: VerificationTransport + ?Sized + 'static> KycSession<T> {
    /// Create a new idle session
    ///
    /// # Arguments
    ///
    /// * `base_url` - Scenario endpoint of the verification backend
    /// * `captures` - Document images and optional selfie
    /// * `transport` - HTTP transport implementation
    pub fn new(base_url: impl Into<String>, captures: CaptureSet, transport: Arc<T>) -> Self {
        Self {
            id: Uuid::new_v4(),
            base_url: base_url.into(),
            captures,
            transport,
            bearer_token: None,
            session_id: None,
            state: SessionState::Idle,
        }
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Selfie submitted in the face match step
    pub fn portrait(&self) -> Option<&[u8]> {
        self.captures.selfie.as_deref()
    }

    /// Document verification endpoint; `None` until the backend assigned an id
    pub fn url_document(&self) -> Option<String> {
        self.step_url(STEP_VERIFY_RESULTS)
    }

    /// Face match endpoint; `None` until the backend assigned an id
    pub fn url_selfie(&self) -> Option<String> {
        self.step_url(STEP_FACE_MATCH)
    }

    fn step_url(&self, step: &str) -> Option<String> {
        let session_id = self.session_id.as_deref()?;
        Some(format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            session_id,
            step
        ))
    }

    /// Parse a backend reply body and translate backend-reported failures.
    ///
    /// Refreshes the session id from the reply's `id` field.
    pub fn parse_result_and_handle_errors(&mut self, body: &[u8]) -> KycResult<Value> {
        let value: Value = serde_json::from_slice(body).map_err(|e| KycError::Parse {
            message: e.to_string(),
        })?;
        if !value.is_object() {
            return Err(KycError::Parse {
                message: UNPARSABLE_SERVER_RESPONSE.to_string(),
            });
        }

        self.session_id = value
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        if self.session_id.is_none() {
            return Err(KycError::MissingSessionId);
        }

        match value.get("status").and_then(Value::as_str) {
            Some(STATUS_FAILED) => Err(KycError::Backend {
                message: result_message(&value).unwrap_or(UNKNOWN_ERROR).to_string(),
            }),
            Some(STATUS_ERROR) => Err(KycError::BackendConfiguration),
            _ => Ok(value),
        }
    }

    /// Run all steps and return the outcome
    pub async fn run(mut self) -> KycResult<VerificationResponse> {
        self.submit().await
    }

    /// Run all steps, keeping the session around for inspection afterwards
    pub async fn submit(&mut self) -> KycResult<VerificationResponse> {
        if self.state != SessionState::Idle {
            return Err(KycError::Internal {
                message: format!("session already {}", self.state),
            });
        }

        let outcome = self.execute_steps().await;
        match &outcome {
            Ok(response) => {
                self.transition(SessionState::Done);
                tracing::info!(
                    session = %self.id,
                    session_id = ?self.session_id,
                    code = response.code,
                    passed = response.is_passed(),
                    event = "verification_completed",
                    "Verification session completed"
                );
            }
            Err(e) => {
                self.transition(SessionState::Failed);
                tracing::warn!(
                    session = %self.id,
                    session_id = ?self.session_id,
                    error = %e,
                    event = "verification_failed",
                    "Verification session failed"
                );
            }
        }
        outcome
    }

    /// Start the session on the tokio runtime.
    ///
    /// `handler` runs exactly once through `dispatcher`, also when the task
    /// panics or is cancelled before producing an outcome.
    pub fn spawn(
        self,
        dispatcher: Arc<dyn MainThreadDispatcher>,
        handler: ResponseHandler,
    ) -> JoinHandle<()> {
        let guard = CompletionGuard::new(dispatcher, handler);
        tokio::spawn(async move {
            let outcome = self.run().await;
            guard.complete(outcome);
        })
    }

    /// Construct a session and start it immediately
    pub fn start(
        base_url: impl Into<String>,
        captures: CaptureSet,
        transport: Arc<T>,
        dispatcher: Arc<dyn MainThreadDispatcher>,
        handler: ResponseHandler,
    ) -> JoinHandle<()> {
        Self::new(base_url, captures, transport).spawn(dispatcher, handler)
    }

    async fn execute_steps(&mut self) -> KycResult<VerificationResponse> {
        self.captures.validate()?;

        self.transition(SessionState::Opening);
        let body = self.creation_body();
        let request = self.request(HttpMethod::Post, self.base_url.clone(), body);
        self.send(request).await?;

        self.transition(SessionState::DocumentUploading);
        let url = self.url_document().ok_or(KycError::MissingSessionId)?;
        let request = self.request(HttpMethod::Patch, url, self.base_body());
        let reply = self.send(request).await?;

        let status = reply_status(&reply);
        let mut response = match (self.captures.has_selfie(), status) {
            (true, Some(STATUS_WAITING)) => {
                VerificationResponse::from_json(reply.pointer("/state/result").unwrap_or(&Value::Null))
            }
            (false, Some(STATUS_FINISHED)) => return finished_result(&reply),
            _ => {
                tracing::warn!(
                    session = %self.id,
                    status = ?status,
                    event = "unexpected_document_state",
                    "Unexpected status after document verification"
                );
                return Err(KycError::UnexpectedState {
                    message: UNEXPECTED_SERVER_STATE.to_string(),
                });
            }
        };

        self.transition(SessionState::SelfieUploading);
        let url = self.url_selfie().ok_or(KycError::MissingSessionId)?;
        let body = self.selfie_body();
        let request = self.request(HttpMethod::Patch, url, body);
        let reply = self.send(request).await?;

        if reply_status(&reply) != Some(STATUS_FINISHED) {
            return Err(KycError::UnexpectedState {
                message: UNEXPECTED_SERVER_RESPONSE.to_string(),
            });
        }
        let result = reply
            .pointer("/state/result")
            .filter(|result| result.is_object())
            .ok_or_else(|| KycError::Parse {
                message: UNPARSABLE_SERVER_RESPONSE.to_string(),
            })?;
        response.update_with_selfie_json(result);
        Ok(response)
    }

    /// Execute one request and run the reply through error handling
    async fn send(&mut self, request: BackendRequest) -> KycResult<Value> {
        tracing::debug!(
            session = %self.id,
            method = %request.method,
            url = %request.url,
            event = "backend_request",
            "Sending request to verification backend"
        );

        let reply = self.transport.execute(request).await?;
        tracing::debug!(
            session = %self.id,
            status = reply.status,
            bytes = reply.body.len(),
            event = "backend_reply",
            "Received reply from verification backend"
        );

        if reply.is_success() {
            return self.parse_result_and_handle_errors(&reply.body);
        }
        Err(self.http_error(&reply))
    }

    /// Error for a non-2xx reply: the backend's message when one can be
    /// extracted, otherwise the bare status.
    fn http_error(&mut self, reply: &BackendReply) -> KycError {
        match self.parse_result_and_handle_errors(&reply.body) {
            Err(e @ (KycError::Backend { .. } | KycError::BackendConfiguration)) => e,
            _ => match serde_json::from_slice::<Value>(&reply.body)
                .ok()
                .as_ref()
                .and_then(error_message)
            {
                Some(message) => KycError::Backend { message },
                None => KycError::HttpStatus {
                    status: reply.status,
                },
            },
        }
    }

    fn request(&self, method: HttpMethod, url: String, body: Value) -> BackendRequest {
        BackendRequest {
            method,
            url,
            body,
            bearer_token: self.bearer_token.clone(),
        }
    }

    fn base_body(&self) -> Value {
        json!({ "name": scenario_name(self.captures.has_selfie()) })
    }

    fn creation_body(&self) -> Value {
        let mut input = Map::new();
        input.insert("captureMethod".to_string(), json!(CAPTURE_METHOD));
        input.insert(
            "frontWhiteImage".to_string(),
            json!(STANDARD.encode(&self.captures.document_front)),
        );
        if let Some(back) = &self.captures.document_back {
            input.insert("backWhiteImage".to_string(), json!(STANDARD.encode(back)));
        }
        if let Some(document_type) = self.captures.document_type {
            input.insert("type".to_string(), json!(document_type.backend_type()));
        }

        let mut body = self.base_body();
        body["input"] = Value::Object(input);
        body
    }

    fn selfie_body(&self) -> Value {
        let face = self
            .captures
            .selfie
            .as_deref()
            .map(|selfie| STANDARD.encode(selfie))
            .unwrap_or_default();
        let mut body = self.base_body();
        body["input"] = json!({ "face": face });
        body
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(
            session = %self.id,
            from = %self.state,
            to = %next,
            event = "session_transition",
            "Session state changed"
        );
        self.state = next;
    }
}

fn reply_status(reply: &Value) -> Option<&str> {
    reply.get("status").and_then(Value::as_str)
}

fn finished_result(reply: &Value) -> KycResult<VerificationResponse> {
    reply
        .pointer("/state/result")
        .filter(|result| result.is_object())
        .map(VerificationResponse::from_json)
        .ok_or_else(|| KycError::Parse {
            message: UNPARSABLE_SERVER_RESPONSE.to_string(),
        })
}

fn result_message(value: &Value) -> Option<&str> {
    value.pointer("/state/result/message").and_then(Value::as_str)
}

/// Human-readable message of a backend error body
fn error_message(value: &Value) -> Option<String> {
    result_message(value)
        .or_else(|| value.get("message").and_then(Value::as_str))
        .or_else(|| value.pointer("/error/message").and_then(Value::as_str))
        .or_else(|| value.get("error").and_then(Value::as_str))
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}

/// Delivers the session outcome to the handler exactly once.
///
/// Dropping the guard without completing it reports `SessionAborted`.
struct CompletionGuard {
    dispatcher: Arc<dyn MainThreadDispatcher>,
    handler: Option<ResponseHandler>,
}

impl CompletionGuard {
    fn new(dispatcher: Arc<dyn MainThreadDispatcher>, handler: ResponseHandler) -> Self {
        Self {
            dispatcher,
            handler: Some(handler),
        }
    }

    fn complete(mut self, outcome: KycResult<VerificationResponse>) {
        self.deliver(outcome);
    }

    fn deliver(&mut self, outcome: KycResult<VerificationResponse>) {
        if let Some(handler) = self.handler.take() {
            self.dispatcher.dispatch(Box::new(move || handler(outcome)));
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if self.handler.is_some() {
            tracing::error!(
                event = "session_aborted",
                "Verification session ended without an outcome"
            );
            self.deliver(Err(KycError::SessionAborted));
        }
    }
}
