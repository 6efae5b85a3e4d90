//! Types exchanged between a session, its transport and its caller

use serde_json::Value;

use crate::domain::entities::VerificationResponse;
use crate::domain::value_objects::DocumentType;
use crate::errors::{KycError, KycResult};

/// Terminal callback of a session
pub type ResponseHandler = Box<dyn FnOnce(KycResult<VerificationResponse>) + Send + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Patch,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Patch => write!(f, "PATCH"),
        }
    }
}

/// One JSON request to the verification backend
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Value,
    /// Bearer token overriding the transport's configured one
    pub bearer_token: Option<String>,
}

/// Raw backend answer; any status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl BackendReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Session progress: Idle → Opening → DocumentUploading → SelfieUploading → Done | Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Opening,
    DocumentUploading,
    SelfieUploading,
    Done,
    Failed,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Done | SessionState::Failed)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Opening => "opening",
            SessionState::DocumentUploading => "document_uploading",
            SessionState::SelfieUploading => "selfie_uploading",
            SessionState::Done => "done",
            SessionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Images captured for one verification attempt
#[derive(Clone, Default)]
pub struct CaptureSet {
    pub document_type: Option<DocumentType>,
    pub document_front: Vec<u8>,
    pub document_back: Option<Vec<u8>>,
    /// Without a selfie the session runs the document-only scenario
    pub selfie: Option<Vec<u8>>,
}

impl CaptureSet {
    pub fn new(document_front: impl Into<Vec<u8>>) -> Self {
        Self {
            document_front: document_front.into(),
            ..Default::default()
        }
    }

    pub fn with_back(mut self, document_back: impl Into<Vec<u8>>) -> Self {
        self.document_back = Some(document_back.into());
        self
    }

    pub fn with_selfie(mut self, selfie: impl Into<Vec<u8>>) -> Self {
        self.selfie = Some(selfie.into());
        self
    }

    pub fn with_document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = Some(document_type);
        self
    }

    pub fn has_selfie(&self) -> bool {
        self.selfie.is_some()
    }

    /// Check the captures are complete enough to submit
    pub fn validate(&self) -> KycResult<()> {
        if self.document_front.is_empty() {
            return Err(KycError::InvalidCapture {
                message: "front side of the document is missing".to_string(),
            });
        }
        if let Some(document_type) = self.document_type {
            let has_back = self.document_back.as_ref().is_some_and(|back| !back.is_empty());
            if document_type.requires_back_side() && !has_back {
                return Err(KycError::InvalidCapture {
                    message: format!("back side of the {} is missing", document_type),
                });
            }
        }
        if matches!(&self.selfie, Some(selfie) if selfie.is_empty()) {
            return Err(KycError::InvalidCapture {
                message: "selfie image is empty".to_string(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for CaptureSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSet")
            .field("document_type", &self.document_type)
            .field("document_front_len", &self.document_front.len())
            .field("document_back_len", &self.document_back.as_ref().map(Vec::len))
            .field("selfie_len", &self.selfie.as_ref().map(Vec::len))
            .finish()
    }
}
