//! Verification session module
//!
//! One session submits one set of captures to the verification backend:
//! - Session creation with the document images
//! - Document verification step
//! - Selfie (face match) step when a selfie was captured
//! - Exactly one terminal outcome, delivered through a main-thread dispatcher

mod config;
mod dispatch;
mod service;
mod traits;
mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use config::{
    scenario_name, CAPTURE_METHOD, SCENARIO_DOCUMENT, SCENARIO_DOCUMENT_FACE, STATUS_ERROR,
    STATUS_FAILED, STATUS_FINISHED, STATUS_WAITING, STEP_FACE_MATCH, STEP_VERIFY_RESULTS,
};
pub use dispatch::{MainQueue, MainQueueHandle};
pub use service::KycSession;
pub use traits::{MainJob, MainThreadDispatcher, VerificationTransport};
pub use types::{BackendReply, BackendRequest, CaptureSet, HttpMethod, ResponseHandler, SessionState};
