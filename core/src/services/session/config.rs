//! Protocol constants for the verification backend

/// Backend is waiting for the remaining images
pub const STATUS_WAITING: &str = "Waiting";
/// All images were uploaded and processed
pub const STATUS_FINISHED: &str = "Finished";
/// Verification failed; `state.result.message` has the details
pub const STATUS_FAILED: &str = "Failed";
/// Backend-side configuration problem
pub const STATUS_ERROR: &str = "Error";

/// Path appended to `{base}/{session id}` for document verification
pub const STEP_VERIFY_RESULTS: &str = "state/steps/verifyResults";
/// Path appended to `{base}/{session id}` for the selfie face match
pub const STEP_FACE_MATCH: &str = "state/steps/faceMatch";

pub const SCENARIO_DOCUMENT: &str = "Connect_Verify_Document";
pub const SCENARIO_DOCUMENT_FACE: &str = "Connect_Verify_Document_Face";

pub const CAPTURE_METHOD: &str = "SDK";

/// Scenario requested from the backend
pub fn scenario_name(with_selfie: bool) -> &'static str {
    if with_selfie {
        SCENARIO_DOCUMENT_FACE
    } else {
        SCENARIO_DOCUMENT
    }
}
