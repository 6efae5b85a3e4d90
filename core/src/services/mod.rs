//! Services: the verification session pipeline and the client context.

pub mod context;
pub mod session;

// Re-export commonly used types
pub use context::{
    ButtonAction, KycContext, OptionKind, OptionSection, OptionType, OptionValue, ScannedImages,
    SettingOption, Settings,
};
pub use session::{
    BackendReply, BackendRequest, CaptureSet, HttpMethod, KycSession, MainJob, MainQueue,
    MainQueueHandle, MainThreadDispatcher, ResponseHandler, SessionState, VerificationTransport,
};
