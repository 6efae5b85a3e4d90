//! Value objects describing capture steps and on-screen notifications.

pub mod notify_action;
pub mod scanner_step;

// Re-export commonly used types
pub use notify_action::{NotifyAction, NotifyType, Rgba};
pub use scanner_step::{scanning_steps, DocumentType, ScannerStep, StepAnimation, StepType};
