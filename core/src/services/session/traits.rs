//! Traits for backend transport and main-thread delivery

use async_trait::async_trait;

use crate::errors::KycResult;

use super::types::{BackendReply, BackendRequest};

/// Unit of work executed on the host's main (UI) thread
pub type MainJob = Box<dyn FnOnce() + Send + 'static>;

/// Trait for the HTTP transport used by a session
#[async_trait]
pub trait VerificationTransport: Send + Sync {
    /// Execute one request.
    ///
    /// Returns `KycError::Transport` when no response was received; any HTTP
    /// status, including errors, is returned as a `BackendReply`.
    async fn execute(&self, request: BackendRequest) -> KycResult<BackendReply>;
}

/// Trait for handing work to the host's main (UI) execution context
pub trait MainThreadDispatcher: Send + Sync {
    /// Queue `job` to run on the main thread
    fn dispatch(&self, job: MainJob);
}
