//! Main-thread job queue
//!
//! The host owns the [`MainQueue`] on its UI thread and drains it from its
//! event loop; sessions only see the cloneable [`MainQueueHandle`].

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use super::traits::{MainJob, MainThreadDispatcher};

/// Dispatcher side of a [`MainQueue`]
#[derive(Clone)]
pub struct MainQueueHandle {
    sender: UnboundedSender<MainJob>,
}

impl MainThreadDispatcher for MainQueueHandle {
    fn dispatch(&self, job: MainJob) {
        if self.sender.send(job).is_err() {
            tracing::warn!(
                event = "main_queue_closed",
                "Main queue is closed, dropping job"
            );
        }
    }
}

/// Jobs waiting to run on the thread that drains this queue
pub struct MainQueue {
    receiver: UnboundedReceiver<MainJob>,
}

impl MainQueue {
    pub fn channel() -> (MainQueueHandle, MainQueue) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (MainQueueHandle { sender }, MainQueue { receiver })
    }

    /// Run every queued job on the calling thread; returns how many ran
    pub fn run_pending(&mut self) -> usize {
        let mut executed = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(job) => {
                    job();
                    executed += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        executed
    }

    /// Block the calling thread until one job arrives, then run it.
    ///
    /// Returns `false` once every handle is gone and the queue is empty.
    /// Must not be called from within an async context.
    pub fn run_next_blocking(&mut self) -> bool {
        match self.receiver.blocking_recv() {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }

    /// Wait for one job and run it on the current task's thread
    pub async fn run_next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }
}
