//! Single-slot cancellable generation handle.

use std::future::Future;
use tokio::task::{AbortHandle, JoinHandle};

/// Holds at most one in-flight generation task.
///
/// An interactive session drives one generation at a time: starting a new
/// one replaces the slot and aborts the previous task (last-request-wins),
/// so two results can never race to fill the same display state. Aborting
/// drops the in-flight request future, which cancels the network I/O at the
/// transport level; a cancelled task's result is never delivered.
///
/// # Examples
///
/// ```
/// use missive_client::GenerationSlot;
///
/// # tokio_test::block_on(async {
/// let mut slot = GenerationSlot::new();
/// let stale = slot.replace(std::future::pending::<()>());
/// let fresh = slot.replace(async { 42 });
///
/// assert!(stale.await.expect_err("aborted").is_cancelled());
/// assert_eq!(fresh.await.unwrap(), 42);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct GenerationSlot {
    current: Option<AbortHandle>,
}

impl GenerationSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Spawns `future`, aborting any outstanding generation first.
    ///
    /// The caller observes completion through the returned [`JoinHandle`];
    /// a later replacement surfaces there as a cancelled join, which the
    /// caller discards rather than applying stale state.
    pub fn replace<F>(&mut self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.cancel();
        let handle = tokio::spawn(future);
        self.current = Some(handle.abort_handle());
        handle
    }

    /// Aborts the outstanding generation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
    }

    /// Whether a generation is still in flight.
    pub fn is_active(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_finished())
    }
}
