use crate::error::DiffError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation signal for long-running comparisons.
///
/// Cloning yields a handle to the same flag, so a caller can keep one half
/// and hand the other to the comparison. The orchestrator polls the token at
/// the start of each changed-block refinement and aborts with
/// [`DiffError::Cancelled`] once the flag is set; it never returns a partial
/// tree. No timeouts are enforced internally, wall-clock budgets are the
/// caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Fails with [`DiffError::Cancelled`] if cancellation was requested.
    pub fn check(&self) -> Result<(), DiffError> {
        if self.is_cancelled() {
            Err(DiffError::Cancelled)
        } else {
            Ok(())
        }
    }
}
