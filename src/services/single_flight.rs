use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::ClientError;

/// Single-flight guard for mutating operations.
///
/// Each service holds one; a mutation acquires a permit for its duration and
/// a second trigger while one is outstanding gets
/// [`ClientError::OperationInFlight`] instead of a duplicate network call.
/// Re-entrant triggers are rejected, not queued.
#[derive(Clone, Default)]
pub struct SingleFlight {
    busy: Arc<AtomicBool>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the permit, released when the guard drops.
    pub fn acquire(&self) -> Result<FlightPermit, ClientError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_ok()
        {
            Ok(FlightPermit {
                busy: Arc::clone(&self.busy),
            })
        } else {
            Err(ClientError::OperationInFlight)
        }
    }

    /// Whether a mutation is currently outstanding (drives disabled
    /// controls in the screen layer).
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

pub struct FlightPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for FlightPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
