use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic sequence counter guarding against out-of-order async
/// responses.
///
/// Every UI-triggered call takes a token via [`begin`](Self::begin); when
/// its response arrives, only the call holding the latest token is allowed
/// to update state. Re-triggering a call invalidates all earlier tokens,
/// so a slow stale response can never overwrite a newer one.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    current: Arc<AtomicU64>,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation and return its token.
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` is still the latest generation.
    pub fn is_current(&self, token: u64) -> bool {
        self.current.load(Ordering::SeqCst) == token
    }
}
