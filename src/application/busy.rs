// src/application/busy.rs
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Loading indicator shared with whoever renders it.
///
/// Counts requests in flight, so overlapping operations keep the flag set
/// until the last one settles.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    in_flight: Arc<AtomicUsize>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Mark one request as started; it is marked settled when the guard drops.
    pub fn enter(&self) -> BusyGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        BusyGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

#[must_use = "the flag is cleared as soon as the guard is dropped"]
#[derive(Debug)]
pub struct BusyGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
