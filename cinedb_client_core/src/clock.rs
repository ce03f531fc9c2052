//! Clock abstraction for cache freshness
//!
//! The cache store never reads wall time directly; it asks an injected
//! `Clock`. Production code uses `SystemClock`, tests drive freshness with a
//! manually advanced clock.

use std::time::Instant;

/// Source of monotonic time for freshness decisions
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Clock backed by the system's monotonic clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
