//! Clock port - abstraction over wall-clock time and sleeping
//!
//! The readiness poll measures its budget through this trait so tests can
//! advance time without waiting for it.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Current monotonic instant
    fn now(&self) -> Instant;

    /// Block the caller for `duration`
    fn sleep(&self, duration: Duration);
}
