//! Domain Services
//!
//! Stateless logic that the application layer drives.

pub mod readiness;

pub use readiness::{ReadinessOutcome, ReadinessPolicy, ReadinessPoll, ReadinessState};
