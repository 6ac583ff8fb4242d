//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod command_runner;
pub mod lifecycle_events;

pub use clock::Clock;
pub use command_runner::{CommandRunner, Invocation, ProcessError, StdioMode};
pub use lifecycle_events::{LifecycleEvent, LifecycleEventSink};

#[cfg(test)]
pub(crate) mod testing;
