//! Domain Layer
//!
//! Pure deployment concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - rule-test documents
//! - `value_objects/` - deployment settings and lifecycle steps
//! - `services/` - the readiness polling state machine
//! - `ports/` - process runner, clock, and lifecycle event interfaces
//!
//! Everything that touches a process, the clock, or the terminal goes
//! through a trait defined in `ports/`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
