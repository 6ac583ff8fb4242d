//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - home directory resolution and scaffold file writes
//! - `process/` - external tool invocation and the system clock
//! - `api/` - blocking REST clients for the manager and the indexer

pub mod api;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use api::{IndexerClient, ManagerClient};
pub use fs::{wazctl_home_dir, write_scaffold};
pub use process::{SystemClock, SystemCommandRunner};
