//! wazctl - command-line controller for Wazuh
//!
//! wazctl talks to a Wazuh manager API and its search indexer, scaffolds
//! configuration and rule-test files, and stands up a local single-node
//! Docker deployment for testing.
//!
//! ## Layers
//!
//! - `domain` - settings, the readiness state machine, and ports
//! - `application` - the local deployment lifecycle and the scaffolders
//! - `infrastructure` - processes, clocks, home directory, REST clients
//! - `presentation` - CLI definition and dependency wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use config::{ConnectionConfig, IndexerConfig, LocalConfig, ManagerConfig, WazctlConfig};
pub use error::{ApiError, DeploymentError, WazctlError, WazctlResult};
