//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeploymentManager` - Start, stop, and clean the local Docker deployment
//! - `scaffold` - Write starter config and rule-test files, validate rule tests

pub mod local_deploy;
pub mod scaffold;

pub use local_deploy::{
    DeploymentManager, DEFAULT_DASHBOARD_PASSWORD, DEFAULT_DASHBOARD_URL, DEFAULT_DASHBOARD_USER,
};
pub use scaffold::{check_rule, scaffold_config, scaffold_rule, CONFIG_FILE_NAME};
