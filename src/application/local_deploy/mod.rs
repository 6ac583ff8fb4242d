//! Local Deployment Use Case
//!
//! Stands up, stops, and removes the single-node Docker deployment under
//! `~/.wazuh-docker`.
//!
//! This module handles:
//! - Checking that `git` and `docker` are installed
//! - Cloning the pinned release of the deployment descriptors
//! - Generating indexer certificates once
//! - Starting the stack and waiting for the dashboard
//! - Stopping the stack and deleting volumes and assets

mod manager;


pub use manager::{
    DeploymentManager, DEFAULT_DASHBOARD_PASSWORD, DEFAULT_DASHBOARD_URL, DEFAULT_DASHBOARD_USER,
};
