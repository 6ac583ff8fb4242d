//! Terminal UI for the wazctl binary
//!
//! - `views` render command-specific narration
//! - `blocks` and `widgets` are reusable building pieces
//! - `json` writes NDJSON for `--json`

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
