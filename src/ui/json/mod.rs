//! JSON output utilities for CLI commands.
//!
//! This module provides:
//! - Shared event types for consistent JSON output (`events`)
//! - Helper functions for emitting NDJSON events
//! - `JsonLifecycleSink`, the `--json` narration of `wazctl docker`

pub mod events;

use std::io::{self, Write};

use serde::Serialize;

use wazctl::domain::ports::{LifecycleEvent, LifecycleEventSink};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let line =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// Streams lifecycle events to stdout as NDJSON
pub struct JsonLifecycleSink;

impl LifecycleEventSink for JsonLifecycleSink {
    fn on_event(&self, event: LifecycleEvent) {
        if let Err(e) = emit_event(&events::lifecycle_event(&event)) {
            tracing::warn!(error = %e, "failed to write JSON event");
        }
    }
}
