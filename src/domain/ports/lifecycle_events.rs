//! Lifecycle Event Port
//!
//! Provides an observable interface for local deployment operations.
//! Enables step-by-step narration, JSON event streams, and debugging.

use std::path::PathBuf;
use std::time::Duration;

/// Event emitted while the deployment manager works
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A required tool was found
    ToolAvailable { tool: String },

    /// Work directory already present, clone skipped
    AssetsPresent { path: PathBuf },

    /// Clone started
    Cloning { version: String, path: PathBuf },

    /// Clone finished
    Cloned { path: PathBuf },

    /// Credential file already present, generation skipped
    CertificatesPresent,

    /// Certificate generator started
    GeneratingCertificates,

    /// Certificate generator finished
    CertificatesGenerated,

    /// `compose up` started
    StackStarting,

    /// Readiness polling started
    AwaitingReady { container: String, timeout: Duration },

    /// A readiness probe did not find the marker
    ProbePending { attempt: u32, elapsed: Duration },

    /// Dashboard reported ready
    StackReady {
        dashboard_url: String,
        username: String,
        password: String,
    },

    /// Stack directory absent, nothing to stop
    NothingToStop { path: PathBuf },

    /// `compose down` started
    StackStopping,

    /// `compose down` finished
    StackStopped,

    /// `compose down -v` started
    RemovingVolumes,

    /// Work directory removed
    Cleaned { path: PathBuf },

    /// Work directory absent, nothing to remove
    NothingToRemove { path: PathBuf },
}

/// Trait for receiving lifecycle events
///
/// Implementations can be:
/// - ConsoleLifecycleSink: narration in the terminal
/// - JsonLifecycleSink: NDJSON event stream
pub trait LifecycleEventSink {
    fn on_event(&self, event: LifecycleEvent);

    /// Whether per-probe events are wanted
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

impl<S: LifecycleEventSink + ?Sized> LifecycleEventSink for &S {
    fn on_event(&self, event: LifecycleEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}

impl<S: LifecycleEventSink + ?Sized> LifecycleEventSink for Box<S> {
    fn on_event(&self, event: LifecycleEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}
