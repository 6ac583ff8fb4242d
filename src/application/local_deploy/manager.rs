//! Deployment manager
//!
//! Every step is idempotent by presence: a step whose output already exists
//! on disk is skipped and reported as an event. Steps run in a fixed order
//! and the first failure aborts the rest.

use std::fs;

use crate::domain::ports::{
    Clock, CommandRunner, Invocation, LifecycleEvent, LifecycleEventSink, StdioMode,
};
use crate::domain::services::{ReadinessOutcome, ReadinessPolicy, ReadinessPoll, ReadinessState};
use crate::domain::value_objects::{DeploymentSettings, LifecycleStep};
use crate::error::DeploymentError;

pub const DEFAULT_DASHBOARD_URL: &str = "https://localhost";
pub const DEFAULT_DASHBOARD_USER: &str = "admin";
pub const DEFAULT_DASHBOARD_PASSWORD: &str = "SecretPassword";

const REQUIRED_TOOLS: [&str; 2] = ["git", "docker"];

/// Drives the local deployment through its lifecycle
pub struct DeploymentManager<R, C, E>
where
    R: CommandRunner,
    C: Clock,
    E: LifecycleEventSink,
{
    pub(super) runner: R,
    pub(super) clock: C,
    pub(super) events: E,
    settings: DeploymentSettings,
}

impl<R, C, E> DeploymentManager<R, C, E>
where
    R: CommandRunner,
    C: Clock,
    E: LifecycleEventSink,
{
    pub fn new(runner: R, clock: C, events: E, settings: DeploymentSettings) -> Self {
        Self {
            runner,
            clock,
            events,
            settings,
        }
    }

    pub fn settings(&self) -> &DeploymentSettings {
        &self.settings
    }

    /// Bring the stack up and wait until the dashboard is serving.
    ///
    /// A readiness timeout leaves the containers running.
    pub fn start(&self) -> Result<ReadinessOutcome, DeploymentError> {
        self.check_tools()?;
        self.acquire()?;
        self.provision_certificates()?;
        self.activate()?;
        let outcome = self.await_ready()?;

        self.events.on_event(LifecycleEvent::StackReady {
            dashboard_url: DEFAULT_DASHBOARD_URL.to_string(),
            username: DEFAULT_DASHBOARD_USER.to_string(),
            password: DEFAULT_DASHBOARD_PASSWORD.to_string(),
        });
        Ok(outcome)
    }

    /// Stop the stack. Succeeds without doing anything when it was never
    /// deployed.
    pub fn stop(&self) -> Result<(), DeploymentError> {
        let stack_dir = self.settings.stack_dir();
        if !stack_dir.is_dir() {
            self.events.on_event(LifecycleEvent::NothingToStop { path: stack_dir });
            return Ok(());
        }

        self.events.on_event(LifecycleEvent::StackStopping);
        self.compose(LifecycleStep::Deactivate, &["down"], StdioMode::Inherit)?;
        self.events.on_event(LifecycleEvent::StackStopped);
        Ok(())
    }

    /// Stop, delete volumes, and remove the work directory
    pub fn clean(&self) -> Result<(), DeploymentError> {
        self.stop()?;

        if self.settings.stack_dir().is_dir() {
            self.events.on_event(LifecycleEvent::RemovingVolumes);
            self.compose(
                LifecycleStep::RemoveVolumes,
                &["down", "-v"],
                StdioMode::Inherit,
            )?;
        }

        let work_dir = &self.settings.work_dir;
        if !work_dir.exists() {
            self.events.on_event(LifecycleEvent::NothingToRemove {
                path: work_dir.clone(),
            });
            return Ok(());
        }

        fs::remove_dir_all(work_dir).map_err(|source| DeploymentError::Filesystem {
            step: LifecycleStep::RemoveWorkDirectory,
            path: work_dir.clone(),
            source,
        })?;
        self.events.on_event(LifecycleEvent::Cleaned {
            path: work_dir.clone(),
        });
        Ok(())
    }

    /// Fail fast if a required tool is not installed
    pub fn check_tools(&self) -> Result<(), DeploymentError> {
        for tool in REQUIRED_TOOLS {
            if !self.runner.is_available(tool) {
                return Err(DeploymentError::ToolMissing {
                    tool: tool.to_string(),
                });
            }
            self.events.on_event(LifecycleEvent::ToolAvailable {
                tool: tool.to_string(),
            });
        }
        Ok(())
    }

    /// Clone the deployment descriptors unless the work directory exists
    pub fn acquire(&self) -> Result<(), DeploymentError> {
        let work_dir = &self.settings.work_dir;

        if work_dir.exists() {
            let compose_file = self.settings.compose_file();
            if !compose_file.is_file() {
                return Err(DeploymentError::PartialCheckout {
                    path: work_dir.clone(),
                    missing: compose_file,
                });
            }
            self.events.on_event(LifecycleEvent::AssetsPresent {
                path: work_dir.clone(),
            });
            return Ok(());
        }

        self.events.on_event(LifecycleEvent::Cloning {
            version: self.settings.version.clone(),
            path: work_dir.clone(),
        });

        let clone = Invocation::new("git")
            .args(["clone", "-b"])
            .arg(self.settings.version.as_str())
            .arg("--single-branch")
            .arg(self.settings.repo_url.as_str())
            .arg(work_dir.display().to_string());
        self.runner
            .run(&clone)
            .map_err(|source| DeploymentError::StepFailed {
                step: LifecycleStep::Acquire,
                source,
            })?;

        self.events.on_event(LifecycleEvent::Cloned {
            path: work_dir.clone(),
        });
        Ok(())
    }

    /// Generate indexer certificates unless the admin credential exists
    pub fn provision_certificates(&self) -> Result<(), DeploymentError> {
        if self.settings.cert_marker().is_file() {
            self.events.on_event(LifecycleEvent::CertificatesPresent);
            return Ok(());
        }

        self.events.on_event(LifecycleEvent::GeneratingCertificates);
        self.compose(
            LifecycleStep::ProvisionCertificates,
            &[
                "-f",
                self.settings.cert_compose_file(),
                "run",
                "--no-TTY",
                "--rm",
                self.settings.cert_generator_service(),
            ],
            StdioMode::Inherit,
        )?;
        self.events.on_event(LifecycleEvent::CertificatesGenerated);
        Ok(())
    }

    /// `docker compose up -d` in the stack directory
    pub fn activate(&self) -> Result<(), DeploymentError> {
        self.events.on_event(LifecycleEvent::StackStarting);
        self.compose(LifecycleStep::Activate, &["up", "-d"], StdioMode::Interactive)
    }

    /// Poll the dashboard logs for the ready marker until the budget runs out
    pub fn await_ready(&self) -> Result<ReadinessOutcome, DeploymentError> {
        let container = self.settings.dashboard_container.as_str();
        let marker = self.settings.ready_marker.as_str();
        let policy = ReadinessPolicy {
            timeout: self.settings.readiness_timeout,
            interval: self.settings.poll_interval,
        };

        self.events.on_event(LifecycleEvent::AwaitingReady {
            container: container.to_string(),
            timeout: policy.timeout,
        });

        let logs = Invocation::new("docker")
            .args(["logs", container])
            .stdio(StdioMode::Silent);
        let mut poll = ReadinessPoll::start(&self.clock, policy);
        let mut probe = || match self.runner.capture(&logs) {
            Ok(output) => output.contains(marker),
            Err(e) => {
                tracing::debug!(error = %e, "readiness probe failed");
                false
            }
        };

        while poll.step(&mut probe) == ReadinessState::Polling {
            if self.events.wants_detailed_events() {
                self.events.on_event(LifecycleEvent::ProbePending {
                    attempt: poll.attempts(),
                    elapsed: poll.elapsed(),
                });
            }
        }

        let outcome = poll.outcome();
        match outcome.state {
            ReadinessState::Ready => Ok(outcome),
            _ => Err(DeploymentError::ReadinessTimeout {
                container: container.to_string(),
                waited: outcome.elapsed,
            }),
        }
    }

    fn compose(
        &self,
        step: LifecycleStep,
        args: &[&str],
        stdio: StdioMode,
    ) -> Result<(), DeploymentError> {
        let invocation = Invocation::new("docker")
            .arg("compose")
            .args(args.iter().copied())
            .current_dir(&self.settings.stack_dir())
            .stdio(stdio);

        tracing::debug!(%invocation, %step, "running compose step");
        self.runner
            .run(&invocation)
            .map_err(|source| DeploymentError::StepFailed { step, source })
    }
}
