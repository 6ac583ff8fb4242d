//! System Command Runner
//!
//! Spawns real processes with `std::process::Command`. Streaming runs hand
//! the terminal to the child so the user sees git and docker output live.
//! With JSON output on, child stdout is sent to stderr so stdout carries
//! only NDJSON events.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandRunner, Invocation, ProcessError, StdioMode};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner {
    json: bool,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep stdout free for machine-readable output
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    fn child_stdout(&self) -> Stdio {
        if self.json {
            Stdio::from(io::stderr())
        } else {
            Stdio::inherit()
        }
    }

    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl CommandRunner for SystemCommandRunner {
    fn is_available(&self, tool: &str) -> bool {
        Command::new(tool)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        tracing::debug!(command = %invocation, cwd = ?invocation.cwd, "running");

        let mut cmd = Self::command(invocation);
        match invocation.stdio {
            StdioMode::Inherit => {
                cmd.stdin(Stdio::null())
                    .stdout(self.child_stdout())
                    .stderr(Stdio::inherit());
            }
            StdioMode::Interactive => {
                cmd.stdin(Stdio::inherit())
                    .stdout(self.child_stdout())
                    .stderr(Stdio::inherit());
            }
            StdioMode::Silent => {
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null());
            }
        }

        let status = cmd.status().map_err(|source| ProcessError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(ProcessError::Exit {
                program: invocation.program.clone(),
                code: status.code(),
            });
        }
        Ok(())
    }

    fn capture(&self, invocation: &Invocation) -> Result<String, ProcessError> {
        tracing::trace!(command = %invocation, "capturing");

        let output = Self::command(invocation)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProcessError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProcessError::Exit {
                program: invocation.program.clone(),
                code: output.status.code(),
            });
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(combined)
    }
}
