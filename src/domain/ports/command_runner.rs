//! Command runner port - abstraction over external tool invocation
//!
//! The lifecycle manager never spawns processes itself. It describes what
//! to run as an [`Invocation`] and hands it to a [`CommandRunner`], which
//! lets tests substitute a recorder that returns scripted results.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of an external tool invocation
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The program could not be started at all
    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully
    #[error("{program} exited with {}", describe_code(*code))]
    Exit { program: String, code: Option<i32> },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// How the child's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// stdout and stderr go to the caller's terminal
    #[default]
    Inherit,
    /// stdin is inherited too, for tools that may prompt
    Interactive,
    /// stdout and stderr are discarded
    Silent,
}

/// One external command: program, arguments, and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub stdio: StdioMode,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            stdio: StdioMode::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    pub fn stdio(mut self, stdio: StdioMode) -> Self {
        self.stdio = stdio;
        self
    }

    /// True if the argument list starts with `prefix`
    pub fn has_args(&self, prefix: &[&str]) -> bool {
        self.args.len() >= prefix.len()
            && self.args.iter().zip(prefix).all(|(a, p)| a == p)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external tools
///
/// Implementations:
/// - `SystemCommandRunner` - spawns real processes
/// - test recorders that script exit results
pub trait CommandRunner {
    /// Whether `tool` can be executed at all
    fn is_available(&self, tool: &str) -> bool;

    /// Run to completion, streaming output per `invocation.stdio`
    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError>;

    /// Run to completion and return stdout and stderr combined
    fn capture(&self, invocation: &Invocation) -> Result<String, ProcessError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_display_joins_args() {
        let inv = Invocation::new("docker").args(["compose", "up", "-d"]);
        assert_eq!(inv.to_string(), "docker compose up -d");
    }

    #[test]
    fn has_args_matches_prefix_only() {
        let inv = Invocation::new("docker").args(["compose", "down", "-v"]);
        assert!(inv.has_args(&["compose", "down"]));
        assert!(!inv.has_args(&["compose", "up"]));
        assert!(!Invocation::new("docker").has_args(&["compose"]));
    }

    #[test]
    fn exit_error_mentions_code() {
        let err = ProcessError::Exit {
            program: "git".to_string(),
            code: Some(128),
        };
        assert_eq!(err.to_string(), "git exited with exit code 128");
    }
}
