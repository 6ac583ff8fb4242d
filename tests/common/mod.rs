//! Common test utilities for wazctl CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus a runner for the
//!   built binary
//! - `serve_responses`: a scripted HTTP responder for API commands

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread::JoinHandle;

use tempfile::TempDir;

/// Result of running a wazctl CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// The binary sees `project_root` as its working directory and `home_dir`
/// as the user's home (via `WAZCTL_TEST_HOME`).
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_wazctl")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run wazctl from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run wazctl from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("WAZCTL_TEST_HOME", self.home_dir.path())
            .env("HOME", self.home_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("WAZCTL_REPO_VERSION")
            .env_remove("WAZCTL_WAZUH_PASSWORD")
            .env_remove("WAZCTL_INDEXER_PASSWORD");
        for proxy in ["HTTP_PROXY", "HTTPS_PROXY", "ALL_PROXY", "http_proxy", "https_proxy", "all_proxy"] {
            cmd.env_remove(proxy);
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute wazctl");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        write_file(&self.home_path(relative_path), content);
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Serve one scripted `(status, body)` response per connection, in order.
/// The handle yields the raw requests received.
pub fn serve_responses(responses: Vec<(u16, &'static str)>) -> (u16, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let port = listener.local_addr().unwrap().port();

    let handle = std::thread::spawn(move || {
        let mut requests = Vec::new();
        for (status, body) in responses {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap_or(0);
                }
                let end = line == "\r\n" || line.is_empty();
                request.push_str(&line);
                if end {
                    break;
                }
            }
            let mut body_buf = vec![0u8; content_length];
            reader.read_exact(&mut body_buf).unwrap();
            request.push_str(&String::from_utf8_lossy(&body_buf));
            requests.push(request);

            let response = format!(
                "HTTP/1.1 {} TEST\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        requests
    });

    (port, handle)
}

/// A `.wazctl.yaml` pointing both components at `127.0.0.1:<port>` over http
pub fn local_config(port: u16) -> String {
    format!(
        "wazuh:\n  endpoint: 127.0.0.1\n  port: {port}\n  protocol: http\n  wuiUsername: wazuh-wui\n  wuiPassword: secret\nindexer:\n  endpoint: 127.0.0.1\n  port: {port}\n  protocol: http\n  indexerUsername: admin\n  indexerPassword: admin\n"
    )
}
