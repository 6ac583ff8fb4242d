mod common;

use common::TestEnv;

#[test]
fn docker_requires_an_action_flag() {
    let env = TestEnv::new();
    let result = env.run(&["docker"]);

    assert!(!result.success);
    assert!(result.stderr.contains("--start"), "{}", result.stderr);
}

#[test]
fn stop_without_deployment_is_a_noop() {
    let env = TestEnv::new();
    let result = env.run(&["docker", "--stop"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("nothing to stop"), "{}", result.stdout);
}

#[test]
fn stop_json_streams_events() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "docker", "--stop"]);

    assert!(result.success, "{}", result.combined_output());
    let events: Vec<String> = result
        .stdout
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["event"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(events, vec!["start", "nothing_to_stop", "complete"]);
}

#[test]
fn clean_json_reports_nothing_to_remove() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "docker", "--clean", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    let events: Vec<String> = result
        .stdout
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["event"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(events, vec!["start", "nothing_to_stop", "nothing_to_remove", "complete"]);
}

#[test]
fn clean_without_yes_refuses_when_not_interactive() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.home_path(".wazuh-docker")).unwrap();

    let result = env.run(&["docker", "--clean"]);

    assert!(!result.success);
    assert!(result.stderr.contains("--yes"), "{}", result.stderr);
    assert!(env.home_path(".wazuh-docker").exists());
}

#[test]
fn clean_removes_leftover_directory() {
    let env = TestEnv::new();
    env.write_home_file(".wazuh-docker/README.md", "partial clone\n");

    let result = env.run(&["docker", "--clean", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(!env.home_path(".wazuh-docker").exists());
}

#[test]
fn start_fails_fast_without_tools() {
    let env = TestEnv::new();
    let empty_path = env.home_path("empty-bin");
    std::fs::create_dir_all(&empty_path).unwrap();

    let result = env.run_with_env(
        &["docker", "--start"],
        &[("PATH", empty_path.to_str().unwrap())],
    );

    assert!(!result.success);
    assert!(result.stderr.contains("git not found in PATH"), "{}", result.stderr);
    assert!(!env.home_path(".wazuh-docker").exists());
}

#[test]
fn start_with_partial_checkout_asks_for_clean() {
    let env = TestEnv::new();
    env.write_home_file(".wazuh-docker/README.md", "interrupted clone\n");

    #[cfg(unix)]
    let result = {
        let bin = fake_tools::install(&env);
        env.run_with_env(&["docker", "--start"], &[("PATH", &fake_tools::path(&bin))])
    };
    #[cfg(not(unix))]
    let result = env.run(&["docker", "--start"]);

    assert!(!result.success);
    #[cfg(unix)]
    assert!(result.stderr.contains("looks incomplete"), "{}", result.stderr);
    #[cfg(not(unix))]
    assert!(
        result.stderr.contains("looks incomplete") || result.stderr.contains("not found in PATH"),
        "{}",
        result.stderr
    );
    assert!(env.home_path(".wazuh-docker/README.md").exists());
}

#[test]
fn zero_poll_interval_is_rejected() {
    let env = TestEnv::new();
    env.write_project_file(".wazctl.yaml", "local:\n  pollIntervalSecs: 0\n");

    let result = env.run(&["docker", "--stop"]);

    assert!(!result.success);
    assert!(result.stderr.contains("pollIntervalSecs"), "{}", result.stderr);
}

#[cfg(unix)]
mod fake_tools {
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    use super::common::TestEnv;

    const FAKE_GIT: &str = r#"#!/bin/sh
echo "git $*" >> "$WAZCTL_FAKE_LOG"
if [ "$1" = "clone" ]; then
  echo "Cloning into '$6'..."
  mkdir -p "$6/single-node"
  touch "$6/single-node/docker-compose.yml"
fi
"#;

    const FAKE_DOCKER: &str = r#"#!/bin/sh
echo "docker $*" >> "$WAZCTL_FAKE_LOG"
if [ "$1" = "compose" ]; then
  echo "compose says: $*"
fi
if [ "$1" = "logs" ]; then
  echo "http server running at https://0.0.0.0:5601"
fi
"#;

    /// Install `git` and `docker` stand-ins; returns their directory
    pub fn install(env: &TestEnv) -> PathBuf {
        let bin = env.home_path("fake-bin");
        std::fs::create_dir_all(&bin).unwrap();
        for (name, script) in [("git", FAKE_GIT), ("docker", FAKE_DOCKER)] {
            let path = bin.join(name);
            std::fs::write(&path, script).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        bin
    }

    pub fn path(bin: &Path) -> String {
        format!("{}:/usr/bin:/bin", bin.display())
    }
}

#[cfg(unix)]
#[test]
fn start_clones_provisions_and_waits_then_is_idempotent() {
    let env = TestEnv::new();
    let bin = fake_tools::install(&env);
    let log = env.home_path("calls.log");
    let path = fake_tools::path(&bin);
    let vars = [("PATH", path.as_str()), ("WAZCTL_FAKE_LOG", log.to_str().unwrap())];

    let first = env.run_with_env(&["docker", "--start"], &vars);
    assert!(first.success, "{}", first.combined_output());
    assert!(first.stdout.contains("Wazuh is ready"), "{}", first.stdout);
    assert!(first.stdout.contains("https://localhost"));

    let calls = std::fs::read_to_string(&log).unwrap();
    assert!(calls.contains(
        "git clone -b v4.12.0 --single-branch https://github.com/wazuh/wazuh-docker.git"
    ));
    assert!(calls.contains("docker compose -f generate-indexer-certs.yml run --no-TTY --rm generator"));
    assert!(calls.contains("docker compose up -d"));
    assert!(calls.contains("docker logs single-node-wazuh.dashboard-1"));

    std::fs::write(&log, "").unwrap();
    let second = env.run_with_env(&["docker", "--start"], &vars);
    assert!(second.success, "{}", second.combined_output());
    assert!(second.stdout.contains("skipping clone"), "{}", second.stdout);

    let calls = std::fs::read_to_string(&log).unwrap();
    assert!(!calls.contains("git clone"), "{calls}");
}

#[cfg(unix)]
#[test]
fn repo_version_comes_from_config() {
    let env = TestEnv::new();
    let bin = fake_tools::install(&env);
    let log = env.home_path("calls.log");
    let path = fake_tools::path(&bin);
    env.write_project_file(".wazctl.yaml", "local:\n  repoVersion: 4.11.1\n");

    let result = env.run_with_env(
        &["docker", "--start"],
        &[("PATH", path.as_str()), ("WAZCTL_FAKE_LOG", log.to_str().unwrap())],
    );

    assert!(result.success, "{}", result.combined_output());
    let calls = std::fs::read_to_string(&log).unwrap();
    assert!(calls.contains("git clone -b v4.11.1 "), "{calls}");
}

#[cfg(unix)]
#[test]
fn json_start_keeps_child_output_off_stdout() {
    let env = TestEnv::new();
    let bin = fake_tools::install(&env);
    let log = env.home_path("calls.log");
    let path = fake_tools::path(&bin);

    let result = env.run_with_env(
        &["--json", "docker", "--start"],
        &[("PATH", path.as_str()), ("WAZCTL_FAKE_LOG", log.to_str().unwrap())],
    );

    assert!(result.success, "{}", result.combined_output());
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|line| {
            serde_json::from_str(line).unwrap_or_else(|e| panic!("not JSON ({e}): {line}"))
        })
        .collect();
    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.last().unwrap()["event"], "complete");
    assert!(events.iter().any(|e| e["event"] == "stack_ready"));
    assert!(result.stderr.contains("Cloning into"), "{}", result.stderr);
    assert!(result.stderr.contains("compose says: compose up -d"), "{}", result.stderr);
}
