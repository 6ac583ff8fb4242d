use wazctl::domain::ports::{LifecycleEvent, LifecycleEventSink};
use wazctl::domain::value_objects::DeploymentSettings;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_docker_header(
    settings: &DeploymentSettings,
    actions: &[&str],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Docker, "Local Wazuh deployment");
    header.add("Release", settings.version.as_str());
    header.add("Directory", settings.work_dir.display().to_string());
    header.add("Actions", actions.join(", "));
    header.render(supports_color, supports_unicode)
}

pub fn render_clean_warning(
    settings: &DeploymentSettings,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = WarningBlock::new("Clean removes the local deployment");
    block.add_line("Containers are stopped and their volumes deleted.");
    block.add_line(format!(
        "{} is removed from disk.",
        settings.work_dir.display()
    ));
    block.render(supports_color, supports_unicode)
}

/// One narration line (or block) per lifecycle event
pub fn render_event(event: &LifecycleEvent, supports_color: bool, supports_unicode: bool) -> String {
    let line = |icon: Icon, text: String| {
        format!("{} {}", icon.colored(supports_color, supports_unicode), text)
    };

    match event {
        LifecycleEvent::ToolAvailable { tool } => line(Icon::Success, format!("{} found", tool)),
        LifecycleEvent::AssetsPresent { path } => line(
            Icon::Skip,
            format!("{} already exists, skipping clone", path.display()),
        ),
        LifecycleEvent::Cloning { version, path } => line(
            Icon::Progress,
            format!("Cloning wazuh-docker {} into {}", version, path.display()),
        ),
        LifecycleEvent::Cloned { .. } => line(Icon::Success, "Repository cloned".to_string()),
        LifecycleEvent::CertificatesPresent => line(
            Icon::Skip,
            "Certificates already present, skipping generation".to_string(),
        ),
        LifecycleEvent::GeneratingCertificates => {
            line(Icon::Progress, "Generating indexer certificates".to_string())
        }
        LifecycleEvent::CertificatesGenerated => {
            line(Icon::Success, "Certificates generated".to_string())
        }
        LifecycleEvent::StackStarting => line(Icon::Progress, "Starting the stack".to_string()),
        LifecycleEvent::AwaitingReady { container, timeout } => line(
            Icon::Pending,
            format!("Waiting up to {}s for {}", timeout.as_secs(), container),
        ),
        LifecycleEvent::ProbePending { attempt, elapsed } => format!(
            "  {} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(format!(
                "not ready yet (attempt {}, {}s elapsed)",
                attempt,
                elapsed.as_secs()
            ))
            .render(supports_color)
        ),
        LifecycleEvent::StackReady {
            dashboard_url,
            username,
            password,
        } => {
            let title = ColoredText::success("Wazuh is ready").bold().render(supports_color);
            format!(
                "{}\n  Dashboard: {}\n  Username:  {}\n  Password:  {}",
                line(Icon::Success, title),
                dashboard_url,
                username,
                password
            )
        }
        LifecycleEvent::NothingToStop { path } => line(
            Icon::Skip,
            format!("No deployment at {}, nothing to stop", path.display()),
        ),
        LifecycleEvent::StackStopping => line(Icon::Progress, "Stopping the stack".to_string()),
        LifecycleEvent::StackStopped => line(Icon::Success, "Stack stopped".to_string()),
        LifecycleEvent::RemovingVolumes => {
            line(Icon::Progress, "Removing stack volumes".to_string())
        }
        LifecycleEvent::Cleaned { path } => line(
            Icon::Clean,
            format!("Removed {}", path.display()),
        ),
        LifecycleEvent::NothingToRemove { path } => line(
            Icon::Skip,
            format!("{} does not exist, nothing to remove", path.display()),
        ),
    }
}

/// Prints lifecycle narration to stdout
pub struct ConsoleLifecycleSink {
    color: bool,
    unicode: bool,
    verbose: bool,
}

impl ConsoleLifecycleSink {
    pub fn new(color: bool, unicode: bool, verbose: bool) -> Self {
        Self {
            color,
            unicode,
            verbose,
        }
    }
}

impl LifecycleEventSink for ConsoleLifecycleSink {
    fn on_event(&self, event: LifecycleEvent) {
        if matches!(event, LifecycleEvent::ToolAvailable { .. }) && !self.verbose {
            return;
        }
        println!("{}", render_event(&event, self.color, self.unicode));
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    fn narrate(events: &[LifecycleEvent]) -> String {
        events
            .iter()
            .map(|e| render_event(e, false, false))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn start_narration_ascii() {
        let events = vec![
            LifecycleEvent::Cloning {
                version: "v4.12.0".to_string(),
                path: PathBuf::from("/home/ops/.wazuh-docker"),
            },
            LifecycleEvent::Cloned {
                path: PathBuf::from("/home/ops/.wazuh-docker"),
            },
            LifecycleEvent::CertificatesPresent,
            LifecycleEvent::StackStarting,
            LifecycleEvent::AwaitingReady {
                container: "single-node-wazuh.dashboard-1".to_string(),
                timeout: Duration::from_secs(120),
            },
            LifecycleEvent::ProbePending {
                attempt: 1,
                elapsed: Duration::from_secs(5),
            },
            LifecycleEvent::StackReady {
                dashboard_url: "https://localhost".to_string(),
                username: "admin".to_string(),
                password: "SecretPassword".to_string(),
            },
        ];

        insta::assert_snapshot!(narrate(&events), @r"
        [..] Cloning wazuh-docker v4.12.0 into /home/ops/.wazuh-docker
        [OK] Repository cloned
        [SKIP] Certificates already present, skipping generation
        [..] Starting the stack
        [ ] Waiting up to 120s for single-node-wazuh.dashboard-1
          [>] not ready yet (attempt 1, 5s elapsed)
        [OK] Wazuh is ready
          Dashboard: https://localhost
          Username:  admin
          Password:  SecretPassword
        ");
    }

    #[test]
    fn header_lists_actions() {
        let settings = DeploymentSettings::for_home(Path::new("/home/ops"));
        let rendered = render_docker_header(&settings, &["stop", "clean"], false, false);

        insta::assert_snapshot!(rendered.trim_end(), @r"
        [DOCKER] Local Wazuh deployment
        Release: v4.12.0
        Directory: /home/ops/.wazuh-docker
        Actions: stop, clean
        ");
    }

    #[test]
    fn quiet_console_sink_skips_probe_details() {
        let sink = ConsoleLifecycleSink::new(false, false, false);
        assert!(!sink.wants_detailed_events());
    }
}
