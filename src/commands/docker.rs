//! Docker command handler
//!
//! Runs the requested lifecycle operations against the local deployment.

use anyhow::{bail, Result};
use dialoguer::Confirm;

use wazctl::config;
use wazctl::domain::ports::LifecycleEventSink;
use wazctl::presentation::cli::DockerArgs;
use wazctl::presentation::factory::create_deployment_manager;

use crate::ui::context::UiContext;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::json::{emit_event, JsonLifecycleSink};
use crate::ui::output::print_config_warnings;
use crate::ui::theme::prompt_theme;
use crate::ui::views::docker::{render_clean_warning, render_docker_header, ConsoleLifecycleSink};

/// Execute the docker command
pub fn cmd_docker(args: DockerArgs, ui: &UiContext) -> Result<()> {
    let loaded = config::load_optional()?;
    if let Some(loaded) = &loaded {
        print_config_warnings(loaded, ui);
    }

    let sink: Box<dyn LifecycleEventSink> = if ui.json {
        Box::new(JsonLifecycleSink)
    } else {
        Box::new(ConsoleLifecycleSink::new(ui.color, ui.unicode, ui.verbose > 0))
    };
    let manager = create_deployment_manager(loaded.as_ref().map(|l| &l.config), sink, ui.json)?;

    let mut actions: Vec<&str> = Vec::new();
    if args.start {
        actions.push("start");
    }
    if args.stop {
        actions.push("stop");
    }
    if args.clean {
        actions.push("clean");
    }

    if ui.json {
        emit_event(&StartEvent::new("docker"))?;
    } else {
        print!(
            "{}",
            render_docker_header(manager.settings(), &actions, ui.color, ui.unicode)
        );
    }

    if args.clean && !args.yes {
        if !ui.can_prompt() {
            bail!("--clean deletes the deployment and its volumes; pass --yes to confirm");
        }
        eprint!(
            "{}",
            render_clean_warning(manager.settings(), ui.color, ui.unicode)
        );
        let confirmed = Confirm::with_theme(prompt_theme(ui.color).as_ref())
            .with_prompt("Remove the local deployment?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    if args.start {
        manager.start()?;
    }
    if args.stop {
        manager.stop()?;
    }
    if args.clean {
        manager.clean()?;
    }

    if ui.json {
        emit_event(&CompleteEvent::success("docker"))?;
    }
    Ok(())
}
