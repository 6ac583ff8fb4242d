use wazctl::{DeploymentError, WazctlError};

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::{emit_event, events::ErrorEvent};

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    block_for(err).render(supports_color, supports_unicode)
}

fn block_for(err: &anyhow::Error) -> ErrorBlock {
    if let Some(deploy) = deployment_error(err) {
        return deployment_block(deploy);
    }

    let Some(wazctl) = err.downcast_ref::<WazctlError>() else {
        return ErrorBlock::new(format!("{:#}", err));
    };

    match wazctl {
        WazctlError::ConfigNotFound { .. } => ErrorBlock::new(wazctl.to_string())
            .with_fix("Run `wazctl config` to create .wazctl.yaml, then fill in your endpoints."),
        WazctlError::InvalidConfig { file, message } => ErrorBlock::new(message.as_str())
            .with_file(file)
            .with_fix("Fix the YAML and try again, or run `wazctl config --force` to start over."),
        WazctlError::InvalidConnection { component, .. } => ErrorBlock::new(wazctl.to_string())
            .with_fix(format!(
                "Check the {} section of your .wazctl.yaml.",
                section_for(component)
            )),
        WazctlError::InvalidRuleTest { file, message } => ErrorBlock::new(message.as_str())
            .with_file(file)
            .with_fix("Run `wazctl rule new -n example` to see a valid rule test."),
        _ => ErrorBlock::new(format!("{:#}", err)),
    }
}

fn deployment_block(err: &DeploymentError) -> ErrorBlock {
    let block = ErrorBlock::new(err.to_string());
    match err {
        DeploymentError::ToolMissing { tool } => {
            block.with_fix(format!("Install {} and make sure it is on your PATH.", tool))
        }
        DeploymentError::PartialCheckout { .. } => {
            block.with_fix("Run `wazctl docker --clean --yes`, then start again.")
        }
        DeploymentError::ReadinessTimeout { container, .. } => block.with_fix(format!(
            "Inspect `docker logs {}`, or run `wazctl docker --stop`.",
            container
        )),
        _ => block,
    }
}

fn deployment_error(err: &anyhow::Error) -> Option<&DeploymentError> {
    err.downcast_ref::<DeploymentError>()
        .or_else(|| match err.downcast_ref::<WazctlError>() {
            Some(WazctlError::Deployment(inner)) => Some(inner),
            _ => None,
        })
}

fn section_for(component: &str) -> &'static str {
    if component == "indexer" {
        "`indexer`"
    } else {
        "`wazuh`"
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let running = deployment_error(err).is_some_and(DeploymentError::leaves_stack_running);
        let event = ErrorEvent::new(format!("{:#}", err)).with_stack_running(running);
        if emit_event(&event).is_err() {
            eprintln!("[ERROR] {:#}", err);
        }
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
