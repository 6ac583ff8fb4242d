//! wazctl CLI - command-line controller for Wazuh
//!
//! Usage: wazctl <COMMAND>
//!
//! Commands:
//!   auth     Test authentication against the manager
//!   user     Create manager or indexer users
//!   agents   List registered agents
//!   config   Write a starter .wazctl.yaml
//!   rule     Create and validate rule-test files
//!   docker   Manage a local single-node deployment

mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use wazctl::presentation::cli::{AgentCommands, RuleCommands, UserCommands};
use wazctl::presentation::{Cli, Commands};

use crate::ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    match run(cli.command, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            crate::ui::error::print_error(&err, ui.json);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

fn run(command: Commands, ui: &UiContext) -> Result<()> {
    match command {
        Commands::Auth => commands::auth::cmd_auth(ui),
        Commands::User {
            action:
                UserCommands::Add {
                    username,
                    password,
                    component,
                    role,
                },
        } => commands::user::cmd_user_add(&username, &password, component, role.as_deref(), ui),
        Commands::Agents {
            action: AgentCommands::List,
        } => commands::agents::cmd_agents_list(ui),
        Commands::Config { force } => commands::scaffold::cmd_config(force, ui),
        Commands::Rule { action } => match action {
            RuleCommands::New { name, force } => commands::rule::cmd_rule_new(&name, force, ui),
            RuleCommands::Check { file } => commands::rule::cmd_rule_check(&file, ui),
        },
        Commands::Docker(args) => commands::docker::cmd_docker(args, ui),
    }
}
