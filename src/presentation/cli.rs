//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - `docker` flags combine; they run in the order start, stop, clean

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Component a new user is created in
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Wazuh manager RBAC user
    Wazuh,
    /// Indexer internal user
    Indexer,
}

/// wazctl - command-line controller for Wazuh
#[derive(Parser, Debug)]
#[command(name = "wazctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test authentication against the configured Wazuh manager
    Auth,

    /// Manage users in the manager or the indexer
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Query agents registered with the manager
    Agents {
        #[command(subcommand)]
        action: AgentCommands,
    },

    /// Write a starter .wazctl.yaml in the current directory
    Config {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Create and validate rule-test files
    Rule {
        #[command(subcommand)]
        action: RuleCommands,
    },

    /// Manage a local single-node Wazuh deployment in Docker
    Docker(DockerArgs),
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Create a new user
    Add {
        /// Username of the new user
        #[arg(short, long)]
        username: String,

        /// Password of the new user
        #[arg(short, long)]
        password: String,

        /// Component to create the user in
        #[arg(short, long, value_enum)]
        component: Component,

        /// Backend role for indexer users
        #[arg(short, long, required_if_eq("component", "indexer"))]
        role: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AgentCommands {
    /// List all agents as JSON
    List,
}

#[derive(Subcommand, Debug)]
pub enum RuleCommands {
    /// Write a starter rule-test file named <NAME>.yaml
    New {
        /// Name of the new rule file
        #[arg(short, long)]
        name: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a rule-test file
    Check {
        /// Rule-test file to validate
        file: PathBuf,
    },
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
#[command(group = clap::ArgGroup::new("action").required(true).multiple(true))]
pub struct DockerArgs {
    /// Clone, provision, and start the stack, then wait for the dashboard
    #[arg(long, group = "action")]
    pub start: bool,

    /// Stop the stack
    #[arg(long, group = "action")]
    pub stop: bool,

    /// Stop the stack and delete its volumes and files
    #[arg(long, group = "action")]
    pub clean: bool,

    /// Skip the confirmation prompt for --clean
    #[arg(short, long)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["wazctl"]).is_err());
    }

    #[test]
    fn test_cli_parse_auth() {
        let cli = Cli::try_parse_from(["wazctl", "auth"]).unwrap();
        assert!(matches!(cli.command, Commands::Auth));
    }

    #[test]
    fn test_cli_parse_user_add_wazuh() {
        let cli = Cli::try_parse_from([
            "wazctl", "user", "add", "-u", "analyst", "-p", "pw", "-c", "wazuh",
        ])
        .unwrap();
        if let Commands::User {
            action:
                UserCommands::Add {
                    username,
                    component,
                    role,
                    ..
                },
        } = cli.command
        {
            assert_eq!(username, "analyst");
            assert_eq!(component, Component::Wazuh);
            assert_eq!(role, None);
        } else {
            panic!("Expected User Add command");
        }
    }

    #[test]
    fn test_cli_indexer_user_requires_role() {
        let result = Cli::try_parse_from([
            "wazctl", "user", "add", "-u", "analyst", "-p", "pw", "-c", "indexer",
        ]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "wazctl", "user", "add", "-u", "analyst", "-p", "pw", "-c", "indexer", "-r",
            "readall",
        ])
        .unwrap();
        if let Commands::User {
            action: UserCommands::Add { role, .. },
        } = cli.command
        {
            assert_eq!(role.as_deref(), Some("readall"));
        } else {
            panic!("Expected User Add command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_component() {
        let result = Cli::try_parse_from([
            "wazctl", "user", "add", "-u", "a", "-p", "b", "-c", "dashboard",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_docker_flags_combine() {
        let cli = Cli::try_parse_from(["wazctl", "docker", "--start", "--clean"]).unwrap();
        if let Commands::Docker(args) = cli.command {
            assert!(args.start);
            assert!(!args.stop);
            assert!(args.clean);
            assert!(!args.yes);
        } else {
            panic!("Expected Docker command");
        }
    }

    #[test]
    fn test_cli_docker_requires_an_action() {
        assert!(Cli::try_parse_from(["wazctl", "docker"]).is_err());
        assert!(Cli::try_parse_from(["wazctl", "docker", "--yes"]).is_err());
    }

    #[test]
    fn test_cli_parse_rule_new() {
        let cli = Cli::try_parse_from(["wazctl", "rule", "new", "-n", "ssh-brute"]).unwrap();
        if let Commands::Rule {
            action: RuleCommands::New { name, force },
        } = cli.command
        {
            assert_eq!(name, "ssh-brute");
            assert!(!force);
        } else {
            panic!("Expected Rule New command");
        }
    }

    #[test]
    fn test_cli_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["wazctl", "docker", "--stop", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["wazctl", "-vv", "agents", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = Cli::try_parse_from(["wazctl", "--color", "never", "auth"]).unwrap();
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }
}
