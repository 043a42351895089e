//! CLI argument parsing

mod common;
mod context;
mod solution;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{defaults, env};

pub use common::OutputFormat;
pub use context::{ConfigAction, DeleteContextArgs, SetContextArgs, UseContextArgs};
pub use solution::{CompleteTarget, SolutionAction, SolutionListArgs};

/// Solution platform CLI
#[derive(Parser, Debug)]
#[command(name = "solctl")]
#[command(version)]
#[command(
    about = "List solutions registered in a multi-tenant platform",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Named context to use (overrides SOLCTL_CONTEXT and current-context)
    #[arg(short = 'c', long)]
    pub context: Option<String>,

    /// Platform base URL (overrides the active context)
    #[arg(long, env = env::URL)]
    pub url: Option<String>,

    /// Tenant id (overrides the active context)
    #[arg(long, env = env::TENANT)]
    pub tenant: Option<String>,

    /// API token (overrides the active context)
    #[arg(short = 't', long, env = env::TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Omit the header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Batch mode: no spinner, no interactive output
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Work with solutions in the current tenant
    #[command(visible_alias = "solutions", visible_alias = "sol")]
    Solution {
        #[command(subcommand)]
        action: SolutionAction,
    },

    /// Manage connection contexts
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print a shell completion script
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Dynamic completion values for shell scripts
    #[command(name = "__complete", hide = true)]
    Complete {
        #[command(subcommand)]
        target: CompleteTarget,
    },
}
