//! Solution command arguments

use clap::{Parser, Subcommand};

/// Solution subcommands
#[derive(Subcommand, Debug)]
pub enum SolutionAction {
    /// List all solutions available in this tenant
    #[command(visible_alias = "ls")]
    List(SolutionListArgs),
}

/// Arguments for 'solution list' subcommand
#[derive(Parser, Debug)]
#[command(
    long_about = "List all the solutions that are deployed in the tenant of the active context.",
    after_help = "EXAMPLES:\n  \
        solctl solution list\n  \
        solctl solution list --subscribed\n  \
        solctl solution list -o json"
)]
pub struct SolutionListArgs {
    /// Only show solutions that you are subscribed to
    #[arg(long)]
    pub subscribed: bool,

    /// Only show solutions that you are not subscribed to
    #[arg(long)]
    pub unsubscribed: bool,
}

/// Targets for the hidden '__complete' command
#[derive(Subcommand, Debug)]
pub enum CompleteTarget {
    /// Print solution ids starting with PREFIX, one per line
    #[command(name = "solution-id")]
    SolutionId {
        /// Id prefix to match (case-sensitive)
        #[arg(default_value = "")]
        prefix: String,
    },
}
