//! Shell completion: static scripts and dynamic solution ids

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use log::debug;

use crate::cli::{Cli, CompleteTarget};
use crate::platform::connect;

/// Write the completion script for `shell`
pub fn print_completion_script(shell: Shell, out: &mut dyn Write) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, out);
}

/// Print completion candidates, one per line. Never fails: without a
/// usable connection there are simply no candidates.
pub async fn run_complete_command(cli: &Cli, target: &CompleteTarget) {
    for candidate in complete_candidates(cli, target).await {
        println!("{}", candidate);
    }
}

async fn complete_candidates(cli: &Cli, target: &CompleteTarget) -> Vec<String> {
    match target {
        CompleteTarget::SolutionId { prefix } => {
            let session = match connect(cli) {
                Ok(session) => session,
                Err(e) => {
                    debug!("No completion candidates: {}", e);
                    return Vec::new();
                }
            };
            session
                .client
                .get_solution_names(&session.tenant, prefix)
                .await
        }
    }
}
