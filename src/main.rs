//! solctl - main entry point

use clap::Parser;
use log::{debug, info};

use solctl::completion::{print_completion_script, run_complete_command};
use solctl::context::run_context_command;
use solctl::{run_solution_list_command, Cli, Command, SolutionAction};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting solctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("Output format: {}, batch: {}", cli.output, cli.batch);

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Solution { action } => match action {
            SolutionAction::List(args) => run_solution_list_command(cli, args).await,
        },
        Command::Config { action } => run_context_command(action),
        Command::Completion { shell } => {
            print_completion_script(*shell, &mut std::io::stdout());
            Ok(())
        }
        Command::Complete { target } => {
            run_complete_command(cli, target).await;
            Ok(())
        }
    }
}
