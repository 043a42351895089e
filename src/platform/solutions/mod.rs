//! Solutions module - list solutions registered in a tenant

mod api;
mod commands;
mod filter;
mod models;

pub use commands::run_solution_list_command;
pub use filter::{build_list_path, solution_list_path, SubscriptionFilter};
pub use models::{Solution, SolutionData, SolutionList};
