//! solctl - explore solutions registered in a multi-tenant platform
//!
//! A CLI that lists the solutions (deployable extension packages) of a
//! tenant from the platform object store.
//!
//! # Example
//!
//! ```bash
//! # Save connection settings once
//! solctl config set-context prod --url https://acme.example.com --tenant acme
//!
//! # List all solutions
//! solctl solution list
//!
//! # Only subscribed ones, as JSON
//! solctl solution list --subscribed -o json
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod platform;
pub mod ui;

pub use cli::{Cli, Command, CompleteTarget, ConfigAction, OutputFormat, SolutionAction};
pub use error::{PlatformError, Result};
pub use platform::{
    connect, run_solution_list_command, PlatformClient, Solution, SolutionList,
    SubscriptionFilter,
};
