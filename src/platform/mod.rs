//! Platform API client module
//!
//! Talks to the tenant-scoped object store of the platform.

mod client;
pub mod session;
pub mod solutions;
pub mod traits;

pub use client::{Layer, PlatformClient};
pub use session::{connect, Session};
pub use solutions::{
    build_list_path, run_solution_list_command, solution_list_path, Solution, SolutionList,
    SubscriptionFilter,
};
pub use traits::PlatformResource;
