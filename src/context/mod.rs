//! Context management module
//!
//! Named contexts bundle connection parameters (url, tenant, token) so the
//! CLI can switch between platform deployments and tenants.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::run_context_command;
pub use models::{Context, ContextConfig};
pub use resolve::{
    resolve_active_context, resolve_active_context_name, resolve_connection, Connection,
    ConnectionOverrides,
};
pub use store::ContextStore;
