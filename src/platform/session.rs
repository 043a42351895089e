//! Connection setup shared by commands that talk to the platform

use crate::cli::Cli;
use crate::context::{
    resolve_active_context, resolve_connection, ConnectionOverrides, ContextStore,
};
use crate::error::Result;

use super::PlatformClient;

/// A ready client plus the tenant requests are scoped to
pub struct Session {
    pub client: PlatformClient,
    pub tenant: String,
}

/// Resolve the active context and connection settings, then build a client
pub fn connect(cli: &Cli) -> Result<Session> {
    connect_with_store(&ContextStore::new(), cli)
}

pub(crate) fn connect_with_store(store: &ContextStore, cli: &Cli) -> Result<Session> {
    let context = resolve_active_context(store, cli.context.as_deref())?;
    let overrides = ConnectionOverrides {
        url: cli.url.as_deref(),
        tenant: cli.tenant.as_deref(),
        token: cli.token.as_deref(),
    };
    let connection = resolve_connection(overrides, context.as_ref())?;

    Ok(Session {
        client: PlatformClient::from_connection(&connection),
        tenant: connection.tenant,
    })
}
