//! Context and connection resolution from multiple sources

use log::debug;

use crate::config::{context as context_config, env};
use crate::error::{PlatformError, Result};

use super::models::{Context, ContextConfig};
use super::store::ContextStore;

/// Effective connection settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Platform base URL without trailing slash
    pub url: String,
    /// Tenant id sent as the layer id
    pub tenant: String,
    /// Bearer token, if any source provided one
    pub token: Option<String>,
}

/// Values given on the command line (clap already folded in SOLCTL_* env vars)
#[derive(Debug, Default, Clone, Copy)]
pub struct ConnectionOverrides<'a> {
    pub url: Option<&'a str>,
    pub tenant: Option<&'a str>,
    pub token: Option<&'a str>,
}

/// Resolve the active context name:
/// 1. --context CLI flag
/// 2. SOLCTL_CONTEXT env var
/// 3. current-context from config file
pub fn resolve_active_context_name(
    cli_context: Option<&str>,
    config: &ContextConfig,
) -> Option<String> {
    let env_context = std::env::var(context_config::ENV_VAR).ok();
    pick_context_name(cli_context, env_context.as_deref(), config)
}

fn pick_context_name(
    cli_context: Option<&str>,
    env_context: Option<&str>,
    config: &ContextConfig,
) -> Option<String> {
    if let Some(name) = cli_context {
        debug!("Using context from CLI flag: {}", name);
        return Some(name.to_string());
    }

    if let Some(name) = env_context.filter(|n| !n.is_empty()) {
        debug!(
            "Using context from {} env var: {}",
            context_config::ENV_VAR,
            name
        );
        return Some(name.to_string());
    }

    config.current_context.clone().inspect(|name| {
        debug!("Using context from config file: {}", name);
    })
}

/// Load the config file and return the active context, if any.
///
/// An explicitly named context that does not exist is an error; having no
/// context at all is not (flags and env vars may supply everything).
pub fn resolve_active_context(
    store: &ContextStore,
    cli_context: Option<&str>,
) -> Result<Option<Context>> {
    let config = store.load()?;

    let Some(name) = resolve_active_context_name(cli_context, &config) else {
        debug!("No active context");
        return Ok(None);
    };

    match config.contexts.get(&name) {
        Some(ctx) => {
            debug!("Resolved context '{}': url={}", name, ctx.url);
            Ok(Some(ctx.clone()))
        }
        None => Err(PlatformError::Config(format!(
            "Context '{}' not found. Available contexts: {}",
            name,
            config.available_names()
        ))),
    }
}

/// Merge command-line overrides with the active context.
/// Explicit values win; url and tenant are required.
pub fn resolve_connection(
    overrides: ConnectionOverrides<'_>,
    context: Option<&Context>,
) -> Result<Connection> {
    let url = overrides
        .url
        .map(str::to_string)
        .or_else(|| context.map(|c| c.url.clone()))
        .filter(|u| !u.is_empty())
        .ok_or_else(|| PlatformError::UrlNotFound(not_found_message("URL", "--url", env::URL)))?;

    let tenant = overrides
        .tenant
        .map(str::to_string)
        .or_else(|| context.and_then(|c| c.tenant.clone()))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            PlatformError::TenantNotFound(not_found_message("tenant", "--tenant", env::TENANT))
        })?;

    let token = overrides
        .token
        .map(str::to_string)
        .or_else(|| context.and_then(|c| c.token.clone()));

    debug!(
        "Connection: url={}, tenant={}, token={}",
        url,
        tenant,
        if token.is_some() { "set" } else { "not set" }
    );

    Ok(Connection {
        url: url.trim_end_matches('/').to_string(),
        tenant,
        token,
    })
}

fn not_found_message(what: &str, flag: &str, env_var: &str) -> String {
    format!(
        "No platform {what} specified. Please provide one using:\n\
         \n\
         1. CLI argument:      solctl {flag} <VALUE> ...\n\
         2. Environment var:   export {env_var}=<VALUE>\n\
         3. Context:           solctl config set-context <NAME> {flag} <VALUE>\n"
    )
}
