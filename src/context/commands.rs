//! Context command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::cli::{ConfigAction, SetContextArgs};
use crate::error::PlatformError;

use super::models::Context;
use super::store::ContextStore;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Dispatch config subcommands
pub fn run_context_command(action: &ConfigAction) -> CommandResult {
    run_with_store(&ContextStore::new(), action)
}

fn run_with_store(store: &ContextStore, action: &ConfigAction) -> CommandResult {
    match action {
        ConfigAction::GetContexts => run_context_list(store),
        ConfigAction::SetContext(args) => run_context_set(store, args),
        ConfigAction::UseContext(args) => run_context_use(store, &args.name),
        ConfigAction::DeleteContext(args) => run_context_delete(store, &args.name),
        ConfigAction::CurrentContext => run_context_show(store),
        ConfigAction::View => run_config_view(store),
    }
}

fn run_context_list(store: &ContextStore) -> CommandResult {
    let config = store.load()?;

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!("\nUse 'solctl config set-context <name> --url <url> --tenant <tenant>' to create one.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("URL"),
            Cell::new("TENANT"),
            Cell::new("TOKEN"),
        ]);

    for (name, ctx) in &config.contexts {
        let is_current = config.current_context.as_deref() == Some(name.as_str());
        table.add_row(vec![
            Cell::new(if is_current { "*" } else { "" }),
            Cell::new(name),
            Cell::new(&ctx.url),
            Cell::new(ctx.tenant.as_deref().unwrap_or("<not set>")),
            Cell::new(mask_token(ctx.token.as_deref())),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn run_context_show(store: &ContextStore) -> CommandResult {
    let config = store.load()?;

    let current_name = config.current_context.as_ref().ok_or_else(|| {
        PlatformError::Config(
            "No current context set. Use 'solctl config use-context <name>' to set one."
                .to_string(),
        )
    })?;

    let ctx = config.contexts.get(current_name).ok_or_else(|| {
        PlatformError::Config(format!(
            "Current context '{}' not found in config. Available: {}",
            current_name,
            config.available_names()
        ))
    })?;

    println!("Current context: {}", current_name);
    println!("  URL:    {}", ctx.url);
    println!("  Tenant: {}", ctx.tenant.as_deref().unwrap_or("<not set>"));
    println!("  Token:  {}", mask_token(ctx.token.as_deref()));

    Ok(())
}

/// Create a context, or merge the given fields into an existing one
fn run_context_set(store: &ContextStore, args: &SetContextArgs) -> CommandResult {
    let mut config = store.load()?;

    if let Some(existing) = config.contexts.get_mut(&args.name) {
        if let Some(url) = &args.url {
            existing.url = url.clone();
        }
        if args.tenant.is_some() {
            existing.tenant = args.tenant.clone();
        }
        if args.token.is_some() {
            existing.token = args.token.clone();
        }
        store.save(&config)?;
        println!("✓ Updated context '{}'", args.name);
        return Ok(());
    }

    let url = args.url.clone().ok_or_else(|| {
        PlatformError::Config(format!(
            "--url is required when creating a new context. Usage:\n  \
             solctl config set-context {} --url <URL> [--tenant <TENANT>] [--token <TOKEN>]",
            args.name
        ))
    })?;

    config.contexts.insert(
        args.name.clone(),
        Context {
            url,
            tenant: args.tenant.clone(),
            token: args.token.clone(),
        },
    );

    // The first context becomes current
    if config.contexts.len() == 1 {
        config.current_context = Some(args.name.clone());
    }

    store.save(&config)?;
    println!("✓ Created context '{}'", args.name);
    Ok(())
}

fn run_context_use(store: &ContextStore, name: &str) -> CommandResult {
    let mut config = store.load()?;

    if !config.contexts.contains_key(name) {
        return Err(PlatformError::Config(format!(
            "Context '{}' not found. Available contexts: {}",
            name,
            config.available_names()
        ))
        .into());
    }

    config.current_context = Some(name.to_string());
    store.save(&config)?;
    println!("✓ Switched to context '{}'", name);
    Ok(())
}

fn run_context_delete(store: &ContextStore, name: &str) -> CommandResult {
    let mut config = store.load()?;

    if config.contexts.remove(name).is_none() {
        return Err(PlatformError::Config(format!(
            "Context '{}' not found. Available contexts: {}",
            name,
            config.available_names()
        ))
        .into());
    }

    if config.current_context.as_deref() == Some(name) {
        config.current_context = None;
    }

    store.save(&config)?;
    println!("✓ Deleted context '{}'", name);
    Ok(())
}

fn run_config_view(store: &ContextStore) -> CommandResult {
    let mut config = store.load()?;
    for ctx in config.contexts.values_mut() {
        if ctx.token.is_some() {
            ctx.token = Some(mask_token(ctx.token.as_deref()));
        }
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Show only the last 4 characters of a token
fn mask_token(token: Option<&str>) -> String {
    match token {
        Some(t) => {
            let chars: Vec<char> = t.chars().collect();
            if chars.len() >= 4 {
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("****{}", tail)
            } else {
                "****".to_string()
            }
        }
        None => "<not set>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{DeleteContextArgs, UseContextArgs};
    use crate::context::models::ContextConfig;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> ContextStore {
        ContextStore::with_path(dir.path().join("config.json"))
    }

    fn set_args(name: &str, url: Option<&str>, tenant: Option<&str>) -> SetContextArgs {
        SetContextArgs {
            name: name.to_string(),
            url: url.map(str::to_string),
            tenant: tenant.map(str::to_string),
            token: None,
        }
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token(Some("abcdefghijklmnop")), "****mnop");
        assert_eq!(mask_token(Some("abcd")), "****abcd");
        assert_eq!(mask_token(Some("ab")), "****");
        assert_eq!(mask_token(None), "<not set>");
    }

    #[test]
    fn test_mask_token_multibyte() {
        assert_eq!(mask_token(Some("tökén€€")), "****én€€");
    }

    #[test]
    fn test_set_new_requires_url() {
        let dir = TempDir::new().unwrap();
        let result = run_context_set(&test_store(&dir), &set_args("prod", None, Some("acme")));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("--url is required"));
    }

    #[test]
    fn test_set_first_context_becomes_current() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        run_context_set(&store, &set_args("prod", Some("https://a.example.com"), Some("acme")))
            .unwrap();
        run_context_set(&store, &set_args("dev", Some("https://d.example.com"), None)).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.current_context.as_deref(), Some("prod"));
        assert_eq!(config.contexts.len(), 2);
        assert_eq!(config.contexts["prod"].tenant.as_deref(), Some("acme"));
    }

    #[test]
    fn test_set_existing_merges_fields() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        run_context_set(&store, &set_args("prod", Some("https://a.example.com"), Some("acme")))
            .unwrap();
        run_context_set(&store, &set_args("prod", None, Some("acme-eu"))).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.contexts["prod"].url, "https://a.example.com");
        assert_eq!(config.contexts["prod"].tenant.as_deref(), Some("acme-eu"));
    }

    #[test]
    fn test_use_and_delete() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        run_context_set(&store, &set_args("prod", Some("https://a.example.com"), None)).unwrap();
        run_context_set(&store, &set_args("dev", Some("https://d.example.com"), None)).unwrap();

        run_with_store(
            &store,
            &ConfigAction::UseContext(UseContextArgs {
                name: "dev".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(store.load().unwrap().current_context.as_deref(), Some("dev"));

        run_with_store(
            &store,
            &ConfigAction::DeleteContext(DeleteContextArgs {
                name: "dev".to_string(),
            }),
        )
        .unwrap();
        let config = store.load().unwrap();
        assert!(config.current_context.is_none());
        assert_eq!(config.contexts.len(), 1);
    }

    #[test]
    fn test_delete_keeps_other_current() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        run_context_set(&store, &set_args("prod", Some("https://a.example.com"), None)).unwrap();
        run_context_set(&store, &set_args("dev", Some("https://d.example.com"), None)).unwrap();

        run_context_delete(&store, "dev").unwrap();
        assert_eq!(store.load().unwrap().current_context.as_deref(), Some("prod"));
    }

    #[test]
    fn test_use_or_delete_unknown_errors() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        assert!(run_context_use(&store, "missing")
            .unwrap_err()
            .to_string()
            .contains("not found"));
        assert!(run_context_delete(&store, "missing").is_err());
    }

    #[test]
    fn test_show_without_current_errors() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.save(&ContextConfig::default()).unwrap();
        let err = run_context_show(&store).unwrap_err().to_string();
        assert!(err.contains("No current context"));
    }

    #[test]
    fn test_list_and_view_do_not_fail() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        run_context_list(&store).unwrap();
        run_context_set(&store, &set_args("prod", Some("https://a.example.com"), None)).unwrap();
        run_context_list(&store).unwrap();
        run_config_view(&store).unwrap();
    }
}
