//! sc - session context CLI
//!
//! Inspects and updates the locally cached session: the auth token, the
//! user record, and the active tenant.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and cache a user record
//! sc login --user-id u1 --name Alice
//!
//! # Show the current session
//! sc session show --pretty
//!
//! # Switch the active tenant
//! sc tenant set --id t2 --name Acme
//! ```

mod cli;
mod commands;
mod error;
mod logger;


use crate::cli::Cli;
use crate::commands::{Commands, SessionCommands, TenantCommands};
use crate::error::Result;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use sc_config::Config;
use sc_core::{StoredUser, Tenant};
use sc_session::{SessionAccessor, StoredCredentials};
use sc_storage::{FileStore, KeyValueStore, keys};
use serde_json::json;
use uuid::Uuid;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;
    logger::initialize(config.logging.level, std::io::stderr().is_terminal())?;

    let store = FileStore::open(config.storage_dir()?)?;
    debug!("Using session store at {:?}", store.dir());

    match cli.command {
        Commands::Login {
            user_id,
            name,
            email,
        } => login(&store, user_id, name, email),
        Commands::Logout => logout(&store),
        Commands::Session {
            action: SessionCommands::Show { pretty },
        } => show_session(store, pretty),
        Commands::Tenant {
            action: TenantCommands::Set { id, name },
        } => set_tenant(store, id, name),
    }
}

fn login(
    store: &FileStore,
    user_id: String,
    name: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let user = StoredUser::new(user_id, name, email);
    store.set(keys::USER_KEY, &serde_json::to_string(&user)?)?;
    store.set(keys::AUTH_TOKEN_KEY, &Uuid::new_v4().to_string())?;

    println!("Logged in as {}", user.id);
    Ok(())
}

fn logout(store: &FileStore) -> Result<()> {
    // An empty token reads as "not authenticated"; cached records stay put.
    store.set(keys::AUTH_TOKEN_KEY, "")?;

    println!("Logged out");
    Ok(())
}

fn show_session(store: FileStore, pretty: bool) -> Result<()> {
    let mut accessor = SessionAccessor::new(StoredCredentials::new(store.clone()), store);
    accessor.initialize();

    let output = json!({
        "authenticated": accessor.is_authenticated(),
        "loading": accessor.is_loading(),
        "user": accessor.user(),
        "tenant": accessor.tenant(),
    });

    let rendered = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

fn set_tenant(store: FileStore, id: String, name: Option<String>) -> Result<()> {
    let mut accessor = SessionAccessor::new(StoredCredentials::new(store.clone()), store);
    accessor.initialize();

    let tenant = Tenant { id, name };
    let tenant_id = tenant.id.clone();
    accessor.update_tenant(tenant)?;

    println!("Active tenant set to {tenant_id}");
    Ok(())
}
