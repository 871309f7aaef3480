//! Command handlers. Each one drives the workspace and prints the result.

use anyhow::{Context, Result, bail};
use nexus_application::Workspace;
use nexus_domain::{Environment, RequestPatch, Response, UNCATEGORIZED};
use tracing::info;

use crate::cli::{CollectionAction, Command, EnvAction, SendArgs};

/// Runs one command. Returns `false` when a request ended in a network error.
pub async fn run(command: Command, workspace: &Workspace) -> Result<bool> {
    match command {
        Command::Send(args) => send(workspace, args).await,
        Command::Env { action } => {
            env(workspace, action.unwrap_or(EnvAction::List))?;
            Ok(true)
        }
        Command::Collection { action } => {
            collection(workspace, action.unwrap_or(CollectionAction::List))?;
            Ok(true)
        }
        Command::History { limit } => {
            history(workspace, limit);
            Ok(true)
        }
    }
}

async fn send(workspace: &Workspace, args: SendArgs) -> Result<bool> {
    let tab_id = if let Some(saved) = workspace.find_saved(&args.target) {
        info!(request = %saved.name, "opening saved request");
        workspace.open_request(&saved)
    } else {
        workspace.add_tab(Some(RequestPatch {
            name: Some(args.target.clone()),
            url: Some(args.target.clone()),
            ..RequestPatch::default()
        }))
    };

    workspace.update_request(
        &tab_id,
        RequestPatch {
            method: args.method,
            body: args.body,
            ..RequestPatch::default()
        },
    );
    for (key, value) in &args.headers {
        workspace.set_header(&tab_id, key, value);
    }

    let previous_env = workspace.active_environment().map(|e| e.id);
    if args.no_env {
        workspace.set_active_environment(None);
    } else if let Some(env_id) = &args.env {
        require_environment(workspace, env_id)?;
        workspace.set_active_environment(Some(env_id));
    }

    let response = workspace
        .send(&tab_id)
        .await
        .context("tab closed before the request was sent")?;
    workspace.set_active_environment(previous_env.as_deref());

    if let Some(collection) = &args.save {
        if let Some(saved) = workspace.save_tab(&tab_id, collection) {
            println!(
                "Saved \"{}\" to {}",
                saved.name,
                saved.collection.as_deref().unwrap_or(UNCATEGORIZED)
            );
        }
    }

    print_response(&response, args.include);
    Ok(!response.is_network_error())
}

fn print_response(response: &Response, include_headers: bool) {
    if let Some(message) = response.error_message() {
        eprintln!("error: {message}");
    }
    println!(
        "{} {} ({} ms, {} bytes)",
        response.status, response.status_text, response.time, response.size
    );
    if include_headers {
        for (name, value) in &response.headers {
            println!("{name}: {value}");
        }
    }
    if !response.is_network_error() {
        println!();
        println!("{}", response.data.to_display_string());
    }
}

fn env(workspace: &Workspace, action: EnvAction) -> Result<()> {
    match action {
        EnvAction::List => {
            let active = workspace.active_environment().map(|e| e.id);
            for environment in workspace.environments() {
                let marker = if active.as_deref() == Some(environment.id.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {} ({})", environment.id, environment.name);
                for (key, value) in &environment.variables {
                    println!("    {key} = {value}");
                }
            }
            if active.is_none() {
                println!("(no active environment)");
            }
        }
        EnvAction::Use { id } => {
            require_environment(workspace, &id)?;
            workspace.set_active_environment(Some(&id));
        }
        EnvAction::Clear => workspace.set_active_environment(None),
        EnvAction::Add { id, name } => {
            workspace.add_environment(Environment::with_id(id, name));
        }
        EnvAction::Rename { id, name } => {
            require_environment(workspace, &id)?;
            workspace.rename_environment(&id, &name);
        }
        EnvAction::Set { env, key, value } => {
            require_environment(workspace, &env)?;
            workspace.update_variable(&env, &key, &value);
        }
        EnvAction::Unset { env, key } => {
            require_environment(workspace, &env)?;
            workspace.delete_variable(&env, &key);
        }
    }
    Ok(())
}

fn require_environment(workspace: &Workspace, id: &str) -> Result<()> {
    if workspace.environments().iter().any(|e| e.id == id) {
        Ok(())
    } else {
        bail!("unknown environment: {id}")
    }
}

fn collection(workspace: &Workspace, action: CollectionAction) -> Result<()> {
    match action {
        CollectionAction::List => {
            let active = workspace.active_collection();
            let grouped = workspace.grouped_collections();

            let mut names = workspace.collection_names();
            if grouped.contains_key(UNCATEGORIZED) {
                names.push(UNCATEGORIZED.to_string());
            }
            for name in names {
                let marker = if name == active { "*" } else { " " };
                let requests = grouped.get(&name).map_or(&[][..], Vec::as_slice);
                println!("{marker} {name} ({})", requests.len());
                for request in requests {
                    println!("    {:<6} {}  [{}]", request.method.as_str(), request.url, request.id);
                }
            }
        }
        CollectionAction::Create { name } => workspace.create_collection(&name),
        CollectionAction::Use { name } => workspace.set_active_collection(&name),
        CollectionAction::Rename { old, new } => workspace.rename_collection(&old, &new),
        CollectionAction::Delete { name } => {
            if name == nexus_domain::DEFAULT_COLLECTION {
                bail!("the {name} collection cannot be deleted");
            }
            workspace.delete_collection(&name);
        }
        CollectionAction::Remove { request } => {
            let saved = workspace
                .find_saved(&request)
                .with_context(|| format!("no saved request named {request}"))?;
            workspace.delete_from_collection(&saved.id);
        }
    }
    Ok(())
}

fn history(workspace: &Workspace, limit: usize) {
    for entry in workspace.history().iter().take(limit) {
        println!(
            "{}  {:<6} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.request.method.as_str(),
            entry.label()
        );
    }
}
