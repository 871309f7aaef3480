//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nexus_domain::HttpMethod;
use nexus_domain::request::parse_header_line;

#[derive(Parser, Debug)]
#[command(
    name = "nexus",
    version,
    about = "HTTP request workbench",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Workspace snapshot file (overrides the settings)
    #[arg(long, global = true, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send an ad-hoc URL or a saved request
    Send(SendArgs),

    /// List or edit environments
    #[command(visible_alias = "envs")]
    Env {
        #[command(subcommand)]
        action: Option<EnvAction>,
    },

    /// List or edit collections
    #[command(visible_alias = "collections")]
    Collection {
        #[command(subcommand)]
        action: Option<CollectionAction>,
    },

    /// Show executed requests, newest first
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// URL template, or the id or name of a saved request
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// HTTP method
    #[arg(short = 'X', long)]
    pub method: Option<HttpMethod>,

    /// Header as "Name: value" (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header_line)]
    pub headers: Vec<(String, String)>,

    /// Request body template
    #[arg(short = 'd', long)]
    pub body: Option<String>,

    /// Environment to resolve against for this call only
    #[arg(short, long, conflicts_with = "no_env")]
    pub env: Option<String>,

    /// Send the templates literally
    #[arg(long)]
    pub no_env: bool,

    /// Save the request into this collection after sending
    #[arg(long, value_name = "COLLECTION")]
    pub save: Option<String>,

    /// Print response headers
    #[arg(short, long)]
    pub include: bool,
}

#[derive(Subcommand, Debug)]
pub enum EnvAction {
    /// List environments and their variables
    List,
    /// Make an environment active
    Use { id: String },
    /// Deactivate interpolation
    Clear,
    /// Add an environment (replaces one with the same id)
    Add { id: String, name: String },
    /// Rename an environment
    Rename { id: String, name: String },
    /// Set a variable
    Set {
        env: String,
        key: String,
        value: String,
    },
    /// Remove a variable
    Unset { env: String, key: String },
}

#[derive(Subcommand, Debug)]
pub enum CollectionAction {
    /// List collections and their saved requests
    List,
    /// Create a collection and make it the save target
    Create { name: String },
    /// Make a collection the save target
    Use { name: String },
    /// Rename a collection
    Rename { old: String, new: String },
    /// Delete a collection and its saved requests
    Delete { name: String },
    /// Remove one saved request, by id or name
    Remove { request: String },
}
