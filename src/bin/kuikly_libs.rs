//! CLI for the catalog mirror: one sync operation and three queries.
//!
//! Usage:
//!   kuikly-libs sync [--force] [--url URL]
//!   kuikly-libs list
//!   kuikly-libs search <keyword>
//!   kuikly-libs get <component-name>
//!
//! Every command exits 0 on success and 1 on any failure, including a `get`
//! that matches nothing. An empty `list` or `search` result is a success.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use kuikly_libs::render::{render_details, render_list, render_search};
use kuikly_libs::{
    GitCli, SyncController, SyncOutcome, get_by_name, list_all, load_catalog, resolve_catalog_path,
    resolve_mirror_root, resolve_remote_url, search,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kuikly-libs")]
#[command(about = "Mirror the KuiklyUI third-party component catalog and query it")]
struct Cli {
    /// Mirror root directory (or set KUIKLY_LIBS_ROOT). Defaults to the
    /// current directory.
    #[arg(long, global = true)]
    root: Option<PathBuf>,
    /// Explicit catalog file path (or set KUIKLY_LIBS_CATALOG_PATH).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clone the catalog repository if absent, pull if stale.
    Sync {
        /// Pull regardless of how recently the checkout was updated.
        #[arg(long)]
        force: bool,
        /// Remote repository URL (or set KUIKLY_LIBS_REMOTE_URL).
        #[arg(long)]
        url: Option<String>,
    },
    /// List every component in the catalog.
    List,
    /// Search components by keyword in name or description.
    Search { keyword: String },
    /// Show details for one component, looked up by name.
    Get { name: String },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = resolve_mirror_root(cli.root.as_deref());
    let catalog_override = cli.catalog;

    match cli.command {
        Command::Sync { force, url } => {
            let url = resolve_remote_url(url);
            let checkout = kuikly_libs::default_checkout_path(&root, &url);
            let controller = SyncController::new(GitCli::new());
            match controller.ensure_synced(&url, &checkout, force)? {
                SyncOutcome::Cloned => {
                    println!("Repository cloned into {}", checkout.display());
                }
                SyncOutcome::Pulled => {
                    println!("Repository updated at {}", checkout.display());
                }
                SyncOutcome::FreshEnough => {
                    println!("Repository already fresh at {}", checkout.display());
                }
            }
        }
        Command::List => {
            let records = load_records(catalog_override.as_deref(), &root)?;
            println!("{}", render_list(&list_all(&records)));
        }
        Command::Search { keyword } => {
            let records = load_records(catalog_override.as_deref(), &root)?;
            println!("{}", render_search(&keyword, &search(&records, &keyword)));
        }
        Command::Get { name } => {
            let records = load_records(catalog_override.as_deref(), &root)?;
            let Some(record) = get_by_name(&records, &name) else {
                bail!("component '{name}' not found in the catalog");
            };
            println!("{}", render_details(record));
            // Trailing line kept machine-parseable for scripted callers.
            println!();
            println!("GitHub_URL: {}", record.github_url.as_deref().unwrap_or(""));
        }
    }

    Ok(())
}

fn load_records(
    catalog_override: Option<&Path>,
    root: &Path,
) -> Result<Vec<kuikly_libs::ComponentRecord>> {
    let url = resolve_remote_url(None);
    let catalog_path = resolve_catalog_path(root, catalog_override, &url);
    Ok(load_catalog(&catalog_path)?)
}
