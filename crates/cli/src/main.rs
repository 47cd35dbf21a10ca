use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;
mod prompts;

/// spinver - manage side-by-side versions of the spin CLI
#[derive(Parser)]
#[command(name = "spinver")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Switch to the requested version, downloading it first if needed.
  ///
  /// With no argument the version is read from a .spinrc file in the
  /// working directory. "latest" resolves to the newest stable release.
  Set {
    /// Version to activate (e.g. 2.1.0, v2.1.0, canary, custom, latest)
    version: Option<String>,
  },

  /// Download versions without activating them
  ///
  /// Multiple versions can be fetched at once: "spinver get 2.1.0 canary".
  Get {
    /// Versions to download (falls back to .spinrc when empty)
    versions: Vec<String>,
  },

  /// List locally installed versions and aliases
  #[command(visible_alias = "ls")]
  List {
    /// Print the entries as a JSON array
    #[arg(long)]
    json: bool,
  },

  /// List versions available upstream
  #[command(name = "list-remote", visible_alias = "ls-remote")]
  ListRemote,

  /// Remove an installed version, an alias, "current", or "all"
  #[command(visible_alias = "rm")]
  Remove {
    /// Version or alias to remove; "current" drops the active pointer,
    /// "all" wipes the whole store
    target: String,

    /// Skip the confirmation prompt for "all"
    #[arg(short, long)]
    yes: bool,
  },

  /// Create an alias for a local spin binary
  Alias {
    /// Alias name ("custom" registers the custom override)
    name: String,

    /// Absolute path to the binary
    path: PathBuf,
  },

  /// Refresh locally cached builds
  Update {
    #[command(subcommand)]
    target: UpdateTarget,
  },
}

#[derive(Subcommand)]
enum UpdateTarget {
  /// Re-download the canary build, replacing the local copy
  Canary,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Set { version } => cmd::cmd_set(version),
    Commands::Get { versions } => cmd::cmd_get(versions),
    Commands::List { json } => cmd::cmd_list(json),
    Commands::ListRemote => cmd::cmd_list_remote(),
    Commands::Remove { target, yes } => cmd::cmd_remove(&target, yes),
    Commands::Alias { name, path } => cmd::cmd_alias(&name, &path),
    Commands::Update {
      target: UpdateTarget::Canary,
    } => cmd::cmd_update_canary(),
  }
}
