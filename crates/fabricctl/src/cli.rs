//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap; execution lives in `commands`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// FABRIC slice provisioning CLI
#[derive(Parser)]
#[command(name = "fabricctl")]
#[command(about = "Provision and inspect slices on a FABRIC testbed", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Slice lifecycle operations
    Slice {
        #[command(subcommand)]
        action: SliceCommands,
    },

    /// List resources advertised by the testbed
    Resources(ResourcesArgs),
}

#[derive(Subcommand)]
pub enum SliceCommands {
    /// Create a slice from a topology file or a canned preset
    Create {
        /// Slice name
        #[arg(long)]
        name: String,

        /// Topology description file (TOML with [[nodes]] and [[links]])
        #[arg(long, conflicts_with = "preset")]
        file: Option<PathBuf>,

        /// Canned topology: "linear:N", "star:N", or "multisite:N"
        #[arg(long)]
        preset: Option<String>,

        /// Site code for preset topologies (repeatable; multisite uses all)
        #[arg(long = "site")]
        sites: Vec<String>,

        /// Lease end time (RFC 3339); defaults to 24 hours from now
        #[arg(long)]
        lease_end: Option<String>,

        /// SSH public key to install on the nodes (repeatable)
        #[arg(long = "ssh-key")]
        ssh_keys: Vec<String>,
    },

    /// Show a slice's current state
    Show {
        /// Slice id
        id: String,
    },

    /// Delete a slice (succeeds even if it is already gone)
    Delete {
        /// Slice id
        id: String,
    },
}

#[derive(Args)]
pub struct ResourcesArgs {
    /// Detail level requested from the orchestrator
    #[arg(long)]
    pub level: Option<i32>,

    /// Site to include (repeatable)
    #[arg(long = "include")]
    pub includes: Vec<String>,

    /// Site to exclude (repeatable)
    #[arg(long = "exclude")]
    pub excludes: Vec<String>,

    /// Print the raw models as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_accepts_repeatable_sites_and_keys() {
        let cli = Cli::parse_from([
            "fabricctl", "slice", "create", "--name", "demo", "--preset", "multisite:2",
            "--site", "CLEM", "--site", "TACC", "--ssh-key", "ssh-ed25519 AAAA",
        ]);
        match cli.command {
            Commands::Slice {
                action:
                    SliceCommands::Create {
                        name,
                        sites,
                        ssh_keys,
                        ..
                    },
            } => {
                assert_eq!(name, "demo");
                assert_eq!(sites, ["CLEM", "TACC"]);
                assert_eq!(ssh_keys.len(), 1);
            }
            _ => panic!("parsed into the wrong command"),
        }
    }
}
