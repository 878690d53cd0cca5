use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// ligmake - build, install, and test orchestrator for ligrust
#[derive(Parser, Debug)]
#[command(name = "ligmake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output line-delimited JSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every target.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Path to the project root (contains Cargo.toml)
    #[arg(short = 'C', long, default_value = ".")]
    pub project: PathBuf,
}

/// Install-path flags; override DESTDIR/PREFIX from the environment.
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Installation root (default /usr/local)
    #[arg(long)]
    pub prefix: Option<PathBuf>,

    /// Staged-install root prepended to the prefix
    #[arg(long)]
    pub destdir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Produce an up-to-date release artifact
    #[command(alias = "all")]
    Build {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Produce an up-to-date debug artifact (fast iteration)
    Check {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Build, then copy the release artifact to ${DESTDIR}${PREFIX}/bin
    Install {
        #[command(flatten)]
        project: ProjectArgs,

        #[command(flatten)]
        install: InstallArgs,
    },

    /// Remove the installed artifact (success even if already absent)
    Uninstall {
        #[command(flatten)]
        project: ProjectArgs,

        #[command(flatten)]
        install: InstallArgs,
    },

    /// Run the full test suite (all members, targets, and features)
    Test {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Delegate artifact-cache removal to the toolchain
    Clean {
        #[command(flatten)]
        project: ProjectArgs,
    },
}
