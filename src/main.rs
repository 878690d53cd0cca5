//! ligmake CLI - build, install, and test orchestrator for ligrust
//!
//! Usage: ligmake <COMMAND>
//!
//! Commands:
//!   build (all)  Produce an up-to-date release artifact
//!   check        Produce an up-to-date debug artifact
//!   install      Build, then copy the release artifact to ${DESTDIR}${PREFIX}/bin
//!   uninstall    Remove the installed artifact
//!   test         Run the full test suite
//!   clean        Delegate artifact-cache removal to the toolchain

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use ligmake::{CliOverrides, LigmakeError};

fn main() {
    let cli = Cli::parse();

    // An interrupt mid-compile must not leave a partial artifact at its
    // canonical path. Exit code follows the shell convention for SIGINT.
    ctrlc::set_handler(|| {
        ligmake::artifact::discard_in_flight();
        std::process::exit(130);
    })
    .expect("Error setting Ctrl+C handler");

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<LigmakeError>()
            .map(LigmakeError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build { project } => commands::cmd_build(&project.project, cli.json, cli.verbose),
        Commands::Check { project } => commands::cmd_check(&project.project, cli.json, cli.verbose),
        Commands::Install { project, install } => {
            let overrides = CliOverrides {
                prefix: install.prefix,
                destdir: install.destdir,
            };
            commands::cmd_install(&project.project, &overrides, cli.json, cli.verbose)
        }
        Commands::Uninstall { project, install } => {
            let overrides = CliOverrides {
                prefix: install.prefix,
                destdir: install.destdir,
            };
            commands::cmd_uninstall(&project.project, &overrides, cli.json, cli.verbose)
        }
        Commands::Test { project } => commands::cmd_test(&project.project, cli.json),
        Commands::Clean { project } => commands::cmd_clean(&project.project, cli.json),
    }
}
