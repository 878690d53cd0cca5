//! Command handlers for the ligmake CLI
//!
//! Each handler resolves configuration, wires the orchestrator to the real
//! cargo toolchain, and renders the result (human or line-delimited JSON).

mod build;
mod clean;
mod install;

pub use build::{cmd_build, cmd_check};
pub use clean::cmd_clean;
pub use install::{cmd_install, cmd_uninstall};
pub use test::cmd_test;

use std::path::Path;

use ligmake::{BuildConfig, CargoToolchain, CliOverrides, EnvOverrides, LigmakeResult};

/// Resolve config and the real toolchain for a command invocation.
fn setup(project: &Path, cli: &CliOverrides) -> LigmakeResult<(BuildConfig, CargoToolchain)> {
    // Environment is read here, once, and nowhere else.
    let env = EnvOverrides::capture();
    let config = BuildConfig::resolve(project, cli, &env)?;
    let toolchain = CargoToolchain::new(&config.project_root);
    Ok((config, toolchain))
}

/// Print resolved paths when running verbose.
fn print_context(config: &BuildConfig, verbose: u8) {
    if verbose > 0 {
        println!("Project: {}", config.project_root.display());
        println!("Release artifact: {}", config.release_artifact().display());
        println!("Install path: {}", config.installed_artifact().display());
    }
}
