//! Install and uninstall command handlers

use std::path::Path;

use anyhow::Result;

use ligmake::{CliOverrides, Orchestrator, UninstallOutcome};

use super::{print_context, setup};

/// Execute the install command: build, then copy the release artifact to
/// `${DESTDIR}${PREFIX}/bin` with mode 755.
pub fn cmd_install(project: &Path, cli: &CliOverrides, json: bool, verbose: u8) -> Result<()> {
    let (config, toolchain) = setup(project, cli)?;
    if !json {
        print_context(&config, verbose);
    }

    let orchestrator = Orchestrator::new(&config, toolchain);
    let dest = orchestrator.install()?;

    if json {
        let event = serde_json::json!({
            "type": "install_complete",
            "path": dest.display().to_string(),
        });
        println!("{event}");
    } else {
        println!("✓ Installed {}", dest.display());
    }

    Ok(())
}

/// Execute the uninstall command. A second run is a successful no-op.
pub fn cmd_uninstall(project: &Path, cli: &CliOverrides, json: bool, verbose: u8) -> Result<()> {
    let (config, toolchain) = setup(project, cli)?;
    if !json {
        print_context(&config, verbose);
    }

    let dest = config.installed_artifact();
    let orchestrator = Orchestrator::new(&config, toolchain);
    let outcome = orchestrator.uninstall()?;

    if json {
        let event = serde_json::json!({
            "type": "uninstall_complete",
            "path": dest.display().to_string(),
            "removed": outcome == UninstallOutcome::Removed,
        });
        println!("{event}");
    } else {
        match outcome {
            UninstallOutcome::Removed => println!("✓ Removed {}", dest.display()),
            UninstallOutcome::AlreadyAbsent => {
                println!("✓ Nothing to remove at {}", dest.display())
            }
        }
    }

    Ok(())
}
