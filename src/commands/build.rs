//! Build and check command handlers
//!
//! Both share the staleness-gated rebuild path; they differ only in which
//! artifact they refresh and which compile mode runs.

use std::path::Path;

use anyhow::Result;

use ligmake::{BuildOutcome, CliOverrides, Orchestrator};

use super::{print_context, setup};

/// Execute the build command: up-to-date release artifact.
pub fn cmd_build(project: &Path, json: bool, verbose: u8) -> Result<()> {
    run_refresh(project, json, verbose, "build", |o| o.build())
}

/// Execute the check command: up-to-date debug artifact.
pub fn cmd_check(project: &Path, json: bool, verbose: u8) -> Result<()> {
    run_refresh(project, json, verbose, "check", |o| o.check())
}

fn run_refresh(
    project: &Path,
    json: bool,
    verbose: u8,
    name: &str,
    refresh: impl FnOnce(
        &Orchestrator<ligmake::CargoToolchain>,
    ) -> ligmake::LigmakeResult<BuildOutcome>,
) -> Result<()> {
    let (config, toolchain) = setup(project, &CliOverrides::default())?;
    if !json {
        print_context(&config, verbose);
    }

    let artifact = match name {
        "check" => config.debug_artifact(),
        _ => config.release_artifact(),
    };

    let orchestrator = Orchestrator::new(&config, toolchain);
    let outcome = refresh(&orchestrator)?;

    if json {
        let event = serde_json::json!({
            "type": format!("{name}_complete"),
            "outcome": match outcome {
                BuildOutcome::Rebuilt => "rebuilt",
                BuildOutcome::UpToDate => "up_to_date",
            },
            "artifact": artifact.display().to_string(),
        });
        println!("{event}");
    } else {
        match outcome {
            BuildOutcome::Rebuilt => println!("✓ Built {}", artifact.display()),
            BuildOutcome::UpToDate => println!("✓ {} is up to date", artifact.display()),
        }
    }

    Ok(())
}
