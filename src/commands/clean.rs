//! Clean command handler
//!
//! The orchestrator holds no knowledge of what gets deleted; cache removal
//! is entirely the toolchain's business.

use std::path::Path;

use anyhow::Result;

use ligmake::{CliOverrides, Orchestrator};

use super::setup;

/// Execute the clean command.
pub fn cmd_clean(project: &Path, json: bool) -> Result<()> {
    let (config, toolchain) = setup(project, &CliOverrides::default())?;

    let orchestrator = Orchestrator::new(&config, toolchain);
    orchestrator.clean()?;

    if json {
        println!(r#"{{"type":"clean_complete"}}"#);
    } else {
        println!("✓ Cleaned build artifacts");
    }

    Ok(())
}
