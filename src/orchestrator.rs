//! Build orchestration
//!
//! Maps the declared targets (debug binary, release binary, installed
//! binary, test run, clean) onto toolchain invocations, rebuilding only
//! when an artifact is stale. Targets form a strict sequential chain:
//! install does not start until the release build has exited successfully.

use std::path::{Path, PathBuf};

use crate::artifact::{self, ArtifactGuard};
use crate::config::BuildConfig;
use crate::error::LigmakeResult;
use crate::staleness::target_is_current;
use crate::toolchain::Toolchain;

/// What a build-style operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Artifact was stale (or absent) and was rebuilt.
    Rebuilt,
    /// Artifact was already newer than every input; nothing ran.
    UpToDate,
}

/// What uninstall did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    Removed,
    /// The file was already absent; still success.
    AlreadyAbsent,
}

/// Sequences toolchain invocations for one project.
pub struct Orchestrator<'a, T: Toolchain> {
    config: &'a BuildConfig,
    toolchain: T,
}

impl<'a, T: Toolchain> Orchestrator<'a, T> {
    pub fn new(config: &'a BuildConfig, toolchain: T) -> Self {
        Self { config, toolchain }
    }

    /// Ensure the release artifact exists and is newer than all inputs.
    pub fn build(&self) -> LigmakeResult<BuildOutcome> {
        let target = self.config.release_artifact();
        self.refresh(&target, |t| t.compile_release())
    }

    /// Ensure the debug artifact exists and is newer than all inputs.
    ///
    /// Independent artifact path from `build`; the two never collide.
    pub fn check(&self) -> LigmakeResult<BuildOutcome> {
        let target = self.config.debug_artifact();
        self.refresh(&target, |t| t.compile_debug())
    }

    /// Build, then copy the release artifact to the configured install path.
    pub fn install(&self) -> LigmakeResult<PathBuf> {
        self.build()?;
        let dest = self.config.installed_artifact();
        artifact::install_file(&self.config.release_artifact(), &dest)?;
        Ok(dest)
    }

    /// Remove the installed artifact. Already-absent is success.
    pub fn uninstall(&self) -> LigmakeResult<UninstallOutcome> {
        let removed = artifact::uninstall_file(&self.config.installed_artifact())?;
        Ok(if removed {
            UninstallOutcome::Removed
        } else {
            UninstallOutcome::AlreadyAbsent
        })
    }

    /// Run the full test suite. Never gated on artifact staleness.
    pub fn test(&self) -> LigmakeResult<()> {
        self.toolchain.run_tests()
    }

    /// Delegate artifact-cache removal to the toolchain.
    pub fn clean(&self) -> LigmakeResult<()> {
        self.toolchain.clean_cache()
    }

    /// Rebuild `target` via `compile` iff it is stale.
    ///
    /// The guard enforces atomic-or-absent: a failed compile leaves the
    /// target either untouched or removed, never partial.
    fn refresh(
        &self,
        target: &Path,
        compile: impl FnOnce(&T) -> LigmakeResult<()>,
    ) -> LigmakeResult<BuildOutcome> {
        if target_is_current(self.config, target)? {
            return Ok(BuildOutcome::UpToDate);
        }

        let guard = ArtifactGuard::arm(target);
        compile(&self.toolchain)?;
        guard.complete();

        Ok(BuildOutcome::Rebuilt)
    }
}
