//! Artifact placement and cleanup
//!
//! Two guarantees live here:
//!
//! - atomic-or-absent builds: a failed or interrupted toolchain invocation
//!   must not leave a partial artifact reachable at its canonical path, so a
//!   retry can never mistake a corrupt binary for "up to date";
//! - atomic installs: the installed binary appears at its final path in one
//!   rename, never half-copied.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;

use crate::error::{LigmakeError, LigmakeResult};
use crate::staleness::mtime;

/// State of an artifact path before a compile started.
#[derive(Debug, Clone)]
struct InFlight {
    path: PathBuf,
    prior_mtime: Option<SystemTime>,
}

impl InFlight {
    /// Remove the artifact if the failed compile touched it.
    ///
    /// An artifact that was absent before and exists now, or whose mtime
    /// moved, is a partial output and gets deleted. An untouched
    /// pre-existing artifact is left alone (it is merely stale).
    fn discard_partial(&self) {
        let current = mtime(&self.path);
        let touched = match (self.prior_mtime, current) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(prior), Some(current)) => current != prior,
        };
        if touched {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// The artifact currently being produced, if any. The interrupt handler
/// consults this to clean up before the process dies.
static IN_FLIGHT: Mutex<Option<InFlight>> = Mutex::new(None);

/// Discard any partially written artifact from an interrupted compile.
///
/// Called from the Ctrl+C handler; also a no-op when nothing is in flight.
pub fn discard_in_flight() {
    if let Ok(mut slot) = IN_FLIGHT.lock() {
        if let Some(in_flight) = slot.take() {
            in_flight.discard_partial();
        }
    }
}

/// RAII guard around one compile of `path`.
///
/// Snapshot the artifact's state on arm; on drop without [`complete`], treat
/// the compile as failed and discard any partial output.
///
/// [`complete`]: ArtifactGuard::complete
pub struct ArtifactGuard {
    in_flight: InFlight,
    completed: bool,
}

impl ArtifactGuard {
    pub fn arm(path: &Path) -> Self {
        let in_flight = InFlight {
            path: path.to_path_buf(),
            prior_mtime: mtime(path),
        };
        if let Ok(mut slot) = IN_FLIGHT.lock() {
            *slot = Some(in_flight.clone());
        }
        Self {
            in_flight,
            completed: false,
        }
    }

    /// Mark the compile as successful; the artifact stays.
    pub fn complete(mut self) {
        self.completed = true;
    }
}

impl Drop for ArtifactGuard {
    fn drop(&mut self) {
        if let Ok(mut slot) = IN_FLIGHT.lock() {
            *slot = None;
        }
        if !self.completed {
            self.in_flight.discard_partial();
        }
    }
}

/// Copy the release artifact to `dest` with mode 755, atomically.
///
/// The copy lands in a temp file in the destination directory and is
/// renamed into place, so a crash mid-copy never leaves a truncated
/// binary at `dest`.
pub fn install_file(artifact: &Path, dest: &Path) -> LigmakeResult<()> {
    if !artifact.is_file() {
        return Err(LigmakeError::MissingArtifact {
            path: artifact.to_path_buf(),
        });
    }

    let dest_dir = dest.parent().ok_or_else(|| {
        std::io::Error::other(format!("install path has no parent: {}", dest.display()))
    })?;
    fs::create_dir_all(dest_dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dest_dir)?;
    let mut src = fs::File::open(artifact)?;
    std::io::copy(&mut src, tmp.as_file_mut())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file().set_permissions(fs::Permissions::from_mode(0o755))?;
    }

    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

/// Remove the installed artifact; a file that is already absent is success.
///
/// Returns whether a file was actually removed.
pub fn uninstall_file(dest: &Path) -> LigmakeResult<bool> {
    match fs::remove_file(dest) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
