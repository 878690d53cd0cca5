//! Timestamp-based staleness detection
//!
//! A target is current iff it exists and its mtime is at least the mtime of
//! every declared input: the manifest, the lock file, and every file under
//! the source tree (re-enumerated on each invocation, never cached).
//!
//! This is a pure function of filesystem state. No hashing, no content
//! comparison: a touched-but-unchanged file triggers a rebuild. That false
//! positive is inherent to the scheme and accepted.

use std::path::Path;
use std::time::SystemTime;

use ignore::WalkBuilder;

use crate::config::BuildConfig;
use crate::error::{LigmakeError, LigmakeResult};

/// Decide whether a target is current given explicit timestamps.
///
/// `target` is `None` when the artifact does not exist. Inputs with equal
/// timestamps do not trigger a rebuild; only strictly newer inputs do.
pub fn is_current(target: Option<SystemTime>, inputs: &[SystemTime]) -> bool {
    match target {
        None => false,
        Some(target) => inputs.iter().all(|input| *input <= target),
    }
}

/// Modification time of a path, or `None` if it does not exist.
pub fn mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Enumerate the mtimes of all declared inputs for this project.
///
/// The manifest must exist; a missing lock file simply contributes no
/// timestamp (the toolchain will create it on first build).
pub fn collect_input_mtimes(config: &BuildConfig) -> LigmakeResult<Vec<SystemTime>> {
    let manifest = config.manifest_path();
    let mut mtimes = vec![mtime(&manifest).ok_or_else(|| LigmakeError::ManifestNotFound {
        path: manifest.clone(),
    })?];

    if let Some(lock) = mtime(&config.lock_path()) {
        mtimes.push(lock);
    }

    let source_dir = config.source_dir();
    if !source_dir.is_dir() {
        return Err(LigmakeError::SourceDirNotFound { path: source_dir });
    }

    // Standard filters off: *every* file under src/ is an input, including
    // anything an ignore file would normally hide.
    let walker = WalkBuilder::new(&source_dir).standard_filters(false).build();
    for entry in walker {
        let entry = entry.map_err(|e| std::io::Error::other(e.to_string()))?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            let meta = entry.metadata().map_err(|e| std::io::Error::other(e.to_string()))?;
            mtimes.push(meta.modified()?);
        }
    }

    Ok(mtimes)
}

/// Is the artifact at `target` current with respect to the project's inputs?
pub fn target_is_current(config: &BuildConfig, target: &Path) -> LigmakeResult<bool> {
    let inputs = collect_input_mtimes(config)?;
    Ok(is_current(mtime(target), &inputs))
}
