//! Configuration for ligmake
//!
//! Resolution hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`DESTDIR`, `PREFIX`)
//! 3. Project config (`ligmake.toml` at the project root)
//! 4. Built-in defaults (lowest priority)
//!
//! The environment is read exactly once, at startup, into an explicit
//! [`BuildConfig`] that is passed into every operation. Operations never
//! consult ambient environment state themselves.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LigmakeError, LigmakeResult};

/// Default installation root, matching the conventional Makefile PREFIX.
pub const DEFAULT_PREFIX: &str = "/usr/local";

/// Name of the binary the orchestrator builds and installs.
pub const DEFAULT_BIN_NAME: &str = "ligrust";

/// Optional project config file name.
pub const CONFIG_FILE: &str = "ligmake.toml";

/// Values a `ligmake.toml` may set.
///
/// ```toml
/// [install]
/// prefix = "/opt/ligrust"
/// destdir = ""
/// bin = "ligrust"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub install: InstallSection,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct InstallSection {
    #[serde(default)]
    pub prefix: Option<PathBuf>,

    #[serde(default)]
    pub destdir: Option<PathBuf>,

    #[serde(default)]
    pub bin: Option<String>,
}

impl FileConfig {
    /// Load `ligmake.toml` from the project root.
    ///
    /// A missing file yields defaults; a malformed file is an error rather
    /// than something to silently ignore.
    pub fn load(project_root: &Path) -> LigmakeResult<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| LigmakeError::InvalidConfig {
            path,
            message: e.to_string(),
        })
    }
}

/// Environment values captured once at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub destdir: Option<PathBuf>,
    pub prefix: Option<PathBuf>,
}

impl EnvOverrides {
    /// Snapshot `DESTDIR` and `PREFIX` from the process environment.
    ///
    /// Empty strings count as unset, matching `make DESTDIR= install`.
    pub fn capture() -> Self {
        fn non_empty(var: &str) -> Option<PathBuf> {
            std::env::var_os(var).filter(|v| !v.is_empty()).map(PathBuf::from)
        }
        Self {
            destdir: non_empty("DESTDIR"),
            prefix: non_empty("PREFIX"),
        }
    }
}

/// Overrides taken from CLI flags (highest priority).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub destdir: Option<PathBuf>,
    pub prefix: Option<PathBuf>,
}

/// Fully resolved configuration for one invocation.
///
/// Everything an operation needs to know is here; nothing reads the
/// environment behind this struct's back.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Root of the project being orchestrated (contains Cargo.toml).
    pub project_root: PathBuf,
    /// Staged-install root prepended to `prefix`; empty by default.
    pub destdir: PathBuf,
    /// Installation root; `/usr/local` by default.
    pub prefix: PathBuf,
    /// Name of the produced binary.
    pub bin_name: String,
}

impl BuildConfig {
    /// Resolve configuration from all sources for `project_root`.
    pub fn resolve(
        project_root: &Path,
        cli: &CliOverrides,
        env: &EnvOverrides,
    ) -> LigmakeResult<Self> {
        let file = FileConfig::load(project_root)?;

        let prefix = cli
            .prefix
            .clone()
            .or_else(|| env.prefix.clone())
            .or(file.install.prefix)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFIX));

        let destdir = cli
            .destdir
            .clone()
            .or_else(|| env.destdir.clone())
            .or(file.install.destdir)
            .unwrap_or_default();

        let bin_name = file
            .install
            .bin
            .unwrap_or_else(|| DEFAULT_BIN_NAME.to_string());

        Ok(Self {
            project_root: project_root.to_path_buf(),
            destdir,
            prefix,
            bin_name,
        })
    }

    /// Path to the dependency manifest (Cargo.toml).
    pub fn manifest_path(&self) -> PathBuf {
        self.project_root.join("Cargo.toml")
    }

    /// Path to the pinned dependency graph (Cargo.lock).
    pub fn lock_path(&self) -> PathBuf {
        self.project_root.join("Cargo.lock")
    }

    /// Root of the source tree enumerated for staleness checks.
    pub fn source_dir(&self) -> PathBuf {
        self.project_root.join("src")
    }

    /// Path of the unoptimized artifact produced by `check`.
    pub fn debug_artifact(&self) -> PathBuf {
        self.project_root
            .join("target")
            .join("debug")
            .join(&self.bin_name)
    }

    /// Path of the optimized artifact produced by `build`.
    pub fn release_artifact(&self) -> PathBuf {
        self.project_root
            .join("target")
            .join("release")
            .join(&self.bin_name)
    }

    /// Directory the binary is installed into: `${DESTDIR}${PREFIX}/bin`.
    ///
    /// DESTDIR composition is string-style, as in `make`: an absolute prefix
    /// is re-rooted under the destdir rather than replacing it.
    pub fn install_dir(&self) -> PathBuf {
        if self.destdir.as_os_str().is_empty() {
            return self.prefix.join("bin");
        }
        let relative_prefix = self
            .prefix
            .strip_prefix("/")
            .unwrap_or(self.prefix.as_path());
        self.destdir.join(relative_prefix).join("bin")
    }

    /// Full path of the installed binary.
    pub fn installed_artifact(&self) -> PathBuf {
        self.install_dir().join(&self.bin_name)
    }
}
