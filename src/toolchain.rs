//! External toolchain interface
//!
//! All real compilation, testing, and cache management is delegated to an
//! external process treated as a black box. The orchestrator only sequences
//! invocations, so the toolchain is an injected collaborator: the sequencing
//! logic is tested against a mock without ever spawning a compiler.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{LigmakeError, LigmakeResult};

/// The external compiler / test runner / package manager.
pub trait Toolchain {
    /// Produce the unoptimized debug artifact.
    fn compile_debug(&self) -> LigmakeResult<()>;

    /// Produce the optimized release artifact.
    fn compile_release(&self) -> LigmakeResult<()>;

    /// Run the full test suite: all workspace members, all target kinds,
    /// all feature sets.
    fn run_tests(&self) -> LigmakeResult<()>;

    /// Remove the toolchain's own artifact cache.
    fn clean_cache(&self) -> LigmakeResult<()>;
}

/// Cargo-backed toolchain.
///
/// Invocations run from the project root with inherited stdio, so compiler
/// diagnostics reach the user verbatim. The orchestrator blocks until the
/// child exits; no timeout is imposed.
pub struct CargoToolchain {
    program: PathBuf,
    project_root: PathBuf,
}

impl CargoToolchain {
    /// Create a toolchain rooted at `project_root`.
    ///
    /// `LIGMAKE_CARGO` overrides the cargo executable; the test suite points
    /// it at a stub.
    pub fn new(project_root: &Path) -> Self {
        let program = std::env::var_os("LIGMAKE_CARGO")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("cargo"));
        Self {
            program,
            project_root: project_root.to_path_buf(),
        }
    }

    fn run(&self, args: &[&str], rustflags: Option<&str>) -> LigmakeResult<()> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(&self.project_root);

        if let Some(flags) = rustflags {
            let mut combined = std::env::var("RUSTFLAGS").unwrap_or_default();
            if !combined.is_empty() {
                combined.push(' ');
            }
            combined.push_str(flags);
            cmd.env("RUSTFLAGS", combined);
        }

        let command = self.describe(args);
        let status = cmd.status().map_err(|source| LigmakeError::ToolchainSpawn {
            command: command.clone(),
            source,
        })?;

        if !status.success() {
            return Err(LigmakeError::Toolchain {
                command,
                code: status.code(),
            });
        }

        Ok(())
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(args.iter().map(|a| a.to_string()));
        parts.join(" ")
    }
}

impl Toolchain for CargoToolchain {
    fn compile_debug(&self) -> LigmakeResult<()> {
        self.run(&["build"], None)
    }

    fn compile_release(&self) -> LigmakeResult<()> {
        // Release flags: optimize, strip symbols, link-time size reduction,
        // target-CPU-specific codegen.
        self.run(
            &[
                "build",
                "--release",
                "--config",
                r#"profile.release.lto="fat""#,
                "--config",
                r#"profile.release.strip="symbols""#,
            ],
            Some("-C target-cpu=native"),
        )
    }

    fn run_tests(&self) -> LigmakeResult<()> {
        self.run(&["test", "--workspace", "--all-targets", "--all-features"], None)
    }

    fn clean_cache(&self) -> LigmakeResult<()> {
        self.run(&["clean"], None)
    }
}

/// Mock toolchain for sequencing tests.
///
/// Records every invocation and optionally touches artifact paths on
/// compile, the way a real compiler would.
#[cfg(test)]
pub struct MockToolchain {
    pub calls: std::sync::Mutex<Vec<&'static str>>,
    pub debug_artifact: Option<PathBuf>,
    pub release_artifact: Option<PathBuf>,
    pub fail_compile: bool,
}

#[cfg(test)]
impl MockToolchain {
    pub fn new() -> Self {
        Self {
            calls: std::sync::Mutex::new(Vec::new()),
            debug_artifact: None,
            release_artifact: None,
            fail_compile: false,
        }
    }

    pub fn producing(debug: Option<PathBuf>, release: Option<PathBuf>) -> Self {
        Self {
            debug_artifact: debug,
            release_artifact: release,
            ..Self::new()
        }
    }

    pub fn call_log(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, "mock artifact").unwrap();
    }

    fn compile(&self, call: &'static str, artifact: &Option<PathBuf>) -> LigmakeResult<()> {
        self.record(call);
        if self.fail_compile {
            return Err(LigmakeError::Toolchain {
                command: format!("mock {call}"),
                code: Some(101),
            });
        }
        if let Some(path) = artifact {
            Self::touch(path);
        }
        Ok(())
    }
}

#[cfg(test)]
impl Toolchain for MockToolchain {
    fn compile_debug(&self) -> LigmakeResult<()> {
        self.compile("compile_debug", &self.debug_artifact)
    }

    fn compile_release(&self) -> LigmakeResult<()> {
        self.compile("compile_release", &self.release_artifact)
    }

    fn run_tests(&self) -> LigmakeResult<()> {
        self.record("run_tests");
        Ok(())
    }

    fn clean_cache(&self) -> LigmakeResult<()> {
        self.record("clean_cache");
        Ok(())
    }
}
