//! Test environment builder for isolated ligmake testing.
//!
//! Each `TestEnv` holds a temp project (manifest, lock file, source tree)
//! and a stub toolchain script. CLI runs go through the compiled ligmake
//! binary with `LIGMAKE_CARGO` pointed at the stub, so no real compiler is
//! ever invoked.

use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use super::fixtures::{FIXTURE_LOCKFILE, FIXTURE_MAIN, FIXTURE_MANIFEST, STUB_OK};

/// Result of running a ligmake CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory wired to a stub toolchain.
pub struct TestEnv {
    pub project_root: TempDir,
    ligmake_bin: PathBuf,
}

impl TestEnv {
    /// Create a project with manifest, lock file, one source file, and the
    /// default (succeeding) stub toolchain.
    pub fn new() -> Self {
        let project_root = TempDir::new().expect("Failed to create project temp dir");

        let env = Self {
            project_root,
            ligmake_bin: PathBuf::from(env!("CARGO_BIN_EXE_ligmake")),
        };

        env.write_file("Cargo.toml", FIXTURE_MANIFEST);
        env.write_file("Cargo.lock", FIXTURE_LOCKFILE);
        env.write_file("src/main.rs", FIXTURE_MAIN);
        env.install_stub(STUB_OK);

        env
    }

    /// Get path relative to the project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Replace the stub toolchain script.
    pub fn install_stub(&self, script: &str) {
        let stub_dir = self.path("stub-bin");
        std::fs::create_dir_all(&stub_dir).expect("Failed to create stub dir");
        let stub = stub_dir.join("cargo");
        std::fs::write(&stub, script).expect("Failed to write stub");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to chmod stub");
        }
    }

    /// Run ligmake in this environment from the project root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run ligmake with extra environment variables.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.ligmake_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("LIGMAKE_CARGO", self.path("stub-bin/cargo"))
            .env_remove("DESTDIR")
            .env_remove("PREFIX")
            .env_remove("RUSTFLAGS");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ligmake");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Every invocation the stub toolchain has seen, one per line.
    pub fn toolchain_invocations(&self) -> Vec<String> {
        let log = self.path(".toolchain.log");
        if !log.exists() {
            return Vec::new();
        }
        std::fs::read_to_string(&log)
            .expect("Failed to read toolchain log")
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    /// Modification time of a path under the project root.
    pub fn mtime(&self, relative: &str) -> SystemTime {
        std::fs::metadata(self.path(relative))
            .expect("Failed to stat")
            .modified()
            .expect("Failed to read mtime")
    }

    /// Push a file's mtime into the future, making dependents stale.
    pub fn touch_future(&self, relative: &str, secs: u64) {
        std::fs::File::options()
            .write(true)
            .open(self.path(relative))
            .expect("Failed to open for touch")
            .set_modified(SystemTime::now() + Duration::from_secs(secs))
            .expect("Failed to set mtime");
    }

    /// Path of the release artifact the stub produces.
    pub fn release_artifact(&self) -> PathBuf {
        self.path("target/release/ligrust")
    }

    /// Path of the debug artifact the stub produces.
    pub fn debug_artifact(&self) -> PathBuf {
        self.path("target/debug/ligrust")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
