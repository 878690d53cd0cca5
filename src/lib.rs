//! ligmake - build, install, and test orchestrator for the ligrust binary
//!
//! ligmake is a thin sequencing layer over cargo: it decides, per target,
//! whether rebuild work is needed (timestamp staleness over the manifest,
//! lock file, and source tree) and delegates all real work to the external
//! toolchain. It replaces the project's Makefile with a testable CLI.

pub mod artifact;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod staleness;
pub mod toolchain;

// Re-exports for convenience
pub use config::{BuildConfig, CliOverrides, EnvOverrides};
pub use error::{LigmakeError, LigmakeResult};
pub use orchestrator::{BuildOutcome, Orchestrator, UninstallOutcome};
pub use staleness::{is_current, target_is_current};
pub use toolchain::{CargoToolchain, Toolchain};
