//! Common test utilities for ligmake integration tests.
//!
//! Provides `TestEnv`, an isolated project directory wired to a stub
//! toolchain script, plus fixtures for the stub variants.

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
