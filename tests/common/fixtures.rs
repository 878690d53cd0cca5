//! Stub toolchain scripts used by the integration suite.
//!
//! The stub stands in for cargo: it appends every invocation to
//! `.toolchain.log` in the project root and creates artifacts the way a
//! compiler would. Tests never run a real toolchain.

/// Stub that succeeds and creates the requested artifact.
pub const STUB_OK: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> .toolchain.log
case "$1" in
  build)
    mkdir -p target/debug target/release
    if [ "$2" = "--release" ]; then
      printf 'release binary\n' > target/release/ligrust
    else
      printf 'debug binary\n' > target/debug/ligrust
    fi
    ;;
  clean)
    rm -rf target
    ;;
esac
exit 0
"#;

/// Stub whose compile fails without producing anything (exit 101, like rustc).
pub const STUB_COMPILE_ERROR: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> .toolchain.log
case "$1" in
  build)
    echo 'error[E0308]: mismatched types' >&2
    exit 101
    ;;
  clean)
    rm -rf target
    ;;
esac
exit 0
"#;

/// Stub that writes a half-finished artifact and then fails.
pub const STUB_PARTIAL_WRITE: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> .toolchain.log
case "$1" in
  build)
    mkdir -p target/release
    printf 'truncated' > target/release/ligrust
    echo 'error: linking failed' >&2
    exit 1
    ;;
esac
exit 0
"#;

/// Minimal manifest for the orchestrated project.
pub const FIXTURE_MANIFEST: &str = r#"[package]
name = "ligrust"
version = "0.1.0"
edition = "2021"
"#;

/// Minimal lock file.
pub const FIXTURE_LOCKFILE: &str = r#"# This file is automatically @generated by Cargo.
version = 3

[[package]]
name = "ligrust"
version = "0.1.0"
"#;

/// Minimal source file.
pub const FIXTURE_MAIN: &str = "fn main() { println!(\"ligrust\"); }\n";
