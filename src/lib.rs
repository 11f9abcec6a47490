//! Workspace root package.
//!
//! Carries workspace-level tooling (rusty-hook pre-commit hooks) only; the
//! library and service live under `crates/`.
