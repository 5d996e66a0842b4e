//! Workspace-level tooling package (pre-commit hooks). The code lives in
//! `crates/pathrank-lib` and `crates/pathrank-cli`.
