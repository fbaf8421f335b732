//! CLI integration tests. External tools are replaced by shell scripts, so these
//! only run on Unix.

#![cfg(unix)]

mod common;
mod manager_tests;
