//! Bosun - namespaced command dispatcher for bundle-based applications
//!
//! This crate hosts the console lifecycle adapter on top of
//! `bosun-core`:
//! - CLI flag parsing (`--help`, `--quiet`, positional parameters)
//! - The `Console` reacting to the host's lifecycle signals
//! - Host configuration loading
//! - The demo bundles wired into the `bosun` binary

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod bundles;
pub mod cli;
pub mod config;
pub mod console;

pub use cli::{build_cli, InvocationOptions};
pub use config::HostConfig;
pub use console::{Console, LifecyclePhase, RunOutcome};
