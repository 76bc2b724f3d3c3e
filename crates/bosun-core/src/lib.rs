//! Bosun core - namespaced command registry and dispatch
//!
//! This crate provides:
//! - Command descriptor and registry types
//! - `namespace:command` identifier parsing
//! - The async dispatch pipeline
//! - Help rendering against pluggable output sinks
//! - The quiet-mode output gate

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod dispatch;
pub mod error;
pub mod handler;
pub mod help;
pub mod identifier;
pub mod output;
pub mod registry;

pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use handler::{handler_fn, Bundle, CommandHandler, FnHandler, ProvidesCommands};
pub use help::{render_command_help, render_general_help};
pub use identifier::CommandId;
pub use output::{MemorySink, OutputGate, OutputSink, StdStreams};
pub use registry::{CommandDescriptor, CommandRegistry, CommandSet};
