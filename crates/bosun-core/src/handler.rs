//! Bundle and handler contracts
//!
//! Bundles are extension modules loaded by the hosting application. A
//! bundle that wants to contribute CLI commands implements the
//! [`ProvidesCommands`] capability; a bundle without the capability simply
//! contributes nothing. Handlers are typed async trait objects, so the
//! requirement that every command runs as a cooperatively-scheduled task
//! is enforced by the type system rather than probed at dispatch time.

use std::{future::Future, sync::Arc};

use async_trait::async_trait;

use crate::registry::CommandDescriptor;

/// A suspension-capable command handler.
///
/// Handlers receive the positional arguments in declaration order and run
/// to completion or failure. Failures are opaque to the dispatcher and are
/// propagated to the host unchanged.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Execute the command with the given positional arguments
    async fn run(&self, args: &[String]) -> anyhow::Result<()>;
}

/// Adapter wrapping an async function or closure as a [`CommandHandler`]
pub struct FnHandler<F>(F);

impl<F> FnHandler<F> {
    /// Wrap `f` as a handler
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait]
impl<F, Fut> CommandHandler for FnHandler<F>
where
    F: Fn(Vec<String>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send,
{
    async fn run(&self, args: &[String]) -> anyhow::Result<()> {
        (self.0)(args.to_vec()).await
    }
}

/// Wrap an async function or closure as a shared [`CommandHandler`]
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn CommandHandler>
where
    F: Fn(Vec<String>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    Arc::new(FnHandler::new(f))
}

/// Capability: a bundle that contributes CLI commands
pub trait ProvidesCommands {
    /// The contributed commands, in declaration order
    fn commands(&self) -> Vec<CommandDescriptor>;
}

/// An extension module loaded by the hosting application
pub trait Bundle: Send + Sync {
    /// Stable identifier; doubles as the bundle's command namespace
    fn id(&self) -> &str;

    /// Capability accessor; `None` means no commands contributed
    fn as_provides_commands(&self) -> Option<&dyn ProvidesCommands> {
        None
    }
}
