//! Command dispatch pipeline
//!
//! Resolution and validation happen synchronously before any handler
//! runs; the first failure stops the pipeline with no partial execution.
//! A failure raised by the handler itself is propagated to the caller
//! unchanged.

use tracing::debug;

use crate::{
    error::{Error, Result},
    identifier::CommandId,
    registry::CommandRegistry,
};

/// Executes `namespace:command` invocations against a registry
pub struct Dispatcher<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over the given registry
    #[must_use]
    pub const fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// Execute a raw identifier with the given positional arguments.
    ///
    /// The arguments are handed to the handler in order, with no coercion,
    /// and the handler is awaited to full completion. Execution is a
    /// single best-effort attempt; there are no retries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`], [`Error::UnknownNamespace`],
    /// [`Error::UnknownCommand`], or [`Error::InvalidHandler`] before any
    /// handler runs, and [`Error::Handler`] wrapping the handler's own
    /// failure unchanged.
    pub async fn execute(&self, raw: &str, args: &[String]) -> Result<()> {
        let id = CommandId::parse(raw)?;
        let descriptor = self.registry.lookup(id.namespace(), id.name())?;
        let handler = descriptor.handler().ok_or_else(|| Error::InvalidHandler {
            namespace: id.namespace().to_string(),
            name: id.name().to_string(),
        })?;

        debug!(command = %id, args = args.len(), "dispatching");
        handler.run(args).await?;
        Ok(())
    }
}
