//! Command registry types
//!
//! The registry maps namespace ids to the command set each bundle
//! contributed. It is built in a single population pass when the host
//! signals that its bundles are initialized, and is read-only afterward
//! until the next full rebuild. Namespaces iterate in lexicographic
//! order; commands keep the order their bundle declared them in.

use std::{collections::BTreeMap, fmt, sync::Arc};

use tracing::debug;

use crate::{
    error::{Error, Result},
    handler::CommandHandler,
};

/// A single named command contributed by a bundle.
///
/// Immutable once registered. The handler slot is optional so a command
/// can be declared before a handler is bound to it; dispatching a
/// declared-but-unbound command fails with [`Error::InvalidHandler`].
#[derive(Clone)]
pub struct CommandDescriptor {
    name: String,
    description: Option<String>,
    handler: Option<Arc<dyn CommandHandler>>,
}

impl CommandDescriptor {
    /// Create a descriptor with a bound handler
    #[must_use]
    pub fn new(name: impl Into<String>, handler: Arc<dyn CommandHandler>) -> Self {
        Self {
            name: name.into(),
            description: None,
            handler: Some(handler),
        }
    }

    /// Declare a command without binding a handler yet
    #[must_use]
    pub fn declare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            handler: None,
        }
    }

    /// Attach a human-readable description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The command name, unique within its namespace
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The optional description shown in help listings
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The bound handler, if any
    #[must_use]
    pub fn handler(&self) -> Option<&Arc<dyn CommandHandler>> {
        self.handler.as_ref()
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("handler", &self.handler.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

/// The commands of one namespace, in declaration order
#[derive(Debug, Clone, Default)]
pub struct CommandSet {
    commands: Vec<CommandDescriptor>,
}

impl CommandSet {
    /// Create an empty command set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command, replacing any earlier declaration with the same name
    /// in place (command names are unique within a namespace)
    pub fn insert(&mut self, descriptor: CommandDescriptor) {
        match self
            .commands
            .iter()
            .position(|c| c.name() == descriptor.name())
        {
            Some(i) => self.commands[i] = descriptor,
            None => self.commands.push(descriptor),
        }
    }

    /// Find a command by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Iterate the commands in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, CommandDescriptor> {
        self.commands.iter()
    }

    /// Number of commands in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<CommandDescriptor> for CommandSet {
    fn from_iter<I: IntoIterator<Item = CommandDescriptor>>(iter: I) -> Self {
        let mut set = Self::new();
        for descriptor in iter {
            set.insert(descriptor);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CommandSet {
    type Item = &'a CommandDescriptor;
    type IntoIter = std::slice::Iter<'a, CommandDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Registry of all namespaced commands
#[derive(Debug, Default)]
pub struct CommandRegistry {
    namespaces: BTreeMap<String, CommandSet>,
}

impl CommandRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the full command set for a namespace.
    ///
    /// Last write wins: re-registering a namespace replaces its previous
    /// set entirely, there is no incremental merge.
    pub fn register_namespace(
        &mut self,
        namespace: impl Into<String>,
        commands: impl IntoIterator<Item = CommandDescriptor>,
    ) {
        let namespace = namespace.into();
        let set: CommandSet = commands.into_iter().collect();
        debug!(namespace = %namespace, commands = set.len(), "registered namespace");
        self.namespaces.insert(namespace, set);
    }

    /// Look up a command descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNamespace`] when no namespace with this id
    /// is registered, and [`Error::UnknownCommand`] when the namespace
    /// exists but does not contain the command.
    pub fn lookup(&self, namespace: &str, name: &str) -> Result<&CommandDescriptor> {
        let set = self
            .namespaces
            .get(namespace)
            .ok_or_else(|| Error::UnknownNamespace(namespace.to_string()))?;
        set.find(name).ok_or_else(|| Error::UnknownCommand {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
    }

    /// The command set of one namespace
    #[must_use]
    pub fn commands(&self, namespace: &str) -> Option<&CommandSet> {
        self.namespaces.get(namespace)
    }

    /// Iterate namespaces in lexicographic order with their command sets
    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &CommandSet)> {
        self.namespaces.iter().map(|(id, set)| (id.as_str(), set))
    }

    /// Number of registered namespaces
    #[must_use]
    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    /// Whether any namespace is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
