//! Command identifier parsing

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// Delimiter between the namespace and the command name
pub const NAMESPACE_DELIMITER: char = ':';

/// A resolved `namespace:command` identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandId {
    namespace: String,
    name: String,
}

impl CommandId {
    /// Parse a raw identifier of the form `namespace:command`.
    ///
    /// Resolution is pure: the input is valid only when splitting on the
    /// delimiter yields exactly two non-empty segments, and those segments
    /// are returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] when the input has no
    /// delimiter, more than one delimiter, or an empty segment.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut segments = raw.split(NAMESPACE_DELIMITER);
        match (segments.next(), segments.next(), segments.next()) {
            (Some(namespace), Some(name), None) if !namespace.is_empty() && !name.is_empty() => {
                Ok(Self {
                    namespace: namespace.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(Error::MalformedIdentifier {
                raw: raw.to_string(),
            }),
        }
    }

    /// The namespace segment
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The command name segment
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for CommandId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, NAMESPACE_DELIMITER, self.name)
    }
}
