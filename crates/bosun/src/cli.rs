//! CLI argument parsing
//!
//! The invocation shape is `<namespace:command> [args...] [--help]
//! [--quiet]`. Parsing only splits the flags from the positional list;
//! everything after the leading identifier is handed to the handler
//! untouched.

use clap::{Arg, ArgAction, ArgMatches, Command};

/// Build the argument parser for the `bosun` binary
#[must_use]
pub fn build_cli() -> Command {
    Command::new("bosun")
        .about("Namespaced command dispatcher for bundle-based applications")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Show usage for the given command"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress all console output"),
        )
        .arg(
            Arg::new("params")
                .num_args(0..)
                .value_name("COMMAND [ARGS]")
                .help("Command identifier (namespace:command) followed by its arguments"),
        )
}

/// Parsed invocation flags and positional parameters, derived fresh per
/// process run from the raw arguments
#[derive(Debug, Clone, Default)]
pub struct InvocationOptions {
    /// Render help instead of executing
    pub help: bool,
    /// Suppress console output for the whole run
    pub quiet: bool,
    /// Positional parameters: leading command identifier plus handler
    /// arguments
    pub params: Vec<String>,
}

impl InvocationOptions {
    /// Parse raw process arguments (without the binary name).
    ///
    /// # Errors
    ///
    /// Returns an error when the arguments do not match the CLI shape,
    /// e.g. an unknown flag.
    pub fn parse<I>(raw: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let argv = std::iter::once("bosun".to_string()).chain(raw);
        let matches = build_cli().try_get_matches_from(argv)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            help: matches.get_flag("help"),
            quiet: matches.get_flag("quiet"),
            params: matches
                .get_many::<String>("params")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        }
    }

    /// Split the leading positional into the command identifier and the
    /// remaining handler arguments; `None` when no positional was given
    #[must_use]
    pub fn command(&self) -> Option<(&str, &[String])> {
        self.params
            .split_first()
            .map(|(id, rest)| (id.as_str(), rest))
    }
}
