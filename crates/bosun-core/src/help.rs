//! Help rendering
//!
//! The general listing shows every namespace in lexicographic order with
//! its commands in declaration order. Per-command help is intentionally
//! minimal: the banner plus the usage template, no per-flag documentation.
//! All rendering goes through an [`OutputSink`]; nothing is mutated.

use std::io;

use owo_colors::OwoColorize;

use crate::{identifier::CommandId, output::OutputSink, registry::CommandRegistry};

/// Banner printed at the top of every help screen
const BANNER: &str = "Bosun CLI";

fn namespace_label(text: &str, color: bool) -> String {
    if color {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

fn command_label(text: &str, color: bool) -> String {
    if color {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

fn render_banner(sink: &dyn OutputSink) -> io::Result<()> {
    sink.out(BANNER)?;
    sink.out(&"-".repeat(BANNER.len()))?;
    sink.out("")
}

fn usage_line(namespace: &str, name: &str, color: bool) -> String {
    format!(
        "Usage: {}:{} [argument1] [argument2] ...",
        namespace_label(namespace, color),
        command_label(name, color),
    )
}

/// Render the general command listing: banner, usage template, then every
/// namespace with its commands and an optional description per command.
///
/// # Errors
///
/// Returns an error when a sink write fails.
pub fn render_general_help(registry: &CommandRegistry, sink: &dyn OutputSink) -> io::Result<()> {
    let color = sink.supports_color();

    render_banner(sink)?;
    sink.out(&usage_line("namespace", "command", color))?;
    sink.out("")?;

    for (namespace, commands) in registry.namespaces() {
        sink.out(&namespace_label(namespace, color))?;
        for descriptor in commands {
            let mut line = format!("  - {}", command_label(descriptor.name(), color));
            if let Some(description) = descriptor.description() {
                line.push_str(" : ");
                line.push_str(description);
            }
            sink.out(&line)?;
        }
        sink.out("")?;
    }

    Ok(())
}

/// Render help for a single command: the banner plus the usage template
/// scoped to that identifier.
///
/// A malformed identifier is reported on the sink's error stream and
/// nothing further is rendered.
///
/// # Errors
///
/// Returns an error when a sink write fails.
pub fn render_command_help(raw: &str, sink: &dyn OutputSink) -> io::Result<()> {
    let id = match CommandId::parse(raw) {
        Ok(id) => id,
        Err(err) => return sink.err(&err.to_string()),
    };

    let color = sink.supports_color();
    render_banner(sink)?;
    sink.out(&usage_line(id.namespace(), id.name(), color))?;
    sink.out("")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        handler::{handler_fn, CommandHandler},
        output::MemorySink,
        registry::CommandDescriptor,
    };

    fn noop() -> Arc<dyn CommandHandler> {
        handler_fn(|_args| async { Ok(()) })
    }

    fn populated_registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register_namespace(
            "zeta",
            vec![CommandDescriptor::new("last", noop()).with_description("comes last")],
        );
        registry.register_namespace(
            "alpha",
            vec![
                CommandDescriptor::new("first", noop()).with_description("comes first"),
                CommandDescriptor::new("bare", noop()),
            ],
        );
        registry
    }

    #[test]
    fn general_help_starts_with_banner_and_usage() -> io::Result<()> {
        let sink = MemorySink::new();
        render_general_help(&populated_registry(), &sink)?;

        let lines = sink.out_lines();
        assert_eq!(lines[0], "Bosun CLI");
        assert_eq!(lines[1], "---------");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Usage: namespace:command [argument1] [argument2] ...");
        Ok(())
    }

    #[test]
    fn general_help_orders_namespaces_lexicographically() -> io::Result<()> {
        let sink = MemorySink::new();
        render_general_help(&populated_registry(), &sink)?;

        let lines = sink.out_lines();
        let alpha = lines.iter().position(|l| l == "alpha");
        let zeta = lines.iter().position(|l| l == "zeta");
        assert!(alpha.is_some());
        assert!(zeta.is_some());
        assert!(alpha < zeta);
        Ok(())
    }

    #[test]
    fn general_help_formats_commands_with_optional_description() -> io::Result<()> {
        let sink = MemorySink::new();
        render_general_help(&populated_registry(), &sink)?;

        let lines = sink.out_lines();
        assert!(lines.contains(&"  - first : comes first".to_string()));
        assert!(lines.contains(&"  - bare".to_string()));
        Ok(())
    }

    #[test]
    fn general_help_separates_namespace_blocks_with_blank_lines() -> io::Result<()> {
        let sink = MemorySink::new();
        render_general_help(&populated_registry(), &sink)?;

        let lines = sink.out_lines();
        let alpha = lines.iter().position(|l| l == "alpha").unwrap_or_default();
        // alpha block: header, two commands, then a blank separator
        assert_eq!(lines[alpha + 3], "");
        Ok(())
    }

    #[test]
    fn command_help_renders_usage_only() -> io::Result<()> {
        let sink = MemorySink::new();
        render_command_help("demo:greet", &sink)?;

        let lines = sink.out_lines();
        assert_eq!(
            lines,
            vec![
                "Bosun CLI".to_string(),
                "---------".to_string(),
                String::new(),
                "Usage: demo:greet [argument1] [argument2] ...".to_string(),
                String::new(),
            ]
        );
        assert!(sink.err_lines().is_empty());
        Ok(())
    }

    #[test]
    fn command_help_reports_malformed_identifier_and_renders_nothing() -> io::Result<()> {
        let sink = MemorySink::new();
        render_command_help("bogus", &sink)?;

        assert!(sink.out_lines().is_empty());
        assert_eq!(sink.err_lines().len(), 1);
        Ok(())
    }
}
