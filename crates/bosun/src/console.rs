//! Console lifecycle adapter
//!
//! The console sits between the hosting application and the dispatch
//! core. It reacts to two lifecycle signals: "bundles initialized"
//! populates the command registry from every bundle exposing the
//! commands capability, and "application start" parses the raw
//! arguments and routes the run to help rendering or dispatch. The
//! output gate is restored on every exit path.

use std::sync::Arc;

use strum::Display;
use tracing::{debug, warn};

use bosun_core::{
    render_command_help, render_general_help, Bundle, CommandRegistry, Dispatcher, Error,
    OutputGate, OutputSink,
};

use crate::cli::InvocationOptions;

/// Lifecycle states of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LifecyclePhase {
    /// Constructed, registry not populated yet
    Uninitialized,
    /// Registry populated from the loaded bundles
    Populated,
    /// A run is in progress
    Running,
    /// The run finished and the output gate was restored
    Done,
}

/// What a run did, for the host's exit-code policy
#[derive(Debug)]
pub enum RunOutcome {
    /// Help was rendered or a command was dispatched successfully
    Completed,
    /// A pre-execution error was reported; no handler ran
    Rejected(Error),
}

/// The console: registry population and per-run routing
pub struct Console {
    registry: CommandRegistry,
    gate: Arc<OutputGate>,
    phase: LifecyclePhase,
}

impl Console {
    /// Create a console writing through the given sink
    #[must_use]
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            gate: Arc::new(OutputGate::new(sink)),
            phase: LifecyclePhase::Uninitialized,
        }
    }

    /// The current lifecycle phase
    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// The populated command registry
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The gated sink; bundles write their command output through this so
    /// quiet mode covers them too
    #[must_use]
    pub fn output(&self) -> Arc<OutputGate> {
        self.gate.clone()
    }

    /// React to the host's "bundles initialized" signal: pull the command
    /// set of every bundle exposing the commands capability into the
    /// registry under that bundle's namespace id. Bundles without the
    /// capability contribute nothing; that is not an error.
    pub fn bundles_initialized(&mut self, bundles: &[Arc<dyn Bundle>]) {
        for bundle in bundles {
            let Some(provider) = bundle.as_provides_commands() else {
                debug!(bundle = bundle.id(), "no commands contributed");
                continue;
            };
            let commands = provider.commands();
            for descriptor in &commands {
                if descriptor.handler().is_none() {
                    warn!(
                        bundle = bundle.id(),
                        command = descriptor.name(),
                        "command declared without a handler"
                    );
                }
            }
            self.registry.register_namespace(bundle.id(), commands);
        }
        self.phase = LifecyclePhase::Populated;
        debug!(
            phase = %self.phase,
            namespaces = self.registry.namespace_count(),
            "registry populated"
        );
    }

    /// React to the host's "application start" signal with raw process
    /// arguments (without the binary name).
    ///
    /// # Errors
    ///
    /// Returns an error when argument parsing fails or a handler fails;
    /// handler failures are propagated unchanged.
    pub async fn start_raw<I>(&mut self, raw: I) -> anyhow::Result<RunOutcome>
    where
        I: IntoIterator<Item = String>,
    {
        let options = InvocationOptions::parse(raw)?;
        self.start(options).await
    }

    /// Run with already-parsed options. The output gate is deactivated on
    /// every exit path, so the streams are restored even when quiet mode
    /// was engaged.
    ///
    /// # Errors
    ///
    /// Returns an error when rendering fails or a handler fails; handler
    /// failures are propagated unchanged.
    pub async fn start(&mut self, options: InvocationOptions) -> anyhow::Result<RunOutcome> {
        self.phase = LifecyclePhase::Running;
        let result = self.run(&options).await;
        self.gate.deactivate();
        self.phase = LifecyclePhase::Done;
        result
    }

    async fn run(&self, options: &InvocationOptions) -> anyhow::Result<RunOutcome> {
        // Quiet mode engages before any further work so even error output
        // produced during dispatch is suppressed.
        if options.quiet {
            self.gate.activate();
        }

        if options.help {
            if let Some((raw, _)) = options.command() {
                render_command_help(raw, self.gate.as_ref())?;
                return Ok(RunOutcome::Completed);
            }
        }

        if let Some((raw, args)) = options.command() {
            let dispatcher = Dispatcher::new(&self.registry);
            return match dispatcher.execute(raw, args).await {
                Ok(()) => Ok(RunOutcome::Completed),
                Err(err) if err.is_pre_execution() => {
                    self.gate.err(&err.to_string())?;
                    Ok(RunOutcome::Rejected(err))
                }
                Err(err) => Err(err.into()),
            };
        }

        render_general_help(&self.registry, self.gate.as_ref())?;
        Ok(RunOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, PoisonError};

    use super::*;
    use bosun_core::{handler_fn, CommandDescriptor, MemorySink, ProvidesCommands};

    type CallLog = Arc<Mutex<Vec<Vec<String>>>>;

    struct EchoBundle {
        calls: CallLog,
    }

    impl Bundle for EchoBundle {
        fn id(&self) -> &str {
            "demo"
        }

        fn as_provides_commands(&self) -> Option<&dyn ProvidesCommands> {
            Some(self)
        }
    }

    impl ProvidesCommands for EchoBundle {
        fn commands(&self) -> Vec<CommandDescriptor> {
            let log = self.calls.clone();
            vec![CommandDescriptor::new(
                "echo",
                handler_fn(move |args| {
                    let log = log.clone();
                    async move {
                        log.lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .push(args);
                        Ok(())
                    }
                }),
            )
            .with_description("Record the given arguments")]
        }
    }

    struct PlainBundle;

    impl Bundle for PlainBundle {
        fn id(&self) -> &str {
            "plain"
        }
    }

    fn console_with_bundles() -> (Console, Arc<MemorySink>, CallLog) {
        let sink = Arc::new(MemorySink::new());
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let mut console = Console::new(sink.clone());
        let bundles: Vec<Arc<dyn Bundle>> = vec![
            Arc::new(EchoBundle {
                calls: calls.clone(),
            }),
            Arc::new(PlainBundle),
        ];
        console.bundles_initialized(&bundles);
        (console, sink, calls)
    }

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    fn calls_of(log: &CallLog) -> Vec<Vec<String>> {
        log.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[test]
    fn phases_progress_through_population() {
        let sink = Arc::new(MemorySink::new());
        let mut console = Console::new(sink);
        assert_eq!(console.phase(), LifecyclePhase::Uninitialized);

        console.bundles_initialized(&[]);
        assert_eq!(console.phase(), LifecyclePhase::Populated);
    }

    #[test]
    fn bundles_without_the_capability_contribute_nothing() {
        let (console, _, _) = console_with_bundles();
        assert!(console.registry().commands("plain").is_none());
        assert!(console.registry().commands("demo").is_some());
    }

    #[tokio::test]
    async fn dispatches_command_with_arguments() -> anyhow::Result<()> {
        let (mut console, _, calls) = console_with_bundles();

        let outcome = console.start_raw(args(&["demo:echo", "x", "y"])).await?;

        assert!(matches!(outcome, RunOutcome::Completed));
        assert_eq!(calls_of(&calls), vec![args(&["x", "y"])]);
        assert_eq!(console.phase(), LifecyclePhase::Done);
        Ok(())
    }

    #[tokio::test]
    async fn empty_arguments_render_general_help_without_dispatch() -> anyhow::Result<()> {
        let (mut console, sink, calls) = console_with_bundles();

        console.start_raw(args(&[])).await?;

        let lines = sink.out_lines();
        assert_eq!(lines.first().map(String::as_str), Some("Bosun CLI"));
        assert!(lines.contains(&"demo".to_string()));
        assert!(calls_of(&calls).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn help_flag_renders_usage_without_invoking_handler() -> anyhow::Result<()> {
        let (mut console, sink, calls) = console_with_bundles();

        console.start_raw(args(&["--help", "demo:echo"])).await?;

        let lines = sink.out_lines();
        assert!(lines
            .iter()
            .any(|l| l == "Usage: demo:echo [argument1] [argument2] ..."));
        assert!(calls_of(&calls).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_identifier_is_rejected_without_dispatch() -> anyhow::Result<()> {
        let (mut console, sink, calls) = console_with_bundles();

        let outcome = console.start_raw(args(&["bogus"])).await?;

        assert!(matches!(
            outcome,
            RunOutcome::Rejected(Error::MalformedIdentifier { .. })
        ));
        assert_eq!(sink.err_lines().len(), 1);
        assert!(calls_of(&calls).is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn quiet_mode_suppresses_output_and_restores_gate() -> anyhow::Result<()> {
        let (mut console, sink, _) = console_with_bundles();

        console.start_raw(args(&["--quiet"])).await?;

        assert!(sink.out_lines().is_empty());
        assert!(!console.output().is_active());
        Ok(())
    }

    #[tokio::test]
    async fn quiet_mode_suppresses_dispatch_errors() -> anyhow::Result<()> {
        let (mut console, sink, _) = console_with_bundles();

        let outcome = console.start_raw(args(&["--quiet", "missing:cmd"])).await?;

        assert!(matches!(outcome, RunOutcome::Rejected(_)));
        assert!(sink.err_lines().is_empty());
        Ok(())
    }

    struct FailBundle;

    impl Bundle for FailBundle {
        fn id(&self) -> &str {
            "shaky"
        }

        fn as_provides_commands(&self) -> Option<&dyn ProvidesCommands> {
            Some(self)
        }
    }

    impl ProvidesCommands for FailBundle {
        fn commands(&self) -> Vec<CommandDescriptor> {
            vec![CommandDescriptor::new(
                "fail",
                handler_fn(|_args| async { anyhow::bail!("boom") }),
            )]
        }
    }

    #[tokio::test]
    async fn handler_failure_propagates_to_the_caller() {
        let sink = Arc::new(MemorySink::new());
        let mut console = Console::new(sink);
        let bundles: Vec<Arc<dyn Bundle>> = vec![Arc::new(FailBundle)];
        console.bundles_initialized(&bundles);

        let result = console.start_raw(args(&["shaky:fail"])).await;

        assert!(result.is_err());
        assert_eq!(console.phase(), LifecyclePhase::Done);
    }
}
