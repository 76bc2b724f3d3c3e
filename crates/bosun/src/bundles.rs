//! Demo bundles wired into the `bosun` binary
//!
//! These stand in for the extension modules a real hosting application
//! would load. They write their command output through the console's
//! gated sink, so quiet mode covers them like everything else.

use std::sync::Arc;

use bosun_core::{
    handler_fn, Bundle, CommandDescriptor, OutputGate, OutputSink, ProvidesCommands,
};

/// Greeting commands under the `demo` namespace
pub struct DemoBundle {
    out: Arc<OutputGate>,
}

impl Bundle for DemoBundle {
    fn id(&self) -> &str {
        "demo"
    }

    fn as_provides_commands(&self) -> Option<&dyn ProvidesCommands> {
        Some(self)
    }
}

impl ProvidesCommands for DemoBundle {
    fn commands(&self) -> Vec<CommandDescriptor> {
        let greet_out = self.out.clone();
        vec![
            CommandDescriptor::new(
                "greet",
                handler_fn(move |args| {
                    let out = greet_out.clone();
                    async move {
                        let who = if args.is_empty() {
                            "world".to_string()
                        } else {
                            args.join(" ")
                        };
                        out.out(&format!("hello, {who}"))?;
                        Ok(())
                    }
                }),
            )
            .with_description("Greet the given name"),
            CommandDescriptor::new(
                "fail",
                handler_fn(|_args| async { anyhow::bail!("this command always fails") }),
            )
            .with_description("Fail on purpose to demonstrate error propagation"),
        ]
    }
}

/// Host introspection commands under the `sys` namespace
pub struct SysBundle {
    out: Arc<OutputGate>,
}

impl Bundle for SysBundle {
    fn id(&self) -> &str {
        "sys"
    }

    fn as_provides_commands(&self) -> Option<&dyn ProvidesCommands> {
        Some(self)
    }
}

impl ProvidesCommands for SysBundle {
    fn commands(&self) -> Vec<CommandDescriptor> {
        let out = self.out.clone();
        vec![CommandDescriptor::new(
            "info",
            handler_fn(move |_args| {
                let out = out.clone();
                async move {
                    out.out(&format!("bosun {}", env!("CARGO_PKG_VERSION")))?;
                    out.out(&format!(
                        "platform: {}-{}",
                        std::env::consts::OS,
                        std::env::consts::ARCH
                    ))?;
                    Ok(())
                }
            }),
        )
        .with_description("Show host and version information")]
    }
}

/// The bundles the demo binary loads. Registration order is deliberately
/// not lexicographic; the registry sorts namespaces for help rendering.
#[must_use]
pub fn demo_bundles(out: Arc<OutputGate>) -> Vec<Arc<dyn Bundle>> {
    vec![
        Arc::new(SysBundle { out: out.clone() }),
        Arc::new(DemoBundle { out }),
    ]
}
