//! Bosun CLI - demo host wiring the console to the demo bundles
//!
//! Binary name: `bosun`

use std::{path::Path, process, sync::Arc};

use bosun::{bundles, Console, HostConfig, InvocationOptions, RunOutcome};
use bosun_core::{Error, OutputSink, StdStreams};

/// Initialize the tracing subscriber: environment filter, INFO default,
/// stderr writer so diagnostics never mix with command output. A filter
/// from the host config applies only when `RUST_LOG` is unset.
fn init_tracing(config_filter: Option<&str>) -> anyhow::Result<()> {
    let env_filter = match config_filter {
        Some(directives) if std::env::var_os("RUST_LOG").is_none() => {
            tracing_subscriber::EnvFilter::new(directives)
        }
        _ => tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::INFO.into()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}

#[tokio::main]
async fn main() {
    let config = match HostConfig::load(Path::new("bosun.toml")) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    };

    if let Err(err) = init_tracing(config.log_filter.as_deref()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }

    let sink: Arc<dyn OutputSink> = Arc::new(StdStreams);
    let mut console = Console::new(sink);
    console.bundles_initialized(&bundles::demo_bundles(console.output()));

    let options = match InvocationOptions::parse(std::env::args().skip(1)) {
        Ok(mut options) => {
            options.quiet |= config.quiet;
            options
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    match console.start(options).await {
        Ok(RunOutcome::Completed) => {}
        Ok(RunOutcome::Rejected(err)) => process::exit(err.exit_code()),
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<Error>().map_or(1, Error::exit_code);
            process::exit(code);
        }
    }
}
