use std::error::Error;

use clap::Parser;
use fixsink::SinkBuilder;
use fixsink::cli::ReplayArgs;
use fixsink::engine::Replay;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(debug: bool) {
    let default_filter = if debug { "warn,fixsink=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Diagnostics stay on stderr; the sink renders on stdout by default.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = ReplayArgs::parse();

    let config = args.sink_config()?;
    init_tracing(config.debug);

    let mut sink = SinkBuilder::new(config)
        .with_target(args.terminal_target())
        .build()?;
    let input = args.input_provider();
    let report = Replay::new(sink.as_mut(), args.error_policy()).run(input.as_ref())?;

    tracing::debug!(
        dispatched = report.dispatched,
        skipped_blank = report.skipped_blank,
        "replay finished"
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        // AggregateError lists every failure with its line number.
        eprintln!("fixsink_replay error: {e}");
        std::process::exit(1);
    }
}
