//! aerospike-collector - one-shot metric collection from an Aerospike node
//!
//! Performs a single collection pass per invocation; scheduling repeated
//! polls belongs to whatever runs this binary.

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use aerospike_collector::client::InfoConnection;
use aerospike_collector::collector::InfoCollector;
use aerospike_collector::config::{CliArgs, CliOutputFormat, CollectorConfig};
use aerospike_collector::metrics::{ConsoleSink, MetricsReporter, OutputFormat, RecordingSink};

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn run() -> Result<()> {
    let args = CliArgs::parse_args();

    setup_logging(args.verbose, args.quiet);

    let config = CollectorConfig::from_cli(&args);
    info!(host = %config.host, port = config.port, "collecting from node");

    let transport = InfoConnection::new(&config.host, config.port, config.timeout);
    let mut collector = InfoCollector::new(config, Some(transport));

    let format = match args.format {
        CliOutputFormat::Console => OutputFormat::Console,
        CliOutputFormat::Json => OutputFormat::Json,
        CliOutputFormat::Csv => OutputFormat::Csv,
    };

    // Console with no output file streams pairs as they decode; the other
    // paths record the pass and render it at the end.
    let summary = if format == OutputFormat::Console && args.output.is_none() {
        let mut sink = ConsoleSink;
        collector.collect(&mut sink)?
    } else {
        let mut sink = RecordingSink::new();
        let summary = collector.collect(&mut sink)?;
        let reporter = MetricsReporter::new(format);
        match args.output {
            Some(ref path) => {
                reporter.write_file(path, sink.entries())?;
                info!(path = %path.display(), "wrote collection pass");
            }
            None => reporter.report(sink.entries()),
        }
        summary
    };

    info!(
        metrics = summary.metrics_published,
        failed_categories = summary.categories_failed,
        "done"
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
