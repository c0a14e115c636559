use anyhow::Result;
use gwho::cli::Cli;

fn main() -> Result<()> {
    // Diagnostics go to stderr so JSON and NDJSON stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.execute()
}
