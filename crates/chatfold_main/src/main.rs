use anyhow::Result;
use chatfold_main::{Cli, Settings, process, read_input};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?.apply(&cli);

    // stdout carries the merged messages, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let input = read_input(cli.input.as_deref()).await?;
    let output = process(&input, &settings).await?;
    println!("{output}");

    Ok(())
}
