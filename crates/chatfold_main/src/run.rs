use std::path::Path;

use anyhow::Context;
use chatfold_domain::merge_message_runs;
use chatfold_pipeline::{ParseMessages, Stage, StageExt};
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::Settings;

/// Reads the raw message list from `path`, or from standard input.
pub async fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read standard input")?;
            Ok(input)
        }
    }
}

/// Decodes `input`, merges message runs and encodes the result.
pub async fn process(input: &str, settings: &Settings) -> anyhow::Result<String> {
    let values = settings.from.decode(input)?;
    let received = values.len();

    let pipeline =
        ParseMessages.pipe(merge_message_runs().separator(settings.separator.as_str()));
    let messages = pipeline.run(values).await?;

    info!(received, merged = messages.len(), "Merged message runs");
    settings.to.encode(&messages)
}
