use std::path::PathBuf;

use clap::Parser;

use crate::Format;

/// Merge runs of adjacent same-role chat messages.
#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path to the message list.
    ///
    /// Reads standard input when omitted.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Encoding of the input message list.
    #[arg(long, value_enum)]
    pub from: Option<Format>,

    /// Encoding of the merged output.
    #[arg(long, value_enum)]
    pub to: Option<Format>,

    /// Text inserted between merged string contents. Defaults to a newline.
    #[arg(long, short = 's')]
    pub separator: Option<String>,
}
