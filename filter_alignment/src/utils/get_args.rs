use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Write the log of removed rows to this file. Default: stderr
    #[arg(short='l', long="log")]
    pub log: Option<PathBuf>,
    /// Write the filtered alignment to this file. Default: stdout
    #[arg(short='o', long="output")]
    pub output: Option<PathBuf>,
    /// Do not log removed rows
    #[arg(short='s', long="silent")]
    pub silent: bool,
    /// Log more: -v info, -vv debug, -vvv trace. RUST_LOG takes precedence.
    #[arg(short='v', long="verbose", action=clap::ArgAction::Count)]
    pub verbose: u8,
    /// Sequential PHYLIP alignment
    pub input: PathBuf,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
