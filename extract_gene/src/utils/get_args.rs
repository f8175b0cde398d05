use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Do not log skipped GenBank entries
    #[arg(short='s', long="silent")]
    pub silent: bool,
    /// Write the log of extracted species to this file. Default: stderr
    #[arg(short='l', long="log")]
    pub log: Option<PathBuf>,
    /// Prefix of the fasta files. Default: "sequence"
    #[arg(short='o', long="output", default_value_t=String::from("sequence"))]
    pub output_prefix: String,
    /// Log more: -v info, -vv debug, -vvv trace. RUST_LOG takes precedence.
    #[arg(short='v', long="verbose", action=clap::ArgAction::Count)]
    pub verbose: u8,
    /// Gene key: every spelling of one gene, the first line is the name used for output
    pub gene_key: PathBuf,
    /// GenBank file
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
