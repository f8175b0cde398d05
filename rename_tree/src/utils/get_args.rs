use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Write the log to this file. Default: stderr
    #[arg(short='l', long="log")]
    pub log: Option<PathBuf>,
    /// Append every species name put into the tree to this file
    #[arg(short='n', long="names")]
    pub names: Option<PathBuf>,
    /// Write the renamed tree to this file. Default: stdout
    #[arg(short='o', long="output")]
    pub output: Option<PathBuf>,
    /// Log more: -v info, -vv debug, -vvv trace. RUST_LOG takes precedence.
    #[arg(short='v', long="verbose", action=clap::ArgAction::Count)]
    pub verbose: u8,
    /// Tree whose leaves are named by accession
    pub input_tree: PathBuf,
    /// GenBank file holding those accessions
    pub input_gb: PathBuf,
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
