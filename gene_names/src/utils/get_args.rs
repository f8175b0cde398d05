use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log more: -v info, -vv debug, -vvv trace. RUST_LOG takes precedence.
    #[arg(short='v', long="verbose", action=clap::ArgAction::Count, global=true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find synonymous gene names (.genes_name), the share of species carrying
    /// each gene name (.genes_count) and the count of each feature kind (.feature_count)
    Reconcile {
        /// Output prefix. Default: the input file name
        #[arg(short='o', long="output")]
        output: Option<PathBuf>,
        /// GenBank file
        input: PathBuf,
    },
    /// List gene names that are not in the gene key (.gene.names), to catch
    /// misspelt names or to grow the key. Every key row counts as a name,
    /// whether or not it holds a `;`
    Unmatched {
        /// Output prefix. Default: the input file name
        #[arg(short='o', long="output")]
        output: Option<PathBuf>,
        /// Gene key: one name per row (text before any `;`), every non-header
        /// row is used, header rows start with GB_name
        gene_key: PathBuf,
        /// GenBank file
        input: PathBuf,
    },
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
