/*
Extract one gene per species from a GenBank file
    + all names in the gene key are taken to be the same gene
    + per species keep the entry with
        (1) the longest gene feature
        (2) then the longest total sequence
        + the first entry read wins exact ties
    + write each kept gene as fasta, headed by the species name

Entries are skipped when
    + the accession was already read
    + the organism is missing
    + the organism carries cf., sp., aff. or environmental
    + the sequence only contains N's
    + no feature carries a name from the gene key
*/

mod utils;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;
use utils::extract_gene::extract_representatives;
use utils::get_args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();
    debug!("Parsed commandline arguments");
    let mut out_log: Box<dyn Write> = match &cli.log {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Unable to create log {:?}", path))?,
        )),
        None => Box::new(io::stderr()),
    };
    extract_representatives(
        &cli.gene_key,
        &cli.input,
        &cli.output_prefix,
        cli.silent,
        &mut out_log,
    )?;
    out_log.flush()?;
    Ok(())
}
