/*
Replace accession numbers in a tree with species names
    + map every usable GenBank entry to genus_species
        + skip duplicates, missing or uncertain species, N-only sequences
    + rewrite the tree line by line
    + optionally list every species name written
*/

mod utils;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use gb_records::GenbankBufferHelper;
use log::debug;
use utils::get_args::Cli;
use utils::rename::TreeRenamer;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();
    debug!("Parsed commandline arguments");
    let tree = File::open(&cli.input_tree)
        .with_context(|| format!("File {:?} could not be opened", cli.input_tree))?;
    let mut genbank = GenbankBufferHelper::new(&cli.input_gb)?;
    let mut out_log: Box<dyn Write> = match &cli.log {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Unable to create log {:?}", path))?,
        )),
        None => Box::new(io::stderr()),
    };
    let mut out_tree: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Unable to create {:?}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    let mut out_names = match &cli.names {
        Some(path) => Some(BufWriter::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Unable to open {:?}", path))?,
        )),
        None => None,
    };

    let renamer = TreeRenamer::from_records(genbank.records(), &mut out_log)?;
    renamer.rename_tree(
        &mut BufReader::new(tree),
        &mut out_tree,
        out_names.as_mut().map(|names| names as &mut dyn Write),
        &mut out_log,
    )?;
    out_tree.flush()?;
    out_log.flush()?;
    if let Some(names) = out_names.as_mut() {
        names.flush()?;
    }
    Ok(())
}
