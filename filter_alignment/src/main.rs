/*
Filter a sequential PHYLIP alignment before tree building
    + check every row is as long as the header says
    + drop rows holding nothing but gaps
    + drop rows whose sequence repeats an earlier row, together with that row

Input
    ` N L` header, then one `NAME SEQUENCE` row per individual
Output
    same layout, names padded to 13 columns
*/

mod utils;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use utils::get_args::Cli;
use utils::phylip::{filter_rows, parse_sequential, write_sequential};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();
    debug!("Parsed commandline arguments");
    let alignment_file = File::open(&cli.input)
        .with_context(|| format!("File {:?} could not be opened", cli.input))?;
    info!("File opened successfully - {:?}", cli.input);
    let alignment = parse_sequential(BufReader::new(alignment_file))
        .with_context(|| format!("Alignment {:?} is not sequential PHYLIP", cli.input))?;

    let mut out_log: Box<dyn Write> = match &cli.log {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Unable to create log {:?}", path))?,
        )),
        None => Box::new(io::stderr()),
    };
    let mut out_phy: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Unable to create {:?}", path))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let kept = filter_rows(&alignment, cli.silent, &mut out_log)?;
    info!("{} of {} rows kept", kept.len(), alignment.rows.len());
    write_sequential(&alignment, &kept, &mut out_phy)?;
    out_phy.flush()?;
    out_log.flush()?;
    Ok(())
}
