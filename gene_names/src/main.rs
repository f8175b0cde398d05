/*
Gene names across a GenBank file
    reconcile
        + fold names found at the same location one feature after the other
        + share of species carrying each name
        + count of each feature kind
    unmatched
        + names missing from a gene key, with the first accession carrying them

Records are skipped when
    + the accession was already read
    + the organism is missing
    + the organism carries cf., sp. or aff.
*/

mod utils;
use clap::Parser;
use env_logger::Env;
use log::debug;
use utils::get_args::{Cli, Command};
use utils::reconcile::reconcile_names;
use utils::unmatched::list_unmatched;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();
    debug!("Parsed commandline arguments");
    match cli.command {
        Command::Reconcile { output, input } => {
            let prefix = output.unwrap_or_else(|| input.clone());
            reconcile_names(&input, &prefix)
        }
        Command::Unmatched {
            output,
            gene_key,
            input,
        } => {
            let prefix = output.unwrap_or_else(|| input.clone());
            list_unmatched(&gene_key, &input, &prefix)
        }
    }
}
