/*
    Read every record once
        feed it to the reconciler
        log why a record was skipped
    Write the three reports next to the output prefix
        .genes_name     PRIMARY<TAB>ALTERNATES...
        .genes_count    species total, then PERCENT<TAB>NAME
        .feature_count  KIND<TAB>COUNT
*/

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use anyhow::Context;
use gb_records::{GenbankBufferHelper, NameReconciler};
use log::{debug, info};
use super::with_suffix;

pub fn reconcile_names(input: &Path, prefix: &Path) -> anyhow::Result<()> {
    let mut genbank = GenbankBufferHelper::new(input)?;
    let mut gene_names = create_report(prefix, ".genes_name")?;
    let mut gene_counts = create_report(prefix, ".genes_count")?;
    let mut feature_counts = create_report(prefix, ".feature_count")?;

    let mut reconciler = NameReconciler::new();
    let (mut read, mut skipped) = (0usize, 0usize);
    for record in genbank.records() {
        let record = record?;
        read += 1;
        if let Err(reason) = reconciler.observe(&record) {
            debug!("{}", reason);
            skipped += 1;
        }
    }
    info!("{} records read, {} skipped", read, skipped);
    info!(
        "{} species, {} synonym groups",
        reconciler.species_total(),
        reconciler.synonyms().len()
    );
    debug!("{} names could not be joined", reconciler.unjoined().len());

    reconciler.write_gene_names(&mut gene_names)?;
    reconciler.write_gene_counts(&mut gene_counts)?;
    reconciler.write_feature_counts(&mut feature_counts)?;
    gene_names.flush()?;
    gene_counts.flush()?;
    feature_counts.flush()?;
    Ok(())
}

fn create_report(prefix: &Path, suffix: &str) -> anyhow::Result<BufWriter<File>> {
    let path = with_suffix(prefix, suffix);
    info!("Output file: {:?}", path);
    let file = File::create(&path).with_context(|| format!("Unable to create {:?}", path))?;
    Ok(BufWriter::new(file))
}
