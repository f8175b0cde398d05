/*
    Two passes over one open GenBank file
        pass 1: score every entry, keep the best accession per species
        reset the buffer to position 0
        pass 2: read again, write the gene of every kept accession

    Log lines (stderr or --log)
        one line per skipped entry, unless silent
        "Extracting a total of N species."
        one line per written species: index, species, accession
*/

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use anyhow::Context;
use bio::io::fasta;
use gb_records::{GenbankBufferHelper, GeneKey, RepresentativeSelector, Verdict};
use log::{debug, info, warn};

/// Run both passes. Returns the number of fasta files written.
pub fn extract_representatives(
    gene_key: &Path,
    input: &Path,
    prefix: &str,
    silent: bool,
    out_log: &mut dyn Write,
) -> anyhow::Result<usize> {
    let key = GeneKey::from_path(gene_key)?;
    let mut genbank = GenbankBufferHelper::new(input)?;
    debug!("Opened the file buffer");
    let selector = score_records(&mut genbank, key, silent, out_log)?;
    writeln!(
        out_log,
        "Extracting a total of {} species.",
        selector.species_count()
    )?;
    genbank.buffer_reset()?;
    write_representatives(&mut genbank, &selector, prefix, out_log)
}

fn score_records(
    genbank: &mut GenbankBufferHelper,
    key: GeneKey,
    silent: bool,
    out_log: &mut dyn Write,
) -> anyhow::Result<RepresentativeSelector> {
    let mut selector = RepresentativeSelector::new(key);
    let mut unmatched = 0usize;
    for record in genbank.records() {
        match selector.consider(&record?) {
            Ok(Verdict::NoMatch) => unmatched += 1,
            Ok(_) => {}
            Err(reason) if !silent => writeln!(out_log, "{}", reason)?,
            Err(reason) => debug!("{}", reason),
        }
    }
    info!(
        "{} entries carry no name from the gene key {}",
        unmatched,
        selector.key().canonical()
    );
    Ok(selector)
}

fn write_representatives(
    genbank: &mut GenbankBufferHelper,
    selector: &RepresentativeSelector,
    prefix: &str,
    out_log: &mut dyn Write,
) -> anyhow::Result<usize> {
    let winners = selector.winners();
    let gene = selector.key().canonical();
    let mut written: HashSet<String> = HashSet::new();
    for record in genbank.records() {
        let record = record?;
        let species = match winners.get(record.accession.as_str()) {
            Some(species) if !written.contains(&record.accession) => *species,
            _ => continue,
        };
        let entry = match selector.extract(&record, &winners) {
            Some(entry) => entry,
            None => {
                warn!("{}: gene {} not found on second read", record.accession, gene);
                continue;
            }
        };
        written.insert(record.accession.clone());
        let count = written.len();
        writeln!(out_log, "{}\t{}\t{}", count, species, record.accession)?;
        let path = format!("{}{}.{}.fa", prefix, count, gene);
        let mut out_fa = fasta::Writer::new(BufWriter::new(
            File::create(&path).with_context(|| format!("Unable to create {}", path))?,
        ));
        out_fa.write_record(&entry)?;
        out_fa.flush()?;
        debug!("Wrote {}", path);
    }
    Ok(written.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../gb_records/tests/data")
            .join(name)
    }

    fn run(key_text: &str, silent: bool) -> (TempDir, usize, String) {
        run_on("salmo.gb", key_text, silent)
    }

    fn run_on(genbank: &str, key_text: &str, silent: bool) -> (TempDir, usize, String) {
        let dir = TempDir::new().unwrap();
        let key = dir.path().join("gene.key");
        fs::write(&key, key_text).unwrap();
        let prefix = dir.path().join("seq").to_str().unwrap().to_string();
        let mut out_log = Vec::new();
        let written =
            extract_representatives(&key, &fixture(genbank), &prefix, silent, &mut out_log)
                .unwrap();
        (dir, written, String::from_utf8(out_log).unwrap())
    }

    #[test]
    fn forward_gene_written_under_canonical_name() {
        let (dir, written, out_log) = run("GB_name\ncox1\nco1\n", false);
        assert_eq!(written, 1);
        assert_eq!(
            out_log,
            "Extracting a total of 1 species.\n1\tSalmo_trutta\tAB000001.1\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("seq1.COX1.fa")).unwrap(),
            ">Salmo_trutta\nGGAACGTTACGTACGTACGTACGTACGTAC\n"
        );
    }

    #[test]
    fn reverse_gene_is_reverse_complemented() {
        let (dir, _, _) = run("trnS\n", false);
        assert_eq!(
            fs::read_to_string(dir.path().join("seq1.TRNS.fa")).unwrap(),
            ">Salmo_trutta\nCGTTAACGTT\n"
        );
    }

    #[test]
    fn canonical_name_is_first_key_row() {
        let (dir, written, _) = run("16S rRNA\n16S ribosomal RNA\n", true);
        assert_eq!(written, 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("seq1.16S RRNA.fa")).unwrap(),
            ">Salmo_salar\nACGTACGTACNNNNNNNNNN\n"
        );
    }

    #[test]
    fn missing_gene_key_is_fatal() {
        let mut out_log = Vec::new();
        let missing = Path::new("/nonexistent/gene.key");
        let genbank = fixture("salmo.gb");
        assert!(extract_representatives(missing, &genbank, "seq", false, &mut out_log).is_err());
        assert!(out_log.is_empty());
    }

    #[test]
    fn skipped_entries_are_logged() {
        let (dir, written, out_log) = run_on("screened.gb", "cox1\n", false);
        assert_eq!(written, 1);
        assert_eq!(
            out_log,
            "Skipping duplicate entry for accession AB000010.1.\n\
             Skipping entry for species Salmo sp. 7 with accession AB000011.1.\n\
             Skipping entry for accession AB000012.1 as the sequence only contains N's.\n\
             Extracting a total of 1 species.\n\
             1\tSalmo_trutta\tAB000010.1\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("seq1.COX1.fa")).unwrap(),
            ">Salmo_trutta\nGGAACGTT\n"
        );
        assert!(!dir.path().join("seq2.COX1.fa").exists());
    }

    #[test]
    fn silent_run_keeps_summary_lines() {
        let (_dir, written, out_log) = run_on("screened.gb", "cox1\n", true);
        assert_eq!(written, 1);
        assert_eq!(
            out_log,
            "Extracting a total of 1 species.\n1\tSalmo_trutta\tAB000010.1\n"
        );
    }
}
