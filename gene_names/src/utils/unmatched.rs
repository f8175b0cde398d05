/*
    Every gene or product label of every record (no record is skipped)
        already in the gene key   -> ignore
        already reported          -> ignore
        otherwise                 -> ACCESSION<TAB>NAME
*/

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use anyhow::Context;
use gb_records::{GenbankBufferHelper, GeneKey, Record};
use log::info;
use super::with_suffix;

pub struct UnmatchedNames<'a> {
    key: &'a GeneKey,
    reported: HashSet<String>,
}

impl<'a> UnmatchedNames<'a> {
    pub fn new(key: &'a GeneKey) -> Self {
        Self {
            key,
            reported: HashSet::new(),
        }
    }

    /// Write the record's names that are new and not in the key. Returns
    /// how many lines were written.
    pub fn report<W: Write>(&mut self, record: &Record, writer: &mut W) -> io::Result<usize> {
        let mut written = 0;
        for (_, label) in record.labelled_features() {
            if self.key.contains(&label) || self.reported.contains(&label) {
                continue;
            }
            writeln!(writer, "{}\t{}", record.accession, label)?;
            self.reported.insert(label);
            written += 1;
        }
        Ok(written)
    }
}

pub fn list_unmatched(gene_key: &Path, input: &Path, prefix: &Path) -> anyhow::Result<()> {
    let key = GeneKey::from_path(gene_key)?;
    let mut genbank = GenbankBufferHelper::new(input)?;
    let path = with_suffix(prefix, ".gene.names");
    info!("Output file: {:?}", path);
    let mut writer = BufWriter::new(
        File::create(&path).with_context(|| format!("Unable to create {:?}", path))?,
    );
    let mut unmatched = UnmatchedNames::new(&key);
    let mut total = 0;
    for record in genbank.records() {
        total += unmatched.report(&record?, &mut writer)?;
    }
    writer.flush()?;
    info!("{} names are not in {:?}", total, gene_key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gb_records::{GeneFeature, Span, Strand};
    use std::io::Cursor;

    fn named(kind: &str, gene: &str) -> GeneFeature {
        GeneFeature::new(kind, Some(Span::new(0, 10, Strand::Forward))).with_gene(gene)
    }

    #[test]
    fn names_reported_once_and_only_outside_key() {
        let key = GeneKey::from_reader(Cursor::new("GB_name;Gene\ncox1;COX1\n"))
            .unwrap()
            .unwrap();
        let mut unmatched = UnmatchedNames::new(&key);
        let first = Record::new("A1", Some("Salmo trutta"), b"ACGT")
            .with_feature(named("gene", "cox1"))
            .with_feature(named("CDS", "co1"))
            .with_feature(named("misc_feature", "orf9"));
        // skip rules do not apply here
        let second = Record::new("A2", None, b"NNNN")
            .with_feature(named("gene", "CO1"))
            .with_feature(named("tRNA", "trnS"));
        let mut out = Vec::new();
        assert_eq!(unmatched.report(&first, &mut out).unwrap(), 1);
        assert_eq!(unmatched.report(&second, &mut out).unwrap(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "A1\tCO1\nA2\tTRNS\n");
    }
}
