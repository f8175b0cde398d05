/*
    Fold synonymous gene names across a GenBank file
        two labelled features with the same start, end and strand,
        one right after the other, name the same gene
        the first name seen becomes the primary name
        later names become its alternates
    Alongside
        count the species carrying each (raw) name
        count every feature kind
*/

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::{self, Write};
use log::{debug, trace};
use super::record::{Record, Span};
use super::screen::{SkipReason, SkipRules};

/// Primary name -> alternates, with the reverse index kept alongside so an
/// alternate always resolves to exactly one primary.
#[derive(Clone, Debug, Default)]
pub struct SynonymTable {
    alternates: BTreeMap<String, Vec<String>>,
    primary_of: HashMap<String, String>,
}

impl SynonymTable {
    pub fn is_primary(&self, name: &str) -> bool {
        self.alternates.contains_key(name)
    }

    pub fn primary_of(&self, alternate: &str) -> Option<&str> {
        self.primary_of.get(alternate).map(String::as_str)
    }

    pub fn alternates_of(&self, primary: &str) -> Option<&[String]> {
        self.alternates.get(primary).map(Vec::as_slice)
    }

    /// Groups ordered by primary name.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.alternates
            .iter()
            .map(|(primary, alternates)| (primary.as_str(), alternates.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.alternates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternates.is_empty()
    }

    // `alternate` must be unknown to the table and `primary` must not be an alternate
    fn fold(&mut self, primary: &str, alternate: String) {
        debug_assert!(!self.primary_of.contains_key(primary));
        debug_assert!(!self.alternates.contains_key(&alternate));
        self.primary_of
            .insert(alternate.clone(), primary.to_string());
        self.alternates
            .entry(primary.to_string())
            .or_default()
            .push(alternate);
    }
}

#[derive(Debug, Default)]
pub struct NameReconciler {
    seen_accessions: HashSet<String>,
    species_genes: HashMap<String, HashSet<String>>,
    gene_species_counts: HashMap<String, u64>,
    feature_counts: HashMap<String, u64>,
    synonyms: SynonymTable,
    unjoined: Vec<String>,
}

impl NameReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one record. Skipped records leave every count untouched.
    pub fn observe(&mut self, record: &Record) -> Result<(), SkipReason> {
        let species = SkipRules::CENSUS.screen(record, &self.seen_accessions)?;
        self.seen_accessions.insert(record.accession.clone());
        let species_genes = self.species_genes.entry(species).or_default();

        let mut previous_span: Option<Span> = None;
        let mut previous_name: Option<String> = None;
        for feature in &record.features {
            *self.feature_counts.entry(feature.kind.clone()).or_insert(0) += 1;
            let candidate = match feature.label() {
                Some(label) => label,
                None => continue,
            };
            if species_genes.insert(candidate.clone()) {
                *self.gene_species_counts.entry(candidate.clone()).or_insert(0) += 1;
            }

            if self.synonyms.is_primary(&candidate) {
                // primary names leave the adjacency trackers where they are
                continue;
            }
            let resolved = if let Some(primary) = self.synonyms.primary_of(&candidate) {
                primary.to_string()
            } else {
                let adjacent = feature.span.is_some() && feature.span == previous_span;
                match previous_name.take() {
                    Some(previous) if adjacent && previous != candidate => {
                        trace!("{}: {} folded into {}", record.accession, candidate, previous);
                        self.synonyms.fold(&previous, candidate);
                        previous
                    }
                    _ => {
                        self.unjoined.push(candidate.clone());
                        candidate
                    }
                }
            };
            previous_span = feature.span;
            previous_name = Some(resolved);
        }
        Ok(())
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Names that stood alone when first met, in the order they were met.
    pub fn unjoined(&self) -> &[String] {
        &self.unjoined
    }

    pub fn species_total(&self) -> usize {
        self.species_genes.len()
    }

    /// (percent of species, name), percent descending then name ascending.
    /// Percent is truncated, never rounded.
    pub fn gene_percentages(&self) -> Vec<(u64, &str)> {
        let total = self.species_total() as u64;
        if total == 0 {
            return Vec::new();
        }
        let mut percentages = self
            .gene_species_counts
            .iter()
            .map(|(name, count)| (count * 100 / total, name.as_str()))
            .collect::<Vec<(u64, &str)>>();
        percentages.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        percentages
    }

    /// (kind, count), count descending then kind ascending.
    pub fn feature_counts(&self) -> Vec<(&str, u64)> {
        let mut counts = self
            .feature_counts
            .iter()
            .map(|(kind, count)| (kind.as_str(), *count))
            .collect::<Vec<(&str, u64)>>();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }

    pub fn write_gene_names<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (primary, alternates) in self.synonyms.groups() {
            writeln!(writer, "{}\t{}", primary, alternates.join("\t"))?;
        }
        debug!("{} synonym groups written", self.synonyms.len());
        Ok(())
    }

    pub fn write_gene_counts<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "A total of {} species were counted.",
            self.species_total()
        )?;
        for (percent, name) in self.gene_percentages() {
            writeln!(writer, "{percent}\t{name}")?;
        }
        Ok(())
    }

    pub fn write_feature_counts<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (kind, count) in self.feature_counts() {
            writeln!(writer, "{kind}\t{count}")?;
        }
        Ok(())
    }
}
