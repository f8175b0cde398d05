/*
    Pick one record per species for the gene named by a gene key
        pass 1 (consider): score every record
            length of the first feature carrying a key name
            then the length of the whole sequence
            earlier records win exact ties
        pass 2 (extract): re-read the same records and cut the
            winning feature out of each winning record
*/

use std::collections::{HashMap, HashSet};
use bio::io::fasta;
use log::{debug, trace};
use super::bases::extract_span;
use super::gene_key::GeneKey;
use super::record::Record;
use super::screen::{SkipReason, SkipRules};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Representative {
    pub gene_length: i64,
    pub sequence_length: usize,
    pub accession: String,
}

impl Representative {
    fn beats(&self, current: &Representative) -> bool {
        self.gene_length > current.gene_length
            || (self.gene_length == current.gene_length
                && self.sequence_length > current.sequence_length)
    }
}

/// What pass 1 made of an accepted record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// No feature carries a key name.
    NoMatch,
    /// First candidate for its species, or better than the stored one.
    Chosen,
    /// Matched, but the stored choice stays.
    Kept,
}

pub struct RepresentativeSelector {
    key: GeneKey,
    seen_accessions: HashSet<String>,
    choices: HashMap<String, Representative>,
    species_order: Vec<String>,
}

impl RepresentativeSelector {
    pub fn new(key: GeneKey) -> Self {
        Self {
            key,
            seen_accessions: HashSet::new(),
            choices: HashMap::new(),
            species_order: Vec::new(),
        }
    }

    pub fn key(&self) -> &GeneKey {
        &self.key
    }

    /// Pass 1 for one record.
    pub fn consider(&mut self, record: &Record) -> Result<Verdict, SkipReason> {
        let species = SkipRules::SELECTION.screen(record, &self.seen_accessions)?;
        self.seen_accessions.insert(record.accession.clone());
        let gene_length = match self.key.first_match(record).and_then(|feature| feature.span) {
            Some(span) => span.len(),
            None => {
                trace!("{}: no feature named in the gene key", record.accession);
                return Ok(Verdict::NoMatch);
            }
        };
        let candidate = Representative {
            gene_length,
            sequence_length: record.sequence.len(),
            accession: record.accession.clone(),
        };
        match self.choices.get_mut(&species) {
            Some(current) if candidate.beats(current) => {
                debug!(
                    "{}: {} replaces {}",
                    species, candidate.accession, current.accession
                );
                *current = candidate;
                Ok(Verdict::Chosen)
            }
            Some(_) => Ok(Verdict::Kept),
            None => {
                debug!("{}: first choice {}", species, candidate.accession);
                self.species_order.push(species.clone());
                self.choices.insert(species, candidate);
                Ok(Verdict::Chosen)
            }
        }
    }

    pub fn species_count(&self) -> usize {
        self.choices.len()
    }

    pub fn choice(&self, species: &str) -> Option<&Representative> {
        self.choices.get(species)
    }

    /// (species, choice) in the order species were first chosen.
    pub fn choices(&self) -> impl Iterator<Item = (&str, &Representative)> {
        self.species_order
            .iter()
            .filter_map(move |species| {
                self.choices
                    .get(species)
                    .map(|choice| (species.as_str(), choice))
            })
    }

    /// Winning accession -> species key.
    pub fn winners(&self) -> HashMap<&str, &str> {
        self.choices()
            .map(|(species, choice)| (choice.accession.as_str(), species))
            .collect()
    }

    /// Pass 2 for one record: the gene of a winning record as a FASTA
    /// record whose id is the species key.
    pub fn extract(
        &self,
        record: &Record,
        winners: &HashMap<&str, &str>,
    ) -> Option<fasta::Record> {
        let species = winners.get(record.accession.as_str())?;
        let span = self.key.first_match(record)?.span?;
        Some(fasta::Record::with_attrs(
            species,
            None,
            &extract_span(&record.sequence, &span),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib_utils::record::{GeneFeature, Span, Strand};
    use std::io::Cursor;

    fn selector() -> RepresentativeSelector {
        let key = GeneKey::from_reader(Cursor::new("GB_name\ncox1\nco1\n"))
            .unwrap()
            .unwrap();
        RepresentativeSelector::new(key)
    }

    fn record(accession: &str, organism: &str, sequence: &[u8], gene: (i64, i64)) -> Record {
        Record::new(accession, Some(organism), sequence).with_feature(
            GeneFeature::new("CDS", Some(Span::new(gene.0, gene.1, Strand::Forward)))
                .with_gene("co1"),
        )
    }

    #[test]
    fn longer_gene_wins() {
        let mut selector = selector();
        selector.consider(&record("A1", "Salmo trutta", b"ACGTACGTAC", (0, 4))).unwrap();
        assert_eq!(
            selector.consider(&record("A2", "Salmo trutta", b"ACGTAC", (0, 5))),
            Ok(Verdict::Chosen)
        );
        assert_eq!(selector.choice("Salmo_trutta").unwrap().accession, "A2");
    }

    #[test]
    fn equal_gene_longer_sequence_wins() {
        let mut selector = selector();
        selector.consider(&record("A1", "Salmo trutta", b"ACGTAC", (0, 4))).unwrap();
        selector.consider(&record("A2", "Salmo trutta fario", b"ACGTACGT", (0, 4))).unwrap();
        assert_eq!(
            selector.choice("Salmo_trutta"),
            Some(&Representative {
                gene_length: 4,
                sequence_length: 8,
                accession: "A2".to_string()
            })
        );
    }

    #[test]
    fn exact_tie_keeps_first_record() {
        let mut selector = selector();
        selector.consider(&record("A1", "Salmo trutta", b"ACGTAC", (0, 4))).unwrap();
        assert_eq!(
            selector.consider(&record("A2", "Salmo trutta", b"TTTTTT", (1, 5))),
            Ok(Verdict::Kept)
        );
        assert_eq!(selector.choice("Salmo_trutta").unwrap().accession, "A1");
    }

    #[test]
    fn records_without_key_gene_are_not_candidates() {
        let mut selector = selector();
        let unrelated = Record::new("A1", Some("Salmo trutta"), b"ACGT").with_feature(
            GeneFeature::new("gene", Some(Span::new(0, 4, Strand::Forward))).with_gene("nd1"),
        );
        assert_eq!(selector.consider(&unrelated), Ok(Verdict::NoMatch));
        assert_eq!(selector.species_count(), 0);
        // the accession still counts as seen
        assert!(matches!(
            selector.consider(&record("A1", "Salmo trutta", b"ACGT", (0, 4))),
            Err(SkipReason::Duplicate { .. })
        ));
    }

    #[test]
    fn skipped_records_never_chosen() {
        let mut selector = selector();
        let uncertain = record("A1", "Salmo sp. 7", b"ACGTACGT", (0, 8));
        let environmental = record("A2", "environmental sample", b"ACGTACGT", (0, 8));
        let unknown = record("A3", "Salmo salar", b"NNNNNNNN", (0, 8));
        assert!(selector.consider(&uncertain).is_err());
        assert!(selector.consider(&environmental).is_err());
        assert!(matches!(
            selector.consider(&unknown),
            Err(SkipReason::UnknownBases { .. })
        ));
        assert_eq!(selector.species_count(), 0);
    }

    #[test]
    fn extraction_uses_first_match_and_species_header() {
        let mut selector = selector();
        let winner = Record::new("A1", Some("Salmo trutta"), b"GGAACGTT")
            .with_feature(
                GeneFeature::new("gene", Some(Span::new(2, 6, Strand::Reverse))).with_gene("cox1"),
            )
            .with_feature(
                GeneFeature::new("CDS", Some(Span::new(0, 8, Strand::Forward))).with_gene("co1"),
            );
        let loser = record("A2", "Salmo trutta", b"ACGT", (0, 2));
        selector.consider(&winner).unwrap();
        selector.consider(&loser).unwrap();
        assert_eq!(selector.choice("Salmo_trutta").unwrap().gene_length, 4);

        let winners = selector.winners();
        let entry = selector.extract(&winner, &winners).unwrap();
        assert_eq!(entry.id(), "Salmo_trutta");
        assert_eq!(entry.desc(), None);
        assert_eq!(entry.seq(), b"CGTT");
        assert!(selector.extract(&loser, &winners).is_none());
    }

    #[test]
    fn product_in_key_makes_a_candidate() {
        let key = GeneKey::from_reader(Cursor::new("COX1
CYTOCHROME C OXIDASE SUBUNIT I
"))
            .unwrap()
            .unwrap();
        let mut selector = RepresentativeSelector::new(key);
        let record = Record::new("A1", Some("Salmo trutta"), b"GGAACGTT").with_feature(
            GeneFeature::new("CDS", Some(Span::new(2, 6, Strand::Forward)))
                .with_gene("coxI")
                .with_product("cytochrome c oxidase subunit I"),
        );
        assert_eq!(selector.consider(&record), Ok(Verdict::Chosen));
        assert_eq!(selector.choice("Salmo_trutta").unwrap().gene_length, 4);
        let entry = selector.extract(&record, &selector.winners()).unwrap();
        assert_eq!(entry.seq(), b"AACG");
    }

    #[test]
    fn choices_follow_first_seen_species_order() {
        let mut selector = selector();
        selector.consider(&record("A1", "Salmo trutta", b"ACGT", (0, 2))).unwrap();
        selector.consider(&record("A2", "Salmo salar", b"ACGT", (0, 2))).unwrap();
        selector.consider(&record("A3", "Salmo trutta", b"ACGT", (0, 3))).unwrap();
        let order: Vec<(&str, &str)> = selector
            .choices()
            .map(|(species, choice)| (species, choice.accession.as_str()))
            .collect();
        assert_eq!(order, vec![("Salmo_trutta", "A3"), ("Salmo_salar", "A2")]);
    }
}
