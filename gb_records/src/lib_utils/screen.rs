/*
    Decide whether a record may be counted
        duplicate accession
        organism missing
        organism flagged as uncertain (cf., sp., aff., ...)
        sequence made only of N's
    Species are bucketed by genus_species
*/

use std::collections::HashSet;
use std::fmt;
use super::record::Record;

const UNCERTAIN_SPECIES: [&str; 3] = ["cf.", "sp.", "aff."];
const UNCERTAIN_OR_ENVIRONMENTAL: [&str; 4] = ["cf.", "sp.", "aff.", "environmental"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Duplicate { accession: String },
    MissingOrganism { accession: String },
    UncertainSpecies { organism: String, accession: String },
    UnknownBases { accession: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Duplicate { accession } => {
                write!(f, "Skipping duplicate entry for accession {accession}.")
            }
            SkipReason::MissingOrganism { accession } => write!(
                f,
                "Skipping entry for accession {accession} as species name is missing."
            ),
            SkipReason::UncertainSpecies { organism, accession } => write!(
                f,
                "Skipping entry for species {organism} with accession {accession}."
            ),
            SkipReason::UnknownBases { accession } => write!(
                f,
                "Skipping entry for accession {accession} as the sequence only contains N's."
            ),
        }
    }
}

/// Which skip rules a tool applies before it looks at a record.
#[derive(Copy, Clone, Debug)]
pub struct SkipRules {
    pub uncertain_markers: &'static [&'static str],
    pub reject_unknown_bases: bool,
}

impl SkipRules {
    /// Gene-name census: duplicates, missing organism, cf./sp./aff.
    pub const CENSUS: SkipRules = SkipRules {
        uncertain_markers: &UNCERTAIN_SPECIES,
        reject_unknown_bases: false,
    };
    /// Tree renaming: census rules plus N-only sequences.
    pub const NAMING: SkipRules = SkipRules {
        uncertain_markers: &UNCERTAIN_SPECIES,
        reject_unknown_bases: true,
    };
    /// Representative selection: naming rules plus environmental samples.
    pub const SELECTION: SkipRules = SkipRules {
        uncertain_markers: &UNCERTAIN_OR_ENVIRONMENTAL,
        reject_unknown_bases: true,
    };

    /// First rule the record breaks, checked in the order the reasons are
    /// declared. Returns the species key of an acceptable record.
    pub fn screen(
        &self,
        record: &Record,
        seen_accessions: &HashSet<String>,
    ) -> Result<String, SkipReason> {
        let accession = record.accession.clone();
        if seen_accessions.contains(&record.accession) {
            return Err(SkipReason::Duplicate { accession });
        }
        let organism = match record.organism.as_deref() {
            Some(organism) => organism,
            None => return Err(SkipReason::MissingOrganism { accession }),
        };
        if self
            .uncertain_markers
            .iter()
            .any(|marker| organism.contains(marker))
        {
            return Err(SkipReason::UncertainSpecies {
                organism: organism.to_string(),
                accession,
            });
        }
        if self.reject_unknown_bases && record.sequence.iter().all(|base| *base == b'N') {
            return Err(SkipReason::UnknownBases { accession });
        }
        Ok(species_key(organism))
    }
}

/// Genus and species tokens joined by an underscore.
pub fn species_key(organism: &str) -> String {
    organism
        .split_whitespace()
        .take(2)
        .collect::<Vec<&str>>()
        .join("_")
}
