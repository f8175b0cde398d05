/*
    Gene key: operator curated spellings of one gene
        lines starting with GB_name are headers
        NAME or NAME;COMMENT rows, upper cased
        the first name is the canonical name of the whole file
*/

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use log::{debug, info};
use super::error::GbError;
use super::record::{GeneFeature, Record};

const HEADER_SENTINEL: &str = "GB_name";

#[derive(Clone, Debug)]
pub struct GeneKey {
    canonical: String,
    names: HashSet<String>,
}

impl GeneKey {
    pub fn from_path(path: &Path) -> Result<GeneKey, GbError> {
        let key_file = File::open(path).map_err(|source| GbError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let key = GeneKey::from_reader(BufReader::new(key_file))?
            .ok_or_else(|| GbError::EmptyGeneKey(path.to_path_buf()))?;
        info!(
            "Gene key {:?}: {} names for {}",
            path,
            key.names.len(),
            key.canonical
        );
        Ok(key)
    }

    /// `None` when the reader holds no names at all.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Option<GeneKey>, GbError> {
        let mut canonical: Option<String> = None;
        let mut names = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            if line.starts_with(HEADER_SENTINEL) {
                continue;
            }
            let name = match line.split(';').next().map(str::trim) {
                Some(name) if !name.is_empty() => name.to_uppercase(),
                _ => continue,
            };
            debug!("Gene key name {}", name);
            if canonical.is_none() {
                canonical = Some(name.clone());
            }
            names.insert(name);
        }
        Ok(canonical.map(|canonical| GeneKey { canonical, names }))
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// First named feature of the record whose /gene or /product is a key
    /// name and whose bounds resolve. Later matches are never looked at.
    pub fn first_match<'a>(&self, record: &'a Record) -> Option<&'a GeneFeature> {
        record
            .features
            .iter()
            .filter(|feature| feature.is_named_kind() && self.names(feature))
            .find(|feature| {
                if feature.span.is_none() {
                    debug!(
                        "{}: {} named in the gene key has no bounds, looking further",
                        record.accession, feature.kind
                    );
                }
                feature.span.is_some()
            })
    }

    fn names(&self, feature: &GeneFeature) -> bool {
        [&feature.gene, &feature.product]
            .into_iter()
            .flatten()
            .any(|name| self.contains(&name.to_uppercase()))
    }
}
