/*
    accession -> genus_species for every usable GenBank entry
    then for every tree line
        replace each accession found in the line
        longest accessions first, so AB1.1 never eats into AB1.12
*/

use std::collections::HashSet;
use std::io::{BufRead, Write};
use gb_records::{GbError, Record, SkipRules};
use log::{debug, info};

pub struct TreeRenamer {
    names: Vec<(String, String)>,
}

impl TreeRenamer {
    /// Screen the records and remember the species of each accepted accession.
    /// Skipped entries are written to `out_log`.
    pub fn from_records<I>(records: I, out_log: &mut dyn Write) -> anyhow::Result<TreeRenamer>
    where
        I: IntoIterator<Item = Result<Record, GbError>>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut names = Vec::new();
        for record in records {
            let record = record?;
            match SkipRules::NAMING.screen(&record, &seen) {
                Ok(species) => {
                    debug!("{} -> {}", record.accession, species);
                    seen.insert(record.accession.clone());
                    names.push((record.accession, species));
                }
                Err(reason) => writeln!(out_log, "{}", reason)?,
            }
        }
        writeln!(
            out_log,
            "Identified {} possible sequence names to replace.",
            names.len()
        )?;
        // stable: equal lengths keep file order
        names.sort_by(|a: &(String, String), b| b.0.len().cmp(&a.0.len()));
        Ok(TreeRenamer { names })
    }

    /// Rename one line. Every accession found counts once, however often it
    /// occurs in the line; its species is pushed to `inserted`.
    pub fn rename_line<'a>(&'a self, line: &str, inserted: &mut Vec<&'a str>) -> String {
        let mut renamed = line.to_string();
        for (accession, species) in &self.names {
            if renamed.contains(accession.as_str()) {
                renamed = renamed.replace(accession.as_str(), species);
                inserted.push(species);
            }
        }
        renamed
    }

    /// Returns the number of replacements made.
    pub fn rename_tree<R: BufRead>(
        &self,
        tree: &mut R,
        out_tree: &mut dyn Write,
        mut out_names: Option<&mut dyn Write>,
        out_log: &mut dyn Write,
    ) -> anyhow::Result<usize> {
        let mut line = String::new();
        let mut count = 0usize;
        while tree.read_line(&mut line)? > 0 {
            let mut inserted = Vec::new();
            out_tree.write_all(self.rename_line(&line, &mut inserted).as_bytes())?;
            if let Some(names) = out_names.as_mut() {
                for species in &inserted {
                    writeln!(names, "{}", species)?;
                }
            }
            count += inserted.len();
            line.clear();
        }
        info!("{} accessions known, {} replaced", self.names.len(), count);
        writeln!(out_log, "Replaced {} sequence names.", count)?;
        Ok(count)
    }
}
