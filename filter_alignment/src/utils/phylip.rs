/*
    Read the header
        number of rows, alignment length
    Read every row
        name up to the first blank, sequence is the rest without blanks
        length must match the header
    Filter
        all gaps            -> drop
        seen sequence       -> drop, and drop the row it repeats
*/

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use anyhow::{anyhow, bail};
use log::{debug, trace, warn};

const NAME_WIDTH: usize = 13;

pub struct Alignment {
    pub length: usize,
    pub rows: Vec<(String, String)>,
}

pub fn parse_sequential<R: BufRead>(mut reader: R) -> anyhow::Result<Alignment> {
    let mut line = String::new();
    let mut header: Option<(usize, usize)> = None;
    let mut rows = Vec::new();
    while reader.read_line(&mut line)? > 0 {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            line.clear();
            continue;
        }
        match header {
            None => {
                let mut fields = trimmed.split_whitespace().map(str::parse::<usize>);
                match (fields.next(), fields.next()) {
                    (Some(Ok(count)), Some(Ok(length))) => {
                        debug!("Header: {} rows of length {}", count, length);
                        header = Some((count, length));
                    }
                    _ => bail!("Header `{}` does not hold row count and length", trimmed),
                }
            }
            Some((_, length)) => {
                let (name, rest) = trimmed
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow!("Row `{}` has no sequence", trimmed))?;
                let sequence: String = rest.split_whitespace().collect();
                if sequence.len() != length {
                    bail!(
                        "{} has {} characters, alignment length is {}",
                        name,
                        sequence.len(),
                        length
                    );
                }
                trace!("Row {}", name);
                rows.push((name.to_string(), sequence));
            }
        }
        line.clear();
    }
    let (count, length) = header.ok_or_else(|| anyhow!("Empty alignment"))?;
    if count != rows.len() {
        warn!("Header announces {} rows, found {}", count, rows.len());
    }
    Ok(Alignment { length, rows })
}

/// Indices of the rows to keep, in input order.
pub fn filter_rows(
    alignment: &Alignment,
    silent: bool,
    out_log: &mut dyn Write,
) -> io::Result<Vec<usize>> {
    let mut kept: Vec<usize> = Vec::new();
    let mut first_with: HashMap<&str, usize> = HashMap::new();
    for (idx, (name, sequence)) in alignment.rows.iter().enumerate() {
        if sequence.chars().all(|c| c == '-') {
            if !silent {
                writeln!(out_log, "Skipping record {} due to it only containing -'s.", name)?;
            }
        } else if let Some(&earlier) = first_with.get(sequence.as_str()) {
            kept.retain(|&k| k != earlier);
            if !silent {
                writeln!(
                    out_log,
                    "Skipping duplicate records {} and {}.",
                    name, alignment.rows[earlier].0
                )?;
            }
        } else {
            kept.push(idx);
            first_with.insert(sequence, idx);
        }
    }
    Ok(kept)
}

pub fn write_sequential(
    alignment: &Alignment,
    kept: &[usize],
    out_phy: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out_phy, " {} {}", kept.len(), alignment.length)?;
    for &idx in kept {
        let (name, sequence) = &alignment.rows[idx];
        writeln!(out_phy, "{:<width$}{}", name, sequence, width = NAME_WIDTH)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const ALIGNMENT: &str = " 5 8\n\
        Salmo_trutta  ACGT-ACG\n\
        Salmo_salar   ACGTTACG\n\
        \n\
        Salmo_gap     --------\n\
        Salmo_copy    ACGT-ACG\n\
        Oncorhynchus  ACGT ACGA\n";

    #[test]
    fn rows_parsed_with_inner_blanks_removed() {
        let alignment = parse_sequential(Cursor::new(ALIGNMENT)).unwrap();
        assert_eq!(alignment.length, 8);
        assert_eq!(alignment.rows.len(), 5);
        assert_eq!(alignment.rows[4], ("Oncorhynchus".to_string(), "ACGTACGA".to_string()));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(parse_sequential(Cursor::new(" 1 8\nSalmo_trutta ACGT\n")).is_err());
        assert!(parse_sequential(Cursor::new("Salmo_trutta ACGT\n")).is_err());
        assert!(parse_sequential(Cursor::new("")).is_err());
    }

    #[test]
    fn gaps_and_duplicates_dropped() {
        let alignment = parse_sequential(Cursor::new(ALIGNMENT)).unwrap();
        let mut out_log = Vec::new();
        let kept = filter_rows(&alignment, false, &mut out_log).unwrap();
        assert_eq!(kept, vec![1, 4]);
        assert_eq!(
            String::from_utf8(out_log).unwrap(),
            "Skipping record Salmo_gap due to it only containing -'s.\n\
             Skipping duplicate records Salmo_copy and Salmo_trutta.\n"
        );
    }

    #[test]
    fn silent_filter_logs_nothing() {
        let alignment = parse_sequential(Cursor::new(ALIGNMENT)).unwrap();
        let mut out_log = Vec::new();
        filter_rows(&alignment, true, &mut out_log).unwrap();
        assert!(out_log.is_empty());
    }

    #[test]
    fn names_padded_to_thirteen_columns() {
        let alignment = parse_sequential(Cursor::new(ALIGNMENT)).unwrap();
        let mut out_phy = Vec::new();
        write_sequential(&alignment, &[1, 4], &mut out_phy).unwrap();
        assert_eq!(
            String::from_utf8(out_phy).unwrap(),
            " 2 8\nSalmo_salar  ACGTTACG\nOncorhynchus ACGTACGA\n"
        );
    }
}
