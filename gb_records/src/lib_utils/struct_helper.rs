// struct to handle GenBank file buffers


use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use gb_io::reader::SeqReader;
use log::debug;
use super::error::GbError;
use super::record::Record;

pub struct GenbankBufferHelper {
    pub path: PathBuf,
    pub buffer_reader: BufReader<File>,
}

impl GenbankBufferHelper {
    pub fn new(file: &Path) -> Result<GenbankBufferHelper, GbError> {
        // open once, read as many times as buffer_reset allows
        let file_open = File::open(file).map_err(|source| GbError::Open {
            path: file.to_path_buf(),
            source,
        })?;
        debug!("GenbankBufferHelper created for: {:?}", file);
        Ok(Self {
            path: file.to_path_buf(),
            buffer_reader: BufReader::new(file_open),
        })
    }

    /// Stream records from the current buffer position.
    pub fn records(&mut self) -> impl Iterator<Item = Result<Record, GbError>> + '_ {
        let path = &self.path;
        SeqReader::new(&mut self.buffer_reader).map(move |parsed| {
            parsed.map(Record::from).map_err(|source| GbError::Parse {
                path: path.clone(),
                source,
            })
        })
    }

    pub fn buffer_reset(&mut self) -> Result<(), GbError> {
        // reset buffer to position 0
        self.buffer_reader
            .seek(SeekFrom::Start(0))
            .map_err(|source| GbError::Rewind {
                path: self.path.clone(),
                source,
            })?;
        debug!("Reset buffer of {:?} to start", self.path);
        Ok(())
    }
}
