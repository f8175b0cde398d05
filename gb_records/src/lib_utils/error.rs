// errors raised while reading records, gene keys and writing reports

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GbError {
    #[error("File {path:?} could not be opened - {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unable to reset buffer of {path:?} - {source}")]
    Rewind {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("GenBank record in {path:?} could not be parsed - {source}")]
    Parse {
        path: PathBuf,
        source: gb_io::reader::GbParserError,
    },
    #[error("Gene key {0:?} does not contain any gene names")]
    EmptyGeneKey(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
