use std::io;
use std::path::PathBuf;

use crate::parser::Rule;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a dmcss run
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read source {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to import file {path}: {source}")]
    Import {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cyclic import of {path}")]
    ImportCycle { path: PathBuf },

    #[error("Import of {path} exceeds the maximum nesting depth of {limit}")]
    ImportTooDeep { path: PathBuf, limit: usize },

    #[error("Failed to read fragment for device '{name}' at {path}: {source}")]
    DeviceFragment {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No device names found in the input")]
    NoDevices,

    #[error("Invalid device: {reason}")]
    InvalidDevice { reason: String },

    #[error("Device fragment {path} already exists")]
    DeviceExists { path: PathBuf },

    #[error("Syntax error: {0}")]
    Parse(#[from] Box<pest::error::Error<Rule>>),
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(err: pest::error::Error<Rule>) -> Self {
        Error::Parse(Box::new(err))
    }
}
