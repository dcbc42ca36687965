//! Error type shared by every stage of the pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column {column:?}")]
    MissingColumn { column: &'static str },
    #[error("row {row}: county name is empty")]
    MissingCounty { row: usize },
    #[error("row {row}: vote value {value:?} is not an integer")]
    NonIntegerVote { row: usize, value: String },
    #[error("row {row}: vote value {value} is not 0 or 1")]
    InvalidVote { row: usize, value: i64 },
    #[error("row {row}: county {county:?} appears more than once")]
    DuplicateCounty { row: usize, county: String },
    #[error("county {county:?} lists unknown neighbor {neighbor:?}")]
    UnknownNeighbor { county: String, neighbor: String },
    #[error("invalid dataset manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid dataset argument {0:?}, expected LABEL=PATH or PATH")]
    DatasetArg(String),
    #[error("cannot write {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
