//! CSV input and output for county adjacency tables.
//!
//! Expected layout, one row per county:
//!
//! ```text
//! County,"Voted (0=R, 1=D)",Neighbors
//! Albemarle,1,Augusta; Fluvanna; Greene
//! ```

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

use super::{Affiliation, CountyMap, CountyRecord};
use crate::error::{Error, Result};

pub const COUNTY_COLUMN: &str = "County";
pub const VOTE_COLUMN: &str = "Voted (0=R, 1=D)";
pub const NEIGHBORS_COLUMN: &str = "Neighbors";

/// Separator used when writing neighbor lists
const NEIGHBOR_SEPARATOR: &str = "; ";

/// Load and validate a county table from disk
pub fn load_counties(path: impl AsRef<Path>) -> Result<CountyMap> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let counties = read_counties(file)?;
    info!(
        path = %path.display(),
        counties = counties.len(),
        "loaded county adjacency table"
    );
    Ok(counties)
}

/// Parse a county table from any reader
pub fn read_counties<R: Read>(reader: R) -> Result<CountyMap> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(Error::MissingColumn { column: name })
    };
    let county_idx = column(COUNTY_COLUMN)?;
    let vote_idx = column(VOTE_COLUMN)?;
    let neighbors_idx = column(NEIGHBORS_COLUMN)?;

    let mut records = Vec::new();
    for (idx, row) in csv.records().enumerate() {
        let row = row?;
        let row_number = idx + 1;

        let id = row.get(county_idx).unwrap_or_default();
        if id.is_empty() {
            return Err(Error::MissingCounty { row: row_number });
        }
        let raw_vote = row.get(vote_idx).unwrap_or_default();
        let vote: i64 = raw_vote.parse().map_err(|_| Error::NonIntegerVote {
            row: row_number,
            value: raw_vote.to_string(),
        })?;
        let affiliation = Affiliation::from_vote(vote).ok_or(Error::InvalidVote {
            row: row_number,
            value: vote,
        })?;

        records.push(CountyRecord::new(
            id,
            affiliation,
            split_neighbors(row.get(neighbors_idx).unwrap_or_default()),
        ));
    }

    debug!(rows = records.len(), "parsed county rows");
    CountyMap::from_records(records)
}

/// Split a `;`-separated neighbor field, ignoring blank entries
pub fn split_neighbors(field: &str) -> impl Iterator<Item = &str> {
    field.split(';').map(str::trim).filter(|n| !n.is_empty())
}

/// Write a county table in the layout [`read_counties`] accepts
pub fn write_counties<W: Write>(writer: W, counties: &CountyMap) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([COUNTY_COLUMN, VOTE_COLUMN, NEIGHBORS_COLUMN])?;
    for county in counties.iter() {
        let vote = county.affiliation.vote().to_string();
        let neighbors = county.neighbors.join(NEIGHBOR_SEPARATOR);
        csv.write_record([county.id.as_str(), vote.as_str(), neighbors.as_str()])?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn save_counties(path: impl AsRef<Path>, counties: &CountyMap) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_counties(file, counties)
}
