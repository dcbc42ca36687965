//! Counties Module: Voting Data and Adjacency
//!
//! Each election year is a table of counties with a binary affiliation
//! (0 = Republican, 1 = Democrat) and the list of counties each one borders.
//! The table is loaded once and never mutated; every complex is built from it.

mod loader;
mod record;

pub use loader::{
    load_counties, read_counties, save_counties, split_neighbors, write_counties,
    COUNTY_COLUMN, NEIGHBORS_COLUMN, VOTE_COLUMN,
};
pub use record::{Affiliation, CountyMap, CountyRecord};
