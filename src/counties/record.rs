//! County records and the adjacency map they form.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use tracing::warn;

use crate::error::{Error, Result};

/// Binary party affiliation of a county (0 = R, 1 = D in the source data)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Affiliation {
    Republican,
    Democrat,
}

impl Affiliation {
    /// Both affiliations in vote order (0 then 1)
    pub const ALL: [Affiliation; 2] = [Affiliation::Republican, Affiliation::Democrat];

    pub fn from_vote(vote: i64) -> Option<Self> {
        match vote {
            0 => Some(Self::Republican),
            1 => Some(Self::Democrat),
            _ => None,
        }
    }

    /// Numeric vote value as written in the CSV
    pub fn vote(self) -> u8 {
        match self {
            Self::Republican => 0,
            Self::Democrat => 1,
        }
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Republican => write!(f, "Republican"),
            Self::Democrat => write!(f, "Democrat"),
        }
    }
}

/// One row of the adjacency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub id: String,
    pub affiliation: Affiliation,
    /// Counties this one "sees", in file order
    pub neighbors: Vec<String>,
}

impl CountyRecord {
    pub fn new(
        id: impl Into<String>,
        affiliation: Affiliation,
        neighbors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            affiliation,
            neighbors: neighbors.into_iter().map(Into::into).collect(),
        }
    }
}

/// Validated county table keyed by identifier.
///
/// Every neighbor reference resolves to a county in the map and no county
/// lists itself. Adjacency may still be one-directional; see
/// [`CountyMap::asymmetric_pairs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountyMap {
    counties: BTreeMap<String, CountyRecord>,
}

impl CountyMap {
    /// Build a map from records in row order.
    ///
    /// Rows are numbered from 1 in errors. Self references and repeated
    /// neighbor entries are dropped.
    pub fn from_records(records: impl IntoIterator<Item = CountyRecord>) -> Result<Self> {
        let mut counties = BTreeMap::new();

        for (idx, mut record) in records.into_iter().enumerate() {
            let mut seen = HashSet::new();
            let id = record.id.clone();
            record.neighbors.retain(|n| {
                if *n == id {
                    warn!(county = %id, "dropping self reference from neighbor list");
                    return false;
                }
                seen.insert(n.clone())
            });

            if counties.contains_key(&record.id) {
                return Err(Error::DuplicateCounty {
                    row: idx + 1,
                    county: record.id,
                });
            }
            counties.insert(record.id.clone(), record);
        }

        for record in counties.values() {
            if let Some(missing) = record.neighbors.iter().find(|n| !counties.contains_key(*n)) {
                return Err(Error::UnknownNeighbor {
                    county: record.id.clone(),
                    neighbor: missing.clone(),
                });
            }
        }

        let map = Self { counties };
        for (a, b) in map.asymmetric_pairs() {
            warn!(county = %a, neighbor = %b, "adjacency listed in one direction only");
        }
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.counties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CountyRecord> {
        self.counties.get(id)
    }

    pub fn affiliation_of(&self, id: &str) -> Option<Affiliation> {
        self.counties.get(id).map(|c| c.affiliation)
    }

    /// Records in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &CountyRecord> {
        self.counties.values()
    }

    pub fn with_affiliation(&self, affiliation: Affiliation) -> impl Iterator<Item = &CountyRecord> {
        self.iter().filter(move |c| c.affiliation == affiliation)
    }

    /// Neighbor relation exactly as listed in the source
    pub fn adjacency(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.counties
            .values()
            .map(|c| (c.id.clone(), c.neighbors.iter().cloned().collect()))
            .collect()
    }

    /// Pairs `(a, b)` where `a` lists `b` but `b` does not list `a`
    pub fn asymmetric_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for county in self.counties.values() {
            for neighbor in &county.neighbors {
                let back = self
                    .counties
                    .get(neighbor)
                    .is_some_and(|n| n.neighbors.contains(&county.id));
                if !back {
                    pairs.push((county.id.clone(), neighbor.clone()));
                }
            }
        }
        pairs
    }

    pub fn is_symmetric(&self) -> bool {
        self.asymmetric_pairs().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, vote: i64, neighbors: &[&str]) -> CountyRecord {
        CountyRecord::new(id, Affiliation::from_vote(vote).unwrap(), neighbors.iter().copied())
    }

    #[test]
    fn test_affiliation_votes() {
        assert_eq!(Affiliation::from_vote(0), Some(Affiliation::Republican));
        assert_eq!(Affiliation::from_vote(1), Some(Affiliation::Democrat));
        assert_eq!(Affiliation::from_vote(2), None);
        assert_eq!(Affiliation::Democrat.vote(), 1);
    }

    #[test]
    fn test_unknown_neighbor_rejected() {
        let err = CountyMap::from_records(vec![record("A", 1, &["B"])]).unwrap_err();
        assert!(matches!(err, Error::UnknownNeighbor { ref neighbor, .. } if neighbor == "B"));
    }

    #[test]
    fn test_duplicate_county_rejected() {
        let err = CountyMap::from_records(vec![record("A", 1, &[]), record("A", 0, &[])])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateCounty { row: 2, .. }));
    }

    #[test]
    fn test_self_reference_dropped() {
        let map = CountyMap::from_records(vec![record("A", 1, &["A", "B", "B"]), record("B", 1, &["A"])])
            .unwrap();
        assert_eq!(map.get("A").unwrap().neighbors, vec!["B".to_string()]);
        assert!(map.is_symmetric());
    }

    #[test]
    fn test_asymmetric_pairs() {
        let map = CountyMap::from_records(vec![record("A", 1, &["B"]), record("B", 0, &[])]).unwrap();
        assert_eq!(map.asymmetric_pairs(), vec![("A".to_string(), "B".to_string())]);
        assert_eq!(map.with_affiliation(Affiliation::Democrat).count(), 1);
    }
}
