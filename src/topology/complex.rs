//! Simplicial Complex of Maximal Simplices
//!
//! A complex is stored as its maximal simplices only. The closure under
//! subsets (every face of every simplex) is derived on demand, either to
//! count faces or to feed the boundary matrix in [`super::homology`].

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::counties::Affiliation;

/// A simplex given by its county identifiers (sorted, distinct)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Simplex {
    vertices: Vec<String>,
}

impl Simplex {
    pub fn new(vertices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut vertices: Vec<String> = vertices.into_iter().map(Into::into).collect();
        vertices.sort();
        vertices.dedup();
        Self { vertices }
    }

    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Number of member counties
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Geometric dimension (members - 1)
    pub fn dimension(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn contains(&self, county: &str) -> bool {
        self.vertices.binary_search_by(|v| v.as_str().cmp(county)).is_ok()
    }
}

/// Complex built from the maximal same-affiliation cliques of one dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplicialComplex {
    affiliation: Affiliation,
    simplices: Vec<Simplex>,
}

impl SimplicialComplex {
    /// Build from maximal simplices.
    ///
    /// Simplices are ordered largest first, then lexicographically; empty
    /// and repeated simplices are dropped.
    pub fn new(affiliation: Affiliation, simplices: impl IntoIterator<Item = Simplex>) -> Self {
        let mut simplices: Vec<Simplex> = simplices.into_iter().filter(|s| !s.is_empty()).collect();
        simplices.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        simplices.dedup();
        Self { affiliation, simplices }
    }

    pub fn affiliation(&self) -> Affiliation {
        self.affiliation
    }

    /// Maximal simplices
    pub fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Highest simplex dimension, `None` for the empty complex
    pub fn dimension(&self) -> Option<usize> {
        self.simplices.iter().map(Simplex::dimension).max()
    }

    /// Distinct counties appearing in any simplex
    pub fn vertices(&self) -> BTreeSet<&str> {
        self.simplices
            .iter()
            .flat_map(|s| s.vertices().iter().map(String::as_str))
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Count of maximal simplices keyed by member count
    pub fn size_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for s in &self.simplices {
            *histogram.entry(s.len()).or_insert(0) += 1;
        }
        histogram
    }

    /// All distinct k-dimensional faces of the closure
    pub fn faces(&self, k: usize) -> BTreeSet<Vec<&str>> {
        let mut faces = BTreeSet::new();
        for s in &self.simplices {
            faces.extend(s.vertices().iter().map(String::as_str).combinations(k + 1));
        }
        faces
    }

    /// Number of faces in each dimension `0..=dim`
    pub fn f_vector(&self) -> Vec<usize> {
        match self.dimension() {
            Some(top) => (0..=top).map(|k| self.faces(k).len()).collect(),
            None => Vec::new(),
        }
    }

    /// χ = Σ (-1)^k f_k
    pub fn euler_characteristic(&self) -> i64 {
        alternating_sum(&self.f_vector())
    }

    /// Closure as sorted vertex-index lists, faces up to `max_dim` only.
    ///
    /// Returned faces are ordered by dimension, then lexicographically, so
    /// every face precedes its cofaces.
    pub(crate) fn indexed_closure(&self, max_dim: usize) -> Vec<Vec<usize>> {
        let vertex_ids: HashMap<&str, usize> = self
            .vertices()
            .into_iter()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();

        let mut faces: BTreeSet<(usize, Vec<usize>)> = BTreeSet::new();
        for s in &self.simplices {
            let members: Vec<usize> = s.vertices().iter().map(|v| vertex_ids[v.as_str()]).collect();
            for size in 1..=members.len().min(max_dim + 1) {
                faces.extend(members.iter().copied().combinations(size).map(|face| (size, face)));
            }
        }

        faces.into_iter().map(|(_, face)| face).collect()
    }
}

pub(crate) fn alternating_sum(values: &[usize]) -> i64 {
    values
        .iter()
        .enumerate()
        .map(|(k, &v)| if k % 2 == 0 { v as i64 } else { -(v as i64) })
        .sum()
}
