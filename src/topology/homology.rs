//! Simplicial Homology via Boundary Matrix Reduction
//!
//! All faces of the complex enter at once, ordered by (dimension,
//! lexicographic vertices). The boundary matrix over Z/2Z is reduced with
//! the standard column algorithm:
//!
//! 1. A column reduced to zero marks a *positive* simplex: it creates a cycle.
//! 2. A non-zero column with pivot `low` marks a *negative* simplex: it
//!    bounds the cycle created by simplex `low`.
//!
//! βₖ = #positive k-simplices − #negative (k+1)-simplices.
//!
//! ## Reference
//!
//! Edelsbrunner, Letscher, Zomorodian (2002). "Topological Persistence
//! and Simplification". Discrete & Computational Geometry.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use super::{BettiNumbers, SimplicialComplex};

/// Homology computation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomologyConfig {
    /// Highest dimension to report; `None` reports up to the complex dimension
    pub max_dimension: Option<usize>,
}

impl HomologyConfig {
    pub fn with_max_dimension(max_dimension: usize) -> Self {
        Self { max_dimension: Some(max_dimension) }
    }
}

/// Sparse column representation for boundary matrix
#[derive(Debug, Clone, Default)]
struct SparseColumn {
    rows: BTreeSet<usize>,
}

impl SparseColumn {
    /// Get the lowest (maximum) non-zero index
    fn low(&self) -> Option<usize> {
        self.rows.iter().next_back().copied()
    }

    fn toggle(&mut self, row: usize) {
        if !self.rows.remove(&row) {
            self.rows.insert(row);
        }
    }

    /// XOR (symmetric difference) with another column - addition in Z/2Z
    fn add_assign(&mut self, other: &SparseColumn) {
        for &row in &other.rows {
            self.toggle(row);
        }
    }
}

/// Betti numbers of `complex` in dimensions `0..=d`, where `d` is the
/// complex dimension capped by `config.max_dimension`
pub fn betti_numbers(complex: &SimplicialComplex, config: &HomologyConfig) -> BettiNumbers {
    let Some(top) = complex.dimension() else {
        return BettiNumbers::empty();
    };
    let report_dim = config.max_dimension.map_or(top, |max| max.min(top));

    // (k+1)-faces are needed to kill k-cycles
    let faces = complex.indexed_closure(report_dim + 1);
    let face_index: HashMap<&[usize], usize> = faces
        .iter()
        .enumerate()
        .map(|(idx, face)| (face.as_slice(), idx))
        .collect();

    let mut columns: Vec<SparseColumn> = Vec::with_capacity(faces.len());
    let mut low_to_col: HashMap<usize, usize> = HashMap::new();
    let mut positive = vec![0usize; report_dim + 2];
    let mut negative = vec![0usize; report_dim + 2];

    for (col_idx, face) in faces.iter().enumerate() {
        let dim = face.len() - 1;
        let mut boundary = SparseColumn::default();

        if dim > 0 {
            // Boundary of [v0, ..., vk] = sum of [v0, ..., v̂i, ..., vk]
            let mut facet = Vec::with_capacity(face.len() - 1);
            for skip in 0..face.len() {
                facet.clear();
                facet.extend(face.iter().enumerate().filter(|&(i, _)| i != skip).map(|(_, &v)| v));
                if let Some(&row) = face_index.get(facet.as_slice()) {
                    boundary.toggle(row);
                }
            }
        }

        while let Some(low) = boundary.low() {
            match low_to_col.get(&low) {
                Some(&pivot_col) => boundary.add_assign(&columns[pivot_col]),
                None => break,
            }
        }

        match boundary.low() {
            Some(low) => {
                low_to_col.insert(low, col_idx);
                negative[dim] += 1;
            }
            None => positive[dim] += 1,
        }
        columns.push(boundary);
    }

    let values: Vec<usize> = (0..=report_dim)
        .map(|k| positive[k] - negative[k + 1])
        .collect();

    debug!(
        faces = faces.len(),
        pairs = low_to_col.len(),
        betti = ?values,
        "reduced boundary matrix"
    );

    BettiNumbers::new(values)
}
