//! Betti Numbers: Topological Invariants
//!
//! The k-th Betti number βₖ counts the number of k-dimensional
//! "holes" in a simplicial complex:
//!
//! - β₀: Number of connected same-affiliation regions
//! - β₁: Number of loops enclosing counties of the other affiliation
//! - β₂: Number of enclosed voids
//!
//! Comparing the sequences of several election years shows how the shape
//! of each party's territory changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::complex::alternating_sum;
use crate::counties::Affiliation;

/// Betti numbers β₀, β₁, ... up to the complex dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BettiNumbers {
    values: Vec<usize>,
}

impl BettiNumbers {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values }
    }

    /// Betti numbers of the empty complex
    pub fn empty() -> Self {
        Self::default()
    }

    /// βₖ, zero beyond the computed range
    pub fn get(&self, k: usize) -> usize {
        self.values.get(k).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.values.clone()
    }

    /// Total topological complexity
    pub fn total(&self) -> usize {
        self.values.iter().sum()
    }

    /// Euler characteristic χ = β₀ - β₁ + β₂ - ...
    pub fn euler_characteristic(&self) -> i64 {
        alternating_sum(&self.values)
    }
}

impl fmt::Display for BettiNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, b) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{b}")?;
        }
        write!(f, "]")
    }
}

/// Change between two consecutive datasets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettiDelta {
    pub from: String,
    pub to: String,
    /// βₖ(to) - βₖ(from) for k up to the longer sequence
    pub delta: Vec<i64>,
}

/// Betti sequences of one affiliation across labelled datasets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettiComparison {
    pub affiliation: Affiliation,
    pub entries: Vec<(String, BettiNumbers)>,
}

impl BettiComparison {
    pub fn new(affiliation: Affiliation) -> Self {
        Self {
            affiliation,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, betti: BettiNumbers) {
        self.entries.push((label.into(), betti));
    }

    /// Longest Betti sequence among the entries
    pub fn max_len(&self) -> usize {
        self.entries.iter().map(|(_, b)| b.len()).max().unwrap_or(0)
    }

    /// βₖ across entries, in insertion order
    pub fn curve(&self, k: usize) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|(label, b)| (label.as_str(), b.get(k)))
            .collect()
    }

    /// Per-dimension differences between consecutive entries
    pub fn deltas(&self) -> Vec<BettiDelta> {
        self.entries
            .windows(2)
            .map(|pair| {
                let (from, a) = &pair[0];
                let (to, b) = &pair[1];
                let len = a.len().max(b.len());
                BettiDelta {
                    from: from.clone(),
                    to: to.clone(),
                    delta: (0..len).map(|k| b.get(k) as i64 - a.get(k) as i64).collect(),
                }
            })
            .collect()
    }
}
