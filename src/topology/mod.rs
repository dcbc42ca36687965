//! Topology Module: Clique Complexes and Homology
//!
//! Turns a county adjacency table into a simplicial complex and reads off
//! its Betti numbers:
//! - Same-affiliation adjacency graph
//! - Maximal cliques filtered to affiliation-homogeneous simplices
//! - Betti numbers via boundary matrix reduction over Z/2Z
//!
//! ## Mathematical Background
//!
//! For one election year and one party, the counties that voted for that
//! party are the vertices and shared borders are the edges. Each maximal
//! clique of mutually adjacent counties spans a simplex; the union of these
//! simplices is the clique complex of the graph. Its homology describes the
//! shape of the party's territory: β₀ counts separate regions, β₁ counts
//! rings of counties around territory held by the other party.

mod betti;
mod clique;
mod complex;
mod graph;
mod homology;

pub use betti::{BettiComparison, BettiDelta, BettiNumbers};
pub use clique::{
    build_complex, complex_from_graph, filter_uniform_cliques, maximal_cliques,
    uniform_affiliation,
};
pub use complex::{Simplex, SimplicialComplex};
pub use graph::AffiliationGraph;
pub use homology::{betti_numbers, HomologyConfig};
