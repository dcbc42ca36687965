//! Clique-to-simplex construction
//!
//! Every maximal clique of the affiliation graph becomes one simplex,
//! provided all its members carry the same affiliation.

use petgraph::algo::maximal_cliques as bron_kerbosch;
use std::collections::BTreeSet;
use tracing::{debug, warn};

use super::{AffiliationGraph, Simplex, SimplicialComplex};
use crate::counties::{Affiliation, CountyMap};

/// Maximal cliques of the graph as sorted county lists, isolated counties
/// included as singletons
pub fn maximal_cliques(graph: &AffiliationGraph) -> Vec<Vec<String>> {
    let mut cliques: Vec<Vec<String>> = bron_kerbosch(graph.graph())
        .into_iter()
        .filter(|clique| !clique.is_empty())
        .map(|clique| {
            let mut members: Vec<String> = clique
                .into_iter()
                .map(|node| graph.county(node).to_string())
                .collect();
            members.sort();
            members
        })
        .collect();
    cliques.sort();
    cliques
}

/// Common affiliation of all members, `None` when mixed or unknown
pub fn uniform_affiliation(clique: &[String], counties: &CountyMap) -> Option<Affiliation> {
    let values: BTreeSet<Option<Affiliation>> =
        clique.iter().map(|c| counties.affiliation_of(c)).collect();
    match values.into_iter().collect::<Vec<_>>().as_slice() {
        [Some(affiliation)] => Some(*affiliation),
        _ => None,
    }
}

/// Keep cliques whose members all carry `affiliation`.
///
/// Returns the surviving simplices and the number of cliques discarded.
pub fn filter_uniform_cliques(
    cliques: impl IntoIterator<Item = Vec<String>>,
    counties: &CountyMap,
    affiliation: Affiliation,
) -> (Vec<Simplex>, usize) {
    let mut simplices = Vec::new();
    let mut discarded = 0;

    for clique in cliques {
        if uniform_affiliation(&clique, counties) == Some(affiliation) {
            simplices.push(Simplex::new(clique));
        } else {
            warn!(?clique, %affiliation, "discarding clique with mixed affiliation");
            discarded += 1;
        }
    }

    (simplices, discarded)
}

/// Graph → maximal cliques → uniform simplices for one affiliation
pub fn build_complex(counties: &CountyMap, affiliation: Affiliation) -> SimplicialComplex {
    let graph = AffiliationGraph::build(counties, affiliation);
    complex_from_graph(&graph, counties)
}

pub fn complex_from_graph(graph: &AffiliationGraph, counties: &CountyMap) -> SimplicialComplex {
    let cliques = maximal_cliques(graph);
    let found = cliques.len();
    let (simplices, discarded) = filter_uniform_cliques(cliques, counties, graph.affiliation());

    debug!(
        affiliation = %graph.affiliation(),
        cliques = found,
        discarded,
        "enumerated maximal cliques"
    );

    SimplicialComplex::new(graph.affiliation(), simplices)
}
