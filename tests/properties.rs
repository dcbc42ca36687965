use proptest::prelude::*;

use vote_topology::{
    analyze, maximal_cliques, read_counties, write_counties, Affiliation, AffiliationGraph,
    CountyMap, CountyRecord, HomologyConfig,
};

/// County table from affiliation flags and an upper-triangular edge mask
fn county_map(votes: &[bool], edges: &[bool]) -> CountyMap {
    let n = votes.len();
    let id = |i: usize| format!("county{i:02}");
    let mut neighbors: Vec<Vec<String>> = vec![Vec::new(); n];

    let mut e = 0;
    for i in 0..n {
        for j in i + 1..n {
            if edges[e] {
                neighbors[i].push(id(j));
                neighbors[j].push(id(i));
            }
            e += 1;
        }
    }

    CountyMap::from_records(votes.iter().zip(neighbors).enumerate().map(|(i, (&vote, ns))| {
        let affiliation = if vote { Affiliation::Democrat } else { Affiliation::Republican };
        CountyRecord::new(id(i), affiliation, ns)
    }))
    .unwrap()
}

fn arb_counties() -> impl Strategy<Value = CountyMap> {
    (1usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(prop::bool::weighted(0.5), n * (n - 1) / 2),
        )
            .prop_map(|(votes, edges)| county_map(&votes, &edges))
    })
}

proptest! {
    #[test]
    fn betti_zero_counts_components(counties in arb_counties()) {
        for affiliation in Affiliation::ALL {
            let a = analyze("P_", &counties, affiliation, &HomologyConfig::default());
            prop_assert_eq!(a.report.betti.get(0), a.report.components);
        }
    }

    #[test]
    fn euler_poincare_holds(counties in arb_counties()) {
        for affiliation in Affiliation::ALL {
            let a = analyze("P_", &counties, affiliation, &HomologyConfig::default());
            prop_assert_eq!(a.report.betti.euler_characteristic(), a.report.euler_characteristic);
        }
    }

    #[test]
    fn simplices_are_uniform_cliques(counties in arb_counties()) {
        for affiliation in Affiliation::ALL {
            let a = analyze("P_", &counties, affiliation, &HomologyConfig::default());
            for simplex in a.complex.simplices() {
                for (i, u) in simplex.vertices().iter().enumerate() {
                    prop_assert_eq!(counties.affiliation_of(u), Some(affiliation));
                    for v in &simplex.vertices()[i + 1..] {
                        prop_assert!(a.graph.contains_edge(u, v));
                    }
                }
            }
        }
    }

    #[test]
    fn complete_subgraph_is_single_clique(n in 1usize..9) {
        let votes = vec![true; n];
        let edges = vec![true; n * (n - 1) / 2];
        let counties = county_map(&votes, &edges);
        let graph = AffiliationGraph::build(&counties, Affiliation::Democrat);

        let cliques = maximal_cliques(&graph);
        prop_assert_eq!(cliques.len(), 1);
        prop_assert_eq!(cliques[0].len(), n);
    }

    #[test]
    fn csv_round_trip_preserves_adjacency(counties in arb_counties()) {
        let mut buf = Vec::new();
        write_counties(&mut buf, &counties).unwrap();
        let reloaded = read_counties(buf.as_slice()).unwrap();

        prop_assert_eq!(reloaded.adjacency(), counties.adjacency());
        prop_assert!(reloaded.is_symmetric());
    }
}
