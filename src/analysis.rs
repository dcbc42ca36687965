//! Batch Analysis: One Complex per Election Year and Affiliation
//!
//! Each dataset is loaded once; for every requested affiliation the graph,
//! complex and Betti numbers are computed independently and optionally
//! rendered. Any failure aborts the batch.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::config::Dataset;
use crate::counties::{load_counties, Affiliation, CountyMap};
use crate::error::{Error, Result};
use crate::render::{output_path, render_to_file, RenderOptions};
use crate::topology::{
    betti_numbers, complex_from_graph, AffiliationGraph, BettiComparison, BettiNumbers,
    HomologyConfig, SimplicialComplex,
};

/// Everything the batch needs to run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub datasets: Vec<Dataset>,
    pub affiliations: Vec<Affiliation>,
    pub homology: HomologyConfig,
    /// Render into this directory; `None` disables rendering
    pub output_dir: Option<PathBuf>,
    pub render: RenderOptions,
}

/// Summary of one (dataset, affiliation) complex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexReport {
    pub label: String,
    pub affiliation: Affiliation,
    pub vote: u8,
    pub counties: usize,
    pub edges: usize,
    /// Connected components of the affiliation graph
    pub components: usize,
    /// Number of maximal simplices
    pub simplices: usize,
    pub dimension: Option<usize>,
    /// Maximal simplices keyed by member count
    pub size_histogram: BTreeMap<usize, usize>,
    pub f_vector: Vec<usize>,
    pub euler_characteristic: i64,
    pub betti: BettiNumbers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

/// Intermediate products of one analysis, kept for rendering
#[derive(Debug, Clone)]
pub struct ComplexAnalysis {
    pub graph: AffiliationGraph,
    pub complex: SimplicialComplex,
    pub report: ComplexReport,
}

/// Build graph, complex and Betti numbers for one affiliation
pub fn analyze(
    label: &str,
    counties: &CountyMap,
    affiliation: Affiliation,
    homology: &HomologyConfig,
) -> ComplexAnalysis {
    let graph = AffiliationGraph::build(counties, affiliation);
    let complex = complex_from_graph(&graph, counties);
    let betti = betti_numbers(&complex, homology);
    let f_vector = complex.f_vector();

    let report = ComplexReport {
        label: label.to_string(),
        affiliation,
        vote: affiliation.vote(),
        counties: graph.node_count(),
        edges: graph.edge_count(),
        components: graph.component_count(),
        simplices: complex.len(),
        dimension: complex.dimension(),
        size_histogram: complex.size_histogram(),
        euler_characteristic: complex.euler_characteristic(),
        f_vector,
        betti,
        image: None,
    };

    info!(
        label,
        %affiliation,
        counties = report.counties,
        simplices = report.simplices,
        betti = %report.betti,
        "computed complex"
    );

    ComplexAnalysis { graph, complex, report }
}

/// Reports of a whole batch plus the cross-year comparison per affiliation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub reports: Vec<ComplexReport>,
    pub comparisons: Vec<BettiComparison>,
}

impl BatchReport {
    pub fn comparison(&self, affiliation: Affiliation) -> Option<&BettiComparison> {
        self.comparisons.iter().find(|c| c.affiliation == affiliation)
    }
}

/// Analyse every dataset for every affiliation, in order
pub fn run_batch(config: &RunConfig) -> Result<BatchReport> {
    if let Some(dir) = &config.output_dir {
        fs::create_dir_all(dir).map_err(|source| Error::Render {
            path: dir.clone(),
            source,
        })?;
    }

    let mut comparisons: Vec<BettiComparison> = config
        .affiliations
        .iter()
        .map(|&a| BettiComparison::new(a))
        .collect();
    let mut reports = Vec::new();

    for dataset in &config.datasets {
        let counties = load_counties(&dataset.path)?;

        for (&affiliation, comparison) in config.affiliations.iter().zip(comparisons.iter_mut()) {
            let mut analysis = analyze(&dataset.label, &counties, affiliation, &config.homology);

            if let Some(dir) = &config.output_dir {
                let path = output_path(dir, &dataset.label, affiliation);
                render_to_file(&path, &analysis.graph, &analysis.complex, &config.render)?;
                analysis.report.image = Some(path);
            }

            comparison.push(dataset.label.clone(), analysis.report.betti.clone());
            reports.push(analysis.report);
        }
    }

    Ok(BatchReport { reports, comparisons })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counties::read_counties;

    const TRIANGLE: &str = "\
County,\"Voted (0=R, 1=D)\",Neighbors
A,1,B; C
B,1,A; C
C,1,A; B
";

    #[test]
    fn test_three_mutual_neighbors() {
        let counties = read_counties(TRIANGLE.as_bytes()).unwrap();
        let analysis = analyze("T_", &counties, Affiliation::Democrat, &HomologyConfig::default());

        assert_eq!(analysis.complex.len(), 1);
        assert_eq!(analysis.complex.dimension(), Some(2));
        assert_eq!(analysis.report.betti.to_vec(), vec![1, 0, 0]);
        assert_eq!(analysis.report.f_vector, vec![3, 3, 1]);
        assert_eq!(analysis.report.components, 1);

        let other = analyze("T_", &counties, Affiliation::Republican, &HomologyConfig::default());
        assert_eq!(other.report.counties, 0);
        assert!(other.report.betti.is_empty());
    }

    #[test]
    fn test_ring_around_other_party() {
        // Four Republican counties ringing one Democratic county
        let csv = "\
County,\"Voted (0=R, 1=D)\",Neighbors
N,0,E; W; Core
E,0,N; S; Core
S,0,E; W; Core
W,0,S; N; Core
Core,1,N; E; S; W
";
        let counties = read_counties(csv.as_bytes()).unwrap();
        let ring = analyze("R_", &counties, Affiliation::Republican, &HomologyConfig::default());
        assert_eq!(ring.report.betti.to_vec(), vec![1, 1]);
        assert_eq!(ring.report.size_histogram, BTreeMap::from([(2, 4)]));

        let core = analyze("R_", &counties, Affiliation::Democrat, &HomologyConfig::default());
        assert_eq!(core.report.betti.to_vec(), vec![1]);
    }

    #[test]
    fn test_octahedron_encloses_a_void() {
        // Each county borders every other except its antipode
        let csv = "\
County,\"Voted (0=R, 1=D)\",Neighbors
N,1,E; W; U; D
S,1,E; W; U; D
E,1,N; S; U; D
W,1,N; S; U; D
U,1,N; S; E; W
D,1,N; S; E; W
";
        let counties = read_counties(csv.as_bytes()).unwrap();
        let shell = analyze("O_", &counties, Affiliation::Democrat, &HomologyConfig::default());

        assert_eq!(shell.report.simplices, 8);
        assert_eq!(shell.report.size_histogram, BTreeMap::from([(3, 8)]));
        assert_eq!(shell.report.f_vector, vec![6, 12, 8]);
        assert_eq!(shell.report.euler_characteristic, 2);
        assert_eq!(shell.report.betti.to_vec(), vec![1, 0, 1]);
    }
}
