//! # vote-topology
//!
//! The Shape of the Vote: Simplicial Complexes of Same-Party County Regions
//!
//! ## Framework
//!
//! For one election year, each county carries a binary affiliation
//! (0 = Republican, 1 = Democrat) and a list of bordering counties. Fixing
//! one affiliation, counties of that party that border each other form a
//! graph; every maximal clique of that graph spans a simplex. The Betti
//! numbers of the resulting complex summarise the shape of the party's
//! territory:
//!
//! - β₀: separate same-party regions
//! - β₁: rings of counties enclosing the other party
//! - β₂ and above: enclosed higher-dimensional voids
//!
//! Comparing these sequences across election years shows how that shape
//! changes over time.
//!
//! ### Pipeline
//!
//! 1. **Counties**: CSV table → validated adjacency map
//! 2. **Topology**: affiliation graph → maximal cliques → simplices →
//!    Betti numbers by boundary matrix reduction over Z/2Z
//! 3. **Render**: optional SVG picture of the complex
//! 4. **Analysis**: the batch over years and affiliations
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Bron & Kerbosch, "Finding all cliques of an undirected graph" (1973)

pub mod analysis;
pub mod config;
pub mod counties;
pub mod error;
pub mod render;
pub mod topology;

pub use error::{Error, Result};

// Re-exports from counties
pub use counties::{
    load_counties,
    read_counties,
    save_counties,
    write_counties,
    Affiliation,
    CountyMap,
    CountyRecord,
};

// Re-exports from topology
pub use topology::{
    // Complex construction
    AffiliationGraph,
    Simplex,
    SimplicialComplex,
    build_complex,
    filter_uniform_cliques,
    maximal_cliques,
    // Homology
    BettiComparison,
    BettiNumbers,
    HomologyConfig,
    betti_numbers,
};

// Re-exports from analysis
pub use analysis::{
    BatchReport,
    ComplexAnalysis,
    ComplexReport,
    RunConfig,
    analyze,
    run_batch,
};

pub use config::{Config, Dataset, Manifest};
pub use render::{RenderOptions, SpringLayout};
