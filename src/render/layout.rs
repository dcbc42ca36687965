//! Fruchterman–Reingold Spring Layout
//!
//! Nodes repel each other with force k²/d and edges pull their endpoints
//! together with force d²/k, where k = √(1/N). Displacements are capped by
//! a temperature that cools linearly over the iterations. The final
//! positions are centred on the origin and scaled into [-1, 1]².

use ndarray::{Array2, Axis};
use petgraph::graph::NodeIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::topology::AffiliationGraph;

/// Minimum distance used in force computations
const MIN_DISTANCE: f64 = 0.01;

/// Layout parameters
#[derive(Debug, Clone, Copy)]
pub struct SpringLayout {
    pub iterations: usize,
    pub seed: u64,
    /// Stop early once the mean displacement falls below this
    pub threshold: f64,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            iterations: 50,
            seed: 42,
            threshold: 1e-4,
        }
    }
}

impl SpringLayout {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// Position every node of `graph`; row i belongs to `NodeIndex::new(i)`
    pub fn compute(&self, graph: &AffiliationGraph) -> Layout {
        let n = graph.node_count();
        if n == 0 {
            return Layout { positions: Array2::zeros((0, 2)) };
        }
        if n == 1 {
            return Layout { positions: Array2::zeros((1, 2)) };
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut pos = Array2::from_shape_fn((n, 2), |_| rng.random_range(0.0..1.0));

        let mut adjacent = Array2::<f64>::zeros((n, n));
        for (a, b) in graph.edges() {
            adjacent[[a.index(), b.index()]] = 1.0;
            adjacent[[b.index(), a.index()]] = 1.0;
        }

        let k = (1.0 / n as f64).sqrt();
        let extent = |pos: &Array2<f64>, axis: usize| {
            let col = pos.column(axis);
            let max = col.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let min = col.iter().cloned().fold(f64::INFINITY, f64::min);
            max - min
        };
        let mut temperature = extent(&pos, 0).max(extent(&pos, 1)) * 0.1;
        let cooling = temperature / (self.iterations as f64 + 1.0);

        for _ in 0..self.iterations {
            let mut displacement = Array2::<f64>::zeros((n, 2));

            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let dx = pos[[i, 0]] - pos[[j, 0]];
                    let dy = pos[[i, 1]] - pos[[j, 1]];
                    let d = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                    let force = k * k / (d * d) - adjacent[[i, j]] * d / k;
                    displacement[[i, 0]] += dx * force;
                    displacement[[i, 1]] += dy * force;
                }
            }

            let mut total_step = 0.0;
            for i in 0..n {
                let (dx, dy) = (displacement[[i, 0]], displacement[[i, 1]]);
                let length = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let step_x = dx * temperature / length;
                let step_y = dy * temperature / length;
                pos[[i, 0]] += step_x;
                pos[[i, 1]] += step_y;
                total_step += (step_x * step_x + step_y * step_y).sqrt();
            }

            temperature -= cooling;
            if total_step / (n as f64) < self.threshold {
                break;
            }
        }

        Layout { positions: rescale(pos) }
    }
}

/// Centre on the origin and scale the largest coordinate to 1
fn rescale(mut pos: Array2<f64>) -> Array2<f64> {
    if let Some(mean) = pos.mean_axis(Axis(0)) {
        pos -= &mean;
    }
    let lim = pos.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if lim > 0.0 {
        pos /= lim;
    }
    pos
}

/// Node positions in [-1, 1]²
#[derive(Debug, Clone)]
pub struct Layout {
    positions: Array2<f64>,
}

impl Layout {
    pub fn len(&self) -> usize {
        self.positions.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.nrows() == 0
    }

    pub fn position(&self, node: NodeIndex) -> (f64, f64) {
        (self.positions[[node.index(), 0]], self.positions[[node.index(), 1]])
    }
}
