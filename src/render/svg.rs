//! SVG drawing of a complex over its affiliation graph.
//!
//! The graph is drawn in black; each simplex of 3..=7 counties has its
//! edges redrawn in the party colour and its facets shaded, more opaque
//! the larger the simplex.

use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::layout::{Layout, SpringLayout};
use crate::counties::Affiliation;
use crate::error::{Error, Result};
use crate::topology::{AffiliationGraph, SimplicialComplex};

const TITLE: &str = "Simplicial Complex with Higher-Dimensional Simplices";
const BACKGROUND: &str = "#f8f8f8";

/// Largest simplex whose facets are shaded
pub const MAX_SHADED_SIZE: usize = 7;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub margin: f64,
    pub node_radius: f64,
    pub layout: SpringLayout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 900,
            margin: 60.0,
            node_radius: 2.5,
            layout: SpringLayout::default(),
        }
    }
}

/// Fill colour of an affiliation's simplices
pub fn affiliation_color(affiliation: Affiliation) -> &'static str {
    match affiliation {
        Affiliation::Democrat => "blue",
        Affiliation::Republican => "red",
    }
}

/// Face size and opacity used to shade a simplex with `size` members
pub fn shading(size: usize) -> Option<(usize, f64)> {
    match size {
        3 => Some((3, 0.3)),
        4..=MAX_SHADED_SIZE => Some((size - 1, size as f64 / 10.0)),
        _ => None,
    }
}

/// `{dir}/{label}{vote}.svg`
pub fn output_path(dir: &Path, label: &str, affiliation: Affiliation) -> PathBuf {
    dir.join(format!("{label}{}.svg", affiliation.vote()))
}

struct Canvas {
    width: f64,
    height: f64,
    margin: f64,
}

impl Canvas {
    fn project(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let w = self.width - 2.0 * self.margin;
        let h = self.height - 2.0 * self.margin;
        // SVG y grows downwards
        (self.margin + (x + 1.0) / 2.0 * w, self.margin + (1.0 - y) / 2.0 * h)
    }
}

/// Render `complex` over `graph` as a standalone SVG document
pub fn render_svg(graph: &AffiliationGraph, complex: &SimplicialComplex, options: &RenderOptions) -> String {
    let layout = options.layout.compute(graph);
    render_with_layout(graph, complex, &layout, options)
}

pub fn render_with_layout(
    graph: &AffiliationGraph,
    complex: &SimplicialComplex,
    layout: &Layout,
    options: &RenderOptions,
) -> String {
    let canvas = Canvas {
        width: options.width as f64,
        height: options.height as f64,
        margin: options.margin,
    };
    let color = affiliation_color(complex.affiliation());
    let point = |county: &str| graph.node(county).map(|n| canvas.project(layout.position(n)));

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = options.width,
        h = options.height
    ));
    svg.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{BACKGROUND}\"/>\n"
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"18\">{TITLE}</text>\n",
        canvas.width / 2.0,
        options.margin / 2.0
    ));

    svg.push_str("  <g stroke=\"black\" stroke-width=\"1\">\n");
    for (a, b) in graph.edges() {
        let (x1, y1) = canvas.project(layout.position(a));
        let (x2, y2) = canvas.project(layout.position(b));
        svg.push_str(&format!(
            "    <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\"/>\n"
        ));
    }
    svg.push_str("  </g>\n");

    svg.push_str("  <g fill=\"black\">\n");
    for node in graph.graph().node_indices() {
        let (x, y) = canvas.project(layout.position(node));
        svg.push_str(&format!(
            "    <circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{}\"/>\n",
            options.node_radius
        ));
    }
    svg.push_str("  </g>\n");

    svg.push_str(&format!("  <g stroke=\"{color}\" fill=\"{color}\">\n"));
    for simplex in complex.simplices().iter().filter(|s| s.len() >= 3) {
        let members: Vec<&str> = simplex.vertices().iter().map(String::as_str).collect();

        for edge in members.iter().copied().combinations(2) {
            if let (Some((x1, y1)), Some((x2, y2))) = (point(edge[0]), point(edge[1])) {
                svg.push_str(&format!(
                    "    <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke-width=\"2\"/>\n"
                ));
            }
        }

        let Some((face_size, opacity)) = shading(simplex.len()) else {
            continue;
        };
        for face in members.iter().copied().combinations(face_size) {
            let points: Option<Vec<(f64, f64)>> = face.iter().map(|c| point(*c)).collect();
            let Some(points) = points else { continue };
            let coords: Vec<String> = points.iter().map(|(x, y)| format!("{x:.2},{y:.2}")).collect();
            svg.push_str(&format!(
                "    <polygon points=\"{}\" fill-opacity=\"{opacity:.1}\" stroke=\"none\"/>\n",
                coords.join(" ")
            ));
        }
    }
    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

/// Render and write to `path`
pub fn render_to_file(
    path: &Path,
    graph: &AffiliationGraph,
    complex: &SimplicialComplex,
    options: &RenderOptions,
) -> Result<()> {
    let svg = render_svg(graph, complex, options);
    fs::write(path, svg).map_err(|source| Error::Render {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), simplices = complex.len(), "rendered complex");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counties::{CountyMap, CountyRecord};
    use crate::topology::build_complex;

    fn clique(n: usize) -> CountyMap {
        let ids: Vec<String> = (0..n).map(|i| format!("k{i}")).collect();
        CountyMap::from_records(ids.iter().map(|id| {
            CountyRecord::new(id.clone(), Affiliation::Democrat, ids.iter().filter(|n| *n != id).cloned())
        }))
        .unwrap()
    }

    fn render(n: usize) -> String {
        let counties = clique(n);
        let graph = AffiliationGraph::build(&counties, Affiliation::Democrat);
        let complex = build_complex(&counties, Affiliation::Democrat);
        render_svg(&graph, &complex, &RenderOptions::default())
    }

    #[test]
    fn test_shading_table() {
        assert_eq!(shading(2), None);
        assert_eq!(shading(3), Some((3, 0.3)));
        assert_eq!(shading(4), Some((3, 0.4)));
        assert_eq!(shading(7), Some((6, 0.7)));
        assert_eq!(shading(8), None);
    }

    #[test]
    fn test_triangle_has_one_fill() {
        let svg = render(3);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(TITLE));
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert!(svg.contains("fill-opacity=\"0.3\""));
        assert_eq!(svg.matches("<circle").count(), 3);
    }

    #[test]
    fn test_tetrahedron_fills_each_face() {
        let svg = render(4);
        assert_eq!(svg.matches("<polygon").count(), 4);
        assert!(svg.contains("fill-opacity=\"0.4\""));
    }

    #[test]
    fn test_large_simplex_not_shaded() {
        let svg = render(8);
        assert_eq!(svg.matches("<polygon").count(), 0);
    }

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("out"), "VA2020_", Affiliation::Republican);
        assert_eq!(path, Path::new("out/VA2020_0.svg"));
    }
}
