//! Render Module: Pictures of Voting Complexes
//!
//! Purely illustrative. A spring layout places the counties of one
//! affiliation in the plane and the complex is drawn over it as SVG.
//! No computed invariant depends on this module.

mod layout;
mod svg;

pub use layout::{Layout, SpringLayout};
pub use svg::{
    affiliation_color, output_path, render_svg, render_to_file, render_with_layout, shading,
    RenderOptions, MAX_SHADED_SIZE,
};
