pub mod highlight;

mod resolve_highlight_indices;
mod resolve_treatment;

pub use highlight::{
    find_tooth_mesh, HighlightState, HighlightStrategy, HighlightStyle, NodeNameTable,
    ToothHighlighter,
};
pub use resolve_highlight_indices::ResolveHighlightIndices;
pub use resolve_treatment::{ChartMark, ResolveChart, ResolveTreatment};
