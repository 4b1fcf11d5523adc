//! Tooth and surface resolution for 3D dental charts.
//!
//! Turns clinical treatment records (FDI tooth number, surface shorthand,
//! treatment label) into the identifiers a renderer needs: canonical
//! surfaces, material indices on a tooth mesh, a treatment key and its chart
//! color. [`operations::ToothHighlighter`] additionally emphasizes one tooth
//! in a caller-owned scene graph.
//!
//! Chart-facing operations are total: malformed input degrades to an empty
//! or default result instead of an error, so one bad record never blanks the
//! rest of the chart.

pub mod config;
pub mod dentition;
pub mod error;
pub mod index_map;
pub mod operations;
pub mod record;
pub mod scene;
pub mod surface;
pub mod treatment;

pub use config::ChartConfig;
pub use dentition::{ToothClass, ToothNumber};
pub use error::{DentisError, Result};
pub use record::TreatmentRecord;
pub use surface::SurfaceCode;
pub use treatment::TreatmentKey;
