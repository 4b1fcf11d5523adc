use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::index_map::IndexMaps;
use crate::operations::{
    ChartMark, HighlightStyle, NodeNameTable, ResolveTreatment, ToothHighlighter,
};
use crate::record::TreatmentRecord;
use crate::treatment::TreatmentPalette;

/// Everything specific to one mouth model and one chart theme.
///
/// Sections missing from a config file take their builtin value; a section
/// that is present replaces the builtin one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    pub index_maps: IndexMaps,
    pub node_names: NodeNameTable,
    pub palette: TreatmentPalette,
    pub highlight: HighlightStyle,
}

impl ChartConfig {
    /// The bundled model layout and chart colors.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            index_maps: IndexMaps::builtin(),
            node_names: NodeNameTable::builtin(),
            palette: TreatmentPalette::builtin(),
            highlight: HighlightStyle::default(),
        }
    }

    /// Parses a JSON config.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value (surface key,
    /// tooth number, color) is invalid.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e).into())
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&json)
    }

    /// Serializes to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e).into())
    }

    /// A highlighter using this config's node names and style.
    #[must_use]
    pub fn highlighter(&self) -> ToothHighlighter {
        ToothHighlighter::new(self.node_names.clone()).with_style(self.highlight.clone())
    }

    /// Resolves one record against this config.
    #[must_use]
    pub fn resolve(&self, record: &TreatmentRecord) -> ChartMark {
        ResolveTreatment::new(record).execute(&self.index_maps, &self.palette)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
