//! Geometry for the fishbone layout.
//!
//! Every value is a presentation choice; the defaults reproduce the
//! dashboard's diagram. Recursion levels deeper than `level_offsets_x` /
//! `level_spacing_y` reuse the last entry.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FishboneError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between consecutive rib anchors on the spine.
    pub spacing_x: f64,
    /// Vertical distance from the spine to a branch node.
    pub rib_height: f64,
    /// How far left of its rib anchor a branch node sits.
    pub rib_offset_x: f64,
    /// Gap between the last rib anchor slot and the root node.
    pub root_offset_x: f64,
    /// Vertical centre of the spine.
    pub spine_y: f64,
    /// x of the tail anchor (left end of the spine).
    pub spine_start_x: f64,
    /// Root box height; the root is raised by half of it so its left handle sits on the spine.
    pub root_height: f64,
    /// Per-level x offset from parent, starting at depth 2 (causes).
    pub level_offsets_x: Vec<f64>,
    /// Per-level vertical spacing between siblings, starting at depth 2.
    pub level_spacing_y: Vec<f64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing_x: 250.0,
            rib_height: 150.0,
            rib_offset_x: 50.0,
            root_offset_x: 100.0,
            spine_y: 300.0,
            spine_start_x: 50.0,
            root_height: 60.0,
            level_offsets_x: vec![180.0, 200.0],
            level_spacing_y: vec![80.0, 60.0],
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject spacings that would collapse or invert the diagram.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("spacing_x", self.spacing_x),
            ("rib_height", self.rib_height),
            ("root_height", self.root_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FishboneError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        let finite = [
            ("rib_offset_x", self.rib_offset_x),
            ("root_offset_x", self.root_offset_x),
            ("spine_y", self.spine_y),
            ("spine_start_x", self.spine_start_x),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(FishboneError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        for (name, levels) in [
            ("level_offsets_x", &self.level_offsets_x),
            ("level_spacing_y", &self.level_spacing_y),
        ] {
            if levels.is_empty() {
                return Err(FishboneError::InvalidConfig(format!(
                    "{name} needs at least one level"
                )));
            }
            if let Some(bad) = levels.iter().find(|v| !v.is_finite() || **v <= 0.0) {
                return Err(FishboneError::InvalidConfig(format!(
                    "{name} entries must be positive, got {bad}"
                )));
            }
        }
        Ok(())
    }

    /// x offset for children at `depth` (2 = causes).
    pub fn level_offset_x(&self, depth: usize) -> f64 {
        level_value(&self.level_offsets_x, depth)
    }

    /// Sibling spacing for children at `depth` (2 = causes).
    pub fn level_spacing(&self, depth: usize) -> f64 {
        level_value(&self.level_spacing_y, depth)
    }
}

fn level_value(levels: &[f64], depth: usize) -> f64 {
    let idx = depth.saturating_sub(2).min(levels.len().saturating_sub(1));
    levels.get(idx).copied().unwrap_or(0.0)
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
