//! Scene files: a layout config, a container proposal, and item sizes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use flowgrid::{FlowGrid, Intrinsic, Placement};
use flowgrid_types::{FlowConfig, ProposedSize, Rect, Result, Size};

/// A scene loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub layout: FlowConfig,
    #[serde(default)]
    pub container: ProposedSize,
    #[serde(default)]
    pub items: Vec<Size>,
}

/// One placed item in the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedItem {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<Placement> for PlacedItem {
    fn from(p: Placement) -> Self {
        Self {
            index: p.index,
            x: p.origin.x,
            y: p.origin.y,
            width: p.size.width,
            height: p.size.height,
        }
    }
}

/// Layout output for a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub size: Size,
    pub placements: Vec<PlacedItem>,
}

impl Scene {
    pub fn from_toml(text: &str) -> Result<Self> {
        let scene: Self = toml::from_str(text)?;
        scene.layout.validate()?;
        Ok(scene)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Size the grid against the container, then place items in a rect of
    /// that size at the origin. Proposed container extents win on their axis.
    pub fn layout(&self) -> Report {
        let grid = FlowGrid::from_config(&self.layout);
        let size = grid.size_that_fits(self.container, &self.items, &Intrinsic);
        let bounds = Rect::new(
            0.0,
            0.0,
            self.container.width.unwrap_or(size.width),
            self.container.height.unwrap_or(size.height),
        );
        log::debug!(
            "placing {} items in {}x{}",
            self.items.len(),
            bounds.width,
            bounds.height
        );
        let placements = grid
            .placements(bounds, &self.items, &Intrinsic)
            .into_iter()
            .map(PlacedItem::from)
            .collect();
        Report { size, placements }
    }
}
