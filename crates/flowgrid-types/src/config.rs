//! Layout configuration loaded from TOML.
//!
//! Every option except the orientation is optional; missing values fall
//! back to the orientation's defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::align::Align;
use crate::axis::Orientation;
use crate::error::{FlowError, Result};

/// Default gap between tracks and between items, in layout units.
pub const DEFAULT_SPACING: f32 = 8.0;

/// Options recognized by both flow orientations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    pub orientation: Orientation,
    /// Placement of each track along the main axis of the bounds.
    #[serde(default)]
    pub track_alignment: Option<Align>,
    /// Placement of each item across its track.
    #[serde(default)]
    pub item_alignment: Option<Align>,
    #[serde(default)]
    pub track_spacing: Option<f32>,
    #[serde(default)]
    pub item_spacing: Option<f32>,
}

impl FlowConfig {
    /// A config with every option at the orientation's default.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            track_alignment: None,
            item_alignment: None,
            track_spacing: None,
            item_spacing: None,
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("loading flow config from {}", path.display());
        Self::from_toml(&text)
    }

    /// Reject spacing the engine cannot lay out meaningfully.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("track_spacing", self.track_spacing),
            ("item_spacing", self.item_spacing),
        ] {
            if let Some(v) = value {
                if !(v >= 0.0 && v.is_finite()) {
                    return Err(FlowError::Config(format!(
                        "{name} must be a finite non-negative number, got {v}"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn track_alignment(&self) -> Align {
        self.track_alignment.unwrap_or(Align::Start)
    }

    /// Columns default to leading items; rows default to bottom-aligned
    /// items.
    pub fn item_alignment(&self) -> Align {
        self.item_alignment.unwrap_or(match self.orientation {
            Orientation::Horizontal => Align::Start,
            Orientation::Vertical => Align::End,
        })
    }

    pub fn track_spacing(&self) -> f32 {
        self.track_spacing.unwrap_or(DEFAULT_SPACING)
    }

    pub fn item_spacing(&self) -> f32 {
        self.item_spacing.unwrap_or(DEFAULT_SPACING)
    }
}
