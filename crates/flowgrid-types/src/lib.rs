//! Foundation types for flowgrid.
//!
//! This crate contains the toolkit-agnostic types shared by the flowgrid
//! crates: geometry, axis orientation, alignment, configuration, and error
//! types.

pub mod align;
pub mod axis;
pub mod config;
pub mod error;
pub mod geometry;

pub use align::{Align, HorizontalAlignment, VerticalAlignment};
pub use axis::{Extent, Orientation};
pub use config::FlowConfig;
pub use error::{FlowError, Result};
pub use geometry::{Point, ProposedSize, Rect, Size};
