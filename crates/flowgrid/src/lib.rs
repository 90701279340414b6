//! flowgrid: a two-axis flow layout engine.
//!
//! Items with measured intrinsic sizes are packed, in order, into tracks
//! (columns or rows) whose length along the packing axis is limited by a
//! bound. The packed tracks are then stacked across that axis and every
//! item is given an absolute position according to the track and item
//! alignments.
//!
//! [`FlowGrid::hflow`] packs items downward into columns laid out left to
//! right; [`FlowGrid::vflow`] packs items rightward into rows laid out top
//! to bottom. Both run the same algorithm with the axes swapped.
//!
//! ```
//! use flowgrid::{FlowGrid, Intrinsic};
//! use flowgrid_types::{ProposedSize, Rect, Size};
//!
//! let items = [Size::new(40.0, 20.0), Size::new(40.0, 20.0), Size::new(40.0, 20.0)];
//! let grid = FlowGrid::vflow();
//! let size = grid.size_that_fits(ProposedSize::new(Some(100.0), None), &items, &Intrinsic);
//! assert_eq!(size, Size::new(100.0, 48.0));
//!
//! let placed = grid.placements(Rect::new(0.0, 0.0, size.width, size.height), &items, &Intrinsic);
//! assert_eq!(placed[2].origin.y, 28.0);
//! ```

pub mod grid;
pub mod measure;
pub mod packer;
pub mod placer;

pub use grid::FlowGrid;
pub use measure::{Intrinsic, Measurer, measure_all};
pub use packer::{FlowPacker, FlowResult, Track};
pub use placer::{Placement, Placer};
