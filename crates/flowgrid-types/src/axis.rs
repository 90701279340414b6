//! Orientation-relative axes.
//!
//! The engine is written once against a *main* axis (the direction items
//! accumulate in within one track, limited by the bound) and a *cross* axis
//! (the direction tracks are stacked in). An [`Orientation`] picks which
//! screen axis plays which role.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// Flow direction of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Items pack downward into columns; columns run left to right.
    #[serde(alias = "hflow")]
    Horizontal,
    /// Items pack rightward into rows; rows run top to bottom.
    #[serde(alias = "vflow")]
    Vertical,
}

/// A size expressed in orientation-relative axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    /// Length along the packing direction.
    pub main: f32,
    /// Length across the packing direction.
    pub cross: f32,
}

impl Extent {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(main: f32, cross: f32) -> Self {
        Self { main, cross }
    }
}

impl Orientation {
    /// The other orientation.
    pub fn transposed(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Project a screen size onto this orientation's axes.
    pub fn extent(self, size: Size) -> Extent {
        match self {
            Self::Horizontal => Extent::new(size.height, size.width),
            Self::Vertical => Extent::new(size.width, size.height),
        }
    }

    /// Inverse of [`Orientation::extent`].
    pub fn size(self, extent: Extent) -> Size {
        match self {
            Self::Horizontal => Size::new(extent.cross, extent.main),
            Self::Vertical => Size::new(extent.main, extent.cross),
        }
    }

    /// Build a screen point from main/cross coordinates.
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(cross, main),
            Self::Vertical => Point::new(main, cross),
        }
    }

    /// Main-axis component of an optional proposal pair `(width, height)`.
    pub fn main_of<T>(self, width: T, height: T) -> T {
        match self {
            Self::Horizontal => height,
            Self::Vertical => width,
        }
    }

    /// Start coordinate and length of `rect` along the main axis.
    pub fn main_span(self, rect: &Rect) -> (f32, f32) {
        match self {
            Self::Horizontal => (rect.y, rect.height),
            Self::Vertical => (rect.x, rect.width),
        }
    }

    /// Start coordinate and length of `rect` along the cross axis.
    pub fn cross_span(self, rect: &Rect) -> (f32, f32) {
        self.transposed().main_span(rect)
    }
}
