//! Intrinsic size queries.

use flowgrid_types::{Extent, Orientation, Size};

/// Reports the unconstrained size of an item.
///
/// Implementations must be deterministic and free of side effects within
/// one layout pass; the engine queries each item once per packing.
pub trait Measurer<T: ?Sized> {
    /// Return the intrinsic width and height of `item`.
    fn measure(&self, item: &T) -> Size;
}

impl<T: ?Sized, F> Measurer<T> for F
where
    F: Fn(&T) -> Size,
{
    fn measure(&self, item: &T) -> Size {
        self(item)
    }
}

/// Measurer for items that are their own size.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intrinsic;

impl Measurer<Size> for Intrinsic {
    fn measure(&self, item: &Size) -> Size {
        *item
    }
}

/// Measure every item and project the sizes onto `orientation`'s axes.
pub fn measure_all<T, M>(orientation: Orientation, items: &[T], measurer: &M) -> Vec<Extent>
where
    M: Measurer<T> + ?Sized,
{
    items
        .iter()
        .map(|item| orientation.extent(measurer.measure(item)))
        .collect()
}
