//! Coordinate resolution for packed tracks.
//!
//! Tracks are stacked along the cross axis from the start of the bounds,
//! separated by the track spacing. Within the bounds' main extent each
//! track is positioned by the track alignment; within a track's cross
//! length each item is positioned by the item alignment.

use flowgrid_types::{Align, Extent, Orientation, Point, Rect, Size};

use crate::packer::FlowResult;

/// Final position of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the item in the input sequence.
    pub index: usize,
    /// Top-left corner in the coordinate space of the bounds.
    pub origin: Point,
    /// Intrinsic size the item was packed with.
    pub size: Size,
}

impl Placement {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Resolves absolute positions for a packed [`FlowResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placer {
    pub orientation: Orientation,
    pub track_alignment: Align,
    pub item_alignment: Align,
    pub track_spacing: f32,
    pub item_spacing: f32,
}

impl Placer {
    /// Lazily yield a placement for every packed item, track by track.
    ///
    /// `extents` must be the slice `result` was packed from.
    ///
    /// # Panics
    ///
    /// Panics if a track refers to an index outside `extents`.
    pub fn place<'a>(
        &'a self,
        bounds: Rect,
        result: &'a FlowResult,
        extents: &'a [Extent],
    ) -> impl Iterator<Item = Placement> + 'a {
        let orientation = self.orientation;
        let (main_origin, main_len) = orientation.main_span(&bounds);
        let (cross_origin, _) = orientation.cross_span(&bounds);

        result
            .tracks()
            .iter()
            .scan(cross_origin, move |cursor, track| {
                let track_cross = *cursor;
                *cursor += track.cross_length() + self.track_spacing;
                Some((track_cross, track))
            })
            .flat_map(move |(track_cross, track)| {
                let main_start =
                    self.track_alignment
                        .offset(main_origin, main_len, track.main_length());
                track.items().iter().scan(main_start, move |main, &index| {
                    let extent = extents[index];
                    let cross =
                        self.item_alignment
                            .offset(track_cross, track.cross_length(), extent.cross);
                    let origin = orientation.point(*main, cross);
                    *main += extent.main + self.item_spacing;
                    Some(Placement {
                        index,
                        origin,
                        size: orientation.size(extent),
                    })
                })
            })
    }
}
