//! Greedy track packing.
//!
//! Items are scanned once in input order. Each item joins the open track
//! unless that would push the track past the bound, in which case the track
//! is closed and the item opens the next one. A track always accepts its
//! first item, so an item longer than the bound still gets a track of its
//! own instead of being dropped.

use flowgrid_types::Extent;

/// One closed column or row.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    items: Vec<usize>,
    main_length: f32,
    cross_length: f32,
}

impl Track {
    /// Indices of the member items, in input order.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Sum of member main extents plus the item spacing between them.
    pub fn main_length(&self) -> f32 {
        self.main_length
    }

    /// Largest member cross extent.
    pub fn cross_length(&self) -> f32 {
        self.cross_length
    }
}

/// Tracks produced by one packing pass and the extents they cover.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowResult {
    tracks: Vec<Track>,
    total_main: f32,
    total_cross: f32,
}

impl FlowResult {
    fn from_tracks(tracks: Vec<Track>, track_spacing: f32) -> Self {
        let gaps = tracks.len().saturating_sub(1) as f32 * track_spacing;
        let total_main = tracks.iter().map(Track::cross_length).sum::<f32>() + gaps;
        let total_cross = tracks.iter().map(Track::main_length).fold(0.0, f32::max);
        Self {
            tracks,
            total_main,
            total_cross,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Extent perpendicular to the bound: every track's cross length plus
    /// the track spacing between them.
    pub fn total_main(&self) -> f32 {
        self.total_main
    }

    /// Extent along the bound: the longest track's main length.
    pub fn total_cross(&self) -> f32 {
        self.total_cross
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track membership as index lists.
    pub fn partition(&self) -> Vec<Vec<usize>> {
        self.tracks.iter().map(|t| t.items.clone()).collect()
    }
}

/// The track still accepting items.
#[derive(Debug, Default)]
struct OpenTrack {
    items: Vec<usize>,
    pos: f32,
    cross: f32,
}

impl OpenTrack {
    fn accepts(&self, extent: Extent, item_spacing: f32, bound: f32) -> bool {
        self.items.is_empty() || self.pos + item_spacing + extent.main <= bound
    }

    fn push(&mut self, index: usize, extent: Extent, item_spacing: f32) {
        self.pos = if self.items.is_empty() {
            extent.main
        } else {
            self.pos + item_spacing + extent.main
        };
        self.cross = self.cross.max(extent.cross);
        self.items.push(index);
    }

    fn close(self) -> Track {
        log::trace!(
            "closing track of {} items (main {}, cross {})",
            self.items.len(),
            self.pos,
            self.cross
        );
        Track {
            items: self.items,
            main_length: self.pos,
            cross_length: self.cross,
        }
    }
}

#[derive(Default)]
struct Packing {
    open: OpenTrack,
    closed: Vec<Track>,
}

/// Packs measured items into bounded tracks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowPacker;

impl FlowPacker {
    /// Pack `extents` into tracks no longer than `bound` along the main axis.
    ///
    /// `bound` may be `f32::INFINITY`, which yields a single track. Empty
    /// input yields an empty result with zero totals.
    pub fn calculate(
        bound: f32,
        track_spacing: f32,
        item_spacing: f32,
        extents: &[Extent],
    ) -> FlowResult {
        let Packing { open, mut closed } =
            extents
                .iter()
                .enumerate()
                .fold(Packing::default(), |mut acc, (index, &extent)| {
                    if !acc.open.accepts(extent, item_spacing, bound) {
                        let full = std::mem::take(&mut acc.open);
                        acc.closed.push(full.close());
                    }
                    acc.open.push(index, extent, item_spacing);
                    acc
                });
        if !open.items.is_empty() {
            closed.push(open.close());
        }

        let result = FlowResult::from_tracks(closed, track_spacing);
        log::debug!(
            "packed {} items into {} tracks (bound {bound}, main {}, cross {})",
            extents.len(),
            result.tracks.len(),
            result.total_main,
            result.total_cross
        );
        result
    }
}
