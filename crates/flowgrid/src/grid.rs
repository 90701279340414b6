//! The flow grid facade.
//!
//! A [`FlowGrid`] pairs an orientation with alignment and spacing options
//! and exposes the two-phase host protocol: [`FlowGrid::size_that_fits`]
//! for sizing queries and [`FlowGrid::place_items`] for the final pass.
//! Both re-pack from scratch; nothing is cached between calls.

use flowgrid_types::{Align, Extent, FlowConfig, Orientation, ProposedSize, Rect, Size};

use crate::measure::{Measurer, measure_all};
use crate::packer::{FlowPacker, FlowResult};
use crate::placer::{Placement, Placer};

/// A flow layout for one orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowGrid {
    pub orientation: Orientation,
    /// Placement of each track within the bounds' main extent.
    pub track_alignment: Align,
    /// Placement of each item within its track's cross length.
    pub item_alignment: Align,
    pub track_spacing: f32,
    pub item_spacing: f32,
}

impl FlowGrid {
    /// A grid with the orientation's default options.
    pub fn new(orientation: Orientation) -> Self {
        Self::from_config(&FlowConfig::new(orientation))
    }

    /// Columns filled top to bottom, laid out left to right.
    ///
    /// Defaults: top-aligned columns, leading-aligned items, spacing 8.
    pub fn hflow() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Rows filled left to right, laid out top to bottom.
    ///
    /// Defaults: leading-aligned rows, bottom-aligned items, spacing 8.
    pub fn vflow() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn from_config(config: &FlowConfig) -> Self {
        Self {
            orientation: config.orientation,
            track_alignment: config.track_alignment(),
            item_alignment: config.item_alignment(),
            track_spacing: config.track_spacing(),
            item_spacing: config.item_spacing(),
        }
    }

    pub fn with_track_alignment(mut self, align: impl Into<Align>) -> Self {
        self.track_alignment = align.into();
        self
    }

    pub fn with_item_alignment(mut self, align: impl Into<Align>) -> Self {
        self.item_alignment = align.into();
        self
    }

    pub fn with_track_spacing(mut self, spacing: f32) -> Self {
        self.track_spacing = spacing;
        self
    }

    pub fn with_item_spacing(mut self, spacing: f32) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// The placer matching this grid's options.
    pub fn placer(&self) -> Placer {
        Placer {
            orientation: self.orientation,
            track_alignment: self.track_alignment,
            item_alignment: self.item_alignment,
            track_spacing: self.track_spacing,
            item_spacing: self.item_spacing,
        }
    }

    /// Pack already-measured extents against a main-axis `bound`.
    pub fn pack(&self, bound: f32, extents: &[Extent]) -> FlowResult {
        FlowPacker::calculate(bound, self.track_spacing, self.item_spacing, extents)
    }

    /// Preferred size for `items` under `proposal`.
    ///
    /// The main axis reports the proposed value when one is given and the
    /// longest track otherwise; the cross axis always reports the stacked
    /// extent of all tracks.
    pub fn size_that_fits<T, M>(&self, proposal: ProposedSize, items: &[T], measurer: &M) -> Size
    where
        M: Measurer<T> + ?Sized,
    {
        let o = self.orientation;
        let filled = proposal.replacing_unspecified_dimensions();
        let extents = measure_all(o, items, measurer);
        let result = self.pack(o.main_of(filled.width, filled.height), &extents);
        let main = o
            .main_of(proposal.width, proposal.height)
            .unwrap_or(result.total_cross());
        o.size(Extent::new(main, result.total_main()))
    }

    /// Pack `items` against `bounds` and hand each placement to `place`.
    pub fn place_items<T, M, F>(&self, bounds: Rect, items: &[T], measurer: &M, mut place: F)
    where
        M: Measurer<T> + ?Sized,
        F: FnMut(Placement),
    {
        let o = self.orientation;
        let extents = measure_all(o, items, measurer);
        let (_, bound) = o.main_span(&bounds);
        let result = self.pack(bound, &extents);
        let placer = self.placer();
        for placement in placer.place(bounds, &result, &extents) {
            place(placement);
        }
    }

    /// Collect the placements of [`FlowGrid::place_items`], in track order.
    pub fn placements<T, M>(&self, bounds: Rect, items: &[T], measurer: &M) -> Vec<Placement>
    where
        M: Measurer<T> + ?Sized,
    {
        let mut out = Vec::with_capacity(items.len());
        self.place_items(bounds, items, measurer, |p| out.push(p));
        out
    }
}

impl Default for FlowGrid {
    fn default() -> Self {
        Self::hflow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Intrinsic;
    use flowgrid_types::{HorizontalAlignment, Point, VerticalAlignment};

    fn items() -> Vec<Size> {
        vec![
            Size::new(20.0, 30.0),
            Size::new(10.0, 40.0),
            Size::new(30.0, 20.0),
            Size::new(15.0, 50.0),
        ]
    }

    fn transpose(s: Size) -> Size {
        Size::new(s.height, s.width)
    }

    #[test]
    fn orientation_defaults() {
        let h = FlowGrid::hflow();
        assert_eq!(h.orientation, Orientation::Horizontal);
        assert_eq!(h.track_alignment, Align::Start);
        assert_eq!(h.item_alignment, Align::Start);
        assert_eq!((h.track_spacing, h.item_spacing), (8.0, 8.0));

        let v = FlowGrid::vflow();
        assert_eq!(v.orientation, Orientation::Vertical);
        assert_eq!(v.track_alignment, Align::Start);
        assert_eq!(v.item_alignment, Align::End);
        assert_eq!(FlowGrid::default(), h);
    }

    #[test]
    fn builders_accept_host_alignments() {
        let g = FlowGrid::hflow()
            .with_track_alignment(VerticalAlignment::Bottom)
            .with_item_alignment(HorizontalAlignment::Center)
            .with_track_spacing(5.0)
            .with_item_spacing(0.0);
        assert_eq!(g.track_alignment, Align::End);
        assert_eq!(g.item_alignment, Align::Center);
        assert_eq!((g.track_spacing, g.item_spacing), (5.0, 0.0));
    }

    #[test]
    fn from_config_resolves_options() {
        let cfg = FlowConfig::from_toml(
            r#"
            orientation = "vertical"
            item_alignment = "top"
            track_spacing = 2
            "#,
        )
        .unwrap();
        let g = FlowGrid::from_config(&cfg);
        assert_eq!(g.orientation, Orientation::Vertical);
        assert_eq!(g.item_alignment, Align::Start);
        assert_eq!(g.track_spacing, 2.0);
        assert_eq!(g.item_spacing, 8.0);
    }

    #[test]
    fn hflow_size_uses_proposed_height() {
        let g = FlowGrid::hflow().with_track_spacing(5.0).with_item_spacing(0.0);
        let size = g.size_that_fits(ProposedSize::new(None, Some(60.0)), &items(), &Intrinsic);
        assert_eq!(size, Size::new(75.0, 60.0));
    }

    #[test]
    fn infinite_height_collapses_to_one_column() {
        let g = FlowGrid::hflow().with_track_spacing(5.0).with_item_spacing(0.0);
        let size = g.size_that_fits(
            ProposedSize::new(None, Some(f32::INFINITY)),
            &items(),
            &Intrinsic,
        );
        assert_eq!(size.width, 30.0);
        assert!(size.height.is_infinite());
    }

    #[test]
    fn unspecified_main_axis_uses_default_extent() {
        // Unspecified height packs against 10 units: every item gets a column.
        let g = FlowGrid::hflow().with_track_spacing(0.0).with_item_spacing(0.0);
        let size = g.size_that_fits(ProposedSize::UNSPECIFIED, &items(), &Intrinsic);
        assert_eq!(size, Size::new(75.0, 50.0));
    }

    #[test]
    fn vflow_size_uses_proposed_width() {
        let g = FlowGrid::vflow().with_track_spacing(5.0).with_item_spacing(0.0);
        let rows: Vec<Size> = items().into_iter().map(transpose).collect();
        let size = g.size_that_fits(ProposedSize::new(Some(60.0), None), &rows, &Intrinsic);
        assert_eq!(size, Size::new(60.0, 75.0));
    }

    #[test]
    fn empty_grid_has_zero_size() {
        let g = FlowGrid::vflow();
        let size = g.size_that_fits(ProposedSize::new(None, None), &[] as &[Size], &Intrinsic);
        assert_eq!(size, Size::new(0.0, 0.0));
        let placed = g.placements(Rect::new(0.0, 0.0, 100.0, 100.0), &[] as &[Size], &Intrinsic);
        assert!(placed.is_empty());
    }

    #[test]
    fn place_items_repacks_against_bounds() {
        let g = FlowGrid::hflow().with_track_spacing(5.0).with_item_spacing(0.0);
        let tall = g.placements(Rect::new(0.0, 0.0, 100.0, 200.0), &items(), &Intrinsic);
        assert!(tall.iter().all(|p| p.origin.x == 0.0));

        let short = g.placements(Rect::new(0.0, 0.0, 100.0, 60.0), &items(), &Intrinsic);
        let xs: Vec<f32> = short.iter().map(|p| p.origin.x).collect();
        assert_eq!(xs, vec![0.0, 25.0, 25.0, 60.0]);
    }

    #[test]
    fn place_items_invokes_callback_per_item() {
        let g = FlowGrid::vflow();
        let mut seen = Vec::new();
        g.place_items(Rect::new(0.0, 0.0, 50.0, 50.0), &items(), &Intrinsic, |p| {
            seen.push(p.index)
        });
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn oversized_item_is_placed_unclipped() {
        let g = FlowGrid::vflow().with_item_spacing(0.0);
        let wide = [Size::new(10.0, 10.0), Size::new(500.0, 10.0)];
        let placed = g.placements(Rect::new(0.0, 0.0, 100.0, 100.0), &wide, &Intrinsic);
        assert_eq!(placed[1].size, Size::new(500.0, 10.0));
        assert_eq!(placed[1].origin, Point::new(0.0, 18.0));
    }

    #[test]
    fn closure_measurer_with_labels() {
        let labels = ["Hi", "Bonjour", "Hallo", "Ciao"];
        let measure = |s: &&str| Size::new(s.chars().count() as f32 * 8.0, 16.0);
        let g = FlowGrid::vflow().with_item_spacing(4.0).with_track_spacing(2.0);
        let size = g.size_that_fits(ProposedSize::new(Some(100.0), None), &labels, &measure);
        // Rows: [Hi, Bonjour] = 16 + 4 + 56 = 76, [Hallo, Ciao] = 40 + 4 + 32 = 76.
        assert_eq!(size, Size::new(100.0, 34.0));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_sizes() -> impl Strategy<Value = Vec<Size>> {
            proptest::collection::vec(
                (0.0f32..120.0, 0.0f32..120.0).prop_map(|(w, h)| Size::new(w, h)),
                0..30,
            )
        }

        fn arb_align() -> impl Strategy<Value = Align> {
            prop_oneof![Just(Align::Start), Just(Align::Center), Just(Align::End)]
        }

        proptest! {
            #[test]
            fn duality_under_transposition(
                sizes in arb_sizes(),
                bound in 0.0f32..400.0,
                cross in 0.0f32..400.0,
                track_spacing in 0.0f32..16.0,
                item_spacing in 0.0f32..16.0,
                track_alignment in arb_align(),
                item_alignment in arb_align(),
            ) {
                let h = FlowGrid::hflow()
                    .with_track_alignment(track_alignment)
                    .with_item_alignment(item_alignment)
                    .with_track_spacing(track_spacing)
                    .with_item_spacing(item_spacing);
                let v = FlowGrid { orientation: Orientation::Vertical, ..h };
                let transposed: Vec<Size> = sizes.iter().copied().map(transpose).collect();

                let h_extents = measure_all(h.orientation, &sizes, &Intrinsic);
                let v_extents = measure_all(v.orientation, &transposed, &Intrinsic);
                prop_assert_eq!(h.pack(bound, &h_extents), v.pack(bound, &v_extents));

                let h_placed = h.placements(Rect::new(0.0, 0.0, cross, bound), &sizes, &Intrinsic);
                let v_placed = v.placements(Rect::new(0.0, 0.0, bound, cross), &transposed, &Intrinsic);
                prop_assert_eq!(h_placed.len(), v_placed.len());
                for (a, b) in h_placed.iter().zip(&v_placed) {
                    prop_assert_eq!(a.index, b.index);
                    prop_assert_eq!(a.origin, Point::new(b.origin.y, b.origin.x));
                }
            }

            #[test]
            fn every_item_placed_once(sizes in arb_sizes(), height in 0.0f32..400.0) {
                let g = FlowGrid::hflow();
                let placed = g.placements(Rect::new(0.0, 0.0, 1000.0, height), &sizes, &Intrinsic);
                let indices: Vec<usize> = placed.iter().map(|p| p.index).collect();
                let expected: Vec<usize> = (0..sizes.len()).collect();
                prop_assert_eq!(indices, expected);
            }

            #[test]
            fn unknown_alignment_matches_center(
                sizes in arb_sizes(),
                width in 0.0f32..400.0,
                name in "[q-z]{3,10}",
            ) {
                let bounds = Rect::new(3.0, 7.0, width, 300.0);
                let fallback = FlowGrid::vflow()
                    .with_track_alignment(name.as_str())
                    .with_item_alignment(name.as_str());
                let center = FlowGrid::vflow()
                    .with_track_alignment(Align::Center)
                    .with_item_alignment(Align::Center);
                prop_assert_eq!(
                    fallback.placements(bounds, &sizes, &Intrinsic),
                    center.placements(bounds, &sizes, &Intrinsic)
                );
            }

            #[test]
            fn start_aligned_items_do_not_overlap(
                sizes in arb_sizes(),
                width in 0.0f32..400.0,
            ) {
                let g = FlowGrid::vflow().with_item_alignment(Align::Start);
                let placed = g.placements(Rect::new(0.0, 0.0, width, 10_000.0), &sizes, &Intrinsic);
                for (i, a) in placed.iter().enumerate() {
                    for b in &placed[i + 1..] {
                        prop_assert!(!a.rect().intersects(&b.rect()));
                    }
                }
            }

            #[test]
            fn sizing_is_repeatable(sizes in arb_sizes(), width in 0.0f32..400.0) {
                let g = FlowGrid::vflow();
                let proposal = ProposedSize::new(Some(width), None);
                let first = g.size_that_fits(proposal, &sizes, &Intrinsic);
                let _ = g.size_that_fits(ProposedSize::INFINITY, &sizes, &Intrinsic);
                prop_assert_eq!(first, g.size_that_fits(proposal, &sizes, &Intrinsic));
            }
        }
    }
}
