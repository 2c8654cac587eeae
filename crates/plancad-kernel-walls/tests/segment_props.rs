//! Property-based tests for opening segmentation using the `proptest` crate.

use proptest::prelude::*;

use plancad_kernel_walls::{
    frame, plan_spans, segment, PanelRole, SubPanel, WallAxis, WallOpening, WallPanel,
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Panel sizes large enough that every non-empty remainder clears the
/// minimal-thickness threshold when the opening fractions stay in range.
fn arb_panel() -> impl Strategy<Value = WallPanel> {
    (0.5f64..20.0, 0.05f64..0.5, 0.5f64..10.0).prop_map(|(w, t, h)| WallPanel::new(w, t, h))
}

fn arb_fraction() -> impl Strategy<Value = f64> {
    0.05f64..0.95
}

fn arb_axis() -> impl Strategy<Value = WallAxis> {
    prop_oneof![Just(WallAxis::AlongX), Just(WallAxis::AlongY)]
}

const TOL: f64 = 1e-9;

fn area(pieces: &[SubPanel]) -> f64 {
    pieces.iter().map(SubPanel::area).sum()
}

fn assert_disjoint(pieces: &[SubPanel]) -> Result<(), TestCaseError> {
    for (i, a) in pieces.iter().enumerate() {
        for b in &pieces[i + 1..] {
            prop_assert!(!a.overlaps(b, TOL), "{:?} overlaps {:?}", a, b);
        }
    }
    Ok(())
}

fn assert_inside(pieces: &[SubPanel], panel: &WallPanel) -> Result<(), TestCaseError> {
    for p in pieces {
        prop_assert!(p.u_min >= -TOL && p.u_max <= panel.width + TOL);
        prop_assert!(p.v_min >= -TOL && p.v_max <= panel.height + TOL);
        prop_assert!(p.width() > 0.0 && p.height() > 0.0);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Door: area conservation and disjointness
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn door_area_is_panel_minus_hole(
        panel in arb_panel(),
        fw in arb_fraction(),
        fh in arb_fraction(),
        axis in arb_axis(),
    ) {
        let door = WallOpening::door(panel, panel.width * fw, panel.height * fh, axis);
        let pieces = segment(&door);
        let expected = panel.area() - door.width * door.height;
        prop_assert!((area(&pieces) - expected).abs() < 1e-9 * panel.area().max(1.0),
            "area {} != expected {}", area(&pieces), expected);
        assert_disjoint(&pieces)?;
        assert_inside(&pieces, &panel)?;
        prop_assert_eq!(pieces.len(), 3);
    }
}

// ---------------------------------------------------------------------------
// Window: area conservation and disjointness, with arbitrary placement
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn window_area_is_panel_minus_hole(
        panel in arb_panel(),
        fw in arb_fraction(),
        fh in 0.05f64..0.6,
        fsill in 0.1f64..0.3,
        fpos in 0.0f64..1.0,
    ) {
        let width = panel.width * fw;
        let free = panel.width - width;
        let window = WallOpening::window(
            panel,
            width,
            panel.height * fh,
            panel.height * fsill,
            WallAxis::AlongX,
        )
        .at(free * fpos);
        let pieces = segment(&window);
        let expected = panel.area() - window.area();
        // Slivers at the panel edge may be dropped; each is thinner than 1 mm.
        let slack = 1e-3 * 2.0 * panel.height + 1e-9;
        prop_assert!((area(&pieces) - expected).abs() <= slack,
            "area {} != expected {}", area(&pieces), expected);
        prop_assert!(pieces.len() >= 2 && pieces.len() <= 4);
        assert_disjoint(&pieces)?;
        assert_inside(&pieces, &panel)?;
    }
}

// ---------------------------------------------------------------------------
// Degenerate openings and frames
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn full_width_door_leaves_no_lateral_pieces(
        panel in arb_panel(),
        fh in arb_fraction(),
        extra in 0.0f64..2.0,
    ) {
        let door = WallOpening::door(panel, panel.width + extra, panel.height * fh, WallAxis::AlongY);
        let pieces = segment(&door);
        prop_assert!(pieces
            .iter()
            .all(|p| !matches!(p.role, PanelRole::Left | PanelRole::Right)));
        prop_assert!(plan_spans(&door).is_empty());
    }

    #[test]
    fn door_as_tall_as_panel_keeps_both_sides(
        panel in arb_panel(),
        fw in arb_fraction(),
        extra in 0.0f64..2.0,
    ) {
        let door = WallOpening::door(panel, panel.width * fw, panel.height + extra, WallAxis::AlongX);
        let pieces = segment(&door);
        let roles: Vec<_> = pieces.iter().map(|p| p.role).collect();
        prop_assert_eq!(roles, vec![PanelRole::Left, PanelRole::Right]);
        let expected = (panel.width - door.width) * panel.height;
        prop_assert!((area(&pieces) - expected).abs() < 1e-9 * panel.area().max(1.0));
        prop_assert_eq!(plan_spans(&door).len(), 2);
        assert_disjoint(&pieces)?;
        assert_inside(&pieces, &panel)?;
    }

    #[test]
    fn window_as_wide_as_panel_keeps_bands(
        panel in arb_panel(),
        fh in 0.05f64..0.6,
        fsill in 0.1f64..0.3,
    ) {
        let window = WallOpening::window(
            panel,
            panel.width,
            panel.height * fh,
            panel.height * fsill,
            WallAxis::AlongY,
        );
        let pieces = segment(&window);
        let roles: Vec<_> = pieces.iter().map(|p| p.role).collect();
        prop_assert_eq!(roles, vec![PanelRole::Bottom, PanelRole::Top]);
        prop_assert!(pieces.iter().all(|p| (p.width() - panel.width).abs() < TOL));
        let expected = panel.area() - window.area();
        prop_assert!((area(&pieces) - expected).abs() < 1e-9 * panel.area().max(1.0));
        assert_disjoint(&pieces)?;
    }

    #[test]
    fn opening_covering_panel_is_empty(
        panel in arb_panel(),
        extra_w in 0.0f64..2.0,
        extra_h in 0.0f64..2.0,
    ) {
        let door = WallOpening::door(panel, panel.width + extra_w, panel.height + extra_h, WallAxis::AlongX);
        prop_assert!(segment(&door).is_empty());
        prop_assert!(plan_spans(&door).is_empty());
        prop_assert!(frame(&door, 0.05).is_empty());
    }

    #[test]
    fn frame_never_overlaps_wall(
        panel in arb_panel(),
        fw in arb_fraction(),
        fh in arb_fraction(),
    ) {
        let door = WallOpening::door(panel, panel.width * fw, panel.height * fh, WallAxis::AlongX);
        let pieces = segment(&door);
        for bar in frame(&door, 0.05) {
            for p in &pieces {
                prop_assert!(!bar.overlaps(p, TOL));
            }
        }
    }

    #[test]
    fn segmentation_is_deterministic(
        panel in arb_panel(),
        fw in arb_fraction(),
        fh in arb_fraction(),
    ) {
        let door = WallOpening::door(panel, panel.width * fw, panel.height * fh, WallAxis::AlongX);
        prop_assert_eq!(segment(&door), segment(&door));
    }
}
