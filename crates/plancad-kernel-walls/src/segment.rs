//! Opening segmentation.
//!
//! A wall panel with a rectangular door or window cut into it is replaced by
//! up to four solid sub-panels that tile the panel exactly, minus the hole.
//! Panel-local coordinates: `u` runs along the panel width from 0 to
//! `panel.width`, `v` runs up from 0 to `panel.height`. Thickness is carried
//! through unchanged; the plan axis only matters when a caller maps `u` back
//! into the world.
//!
//! ```text
//!   window                    door
//!   +-----------------+       +----+-----+----+
//!   |       Top       |       |    | Top |    |
//!   +----+------+-----+       |    +-----+    |
//!   |Left| hole |Right|       |Left|hole |Right
//!   +----+------+-----+       |    |     |    |
//!   |     Bottom      |       |    |     |    |
//!   +-----------------+       +----+-----+----+
//! ```

use plancad_kernel_math::Tolerance;
use tracing::debug;

/// Plan direction a wall runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallAxis {
    /// Runs east-west; thickness along y.
    AlongX,
    /// Runs south-north; thickness along x.
    AlongY,
}

/// A flat rectangular wall panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPanel {
    /// Extent along the wall.
    pub width: f64,
    /// Extent through the wall.
    pub thickness: f64,
    /// Extent upward.
    pub height: f64,
}

impl WallPanel {
    /// Create a panel.
    pub fn new(width: f64, thickness: f64, height: f64) -> Self {
        Self {
            width,
            thickness,
            height,
        }
    }

    /// Face area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Door or window, decided by whether the opening starts at the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningKind {
    /// Starts at the floor; nothing survives below it.
    Door,
    /// Starts above the floor; the panel survives below and above it.
    Window,
}

impl OpeningKind {
    /// Lowercase name, used in part labels.
    pub fn as_str(self) -> &'static str {
        match self {
            OpeningKind::Door => "door",
            OpeningKind::Window => "window",
        }
    }
}

/// A rectangular opening in a wall panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallOpening {
    /// The panel being cut.
    pub panel: WallPanel,
    /// Opening extent along the wall.
    pub width: f64,
    /// Opening extent upward.
    pub height: f64,
    /// Distance from the floor to the bottom of the opening.
    pub vertical_offset: f64,
    /// Left edge of the opening along the wall; `None` centers it.
    pub lateral_offset: Option<f64>,
    /// Plan direction of the panel.
    pub axis: WallAxis,
}

impl WallOpening {
    /// A door centered in the panel.
    pub fn door(panel: WallPanel, width: f64, height: f64, axis: WallAxis) -> Self {
        Self {
            panel,
            width,
            height,
            vertical_offset: 0.0,
            lateral_offset: None,
            axis,
        }
    }

    /// A window centered in the panel with its sill at `sill`.
    pub fn window(panel: WallPanel, width: f64, height: f64, sill: f64, axis: WallAxis) -> Self {
        Self {
            panel,
            width,
            height,
            vertical_offset: sill,
            lateral_offset: None,
            axis,
        }
    }

    /// Place the opening's left edge at `u` instead of centering it.
    pub fn at(mut self, u: f64) -> Self {
        self.lateral_offset = Some(u);
        self
    }

    /// Door if the opening starts at the floor, window otherwise.
    pub fn kind(&self) -> OpeningKind {
        if Tolerance::DEFAULT.is_degenerate(self.vertical_offset) {
            OpeningKind::Door
        } else {
            OpeningKind::Window
        }
    }

    /// Whether the hole, clamped into the panel, leaves no solid face at
    /// all: it covers the full width and the full height.
    pub fn is_degenerate(&self) -> bool {
        let tol = Tolerance::DEFAULT;
        let (u0, u1) = self.lateral_range();
        let (v0, v1) = self.vertical_range();
        tol.is_degenerate(u0)
            && tol.is_degenerate(self.panel.width - u1)
            && tol.is_degenerate(v0)
            && tol.is_degenerate(self.panel.height - v1)
    }

    /// Whether the clamped hole is big enough to cut anything and still
    /// leaves some of the panel standing.
    pub fn has_hole(&self) -> bool {
        let tol = Tolerance::DEFAULT;
        let (u0, u1) = self.lateral_range();
        let (v0, v1) = self.vertical_range();
        !tol.is_degenerate(u1 - u0) && !tol.is_degenerate(v1 - v0) && !self.is_degenerate()
    }

    /// `(u_min, u_max)` of the hole, clamped into the panel.
    pub fn lateral_range(&self) -> (f64, f64) {
        let free = (self.panel.width - self.width).max(0.0);
        let start = self
            .lateral_offset
            .unwrap_or(free / 2.0)
            .clamp(0.0, free);
        (start, start + self.width.min(self.panel.width))
    }

    /// `(v_min, v_max)` of the hole, clamped into the panel.
    pub fn vertical_range(&self) -> (f64, f64) {
        let bottom = match self.kind() {
            OpeningKind::Door => 0.0,
            OpeningKind::Window => self.vertical_offset.min(self.panel.height),
        };
        (bottom, (bottom + self.height).min(self.panel.height))
    }

    /// Area of the hole within the panel.
    pub fn area(&self) -> f64 {
        let (u0, u1) = self.lateral_range();
        let (v0, v1) = self.vertical_range();
        (u1 - u0) * (v1 - v0)
    }
}

/// Position of a sub-panel relative to the opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelRole {
    /// Uncut wall.
    Full,
    /// Left of the opening.
    Left,
    /// Right of the opening.
    Right,
    /// Above the opening.
    Top,
    /// Below the opening.
    Bottom,
}

impl PanelRole {
    /// Lowercase name, used in part labels.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelRole::Full => "full",
            PanelRole::Left => "left",
            PanelRole::Right => "right",
            PanelRole::Top => "top",
            PanelRole::Bottom => "bottom",
        }
    }
}

/// A surviving rectangle of a panel, in panel-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubPanel {
    /// Where this piece sits relative to the opening.
    pub role: PanelRole,
    /// Start along the wall.
    pub u_min: f64,
    /// End along the wall.
    pub u_max: f64,
    /// Bottom.
    pub v_min: f64,
    /// Top.
    pub v_max: f64,
    /// Extent through the wall.
    pub thickness: f64,
}

impl SubPanel {
    /// The whole uncut panel.
    pub fn full(panel: &WallPanel) -> Self {
        Self {
            role: PanelRole::Full,
            u_min: 0.0,
            u_max: panel.width,
            v_min: 0.0,
            v_max: panel.height,
            thickness: panel.thickness,
        }
    }

    /// Extent along the wall.
    pub fn width(&self) -> f64 {
        self.u_max - self.u_min
    }

    /// Extent upward.
    pub fn height(&self) -> f64 {
        self.v_max - self.v_min
    }

    /// Face area.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Whether the interiors of two sub-panels intersect by more than `tol`.
    pub fn overlaps(&self, other: &SubPanel, tol: f64) -> bool {
        self.u_min + tol < other.u_max
            && other.u_min + tol < self.u_max
            && self.v_min + tol < other.v_max
            && other.v_min + tol < self.v_max
    }

    fn survives(&self, tol: &Tolerance) -> bool {
        !tol.is_degenerate(self.width())
            && !tol.is_degenerate(self.height())
            && !tol.is_degenerate(self.thickness)
    }
}

fn piece(role: PanelRole, u: (f64, f64), v: (f64, f64), thickness: f64) -> SubPanel {
    SubPanel {
        role,
        u_min: u.0,
        u_max: u.1,
        v_min: v.0,
        v_max: v.1,
        thickness,
    }
}

/// Cut an opening out of its panel.
///
/// Returns the surviving sub-panels. The hole is clamped into the panel and
/// each piece thinner than [`Tolerance::min_thickness`] on any axis is
/// dropped on its own: a door as tall as the wall loses only its top piece,
/// a window as wide as the wall keeps its bottom and top bands. Only an
/// opening covering the whole face yields an empty set.
pub fn segment(opening: &WallOpening) -> Vec<SubPanel> {
    let tol = Tolerance::DEFAULT;
    let panel = opening.panel;
    if opening.is_degenerate() {
        debug!(
            panel_width = panel.width,
            panel_height = panel.height,
            opening_width = opening.width,
            opening_height = opening.height,
            "opening covers the panel, no sub-panels survive"
        );
        return Vec::new();
    }

    let (u0, u1) = opening.lateral_range();
    let (v0, v1) = opening.vertical_range();
    let (w, h, t) = (panel.width, panel.height, panel.thickness);

    let pieces = match opening.kind() {
        OpeningKind::Door => vec![
            piece(PanelRole::Left, (0.0, u0), (0.0, h), t),
            piece(PanelRole::Right, (u1, w), (0.0, h), t),
            piece(PanelRole::Top, (u0, u1), (v1, h), t),
        ],
        OpeningKind::Window => vec![
            piece(PanelRole::Bottom, (0.0, w), (0.0, v0), t),
            piece(PanelRole::Left, (0.0, u0), (v0, v1), t),
            piece(PanelRole::Right, (u1, w), (v0, v1), t),
            piece(PanelRole::Top, (0.0, w), (v1, h), t),
        ],
    };

    pieces.into_iter().filter(|p| p.survives(&tol)).collect()
}

/// Lateral spans of wall that remain at floor-plan cut height.
///
/// This is the 2D form of [`segment`]: the plan line of the wall is broken
/// across the opening. A hole clamped to nothing, such as a window whose
/// sill is above the wall, leaves the wall as one full span; an opening
/// covering the whole panel leaves none.
pub fn plan_spans(opening: &WallOpening) -> Vec<(f64, f64)> {
    if !opening.has_hole()
        && !opening.is_degenerate()
        && !Tolerance::DEFAULT.is_degenerate(opening.panel.width)
    {
        return vec![(0.0, opening.panel.width)];
    }
    segment(opening)
        .into_iter()
        .filter(|p| matches!(p.role, PanelRole::Left | PanelRole::Right))
        .map(|p| (p.u_min, p.u_max))
        .collect()
}

/// Frame bars lining the inside of an opening.
///
/// A door gets two jambs and a lintel, a window gets four bars. Bars sit
/// inside the hole so they never overlap the surviving sub-panels. Nothing is
/// returned for a degenerate opening or one too small to hold the bars.
pub fn frame(opening: &WallOpening, bar: f64) -> Vec<SubPanel> {
    let tol = Tolerance::DEFAULT;
    if opening.is_degenerate() || tol.is_degenerate(bar) {
        return Vec::new();
    }
    let (u0, u1) = opening.lateral_range();
    let (v0, v1) = opening.vertical_range();
    if 2.0 * bar >= u1 - u0 || 2.0 * bar >= v1 - v0 {
        return Vec::new();
    }
    let t = opening.panel.thickness;

    let pieces = match opening.kind() {
        OpeningKind::Door => vec![
            piece(PanelRole::Left, (u0, u0 + bar), (v0, v1), t),
            piece(PanelRole::Right, (u1 - bar, u1), (v0, v1), t),
            piece(PanelRole::Top, (u0 + bar, u1 - bar), (v1 - bar, v1), t),
        ],
        OpeningKind::Window => vec![
            piece(PanelRole::Left, (u0, u0 + bar), (v0, v1), t),
            piece(PanelRole::Right, (u1 - bar, u1), (v0, v1), t),
            piece(PanelRole::Bottom, (u0 + bar, u1 - bar), (v0, v0 + bar), t),
            piece(PanelRole::Top, (u0 + bar, u1 - bar), (v1 - bar, v1), t),
        ],
    };

    pieces.into_iter().filter(|p| p.survives(&tol)).collect()
}
