//! Both views placed on one drawing sheet.

use plancad_kernel_drafting::{DraftingViews, PathDescriptor, ViewKind};
use serde::{Deserialize, Serialize};

use crate::config::SheetSettings;

/// Top and front views in sheet coordinates.
///
/// The top view sits at `(margin, margin)` and the front view to its right
/// at `(width * scale + 2 * margin, margin)`. Both are y-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Plan view, placed.
    pub top: PathDescriptor,
    /// Front elevation, placed.
    pub front: PathDescriptor,
    /// Sheet width including margins.
    pub width: f64,
    /// Sheet height including margins.
    pub height: f64,
}

impl Sheet {
    /// Place views drawn at `settings.scale` for an object `object_width`
    /// metres wide.
    pub fn layout(views: &DraftingViews, object_width: f64, settings: &SheetSettings) -> Sheet {
        let m = settings.margin;
        let front_x = object_width * settings.scale + 2.0 * m;
        let top = views.top.translated(m, m);
        let front = views.front.translated(front_x, m);

        let mut width = front_x + m;
        let mut height = 2.0 * m;
        for path in [&top, &front] {
            if let Some(b) = path.bounds() {
                width = width.max(b.max.x + m);
                height = height.max(b.max.y + m);
            }
        }
        Sheet {
            top,
            front,
            width,
            height,
        }
    }

    /// Placed drawing for one view.
    pub fn view(&self, kind: ViewKind) -> &PathDescriptor {
        match kind {
            ViewKind::Top => &self.top,
            ViewKind::Front => &self.front,
        }
    }

    /// Views paired with their kind, in sheet order.
    pub fn views(&self) -> impl Iterator<Item = (ViewKind, &PathDescriptor)> {
        ViewKind::ALL.into_iter().map(move |k| (k, self.view(k)))
    }
}
