//! 2D view template registry.
//!
//! Every [`ObjectType`] maps to one static [`ViewTemplate`]. The table is a
//! `match` over a closed enum, so it needs no initialization and is safe to
//! read from any number of threads.

pub mod cabinet;
pub mod chair;
pub mod generic;
pub mod house;
pub mod room;
pub mod sofa;
pub mod table;

use plancad_ir::{ObjectSpec, ObjectType};

use crate::path::PathDescriptor;

/// A template function: spec and view scale in, drawing out.
pub type ViewFn = fn(&ObjectSpec, f64) -> PathDescriptor;

/// Top and front view functions for one object type.
#[derive(Clone, Copy)]
pub struct ViewTemplate {
    /// Plan view.
    pub top: ViewFn,
    /// Front elevation.
    pub front: ViewFn,
}

impl std::fmt::Debug for ViewTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewTemplate").finish_non_exhaustive()
    }
}

static CHAIR: ViewTemplate = ViewTemplate {
    top: chair::top_view,
    front: chair::front_view,
};
static TABLE: ViewTemplate = ViewTemplate {
    top: table::top_view,
    front: table::front_view,
};
static SOFA: ViewTemplate = ViewTemplate {
    top: sofa::top_view,
    front: sofa::front_view,
};
static CABINET: ViewTemplate = ViewTemplate {
    top: cabinet::top_view,
    front: cabinet::front_view,
};
static ROOM: ViewTemplate = ViewTemplate {
    top: room::top_view,
    front: room::front_view,
};
static HOUSE: ViewTemplate = ViewTemplate {
    top: house::top_view,
    front: house::front_view,
};
static GENERIC: ViewTemplate = ViewTemplate {
    top: generic::top_view,
    front: generic::front_view,
};

/// Template for a type. [`ObjectType::Generic`] gets the plain outline.
pub fn view_template(object_type: ObjectType) -> &'static ViewTemplate {
    match object_type {
        ObjectType::Chair => &CHAIR,
        ObjectType::Table => &TABLE,
        ObjectType::Sofa => &SOFA,
        ObjectType::Cabinet => &CABINET,
        ObjectType::Room => &ROOM,
        ObjectType::House => &HOUSE,
        ObjectType::Generic => &GENERIC,
    }
}
