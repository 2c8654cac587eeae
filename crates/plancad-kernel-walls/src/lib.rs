#![warn(missing_docs)]

//! Wall kernel for plancad.
//!
//! - [`segment`]: cuts a rectangular door or window out of a flat panel,
//!   returning the surviving sub-panels (3D) or wall spans (2D).
//! - [`layout`]: places the compass walls of rooms, houses and garages and
//!   decides which wall carries which opening.
//!
//! Both the drafting and the solid templates consume these, which keeps the
//! plan drawing and the solid model cut in exactly the same places.

pub mod layout;
pub mod segment;

pub use layout::{house_layout, room_layout, GarageLayout, HouseLayout, RoomLayout, Wall};
pub use segment::{
    frame, plan_spans, segment, OpeningKind, PanelRole, SubPanel, WallAxis, WallOpening,
    WallPanel,
};
