//! Default dimensions used when a request leaves them out.

use crate::dimension::Dimension;
use crate::ObjectType;

/// Dimensions for any type without its own entry.
pub const FALLBACK_DIMENSIONS: Dimension = Dimension {
    width: 1.0,
    length: 1.0,
    height: 0.8,
};

static DEFAULT_DIMENSIONS: [(ObjectType, Dimension); 4] = [
    (
        ObjectType::Chair,
        Dimension {
            width: 0.40,
            length: 0.40,
            height: 0.45,
        },
    ),
    (
        ObjectType::Table,
        Dimension {
            width: 0.80,
            length: 1.20,
            height: 0.75,
        },
    ),
    (
        ObjectType::Room,
        Dimension {
            width: 4.0,
            length: 5.0,
            height: 3.0,
        },
    ),
    (
        ObjectType::House,
        Dimension {
            width: 8.0,
            length: 10.0,
            height: 3.5,
        },
    ),
];

/// The static default table, one entry per type that has its own defaults.
pub fn default_table() -> &'static [(ObjectType, Dimension)] {
    &DEFAULT_DIMENSIONS
}

/// Default dimensions for a type.
pub fn default_dimensions(object_type: ObjectType) -> Dimension {
    DEFAULT_DIMENSIONS
        .iter()
        .find(|(t, _)| *t == object_type)
        .map(|(_, d)| *d)
        .unwrap_or(FALLBACK_DIMENSIONS)
}
