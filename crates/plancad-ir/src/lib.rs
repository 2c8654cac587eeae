#![warn(missing_docs)]

//! Object description model for plancad.
//!
//! Every template in the synthesis engine reads a single [`ObjectSpec`]: a
//! closed [`ObjectType`] tag, validated [`Dimension`]s in meters, and an open
//! [`Features`] bag. This crate also holds the default-dimension table used
//! by callers and the [`proportions`] shared by the 2D and 3D templates.
//!
//! ```
//! use plancad_ir::{keys, Dimension, Features, ObjectSpec, ObjectType};
//!
//! let spec = ObjectSpec::new(
//!     ObjectType::Chair,
//!     Dimension::new(0.40, 0.40, 0.45).unwrap(),
//!     Features::new().with(keys::LEGS, 4),
//! );
//! assert_eq!(spec.features.count(keys::LEGS, 4, 1), 4);
//! ```

pub mod defaults;
pub mod dimension;
pub mod error;
pub mod features;
pub mod proportions;
pub mod request;

pub use defaults::{default_dimensions, default_table, FALLBACK_DIMENSIONS};
pub use dimension::Dimension;
pub use error::{Result, SynthesisError};
pub use features::{keys, FeatureValue, Features, RoofStyle, SeatShape, Side, MAX_COUNT};
pub use request::{ObjectRequest, PartialDimension};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Object type tag.
///
/// The set is closed. Any tag that is not recognised reads as
/// [`ObjectType::Generic`], which synthesizes a plain rectangle and box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ObjectType {
    /// Chair: seat slab on legs.
    Chair,
    /// Table: top slab on legs, rectangular or round.
    Table,
    /// Sofa: base, backrest, armrests, cushions.
    Sofa,
    /// Cabinet: hollow carcass with doors.
    Cabinet,
    /// Single room with one door and one window.
    Room,
    /// House with roof, optional garage and side windows.
    House,
    /// Anything else.
    #[default]
    Generic,
}

impl ObjectType {
    /// Every type, in registry order.
    pub const ALL: [ObjectType; 7] = [
        ObjectType::Chair,
        ObjectType::Table,
        ObjectType::Sofa,
        ObjectType::Cabinet,
        ObjectType::Room,
        ObjectType::House,
        ObjectType::Generic,
    ];

    /// Parse a type tag, case-insensitively, accepting common synonyms.
    pub fn from_tag(tag: &str) -> ObjectType {
        match tag.trim().to_ascii_lowercase().as_str() {
            "chair" | "stool" | "kursi" => ObjectType::Chair,
            "table" | "desk" | "meja" => ObjectType::Table,
            "sofa" | "couch" => ObjectType::Sofa,
            "cabinet" | "wardrobe" | "cupboard" | "lemari" => ObjectType::Cabinet,
            "room" | "bedroom" | "ruangan" | "kamar" => ObjectType::Room,
            "house" | "building" | "rumah" => ObjectType::House,
            _ => ObjectType::Generic,
        }
    }

    /// Canonical lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Chair => "chair",
            ObjectType::Table => "table",
            ObjectType::Sofa => "sofa",
            ObjectType::Cabinet => "cabinet",
            ObjectType::Room => "room",
            ObjectType::House => "house",
            ObjectType::Generic => "generic",
        }
    }
}

impl From<String> for ObjectType {
    fn from(tag: String) -> Self {
        ObjectType::from_tag(&tag)
    }
}

impl From<&str> for ObjectType {
    fn from(tag: &str) -> Self {
        ObjectType::from_tag(tag)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single input to every template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSpec {
    /// Which template family to use.
    #[serde(rename = "type", alias = "object_type")]
    pub object_type: ObjectType,
    /// Bounding box in meters.
    pub dimensions: Dimension,
    /// Feature bag.
    #[serde(default)]
    pub features: Features,
}

impl ObjectSpec {
    /// Create a spec.
    pub fn new(object_type: ObjectType, dimensions: Dimension, features: Features) -> Self {
        Self {
            object_type,
            dimensions,
            features,
        }
    }

    /// Builder-style feature insert.
    pub fn with_feature(mut self, key: &str, value: impl Into<FeatureValue>) -> Self {
        self.features.insert(key, value);
        self
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags() {
        assert_eq!(ObjectType::from_tag("Chair"), ObjectType::Chair);
        assert_eq!(ObjectType::from_tag(" couch "), ObjectType::Sofa);
        assert_eq!(ObjectType::from_tag("rumah"), ObjectType::House);
        assert_eq!(ObjectType::from_tag("lamp"), ObjectType::Generic);
        for ty in ObjectType::ALL {
            assert_eq!(ObjectType::from_tag(ty.as_str()), ty);
        }
    }

    #[test]
    fn test_spec_json() {
        let spec = ObjectSpec::new(
            ObjectType::Room,
            Dimension::new(4.0, 5.0, 3.0).unwrap(),
            Features::new(),
        )
        .with_feature(keys::DOOR_POSITION, "west");

        let json = spec.to_json().unwrap();
        assert!(json.contains(r#""type": "room""#));

        let restored = ObjectSpec::from_json(&json).unwrap();
        assert_eq!(restored, spec);
    }

    #[test]
    fn test_spec_json_unknown_type() {
        let spec = ObjectSpec::from_json(
            r#"{"type": "lamp", "dimensions": {"width": 0.3, "length": 0.3, "height": 1.5}}"#,
        )
        .unwrap();
        assert_eq!(spec.object_type, ObjectType::Generic);
        assert!(spec.features.is_empty());
    }
}
