//! Caller-side request record.
//!
//! Upstream parsers often find a type and a few features but no size. An
//! [`ObjectRequest`] carries whatever was found and fills the gaps from the
//! default table before producing a validated [`ObjectSpec`].

use serde::{Deserialize, Serialize};

use crate::defaults::default_dimensions;
use crate::dimension::Dimension;
use crate::error::Result;
use crate::features::Features;
use crate::{ObjectSpec, ObjectType};

/// Dimensions with any axis possibly missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialDimension {
    /// Width in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Length in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Height in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// An object description as produced by a parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRequest {
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Object type tag.
    #[serde(rename = "type", alias = "object_type", default)]
    pub object_type: ObjectType,
    /// Known dimensions.
    #[serde(default)]
    pub dimensions: PartialDimension,
    /// Feature bag.
    #[serde(default)]
    pub features: Features,
}

impl ObjectRequest {
    /// Request for a type with no dimensions or features.
    pub fn new(object_type: ObjectType) -> Self {
        Self {
            object_type,
            ..Self::default()
        }
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fill missing axes from the default table and validate.
    pub fn resolve(&self) -> Result<ObjectSpec> {
        let defaults = default_dimensions(self.object_type);
        let dimensions = Dimension::new(
            self.dimensions.width.unwrap_or(defaults.width),
            self.dimensions.length.unwrap_or(defaults.length),
            self.dimensions.height.unwrap_or(defaults.height),
        )?;
        Ok(ObjectSpec {
            object_type: self.object_type,
            dimensions,
            features: self.features.clone(),
        })
    }
}
