//! Named feature bag attached to every object.
//!
//! Keys come from an open vocabulary. Templates read the keys they know and
//! ignore the rest, and every reader takes a per-type default for a missing
//! key, so a request written for a newer template set still synthesizes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Well-known feature keys.
pub mod keys {
    /// Leg count (chairs, tables).
    pub const LEGS: &str = "legs";
    /// Door count (cabinets, rooms).
    pub const DOORS: &str = "doors";
    /// Window count (rooms, houses).
    pub const WINDOWS: &str = "windows";
    /// Seat count (sofas).
    pub const SEATS: &str = "seats";
    /// `square` or `circular` (tables).
    pub const SEAT_SHAPE: &str = "seat_shape";
    /// Whether a house has an attached garage.
    pub const HAS_GARAGE: &str = "has_garage";
    /// `modern` or `traditional` (houses).
    pub const STYLE: &str = "style";
    /// Bedroom count (houses).
    pub const BEDROOMS: &str = "bedrooms";
    /// Compass side carrying the door (rooms).
    pub const DOOR_POSITION: &str = "door_position";
    /// Compass side carrying the window (rooms).
    pub const WINDOW_POSITION: &str = "window_position";
}

/// Upper bound applied to every count feature.
///
/// Primitive counts scale with feature counts; this keeps a typo such as
/// `legs = 4000` from producing an unbounded primitive list.
pub const MAX_COUNT: u32 = 64;

/// A single feature value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer count.
    Int(i64),
    /// Real value.
    Float(f64),
    /// Free text (shapes, styles, compass sides).
    Text(String),
}

impl From<bool> for FeatureValue {
    fn from(v: bool) -> Self {
        FeatureValue::Bool(v)
    }
}

impl From<i64> for FeatureValue {
    fn from(v: i64) -> Self {
        FeatureValue::Int(v)
    }
}

impl From<i32> for FeatureValue {
    fn from(v: i32) -> Self {
        FeatureValue::Int(v.into())
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Float(v)
    }
}

impl From<&str> for FeatureValue {
    fn from(v: &str) -> Self {
        FeatureValue::Text(v.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(v: String) -> Self {
        FeatureValue::Text(v)
    }
}

/// A compass side of a room or building. North is `+y`, east is `+x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Back wall (`+y`).
    North,
    /// Front wall (`-y`).
    South,
    /// Right wall (`+x`).
    East,
    /// Left wall (`-x`).
    West,
}

impl Side {
    /// All four sides in layout order.
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// The side across the room.
    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" | "back" => Ok(Side::North),
            "south" | "s" | "front" => Ok(Side::South),
            "east" | "e" | "right" => Ok(Side::East),
            "west" | "w" | "left" => Ok(Side::West),
            other => Err(format!("unknown side: {other}")),
        }
    }
}

/// Table top / seat outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatShape {
    /// Rectangular top (default).
    #[default]
    Square,
    /// Round top with legs on a ring.
    Circular,
}

/// House roof style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofStyle {
    /// Pitched roof (default).
    #[default]
    Traditional,
    /// Flat slab roof.
    Modern,
}

/// Feature bag keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Features(BTreeMap<String, FeatureValue>);

impl Features {
    /// Create an empty feature bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<FeatureValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a feature.
    pub fn insert(&mut self, key: &str, value: impl Into<FeatureValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Raw lookup.
    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.0.get(key)
    }

    /// Number of features present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no features are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Read a count feature.
    ///
    /// A missing or unreadable value gives `default`. A negative value is
    /// malformed and clamps to `minimum`. Zero is a valid count. The result
    /// never exceeds [`MAX_COUNT`].
    pub fn count(&self, key: &str, default: u32, minimum: u32) -> u32 {
        let raw = match self.0.get(key) {
            Some(FeatureValue::Int(n)) => Some(*n),
            Some(FeatureValue::Float(f)) if f.is_finite() => Some(f.round() as i64),
            Some(FeatureValue::Text(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match raw {
            None => default.min(MAX_COUNT),
            Some(n) if n < 0 => minimum,
            Some(n) => u32::try_from(n).unwrap_or(MAX_COUNT).min(MAX_COUNT),
        }
    }

    /// Whether a count feature was given as a negative number.
    pub fn is_negative_count(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(FeatureValue::Int(n)) => *n < 0,
            Some(FeatureValue::Float(f)) => *f < 0.0,
            Some(FeatureValue::Text(s)) => s.trim().parse::<i64>().map(|n| n < 0).unwrap_or(false),
            _ => false,
        }
    }

    /// Read a boolean flag; missing means `false`.
    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(FeatureValue::Bool(b)) => *b,
            Some(FeatureValue::Int(n)) => *n != 0,
            Some(FeatureValue::Text(s)) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1")
            }
            _ => false,
        }
    }

    /// Read a text feature.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(FeatureValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Read a compass side; unknown spellings read as missing.
    pub fn side(&self, key: &str) -> Option<Side> {
        self.text(key).and_then(|s| s.parse().ok())
    }

    /// Table top shape, square unless `seat_shape` says round.
    pub fn seat_shape(&self) -> SeatShape {
        match self.text(keys::SEAT_SHAPE).map(|s| s.trim().to_ascii_lowercase()) {
            Some(s) if matches!(s.as_str(), "circular" | "circle" | "round") => SeatShape::Circular,
            _ => SeatShape::Square,
        }
    }

    /// Roof style, traditional unless `style = modern`.
    pub fn roof_style(&self) -> RoofStyle {
        match self.text(keys::STYLE) {
            Some(s) if s.trim().eq_ignore_ascii_case("modern") => RoofStyle::Modern,
            _ => RoofStyle::Traditional,
        }
    }
}
