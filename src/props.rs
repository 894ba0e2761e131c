use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// An RGB color parsed from a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse a 6-digit hex color. Anything else (wrong length, missing `#`,
    /// non-hex digits, named colors) is treated as absent, never an error —
    /// the property resolver falls through to the next value in the chain.
    pub fn from_hex(value: &str) -> Option<Color> {
        static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = HEX_COLOR_REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());
        if !re.is_match(value) {
            return None;
        }
        let r = u8::from_str_radix(&value[1..3], 16).ok()?;
        let g = u8::from_str_radix(&value[3..5], 16).ok()?;
        let b = u8::from_str_radix(&value[5..7], 16).ok()?;
        Some(Color { r, g, b })
    }
}

/// Per-edge spacing, e.g. a `padding` or `margin` property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub fn uniform(value: f64) -> EdgeInsets {
        EdgeInsets {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }
}

/// The untyped property bag of a node.
///
/// No schema is enforced: each renderer extracts only the properties it
/// understands, typed and defaulted, and ignores the rest. A wrong-shaped
/// value behaves exactly like an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropBag(Map<String, Value>);

impl PropBag {
    pub fn new(entries: Map<String, Value>) -> PropBag {
        PropBag(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Raw access, for callers that need to inspect a value themselves.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Numeric values may be encoded as integers or fractional numbers in
    /// the source document; both normalize to f64.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// An ordered list of strings. Non-string items are skipped; a value
    /// that is not an array counts as absent.
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        let items = self.0.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    /// A `{top, left, bottom, right}` edge-insets object. A bare number is
    /// accepted as uniform insets; missing sides default to zero.
    pub fn insets(&self, key: &str) -> Option<EdgeInsets> {
        match self.0.get(key)? {
            Value::Object(sides) => {
                let side = |name: &str| sides.get(name).and_then(Value::as_f64).unwrap_or(0.0);
                Some(EdgeInsets {
                    top: side("top"),
                    left: side("left"),
                    bottom: side("bottom"),
                    right: side("right"),
                })
            }
            value => value.as_f64().map(EdgeInsets::uniform),
        }
    }

    /// A hex color string. Malformed colors count as absent.
    pub fn color(&self, key: &str) -> Option<Color> {
        self.string(key).and_then(Color::from_hex)
    }
}
