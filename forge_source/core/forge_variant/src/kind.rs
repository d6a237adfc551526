use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::{Color3, Variant};

/// Declared type of a property slot.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    String,
    Vector2,
    Vector3,
    Color3,
    Object,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Vector2 => "vector2",
            ValueKind::Vector3 => "vector3",
            ValueKind::Color3 => "color3",
            ValueKind::Object => "object",
        }
    }

    /// Zero value used when a schema declares no default.
    pub fn zero(self) -> Variant {
        match self {
            ValueKind::Bool => Variant::Bool(false),
            ValueKind::Int => Variant::Int(0),
            ValueKind::Float => Variant::Float(0.0),
            ValueKind::String => Variant::string(""),
            ValueKind::Vector2 => Variant::Vector2(glam::Vec2::ZERO),
            ValueKind::Vector3 => Variant::Vector3(glam::Vec3::ZERO),
            ValueKind::Color3 => Variant::Color3(Color3::BLACK),
            ValueKind::Object => Variant::Null,
        }
    }

    /// Fit `value` into this kind. Ints widen into floats and Null clears an object slot;
    /// every other pairing must already match. Returns the rejected value on mismatch.
    pub fn coerce(self, value: Variant) -> Result<Variant, Variant> {
        match (self, value) {
            (ValueKind::Float, Variant::Int(v)) => Ok(Variant::Float(v as f64)),
            (ValueKind::Object, Variant::Null) => Ok(Variant::Null),
            (kind, value) if value.kind() == Some(kind) => Ok(value),
            (_, value) => Err(value),
        }
    }

    /// Typed reading of an untyped JSON (or TOML) value, e.g. a schema default.
    /// Vectors and colors are arrays of numbers.
    pub fn parse_json(self, value: &JsonValue) -> Option<Variant> {
        match self {
            ValueKind::Bool => value.as_bool().map(Variant::Bool),
            ValueKind::Int => value.as_i64().map(Variant::Int),
            ValueKind::Float => value.as_f64().map(Variant::Float),
            ValueKind::String => value.as_str().map(Variant::string),
            ValueKind::Vector2 => {
                let [x, y] = json_floats::<2>(value)?;
                Some(Variant::Vector2(glam::Vec2::new(x, y)))
            }
            ValueKind::Vector3 => {
                let [x, y, z] = json_floats::<3>(value)?;
                Some(Variant::Vector3(glam::Vec3::new(x, y, z)))
            }
            ValueKind::Color3 => match value {
                JsonValue::String(hex) => Color3::from_hex(hex).ok().map(Variant::Color3),
                _ => {
                    let [r, g, b] = json_floats::<3>(value)?;
                    Some(Variant::Color3(Color3::new(r, g, b)))
                }
            },
            // References cannot be spelled in data; only an explicit null is accepted.
            ValueKind::Object => value.is_null().then_some(Variant::Null),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn json_floats<const N: usize>(value: &JsonValue) -> Option<[f32; N]> {
    let items = value.as_array()?;
    if items.len() != N {
        return None;
    }
    let mut out = [0.0f32; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item.as_f64()? as f32;
    }
    Some(out)
}
