use std::fmt;
use std::sync::Arc;

use forge_ids::ObjectID;
use glam::{Vec2, Vec3};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

use crate::{Color3, ValueKind};

/// A property value as stored on an object.
#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    // --- Nullary ---
    Null,

    // --- Primitives ---
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Arc<str>),

    // --- Math ---
    Vector2(Vec2),
    Vector3(Vec3),
    Color3(Color3),

    // --- Reference to another object in the same host ---
    Object(ObjectID),
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Null => write!(f, "null"),
            Variant::Bool(v) => write!(f, "{v}"),
            Variant::Int(v) => write!(f, "{v}"),
            Variant::Float(v) => write!(f, "{v}"),
            Variant::String(v) => write!(f, "{:?}", v.as_ref()),
            Variant::Vector2(v) => write!(f, "({}, {})", v.x, v.y),
            Variant::Vector3(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            Variant::Color3(c) => write!(f, "rgb({}, {}, {})", c.r, c.g, c.b),
            Variant::Object(id) => write!(f, "<object {id}>"),
        }
    }
}

// -------------------- Constructors --------------------

impl Variant {
    #[inline]
    pub const fn null() -> Self {
        Variant::Null
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Variant::Null)
    }

    #[inline]
    pub fn string<S: AsRef<str>>(s: S) -> Self {
        Variant::String(Arc::<str>::from(s.as_ref()))
    }

    /// The kind this value carries. `Null` has none: it only fits object slots.
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Variant::Null => None,
            Variant::Bool(_) => Some(ValueKind::Bool),
            Variant::Int(_) => Some(ValueKind::Int),
            Variant::Float(_) => Some(ValueKind::Float),
            Variant::String(_) => Some(ValueKind::String),
            Variant::Vector2(_) => Some(ValueKind::Vector2),
            Variant::Vector3(_) => Some(ValueKind::Vector3),
            Variant::Color3(_) => Some(ValueKind::Color3),
            Variant::Object(_) => Some(ValueKind::Object),
        }
    }

    pub const fn type_name(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.as_str(),
            None => "null",
        }
    }
}

// -------------------- Accessors --------------------

impl Variant {
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Variant::Bool(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Variant::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Floats as is, ints widened.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Variant::Float(v) => Some(v),
            Variant::Int(v) => Some(v as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Option<Vec2> {
        match *self {
            Variant::Vector2(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_vec3(&self) -> Option<Vec3> {
        match *self {
            Variant::Vector3(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_color3(&self) -> Option<Color3> {
        match *self {
            Variant::Color3(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<ObjectID> {
        match *self {
            Variant::Object(id) => Some(id),
            _ => None,
        }
    }

    /// Rewrite an object reference through `f`; other values are returned unchanged.
    pub fn map_object(self, f: impl FnOnce(ObjectID) -> ObjectID) -> Self {
        match self {
            Variant::Object(id) => Variant::Object(f(id)),
            other => other,
        }
    }
}

// -------------------- From impls --------------------

impl From<bool> for Variant {
    #[inline]
    fn from(v: bool) -> Self {
        Variant::Bool(v)
    }
}

impl From<i32> for Variant {
    #[inline]
    fn from(v: i32) -> Self {
        Variant::Int(v as i64)
    }
}
impl From<i64> for Variant {
    #[inline]
    fn from(v: i64) -> Self {
        Variant::Int(v)
    }
}
impl From<u32> for Variant {
    #[inline]
    fn from(v: u32) -> Self {
        Variant::Int(v as i64)
    }
}

impl From<f32> for Variant {
    #[inline]
    fn from(v: f32) -> Self {
        Variant::Float(v as f64)
    }
}
impl From<f64> for Variant {
    #[inline]
    fn from(v: f64) -> Self {
        Variant::Float(v)
    }
}

impl From<&str> for Variant {
    #[inline]
    fn from(v: &str) -> Self {
        Variant::String(Arc::<str>::from(v))
    }
}
impl From<String> for Variant {
    #[inline]
    fn from(v: String) -> Self {
        Variant::String(Arc::<str>::from(v))
    }
}
impl From<Arc<str>> for Variant {
    #[inline]
    fn from(v: Arc<str>) -> Self {
        Variant::String(v)
    }
}

impl From<Vec2> for Variant {
    #[inline]
    fn from(v: Vec2) -> Self {
        Variant::Vector2(v)
    }
}
impl From<Vec3> for Variant {
    #[inline]
    fn from(v: Vec3) -> Self {
        Variant::Vector3(v)
    }
}
impl From<Color3> for Variant {
    #[inline]
    fn from(v: Color3) -> Self {
        Variant::Color3(v)
    }
}

impl From<ObjectID> for Variant {
    #[inline]
    fn from(v: ObjectID) -> Self {
        Variant::Object(v)
    }
}
impl From<Option<ObjectID>> for Variant {
    #[inline]
    fn from(v: Option<ObjectID>) -> Self {
        v.map_or(Variant::Null, Variant::Object)
    }
}

// -------------------- JSON conversion --------------------

impl Variant {
    /// Untyped reading of JSON. Arrays of two or three numbers become vectors;
    /// nested objects and other arrays have no property representation and yield `None`.
    pub fn from_json_value(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Null => Some(Variant::Null),
            JsonValue::Bool(v) => Some(Variant::Bool(*v)),
            JsonValue::Number(v) => {
                if let Some(i) = v.as_i64() {
                    Some(Variant::Int(i))
                } else {
                    v.as_f64().map(Variant::Float)
                }
            }
            JsonValue::String(v) => Some(Variant::string(v)),
            JsonValue::Array(items) => match items.len() {
                2 => crate::kind::json_floats::<2>(value)
                    .map(|[x, y]| Variant::Vector2(Vec2::new(x, y))),
                3 => crate::kind::json_floats::<3>(value)
                    .map(|[x, y, z]| Variant::Vector3(Vec3::new(x, y, z))),
                _ => None,
            },
            JsonValue::Object(_) => None,
        }
    }

    pub fn to_json_value(&self) -> JsonValue {
        match self {
            Variant::Null => JsonValue::Null,
            Variant::Bool(v) => JsonValue::Bool(*v),
            Variant::Int(v) => JsonValue::Number(JsonNumber::from(*v)),
            Variant::Float(v) => float_to_json(*v),
            Variant::String(v) => JsonValue::String(v.as_ref().to_string()),
            Variant::Vector2(v) => JsonValue::Array(vec![
                float_to_json(v.x as f64),
                float_to_json(v.y as f64),
            ]),
            Variant::Vector3(v) => JsonValue::Array(vec![
                float_to_json(v.x as f64),
                float_to_json(v.y as f64),
                float_to_json(v.z as f64),
            ]),
            Variant::Color3(c) => {
                let mut map = JsonMap::new();
                map.insert("r".to_string(), float_to_json(c.r as f64));
                map.insert("g".to_string(), float_to_json(c.g as f64));
                map.insert("b".to_string(), float_to_json(c.b as f64));
                JsonValue::Object(map)
            }
            Variant::Object(id) => JsonValue::String(format!("@{id}")),
        }
    }
}

fn float_to_json(value: f64) -> JsonValue {
    match JsonNumber::from_f64(value) {
        Some(v) => JsonValue::Number(v),
        None => JsonValue::Null,
    }
}
