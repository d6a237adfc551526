pub mod color;
pub mod kind;
pub mod variant;

pub use color::Color3;
pub use kind::ValueKind;
pub use variant::*;

#[cfg(test)]
mod tests {
    use forge_ids::ObjectID;
    use glam::{Vec2, Vec3};
    use serde_json::json;

    use super::*;

    // -------------------- Variant --------------------

    #[test]
    fn test_variant_kinds() {
        assert_eq!(Variant::Null.kind(), None);
        assert_eq!(Variant::from(true).kind(), Some(ValueKind::Bool));
        assert_eq!(Variant::from(3).kind(), Some(ValueKind::Int));
        assert_eq!(Variant::from(3.5).kind(), Some(ValueKind::Float));
        assert_eq!(Variant::from("x").kind(), Some(ValueKind::String));
        assert_eq!(Variant::from(Vec2::ONE).kind(), Some(ValueKind::Vector2));
        assert_eq!(Variant::from(Vec3::ONE).kind(), Some(ValueKind::Vector3));
        assert_eq!(
            Variant::from(Color3::WHITE).kind(),
            Some(ValueKind::Color3)
        );
        assert_eq!(
            Variant::from(ObjectID::from_parts(1, 0)).kind(),
            Some(ValueKind::Object)
        );
    }

    #[test]
    fn test_variant_accessors() {
        assert_eq!(Variant::from("hello").as_str(), Some("hello"));
        assert_eq!(Variant::Int(4).as_f64(), Some(4.0));
        assert_eq!(Variant::Float(0.5).as_int(), None);
        assert_eq!(Variant::Bool(true).as_bool(), Some(true));
        let id = ObjectID::from_parts(9, 1);
        assert_eq!(Variant::from(id).as_object(), Some(id));
        assert_eq!(Variant::from(None::<ObjectID>), Variant::Null);
    }

    #[test]
    fn test_map_object_only_touches_references() {
        let a = ObjectID::from_parts(1, 0);
        let b = ObjectID::from_parts(2, 0);
        assert_eq!(Variant::from(a).map_object(|_| b), Variant::Object(b));
        assert_eq!(Variant::Int(1).map_object(|_| b), Variant::Int(1));
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::from("hi").to_string(), "\"hi\"");
        assert_eq!(Variant::from(Vec2::new(1.0, 2.0)).to_string(), "(1, 2)");
        assert_eq!(
            Variant::from(ObjectID::from_parts(3, 0)).to_string(),
            "<object 3:0>"
        );
    }

    // -------------------- ValueKind --------------------

    #[test]
    fn test_coerce_widens_ints_into_floats() {
        assert_eq!(ValueKind::Float.coerce(Variant::Int(2)), Ok(Variant::Float(2.0)));
        assert_eq!(ValueKind::Int.coerce(Variant::Float(2.0)), Err(Variant::Float(2.0)));
    }

    #[test]
    fn test_coerce_null_only_fits_objects() {
        assert_eq!(ValueKind::Object.coerce(Variant::Null), Ok(Variant::Null));
        assert_eq!(ValueKind::String.coerce(Variant::Null), Err(Variant::Null));
    }

    #[test]
    fn test_coerce_rejects_mismatch() {
        assert_eq!(
            ValueKind::Bool.coerce(Variant::from("true")),
            Err(Variant::from("true"))
        );
        assert_eq!(
            ValueKind::String.coerce(Variant::from("ok")),
            Ok(Variant::from("ok"))
        );
    }

    #[test]
    fn test_parse_json_defaults() {
        assert_eq!(ValueKind::Int.parse_json(&json!(3)), Some(Variant::Int(3)));
        assert_eq!(ValueKind::Float.parse_json(&json!(3)), Some(Variant::Float(3.0)));
        assert_eq!(
            ValueKind::Vector3.parse_json(&json!([1, 2, 3])),
            Some(Variant::Vector3(Vec3::new(1.0, 2.0, 3.0)))
        );
        assert_eq!(ValueKind::Vector3.parse_json(&json!([1, 2])), None);
        assert_eq!(
            ValueKind::Color3.parse_json(&json!("#ff0000")),
            Some(Variant::Color3(Color3::new(1.0, 0.0, 0.0)))
        );
        assert_eq!(ValueKind::Object.parse_json(&json!(null)), Some(Variant::Null));
        assert_eq!(ValueKind::Object.parse_json(&json!(5)), None);
        assert_eq!(ValueKind::Bool.parse_json(&json!("yes")), None);
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        let kind: ValueKind = serde_json::from_value(json!("vector3")).unwrap();
        assert_eq!(kind, ValueKind::Vector3);
        assert_eq!(kind.to_string(), "vector3");
    }

    // -------------------- JSON --------------------

    #[test]
    fn test_from_json_value() {
        assert_eq!(Variant::from_json_value(&json!(null)), Some(Variant::Null));
        assert_eq!(Variant::from_json_value(&json!(7)), Some(Variant::Int(7)));
        assert_eq!(Variant::from_json_value(&json!(0.25)), Some(Variant::Float(0.25)));
        assert_eq!(
            Variant::from_json_value(&json!([1.0, 2.0])),
            Some(Variant::Vector2(Vec2::new(1.0, 2.0)))
        );
        assert_eq!(Variant::from_json_value(&json!([1, 2, 3, 4])), None);
        assert_eq!(Variant::from_json_value(&json!({"a": 1})), None);
    }

    #[test]
    fn test_to_json_value() {
        assert_eq!(Variant::from("a").to_json_value(), json!("a"));
        assert_eq!(
            Variant::from(Vec3::new(1.0, 2.0, 3.0)).to_json_value(),
            json!([1.0, 2.0, 3.0])
        );
        assert_eq!(
            Variant::from(ObjectID::from_parts(2, 1)).to_json_value(),
            json!("@2:1")
        );
        assert_eq!(Variant::Float(f64::NAN).to_json_value(), json!(null));
    }

    // -------------------- Color3 --------------------

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color3::from_hex("#000000"), Ok(Color3::BLACK));
        assert_eq!(Color3::from_hex("ffffff"), Ok(Color3::WHITE));
        assert!(Color3::from_hex("fff").is_err());
        assert!(Color3::from_hex("gg0000").is_err());
        // six bytes, but "é" straddles the first channel boundary
        assert!(Color3::from_hex("aébcd").is_err());
        assert!(Color3::from_hex("ééé").is_err());
    }
}
