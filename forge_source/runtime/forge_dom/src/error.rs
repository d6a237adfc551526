use forge_ids::ObjectID;
use forge_variant::ValueKind;
use thiserror::Error;

/// Result type alias for object model operations
pub type Result<T> = std::result::Result<T, DomError>;

/// Errors raised by the object model while creating, cloning or writing to objects
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomError {
    #[error("Unknown class: {0}")]
    UnknownType(String),

    #[error("Class {0} cannot be instantiated")]
    NotCreatable(String),

    #[error("{property} is not a valid property of {class}")]
    UnknownProperty { class: String, property: String },

    #[error("Cannot assign {found} to {class}.{property} (expected {expected})")]
    TypeMismatch {
        class: String,
        property: String,
        expected: ValueKind,
        found: &'static str,
    },

    #[error("{class}.{property} is read-only")]
    ReadOnlyProperty { class: String, property: String },

    #[error("Object {0} does not exist")]
    UnknownObject(ObjectID),

    #[error("Cannot parent {child} to {parent}: it would create a cycle")]
    CyclicParent { child: ObjectID, parent: ObjectID },
}

/// Errors raised while loading class schemas
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid schema file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Class {class} extends unknown class {superclass}")]
    UnknownSuperclass { class: String, superclass: String },

    #[error("Class {0} is already registered")]
    DuplicateClass(String),

    #[error("Invalid default for {class}.{property}: expected {kind}")]
    InvalidDefault {
        class: String,
        property: String,
        kind: ValueKind,
    },
}
