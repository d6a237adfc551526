pub mod arena;
pub mod class;
pub mod dom;
pub mod error;
pub mod model;
pub mod object;
pub mod schema;

pub use arena::ObjectArena;
pub use class::{ClassDescriptor, ClassRegistry, PropertyDescriptor};
pub use dom::Dom;
pub use error::{DomError, SchemaError};
pub use model::ObjectModel;
pub use object::Object;
