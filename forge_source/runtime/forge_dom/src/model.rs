use forge_ids::ObjectID;
use forge_variant::Variant;

use crate::dom::Dom;
use crate::error::DomError;
use crate::object::Object;

/// What construction helpers need from a host object model: type-based instantiation,
/// deep clone, validated property writes and the parent/name relation.
pub trait ObjectModel {
    fn instantiate(&mut self, class: &str) -> Result<ObjectID, DomError>;

    fn clone_object(&mut self, source: ObjectID) -> Result<ObjectID, DomError>;

    fn set_property(&mut self, id: ObjectID, name: &str, value: Variant) -> Result<(), DomError>;

    fn set_parent(&mut self, id: ObjectID, parent: Option<ObjectID>) -> Result<(), DomError>;

    fn set_name(&mut self, id: ObjectID, name: &str) -> Result<(), DomError>;

    fn get(&self, id: ObjectID) -> Option<&Object>;
}

impl ObjectModel for Dom {
    fn instantiate(&mut self, class: &str) -> Result<ObjectID, DomError> {
        Dom::instantiate(self, class)
    }

    fn clone_object(&mut self, source: ObjectID) -> Result<ObjectID, DomError> {
        Dom::clone_object(self, source)
    }

    fn set_property(&mut self, id: ObjectID, name: &str, value: Variant) -> Result<(), DomError> {
        Dom::set_property(self, id, name, value)
    }

    fn set_parent(&mut self, id: ObjectID, parent: Option<ObjectID>) -> Result<(), DomError> {
        Dom::set_parent(self, id, parent)
    }

    fn set_name(&mut self, id: ObjectID, name: &str) -> Result<(), DomError> {
        Dom::set_name(self, id, name)
    }

    fn get(&self, id: ObjectID) -> Option<&Object> {
        Dom::get(self, id)
    }
}
