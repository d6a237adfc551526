use std::sync::Arc;

use forge_ids::ObjectID;
use forge_variant::Variant;
use indexmap::IndexMap;

/// A node of the object tree. Name, parent and children are intrinsic; everything
/// else lives in the property table, seeded from the class defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub(crate) id: ObjectID,
    pub(crate) class: Arc<str>,
    pub(crate) name: Arc<str>,
    pub(crate) parent: Option<ObjectID>,
    pub(crate) children: Vec<ObjectID>,
    pub(crate) properties: IndexMap<Arc<str>, Variant>,
}

impl Object {
    /// Fresh, unparented object named after its class.
    pub fn new(id: ObjectID, class: Arc<str>, properties: IndexMap<Arc<str>, Variant>) -> Self {
        Self {
            id,
            name: class.clone(),
            class,
            parent: None,
            children: Vec::new(),
            properties,
        }
    }

    #[inline]
    pub fn id(&self) -> ObjectID {
        self.id
    }

    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn parent(&self) -> Option<ObjectID> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[ObjectID] {
        &self.children
    }

    pub fn property(&self, name: &str) -> Option<&Variant> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.properties.iter().map(|(k, v)| (k.as_ref(), v))
    }
}
