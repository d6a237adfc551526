use std::sync::Arc;

use forge_dom::{DomError, Object, ObjectModel};
use forge_ids::ObjectID;
use forge_variant::Variant;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::error::{ForgeError, Result};

/// Property name -> value, applied in insertion order. Keys are unique; inserting an
/// existing key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyBag {
    entries: IndexMap<Arc<str>, Variant>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<Arc<str>>, value: impl Into<Variant>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<Arc<str>>, value: impl Into<Variant>) -> Option<Variant> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Read a JSON object such as `{"Text": "Hi", "Size": [4, 1, 2]}`.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let object = value.as_object().ok_or(ForgeError::NotAnObject)?;
        let mut bag = Self::new();
        for (name, value) in object {
            let value = Variant::from_json_value(value)
                .ok_or_else(|| ForgeError::UnsupportedJson(name.clone()))?;
            bag.insert(name.as_str(), value);
        }
        Ok(bag)
    }

    /// Write every entry onto `id`, stopping at the first rejected one.
    pub(crate) fn apply<M: ObjectModel + ?Sized>(self, model: &mut M, id: ObjectID) -> Result<()> {
        for (name, value) in self.entries {
            model.set_property(id, &name, value)?;
        }
        Ok(())
    }
}

impl<K: Into<Arc<str>>, V: Into<Variant>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (name, value) in iter {
            bag.insert(name, value);
        }
        bag
    }
}

impl IntoIterator for PropertyBag {
    type Item = (Arc<str>, Variant);
    type IntoIter = indexmap::map::IntoIter<Arc<str>, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Objects to attach under a freshly built object.
#[derive(Clone, Debug, PartialEq)]
pub enum Children {
    One(ObjectID),
    Many(Vec<ObjectID>),
    /// Each child is parented, then renamed to its key.
    Named(IndexMap<Arc<str>, ObjectID>),
}

impl Children {
    pub fn named<K, I>(children: I) -> Self
    where
        K: Into<Arc<str>>,
        I: IntoIterator<Item = (K, ObjectID)>,
    {
        Children::Named(
            children
                .into_iter()
                .map(|(name, child)| (name.into(), child))
                .collect(),
        )
    }

    pub(crate) fn attach<M: ObjectModel + ?Sized>(self, model: &mut M, parent: ObjectID) -> Result<()> {
        match self {
            Children::One(child) => model.set_parent(child, Some(parent))?,
            Children::Many(children) => {
                for child in children {
                    model.set_parent(child, Some(parent))?;
                }
            }
            Children::Named(children) => {
                for (name, child) in children {
                    model.set_parent(child, Some(parent))?;
                    model.set_name(child, &name)?;
                }
            }
        }
        Ok(())
    }
}

impl From<ObjectID> for Children {
    fn from(child: ObjectID) -> Self {
        Children::One(child)
    }
}

impl From<Vec<ObjectID>> for Children {
    fn from(children: Vec<ObjectID>) -> Self {
        Children::Many(children)
    }
}

impl<const N: usize> From<[ObjectID; N]> for Children {
    fn from(children: [ObjectID; N]) -> Self {
        Children::Many(children.to_vec())
    }
}

impl From<IndexMap<Arc<str>, ObjectID>> for Children {
    fn from(children: IndexMap<Arc<str>, ObjectID>) -> Self {
        Children::Named(children)
    }
}

/// Properties plus an optional children specifier. Children are kept apart from the
/// property map, so no property name is reserved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    pub properties: PropertyBag,
    pub children: Option<Children>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<Arc<str>>, value: impl Into<Variant>) -> Self {
        self.properties.insert(name, value);
        self
    }

    pub fn children(mut self, children: impl Into<Children>) -> Self {
        self.children = Some(children.into());
        self
    }
}

impl From<PropertyBag> for Props {
    fn from(properties: PropertyBag) -> Self {
        Self {
            properties,
            children: None,
        }
    }
}

impl From<Children> for Props {
    fn from(children: Children) -> Self {
        Self {
            properties: PropertyBag::new(),
            children: Some(children),
        }
    }
}

pub type PropsFactory<'f> = Box<dyn FnOnce(&Object) -> anyhow::Result<Props> + 'f>;

/// Either ready-made props or a factory that derives them from the object being built.
pub enum PropSource<'f> {
    Literal(Props),
    Deferred(PropsFactory<'f>),
}

impl<'f> PropSource<'f> {
    pub fn deferred<F, P>(factory: F) -> Self
    where
        F: FnOnce(&Object) -> P + 'f,
        P: Into<Props>,
    {
        PropSource::Deferred(Box::new(move |object| Ok(factory(object).into())))
    }

    pub fn try_deferred<F, P>(factory: F) -> Self
    where
        F: FnOnce(&Object) -> anyhow::Result<P> + 'f,
        P: Into<Props>,
    {
        PropSource::Deferred(Box::new(move |object| factory(object).map(Into::into)))
    }

    /// Produce the props for `target`. A factory runs exactly once, before anything is written.
    pub(crate) fn resolve<M: ObjectModel + ?Sized>(self, model: &M, target: ObjectID) -> Result<Props> {
        match self {
            PropSource::Literal(props) => Ok(props),
            PropSource::Deferred(factory) => {
                let object = model.get(target).ok_or(DomError::UnknownObject(target))?;
                factory(object).map_err(ForgeError::Factory)
            }
        }
    }
}

impl Default for PropSource<'_> {
    fn default() -> Self {
        PropSource::Literal(Props::default())
    }
}

impl From<Props> for PropSource<'_> {
    fn from(props: Props) -> Self {
        PropSource::Literal(props)
    }
}

impl From<PropertyBag> for PropSource<'_> {
    fn from(properties: PropertyBag) -> Self {
        PropSource::Literal(properties.into())
    }
}

impl From<Children> for PropSource<'_> {
    fn from(children: Children) -> Self {
        PropSource::Literal(children.into())
    }
}
