use std::sync::Arc;

use forge_ids::ObjectID;
use forge_variant::{ValueKind, Variant};
use rustc_hash::FxHashMap;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::arena::ObjectArena;
use crate::class::{CLASS_NAME, ClassRegistry, NAME, PARENT};
use crate::error::{DomError, Result};
use crate::object::Object;

/// In-memory object tree backed by a class registry.
pub struct Dom {
    registry: ClassRegistry,
    objects: ObjectArena,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new(ClassRegistry::builtin())
    }
}

impl Dom {
    pub fn new(registry: ClassRegistry) -> Self {
        Self {
            registry,
            objects: ObjectArena::new(),
        }
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: ObjectID) -> bool {
        self.objects.contains(id)
    }

    pub fn get(&self, id: ObjectID) -> Option<&Object> {
        self.objects.get(id)
    }

    fn object(&self, id: ObjectID) -> Result<&Object> {
        self.objects.get(id).ok_or(DomError::UnknownObject(id))
    }

    fn object_mut(&mut self, id: ObjectID) -> Result<&mut Object> {
        self.objects.get_mut(id).ok_or(DomError::UnknownObject(id))
    }

    // -------------------- Creation --------------------

    /// New unparented object of `class` with its class defaults.
    pub fn instantiate(&mut self, class: &str) -> Result<ObjectID> {
        let descriptor = self
            .registry
            .get(class)
            .ok_or_else(|| DomError::UnknownType(class.to_string()))?;
        if !descriptor.creatable {
            return Err(DomError::NotCreatable(class.to_string()));
        }

        let class_name = descriptor.name.clone();
        let defaults = self.registry.defaults(class);
        let id = self
            .objects
            .insert_with(|id| Object::new(id, class_name, defaults));
        log::debug!("instantiated {class} as {id}");
        Ok(id)
    }

    /// Deep copy of `source` and its descendants. The copy is unparented; references
    /// that point inside the copied subtree are redirected to the matching copies.
    pub fn clone_object(&mut self, source: ObjectID) -> Result<ObjectID> {
        self.object(source)?;

        let mut order = vec![source];
        order.extend(self.descendants(source));

        let mut remap: FxHashMap<ObjectID, ObjectID> = FxHashMap::default();
        remap.reserve(order.len());
        for &old in &order {
            let original = self.object(old)?.clone();
            let new = self.objects.insert_with(|id| Object {
                id,
                parent: None,
                children: Vec::new(),
                ..original
            });
            remap.insert(old, new);
        }

        // Pre-order: every parent is linked before its children, so sibling order survives.
        for &old in &order {
            let new = remap[&old];
            let parent = if old == source {
                None
            } else {
                self.object(old)?.parent.and_then(|p| remap.get(&p).copied())
            };

            let object = self.object_mut(new)?;
            object.parent = parent;
            for value in object.properties.values_mut() {
                *value = std::mem::replace(value, Variant::Null)
                    .map_object(|target| remap.get(&target).copied().unwrap_or(target));
            }

            if let Some(parent) = parent {
                self.object_mut(parent)?.children.push(new);
            }
        }

        let root = remap[&source];
        log::debug!(
            "cloned {source} as {root} ({} objects)",
            order.len()
        );
        Ok(root)
    }

    /// Remove `id` and its whole subtree. Handles to removed objects stop resolving.
    pub fn destroy(&mut self, id: ObjectID) -> Result<()> {
        self.set_parent(id, None)?;
        let mut doomed = vec![id];
        doomed.extend(self.descendants(id));
        for object in &doomed {
            self.objects.remove(*object);
        }
        log::debug!("destroyed {id} ({} objects)", doomed.len());
        Ok(())
    }

    // -------------------- Properties --------------------

    pub fn get_property(&self, id: ObjectID, name: &str) -> Result<Variant> {
        let object = self.object(id)?;
        match name {
            NAME => Ok(Variant::String(object.name.clone())),
            PARENT => Ok(Variant::from(object.parent)),
            CLASS_NAME => Ok(Variant::String(object.class.clone())),
            _ => object
                .properties
                .get(name)
                .cloned()
                .ok_or_else(|| DomError::UnknownProperty {
                    class: object.class.to_string(),
                    property: name.to_string(),
                }),
        }
    }

    /// Write one property. `Name` and `Parent` route to `set_name` / `set_parent`;
    /// everything else is checked against the class schema and coerced to the declared kind.
    pub fn set_property(&mut self, id: ObjectID, name: &str, value: Variant) -> Result<()> {
        let class = self.object(id)?.class.clone();
        match name {
            NAME => match value {
                Variant::String(new_name) => self.set_name(id, &new_name),
                other => Err(mismatch(&class, name, ValueKind::String, &other)),
            },
            PARENT => match value {
                Variant::Object(parent) => self.set_parent(id, Some(parent)),
                Variant::Null => self.set_parent(id, None),
                other => Err(mismatch(&class, name, ValueKind::Object, &other)),
            },
            CLASS_NAME => Err(DomError::ReadOnlyProperty {
                class: class.to_string(),
                property: name.to_string(),
            }),
            _ => {
                let descriptor = self.registry.property(&class, name).ok_or_else(|| {
                    DomError::UnknownProperty {
                        class: class.to_string(),
                        property: name.to_string(),
                    }
                })?;
                if descriptor.read_only {
                    return Err(DomError::ReadOnlyProperty {
                        class: class.to_string(),
                        property: name.to_string(),
                    });
                }
                let kind = descriptor.kind;
                let value = kind
                    .coerce(value)
                    .map_err(|rejected| mismatch(&class, name, kind, &rejected))?;
                if let Variant::Object(target) = value {
                    self.object(target)?;
                }

                log::trace!("{id}.{name} = {value}");
                let object = self.object_mut(id)?;
                match object.properties.get_mut(name) {
                    Some(slot) => *slot = value,
                    None => {
                        object.properties.insert(Arc::from(name), value);
                    }
                }
                Ok(())
            }
        }
    }

    // -------------------- Hierarchy --------------------

    pub fn set_name(&mut self, id: ObjectID, name: &str) -> Result<()> {
        let object = self.object_mut(id)?;
        if &*object.name != name {
            log::trace!("{id}.Name = {name:?}");
            object.name = Arc::from(name);
        }
        Ok(())
    }

    /// Move `id` under `parent` (or detach it with `None`). The object leaves its previous
    /// parent's child list and is appended to the new one.
    pub fn set_parent(&mut self, id: ObjectID, parent: Option<ObjectID>) -> Result<()> {
        let previous = self.object(id)?.parent;
        if let Some(parent) = parent {
            self.object(parent)?;
            if parent == id || self.is_ancestor_of(id, parent) {
                return Err(DomError::CyclicParent { child: id, parent });
            }
        }
        if previous == parent {
            return Ok(());
        }

        if let Some(previous) = previous {
            if let Some(old_parent) = self.objects.get_mut(previous) {
                old_parent.children.retain(|child| *child != id);
            }
        }
        self.object_mut(id)?.parent = parent;
        if let Some(parent) = parent {
            self.object_mut(parent)?.children.push(id);
        }

        log::trace!("{id}.Parent = {parent:?}");
        Ok(())
    }

    pub fn children(&self, id: ObjectID) -> Result<&[ObjectID]> {
        Ok(self.object(id)?.children.as_slice())
    }

    pub fn find_first_child(&self, id: ObjectID, name: &str) -> Option<ObjectID> {
        self.objects
            .get(id)?
            .children
            .iter()
            .copied()
            .find(|child| self.objects.get(*child).is_some_and(|c| &*c.name == name))
    }

    /// All descendants of `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: ObjectID) -> Vec<ObjectID> {
        let mut out = Vec::new();
        let mut stack: Vec<ObjectID> = match self.objects.get(id) {
            Some(object) => object.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(next) = stack.pop() {
            if let Some(object) = self.objects.get(next) {
                out.push(next);
                stack.extend(object.children.iter().rev().copied());
            }
        }
        out
    }

    pub fn is_ancestor_of(&self, ancestor: ObjectID, id: ObjectID) -> bool {
        let mut current = self.objects.get(id).and_then(|o| o.parent);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.objects.get(parent).and_then(|o| o.parent);
        }
        false
    }

    pub fn is_a(&self, id: ObjectID, class: &str) -> bool {
        self.objects
            .get(id)
            .is_some_and(|object| self.registry.is_a(&object.class, class))
    }

    /// Dot-joined names from the root down to `id`, e.g. `Gui.Panel.Title`.
    pub fn full_name(&self, id: ObjectID) -> Result<String> {
        let mut names = vec![self.object(id)?.name.clone()];
        let mut current = self.object(id)?.parent;
        while let Some(parent) = current {
            let object = self.object(parent)?;
            names.push(object.name.clone());
            current = object.parent;
        }
        names.reverse();
        Ok(names.join("."))
    }

    /// JSON view of a subtree: class, name, properties and children, recursively.
    /// Identity-free apart from object references, so two structurally equal trees compare equal.
    pub fn snapshot(&self, id: ObjectID) -> Result<JsonValue> {
        let object = self.object(id)?;

        let mut properties = JsonMap::new();
        for (name, value) in &object.properties {
            properties.insert(name.to_string(), value.to_json_value());
        }
        let children = object
            .children
            .iter()
            .map(|child| self.snapshot(*child))
            .collect::<Result<Vec<_>>>()?;

        let mut map = JsonMap::new();
        map.insert(CLASS_NAME.to_string(), JsonValue::from(object.class.as_ref()));
        map.insert(NAME.to_string(), JsonValue::from(object.name.as_ref()));
        map.insert("Properties".to_string(), JsonValue::Object(properties));
        map.insert("Children".to_string(), JsonValue::Array(children));
        Ok(JsonValue::Object(map))
    }
}

fn mismatch(class: &str, property: &str, expected: ValueKind, found: &Variant) -> DomError {
    DomError::TypeMismatch {
        class: class.to_string(),
        property: property.to_string(),
        expected,
        found: found.type_name(),
    }
}
