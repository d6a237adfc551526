use std::sync::Arc;

use forge_ids::ClassID;
use forge_variant::{Color3, ValueKind, Variant};
use glam::{Vec2, Vec3};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::error::SchemaError;

/// Property names the object model owns itself instead of storing them in the property table.
pub const NAME: &str = "Name";
pub const PARENT: &str = "Parent";
pub const CLASS_NAME: &str = "ClassName";

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDescriptor {
    pub kind: ValueKind,
    pub default: Variant,
    pub read_only: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassDescriptor {
    pub name: Arc<str>,
    pub superclass: Option<Arc<str>>,
    pub creatable: bool,
    pub properties: IndexMap<Arc<str>, PropertyDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            superclass: None,
            creatable: true,
            properties: IndexMap::new(),
        }
    }

    /// Base class that only exists to be inherited from.
    pub fn abstract_class(name: &str) -> Self {
        Self {
            creatable: false,
            ..Self::new(name)
        }
    }

    pub fn extends(mut self, superclass: &str) -> Self {
        self.superclass = Some(Arc::from(superclass));
        self
    }

    pub fn property(mut self, name: &str, kind: ValueKind, default: impl Into<Variant>) -> Self {
        self.properties.insert(
            Arc::from(name),
            PropertyDescriptor {
                kind,
                default: default.into(),
                read_only: false,
            },
        );
        self
    }

    pub fn read_only_property(
        mut self,
        name: &str,
        kind: ValueKind,
        default: impl Into<Variant>,
    ) -> Self {
        self.properties.insert(
            Arc::from(name),
            PropertyDescriptor {
                kind,
                default: default.into(),
                read_only: true,
            },
        );
        self
    }
}

/// Known classes, keyed by hashed class name. A class may only be registered once its
/// superclass is, so superclass chains are always finite and resolvable.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: FxHashMap<ClassID, ClassDescriptor>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, class: ClassDescriptor) -> Result<(), SchemaError> {
        let id = ClassID::from_name(&class.name);
        if self.classes.contains_key(&id) {
            return Err(SchemaError::DuplicateClass(class.name.to_string()));
        }
        if let Some(superclass) = &class.superclass {
            if !self.contains(superclass) {
                return Err(SchemaError::UnknownSuperclass {
                    class: class.name.to_string(),
                    superclass: superclass.to_string(),
                });
            }
        }
        log::trace!("registered class {}", class.name);
        self.classes.insert(id, class);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(&ClassID::from_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(&ClassID::from_name(name))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The class itself followed by each superclass up to the root.
    pub fn chain<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a ClassDescriptor> + use<'a> {
        let mut next = self.get(name);
        std::iter::from_fn(move || {
            let current = next?;
            next = current
                .superclass
                .as_deref()
                .and_then(|superclass| self.get(superclass));
            Some(current)
        })
    }

    /// Most derived declaration of `property` visible from `class`.
    pub fn property(&self, class: &str, property: &str) -> Option<&PropertyDescriptor> {
        self.chain(class)
            .find_map(|descriptor| descriptor.properties.get(property))
    }

    pub fn is_a(&self, class: &str, ancestor: &str) -> bool {
        self.chain(class).any(|descriptor| &*descriptor.name == ancestor)
    }

    /// Default property table for a new object. Base declarations come first; subclasses override.
    pub fn defaults(&self, class: &str) -> IndexMap<Arc<str>, Variant> {
        let chain: Vec<&ClassDescriptor> = self.chain(class).collect();
        let mut defaults = IndexMap::new();
        for descriptor in chain.into_iter().rev() {
            for (name, property) in &descriptor.properties {
                defaults.insert(name.clone(), property.default.clone());
            }
        }
        defaults
    }

    /// The classes every host starts with.
    pub fn builtin() -> Self {
        let classes = [
            ClassDescriptor::abstract_class("Instance"),
            ClassDescriptor::new("Folder").extends("Instance"),
            ClassDescriptor::new("Model")
                .extends("Instance")
                .property("PrimaryPart", ValueKind::Object, Variant::Null),
            ClassDescriptor::abstract_class("BasePart")
                .extends("Instance")
                .property("Anchored", ValueKind::Bool, false)
                .property("Position", ValueKind::Vector3, Vec3::new(0.0, 0.0, 0.0))
                .property("Size", ValueKind::Vector3, Vec3::new(4.0, 1.0, 2.0))
                .property("Color", ValueKind::Color3, Color3::from_rgb(163, 162, 165))
                .property("Transparency", ValueKind::Float, 0.0_f64),
            ClassDescriptor::new("Part").extends("BasePart"),
            ClassDescriptor::new("ScreenGui")
                .extends("Instance")
                .property("Enabled", ValueKind::Bool, true)
                .property("DisplayOrder", ValueKind::Int, 0_i64),
            ClassDescriptor::abstract_class("GuiObject")
                .extends("Instance")
                .property("Visible", ValueKind::Bool, true)
                .property("Position", ValueKind::Vector2, Vec2::new(0.0, 0.0))
                .property("Size", ValueKind::Vector2, Vec2::new(100.0, 100.0))
                .property("BackgroundColor3", ValueKind::Color3, Color3::WHITE)
                .property("BackgroundTransparency", ValueKind::Float, 0.0_f64)
                .property("ZIndex", ValueKind::Int, 1_i64),
            ClassDescriptor::new("Frame").extends("GuiObject"),
            ClassDescriptor::new("TextLabel")
                .extends("GuiObject")
                .property("Text", ValueKind::String, "Label")
                .property("TextSize", ValueKind::Int, 14_i64)
                .property("TextColor3", ValueKind::Color3, Color3::BLACK)
                .read_only_property("TextFits", ValueKind::Bool, true),
            ClassDescriptor::abstract_class("ValueBase").extends("Instance"),
            ClassDescriptor::new("StringValue")
                .extends("ValueBase")
                .property("Value", ValueKind::String, ""),
            ClassDescriptor::new("IntValue")
                .extends("ValueBase")
                .property("Value", ValueKind::Int, 0_i64),
            ClassDescriptor::new("NumberValue")
                .extends("ValueBase")
                .property("Value", ValueKind::Float, 0.0_f64),
            ClassDescriptor::new("BoolValue")
                .extends("ValueBase")
                .property("Value", ValueKind::Bool, false),
            ClassDescriptor::new("ObjectValue")
                .extends("ValueBase")
                .property("Value", ValueKind::Object, Variant::Null),
        ];

        let mut registry = Self::new();
        let count = classes.len();
        for class in classes {
            // Listed base-first with unique names.
            let registered = registry.register(class);
            debug_assert!(registered.is_ok(), "builtin class table: {registered:?}");
        }
        debug_assert_eq!(registry.len(), count);
        registry
    }
}
