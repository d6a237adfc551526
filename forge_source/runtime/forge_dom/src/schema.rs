//! Class schemas loaded from TOML.
//!
//! ```toml
//! [classes.Door]
//! superclass = "Part"
//!
//! [classes.Door.properties]
//! Locked = { kind = "bool", default = false }
//! Hinge = { kind = "vector3", default = [0, 0, 1] }
//! Label = { kind = "string", read_only = true }
//! ```
//!
//! A property without `default` starts at the zero value of its kind.

use std::path::Path;
use std::sync::Arc;

use forge_variant::ValueKind;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::class::{ClassDescriptor, ClassRegistry, PropertyDescriptor};
use crate::error::SchemaError;

#[derive(Deserialize, Debug, Default)]
struct SchemaFile {
    #[serde(default)]
    classes: IndexMap<String, ClassEntry>,
}

#[derive(Deserialize, Debug)]
struct ClassEntry {
    superclass: Option<String>,
    #[serde(default = "default_creatable")]
    creatable: bool,
    #[serde(default)]
    properties: IndexMap<String, PropertyEntry>,
}

#[derive(Deserialize, Debug)]
struct PropertyEntry {
    kind: ValueKind,
    default: Option<JsonValue>,
    #[serde(default)]
    read_only: bool,
}

fn default_creatable() -> bool {
    true
}

impl ClassEntry {
    fn into_descriptor(self, name: String) -> Result<ClassDescriptor, SchemaError> {
        let mut properties = IndexMap::with_capacity(self.properties.len());
        for (property, entry) in self.properties {
            let default = match &entry.default {
                Some(value) => {
                    entry
                        .kind
                        .parse_json(value)
                        .ok_or_else(|| SchemaError::InvalidDefault {
                            class: name.clone(),
                            property: property.clone(),
                            kind: entry.kind,
                        })?
                }
                None => entry.kind.zero(),
            };
            properties.insert(
                Arc::<str>::from(property),
                PropertyDescriptor {
                    kind: entry.kind,
                    default,
                    read_only: entry.read_only,
                },
            );
        }

        Ok(ClassDescriptor {
            name: Arc::from(name),
            superclass: self.superclass.map(Arc::from),
            creatable: self.creatable,
            properties,
        })
    }
}

impl ClassRegistry {
    pub fn from_toml_str(src: &str) -> Result<Self, SchemaError> {
        let mut registry = Self::new();
        registry.extend_from_toml_str(src)?;
        Ok(registry)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let src = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&src)
    }

    /// Merge the classes of a schema document. Classes may appear in any order as long as
    /// every superclass is either already registered or defined in the same document.
    /// On error the registry is left unchanged.
    pub fn extend_from_toml_str(&mut self, src: &str) -> Result<(), SchemaError> {
        let file: SchemaFile = toml::from_str(src)?;

        let mut pending = Vec::with_capacity(file.classes.len());
        for (name, entry) in file.classes {
            pending.push(entry.into_descriptor(name)?);
        }

        let mut staged = self.clone();
        while !pending.is_empty() {
            let ready = pending.iter().position(|class| {
                class
                    .superclass
                    .as_deref()
                    .is_none_or(|superclass| staged.contains(superclass))
            });
            match ready {
                Some(index) => staged.register(pending.swap_remove(index))?,
                None => {
                    let class = &pending[0];
                    return Err(SchemaError::UnknownSuperclass {
                        class: class.name.to_string(),
                        superclass: class.superclass.as_deref().unwrap_or_default().to_string(),
                    });
                }
            }
        }

        log::debug!(
            "class schema loaded: {} classes registered",
            staged.len() - self.len()
        );
        *self = staged;
        Ok(())
    }
}
