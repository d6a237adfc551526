//! Declarative construction over a scene object model.
//!
//! [`make`] instantiates a class (or deep-clones an object), applies a property bag and
//! attaches children in one call. [`modify`] patches properties on an existing object.
//! Both go through [`forge_dom::ObjectModel`], so any host that implements it can be driven.

pub mod error;
pub mod make;
pub mod modify;
pub mod module;
pub mod props;

pub use error::{ForgeError, Result};
pub use make::{BuildSpec, make, make_default};
pub use modify::modify;
pub use module::Forge;
pub use props::{Children, PropSource, PropertyBag, Props, PropsFactory};

/// Build a [`PropertyBag`] from `name => value` pairs.
#[macro_export]
macro_rules! props {
    () => {
        $crate::PropertyBag::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut bag = $crate::PropertyBag::new();
        $( bag.insert($name, $value); )+
        bag
    }};
}

/// Build [`Children::Named`] from `name => child` pairs.
#[macro_export]
macro_rules! named {
    ($($name:expr => $child:expr),+ $(,)?) => {
        $crate::Children::named([$(($name, $child)),+])
    };
}

pub mod prelude {
    pub use crate::{
        BuildSpec, Children, Forge, ForgeError, PropSource, PropertyBag, Props, make,
        make_default, modify, named, props,
    };
    pub use forge_dom::{Dom, DomError, Object, ObjectModel};
    pub use forge_ids::ObjectID;
    pub use forge_variant::Variant;
}
