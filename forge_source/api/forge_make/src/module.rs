use forge_dom::ObjectModel;
use forge_ids::ObjectID;

use crate::error::Result;
use crate::make::{BuildSpec, make, make_default};
use crate::modify::modify;
use crate::props::{PropSource, PropertyBag};

/// `make`/`modify` bound to one model.
pub struct Forge<'m, M: ObjectModel + ?Sized> {
    model: &'m mut M,
}

impl<'m, M: ObjectModel + ?Sized> Forge<'m, M> {
    pub fn new(model: &'m mut M) -> Self {
        Self { model }
    }

    #[inline]
    pub fn make<'f>(
        &mut self,
        spec: impl Into<BuildSpec>,
        source: impl Into<PropSource<'f>>,
    ) -> Result<ObjectID> {
        make(&mut *self.model, spec, source)
    }

    #[inline]
    pub fn make_default(&mut self, spec: impl Into<BuildSpec>) -> Result<ObjectID> {
        make_default(&mut *self.model, spec)
    }

    #[inline]
    pub fn modify(&mut self, id: ObjectID, properties: impl Into<PropertyBag>) -> Result<ObjectID> {
        modify(&mut *self.model, id, properties)
    }

    pub fn model(&self) -> &M {
        &*self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut *self.model
    }
}
