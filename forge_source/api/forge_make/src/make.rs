use std::sync::Arc;

use forge_dom::ObjectModel;
use forge_ids::ObjectID;

use crate::error::Result;
use crate::props::{PropSource, Props};

/// What `make` starts from: a class to instantiate or an object to deep-clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildSpec {
    Class(Arc<str>),
    CloneOf(ObjectID),
}

impl From<&str> for BuildSpec {
    fn from(class: &str) -> Self {
        BuildSpec::Class(Arc::from(class))
    }
}

impl From<String> for BuildSpec {
    fn from(class: String) -> Self {
        BuildSpec::Class(Arc::from(class))
    }
}

impl From<Arc<str>> for BuildSpec {
    fn from(class: Arc<str>) -> Self {
        BuildSpec::Class(class)
    }
}

impl From<ObjectID> for BuildSpec {
    fn from(source: ObjectID) -> Self {
        BuildSpec::CloneOf(source)
    }
}

/// Create (or clone) an object, then configure it.
///
/// Order of effects:
/// 1. instantiate the class or deep-clone the source; a clone source is never mutated,
/// 2. resolve the props, calling a deferred factory once with the new object,
/// 3. write every property in insertion order,
/// 4. parent the supplied children to the new object, renaming named ones.
///
/// The first failure aborts the call. Nothing is rolled back: an object created before
/// the failure stays in the model, unparented.
///
/// ```ignore
/// let label = make(&mut dom, "TextLabel", props! { "Text" => "Hello!", "Parent" => gui })?;
/// let copy = make(&mut dom, label, props! { "Text" => "Copy" })?;
/// ```
pub fn make<'f, M, S, P>(model: &mut M, spec: S, source: P) -> Result<ObjectID>
where
    M: ObjectModel + ?Sized,
    S: Into<BuildSpec>,
    P: Into<PropSource<'f>>,
{
    let spec = spec.into();
    build(model, &spec, source.into())
        .inspect_err(|err| log::warn!("make({spec:?}) aborted: {err}"))
}

/// `make` with no properties and no children.
pub fn make_default<M, S>(model: &mut M, spec: S) -> Result<ObjectID>
where
    M: ObjectModel + ?Sized,
    S: Into<BuildSpec>,
{
    make(model, spec, Props::default())
}

fn build<M: ObjectModel + ?Sized>(
    model: &mut M,
    spec: &BuildSpec,
    source: PropSource<'_>,
) -> Result<ObjectID> {
    let target = match spec {
        BuildSpec::Class(class) => model.instantiate(class)?,
        BuildSpec::CloneOf(original) => model.clone_object(*original)?,
    };

    let Props {
        properties,
        children,
    } = source.resolve(&*model, target)?;

    properties.apply(model, target)?;
    if let Some(children) = children {
        children.attach(model, target)?;
    }

    log::debug!("make({spec:?}) -> {target}");
    Ok(target)
}
