use forge_dom::ObjectModel;
use forge_ids::ObjectID;

use crate::error::Result;
use crate::props::PropertyBag;

/// Write every property of `properties` onto `id` and hand `id` back for chaining.
/// Keys are applied literally; there is no children handling here.
pub fn modify<M, P>(model: &mut M, id: ObjectID, properties: P) -> Result<ObjectID>
where
    M: ObjectModel + ?Sized,
    P: Into<PropertyBag>,
{
    let properties = properties.into();
    let count = properties.len();
    properties
        .apply(model, id)
        .inspect_err(|err| log::warn!("modify({id}) aborted: {err}"))?;
    log::debug!("modify({id}): {count} properties");
    Ok(id)
}
