//! Element type inference for concrete list types.
//!
//! A list type declares a single-purpose constructor. Its one parameter's
//! static type is the element type of the list. The resolved descriptor is
//! the property type map `{"items" -> ElementType}`, built at most once per
//! list type and cached in the global descriptor registry.

use std::any::TypeId;
use std::sync::Arc;

use quill_record::{global_registry, ConfigErrorReason, PropTypeMap, RecordError};

use super::signature::{ConstructorSig, Visibility};
use super::ImmutableList;

/// The one field every list descriptor declares.
pub const ITEMS: &str = "items";

/// Derive the descriptor for `list_name` from its declared constructor.
///
/// Checks run in order: a constructor must exist, be public, take exactly one
/// parameter, and that parameter must carry a static type.
pub fn resolve_item_type(
    list_name: &str,
    constructor: Option<&ConstructorSig>,
) -> Result<PropTypeMap, RecordError> {
    let fail = |reason| RecordError::configuration(list_name, reason);

    let constructor = constructor.ok_or_else(|| fail(ConfigErrorReason::NoConstructor))?;

    if constructor.visibility != Visibility::Public {
        return Err(fail(ConfigErrorReason::NotPublic));
    }

    let param = match constructor.params.as_slice() {
        [param] => param,
        params => {
            return Err(fail(ConfigErrorReason::WrongArity {
                found: params.len(),
            }))
        }
    };

    let ty = param.ty.clone().ok_or_else(|| {
        fail(ConfigErrorReason::Untyped {
            param: param.name.clone(),
        })
    })?;

    Ok(PropTypeMap::single(list_name, ITEMS, ty))
}

/// The cached descriptor of list type `L`, resolving it on first use.
pub fn descriptor<L: ImmutableList>() -> Result<Arc<PropTypeMap>, RecordError> {
    global_registry().get_or_build(TypeId::of::<L>(), L::list_name(), || {
        resolve_item_type(L::list_name(), L::constructor().as_ref())
    })
}
