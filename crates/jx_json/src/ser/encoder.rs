use alloc::sync::Arc;

use jx_reflect::info::{ReflectKind, TypeInfo};

use crate::Json;
use crate::error::ResolutionError;
use crate::plan::FieldPlan;

/// The encode strategy of one type, decided once from its [`TypeInfo`] and
/// cached next to the field plans.
pub(crate) enum TypeEncoder {
    Struct(Arc<FieldPlan>),
    List,
    Map,
    Optional,
    Scalar,
    Dynamic,
    Opaque,
}

impl TypeEncoder {
    pub(crate) fn compile(json: &Json, info: &'static TypeInfo) -> Result<Self, ResolutionError> {
        Ok(match info {
            TypeInfo::Struct(_) => TypeEncoder::Struct(json.plan_of_info(info)?),
            TypeInfo::List(_) => TypeEncoder::List,
            TypeInfo::Map(_) => TypeEncoder::Map,
            TypeInfo::Optional(_) => TypeEncoder::Optional,
            TypeInfo::Scalar(_) => TypeEncoder::Scalar,
            TypeInfo::Dynamic(_) => TypeEncoder::Dynamic,
            TypeInfo::Opaque(_) => TypeEncoder::Opaque,
        })
    }

    pub(crate) const fn kind(&self) -> ReflectKind {
        match self {
            TypeEncoder::Struct(_) => ReflectKind::Struct,
            TypeEncoder::List => ReflectKind::List,
            TypeEncoder::Map => ReflectKind::Map,
            TypeEncoder::Optional => ReflectKind::Optional,
            TypeEncoder::Scalar => ReflectKind::Scalar,
            TypeEncoder::Dynamic => ReflectKind::Dynamic,
            TypeEncoder::Opaque => ReflectKind::Opaque,
        }
    }
}
