//! Nil: the only primitive answering `isNil` with True.

use crate::builtins::NativeMethod;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::ObjectRef;

pub(super) fn method(selector: &str) -> Option<NativeMethod> {
    Some(match selector {
        "asString" => NativeMethod::Pure(as_string),
        "isNil" => NativeMethod::Pure(is_nil),
        _ => return None,
    })
}

fn as_string(
    _interp: &Interpreter<'_>,
    _receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(ObjectRef::string("nil"))
}

fn is_nil(
    interp: &Interpreter<'_>,
    _receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(interp.boolean(true))
}
