//! The root class: identity comparison, default equality and
//! stringification, and the all-false type predicates that the other
//! primitives override.

use crate::builtins::{first_arg, NativeMethod};
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::ObjectRef;

pub(super) fn method(selector: &str) -> Option<NativeMethod> {
    Some(match selector {
        "identicalTo:" => NativeMethod::Pure(identical_to),
        "equalTo:" => NativeMethod::Pure(equal_to),
        "asString" => NativeMethod::Pure(as_string),
        "isNumber" => NativeMethod::Pure(is_number),
        "isString" => NativeMethod::Pure(is_string),
        "isBlock" => NativeMethod::Pure(is_block),
        "isNil" => NativeMethod::Pure(is_nil),
        _ => return None,
    })
}

pub(super) fn identical_to(
    interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let other = first_arg("identicalTo:", args)?;
    Ok(interp.boolean(receiver.is_identical(other)))
}

/// Default equality is identity; value-carrying primitives override.
fn equal_to(
    interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    identical_to(interp, receiver, args)
}

fn as_string(
    _interp: &Interpreter<'_>,
    _receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(ObjectRef::string(""))
}

fn is_number(
    interp: &Interpreter<'_>,
    _receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(interp.boolean(false))
}

fn is_string(
    interp: &Interpreter<'_>,
    _receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(interp.boolean(false))
}

fn is_block(
    interp: &Interpreter<'_>,
    _receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(interp.boolean(false))
}

fn is_nil(
    interp: &Interpreter<'_>,
    _receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(interp.boolean(false))
}
