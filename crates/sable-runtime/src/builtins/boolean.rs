//! True and False
//!
//! The two classes share one table: every method branches on the
//! receiver's payload, and `and:`/`or:` send `value` to their block
//! argument only when the receiver does not already decide the
//! answer.

use crate::builtins::{first_arg, NativeMethod};
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::ObjectRef;

pub(super) fn method(selector: &str) -> Option<NativeMethod> {
    Some(match selector {
        "not" => NativeMethod::Pure(not),
        "and:" => NativeMethod::Reentrant(and),
        "or:" => NativeMethod::Reentrant(or),
        "ifTrue:ifFalse:" => NativeMethod::Reentrant(if_true_if_false),
        "asString" => NativeMethod::Pure(as_string),
        _ => return None,
    })
}

fn truth_of(receiver: &ObjectRef) -> bool {
    receiver.bool_value() == Some(true)
}

fn not(
    interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(interp.boolean(!truth_of(receiver)))
}

fn and(
    interp: &mut Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    if !truth_of(receiver) {
        return Ok(interp.boolean(false));
    }
    let branch = first_arg("and:", args)?.clone();
    interp.dispatch(branch, "value", &[], false)
}

fn or(
    interp: &mut Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    if truth_of(receiver) {
        return Ok(interp.boolean(true));
    }
    let branch = first_arg("or:", args)?.clone();
    interp.dispatch(branch, "value", &[], false)
}

fn if_true_if_false(
    interp: &mut Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let branch = if truth_of(receiver) {
        first_arg("ifTrue:ifFalse:", args)?
    } else {
        args.get(1).ok_or_else(|| RuntimeError::MissingArgument {
            selector: "ifTrue:ifFalse:".to_string(),
        })?
    }
    .clone();
    interp.dispatch(branch, "value", &[], false)
}

fn as_string(
    _interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(ObjectRef::string(if truth_of(receiver) {
        "true"
    } else {
        "false"
    }))
}
