//! Block: the type predicate and the conditional loop.

use crate::builtins::{first_arg, NativeMethod};
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::{ObjectRef, Primitive};

pub(super) fn method(selector: &str) -> Option<NativeMethod> {
    Some(match selector {
        "isBlock" => NativeMethod::Pure(is_block),
        "whileTrue:" => NativeMethod::Reentrant(while_true),
        _ => return None,
    })
}

fn is_block(
    interp: &Interpreter<'_>,
    _receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(interp.boolean(true))
}

/// Evaluate the receiver until it stops answering a True, running the
/// argument block after each truthy round. Answers the last body
/// value, or Nil when the condition fails immediately.
fn while_true(
    interp: &mut Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let body = first_arg("whileTrue:", args)?.clone();
    let mut result = interp.nil();
    loop {
        let condition = interp.dispatch(receiver.clone(), "value", &[], false)?;
        if condition.primitive() != Primitive::True {
            return Ok(result);
        }
        result = interp.dispatch(body.clone(), "value", &[], false)?;
    }
}
