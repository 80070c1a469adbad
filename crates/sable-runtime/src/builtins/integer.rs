//! Integer: value equality, ordering, wrapping arithmetic,
//! conversions, and counted iteration.

use crate::builtins::{first_arg, NativeMethod};
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::ObjectRef;

pub(super) fn method(selector: &str) -> Option<NativeMethod> {
    Some(match selector {
        "isNumber" => NativeMethod::Pure(is_number),
        "equalTo:" => NativeMethod::Pure(equal_to),
        "greaterThan:" => NativeMethod::Pure(greater_than),
        "plus:" => NativeMethod::Pure(plus),
        "minus:" => NativeMethod::Pure(minus),
        "multiplyBy:" => NativeMethod::Pure(multiply_by),
        "divBy:" => NativeMethod::Pure(div_by),
        "asString" => NativeMethod::Pure(as_string),
        "asInteger" => NativeMethod::Pure(as_integer),
        "timesRepeat:" => NativeMethod::Reentrant(times_repeat),
        _ => return None,
    })
}

/// Arithmetic operands must have the Integer primitive ancestor.
pub(super) fn expect_int(selector: &str, object: &ObjectRef) -> Result<i64, RuntimeError> {
    object
        .int_value()
        .ok_or_else(|| RuntimeError::IntegerArgumentExpected {
            selector: selector.to_string(),
        })
}

fn is_number(
    interp: &Interpreter<'_>,
    _receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(interp.boolean(true))
}

/// Value equality against another Integer; any other primitive kind
/// answers False rather than faulting.
fn equal_to(
    interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let other = first_arg("equalTo:", args)?;
    let equal = match (receiver.int_value(), other.int_value()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };
    Ok(interp.boolean(equal))
}

fn greater_than(
    interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let a = expect_int("greaterThan:", receiver)?;
    let b = expect_int("greaterThan:", first_arg("greaterThan:", args)?)?;
    Ok(interp.boolean(a > b))
}

fn plus(
    _interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let a = expect_int("plus:", receiver)?;
    let b = expect_int("plus:", first_arg("plus:", args)?)?;
    Ok(ObjectRef::integer(a.wrapping_add(b)))
}

fn minus(
    _interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let a = expect_int("minus:", receiver)?;
    let b = expect_int("minus:", first_arg("minus:", args)?)?;
    Ok(ObjectRef::integer(a.wrapping_sub(b)))
}

fn multiply_by(
    _interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let a = expect_int("multiplyBy:", receiver)?;
    let b = expect_int("multiplyBy:", first_arg("multiplyBy:", args)?)?;
    Ok(ObjectRef::integer(a.wrapping_mul(b)))
}

/// Truncating division; a zero divisor is a value fault, never a host
/// trap.
fn div_by(
    _interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let a = expect_int("divBy:", receiver)?;
    let b = expect_int("divBy:", first_arg("divBy:", args)?)?;
    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(ObjectRef::integer(a.wrapping_div(b)))
}

fn as_string(
    _interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let n = expect_int("asString", receiver)?;
    Ok(ObjectRef::string(n.to_string()))
}

fn as_integer(
    _interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(receiver.clone())
}

/// Send `value:` to the block argument once per count from 1 to the
/// receiver inclusive; zero and negative receivers perform no sends.
/// Yields the last block result, Nil when the body never ran.
fn times_repeat(
    interp: &mut Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let count = expect_int("timesRepeat:", receiver)?;
    let body = first_arg("timesRepeat:", args)?.clone();

    let mut result = interp.nil();
    for i in 1..=count {
        result = interp.dispatch(body.clone(), "value:", &[ObjectRef::integer(i)], false)?;
    }
    Ok(result)
}
