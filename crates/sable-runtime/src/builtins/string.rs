//! String: value equality, printing, reading, conversions,
//! concatenation, and the 1-based substring operation.

use crate::builtins::{first_arg, integer::expect_int, NativeMethod};
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::ObjectRef;

pub(super) fn method(selector: &str) -> Option<NativeMethod> {
    Some(match selector {
        "isString" => NativeMethod::Pure(is_string),
        "read" => NativeMethod::Read(read),
        "print" => NativeMethod::Write(print),
        "equalTo:" => NativeMethod::Pure(equal_to),
        "asString" => NativeMethod::Pure(as_string),
        "asInteger" => NativeMethod::Pure(as_integer),
        "concatenateWith:" => NativeMethod::Pure(concatenate_with),
        "startsWith:endsBefore:" => NativeMethod::Pure(starts_with_ends_before),
        _ => return None,
    })
}

/// Decode backslash escapes for printing. Known escapes map to their
/// control characters; an unknown escape drops the backslash and
/// keeps the character.
pub(super) fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

fn is_string(
    interp: &Interpreter<'_>,
    _receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(interp.boolean(true))
}

/// One line of external input; exhaustion is fatal.
fn read(
    interp: &mut Interpreter<'_>,
    _receiver: &ObjectRef,
) -> Result<ObjectRef, RuntimeError> {
    interp.read_input_line()
}

/// Write the decoded text and pass the calling frame's self through.
fn print(
    interp: &mut Interpreter<'_>,
    receiver: &ObjectRef,
    caller_self: &ObjectRef,
) -> Result<ObjectRef, RuntimeError> {
    let text = receiver.str_value().unwrap_or_default();
    interp.write_output(&decode_escapes(&text))?;
    Ok(caller_self.clone())
}

fn equal_to(
    interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let other = first_arg("equalTo:", args)?;
    let equal = match (receiver.str_value(), other.str_value()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };
    Ok(interp.boolean(equal))
}

fn as_string(
    _interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    Ok(receiver.clone())
}

/// Soft conversion: non-numeric text answers Nil, never a fault.
fn as_integer(
    interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    _args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let text = receiver.str_value().unwrap_or_default();
    match text.trim().parse::<i64>() {
        Ok(n) => Ok(ObjectRef::integer(n)),
        Err(_) => Ok(interp.nil()),
    }
}

/// Soft concatenation: a non-String argument answers Nil.
fn concatenate_with(
    interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let other = first_arg("concatenateWith:", args)?;
    match (receiver.str_value(), other.str_value()) {
        (Some(a), Some(b)) => Ok(ObjectRef::string(a + &b)),
        _ => Ok(interp.nil()),
    }
}

/// 1-based substring from `start` up to but not including `end`.
/// Integer bounds are required; bounds below 1 answer Nil; a
/// non-positive span answers an empty String.
fn starts_with_ends_before(
    interp: &Interpreter<'_>,
    receiver: &ObjectRef,
    args: &[ObjectRef],
) -> Result<ObjectRef, RuntimeError> {
    let start = expect_int(
        "startsWith:endsBefore:",
        first_arg("startsWith:endsBefore:", args)?,
    )?;
    let end = expect_int(
        "startsWith:endsBefore:",
        args.get(1).ok_or_else(|| RuntimeError::MissingArgument {
            selector: "startsWith:endsBefore:".to_string(),
        })?,
    )?;

    if start < 1 || end < 1 {
        return Ok(interp.nil());
    }
    let span = end - start;
    if span <= 0 {
        return Ok(ObjectRef::string(""));
    }

    let text = receiver.str_value().unwrap_or_default();
    let slice: String = text
        .chars()
        .skip(start as usize - 1)
        .take(span as usize)
        .collect();
    Ok(ObjectRef::string(slice))
}
