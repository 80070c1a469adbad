//! Built-in primitive classes
//!
//! Seven fixed native method tables, one per built-in class. A native
//! method is one of a closed set of capability variants; the
//! dispatcher picks the invocation shape from the variant, so the
//! tables and the dispatcher cannot drift apart selector by selector.

mod block;
mod boolean;
mod integer;
mod nil;
mod object;
mod string;

use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::value::ObjectRef;

/// Plain native: receiver and evaluated arguments, no side effects
/// beyond allocation.
pub type PureFn =
    fn(&Interpreter<'_>, &ObjectRef, &[ObjectRef]) -> Result<ObjectRef, RuntimeError>;

/// Output-writing native: receives the receiver and the self binding
/// of the calling frame, which is also its return value.
pub type WriteFn =
    fn(&mut Interpreter<'_>, &ObjectRef, &ObjectRef) -> Result<ObjectRef, RuntimeError>;

/// Input-reading native.
pub type ReadFn = fn(&mut Interpreter<'_>, &ObjectRef) -> Result<ObjectRef, RuntimeError>;

/// Control-flow native that issues further message sends through the
/// evaluator.
pub type ReentrantFn =
    fn(&mut Interpreter<'_>, &ObjectRef, &[ObjectRef]) -> Result<ObjectRef, RuntimeError>;

/// A native method, tagged by the capability it needs.
#[derive(Clone, Copy)]
pub enum NativeMethod {
    Pure(PureFn),
    Write(WriteFn),
    Read(ReadFn),
    Reentrant(ReentrantFn),
}

/// Native table lookup for one built-in class.
pub fn native_method(class: &str, selector: &str) -> Option<NativeMethod> {
    match class {
        "Object" => object::method(selector),
        "Nil" => nil::method(selector),
        "Integer" => integer::method(selector),
        "String" => string::method(selector),
        "True" | "False" => boolean::method(selector),
        "Block" => block::method(selector),
        _ => None,
    }
}

/// First argument of a keyword message; absence is a value fault.
pub(crate) fn first_arg<'a>(
    selector: &str,
    args: &'a [ObjectRef],
) -> Result<&'a ObjectRef, RuntimeError> {
    args.first().ok_or_else(|| RuntimeError::MissingArgument {
        selector: selector.to_string(),
    })
}
