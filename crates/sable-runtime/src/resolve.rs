//! Class and method resolution
//!
//! Walks the single-inheritance chain from a class to the built-in
//! root. Two walks live here: primitive-ancestor resolution (with
//! cycle detection) and method lookup (user tables first, then the
//! native tables of built-in classes). Attribute fallback is handled
//! by the dispatcher, not here, so lookup stays pure.

use std::collections::HashSet;

use crate::ast::MethodDecl;
use crate::builtins::{self, NativeMethod};
use crate::error::RuntimeError;
use crate::program::Program;
use crate::value::Primitive;

/// Result of a successful method lookup: either an interpreted user
/// method or a native built-in.
pub enum MethodHit<'p> {
    User(&'p MethodDecl),
    Native(NativeMethod),
}

/// Nearest built-in class reached by walking `class`'s parent chain.
/// Revisiting a class is a circular-inheritance fault; exhausting the
/// chain without reaching a built-in is a missing-ancestor fault.
pub fn primitive_ancestor(program: &Program, class: &str) -> Result<Primitive, RuntimeError> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = program.class(class);

    while let Some(decl) = current {
        if !visited.insert(&decl.name) {
            return Err(RuntimeError::CircularInheritance {
                class: decl.name.clone(),
            });
        }

        if program.is_builtin(&decl.name) {
            if let Some(primitive) = Primitive::from_class_name(&decl.name) {
                return Ok(primitive);
            }
        }

        current = program.parent_of(&decl.name)?;
    }

    // Covers both an undeclared starting class and a chain whose
    // named parent is not in the table.
    Err(if program.class(class).is_none() {
        RuntimeError::UnknownClass {
            name: class.to_string(),
        }
    } else {
        RuntimeError::NoBuiltinAncestor {
            class: class.to_string(),
        }
    })
}

/// Find the first method for `selector` along the chain starting at
/// `class`. With `skip_start` set (a `super` send) the walk begins at
/// the parent instead. Returns `None` when the chain is exhausted.
pub fn lookup_method<'p>(
    program: &'p Program,
    class: &str,
    selector: &str,
    skip_start: bool,
) -> Result<Option<MethodHit<'p>>, RuntimeError> {
    let mut current = if skip_start {
        program.parent_of(class)?
    } else {
        program.class(class)
    };

    while let Some(decl) = current {
        if let Some(method) = decl.methods.get(selector) {
            return Ok(Some(MethodHit::User(method)));
        }

        if program.is_builtin(&decl.name) {
            if let Some(native) = builtins::native_method(&decl.name, selector) {
                return Ok(Some(MethodHit::Native(native)));
            }
        }

        current = program.parent_of(&decl.name)?;
    }

    Ok(None)
}
