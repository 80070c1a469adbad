//! Program table
//!
//! The set of declared classes indexed by name, plus the marker set
//! identifying which class names are built-in primitives. Read-only
//! once loading finishes.

use std::collections::{HashMap, HashSet};

use crate::ast::ClassDecl;
use crate::error::RuntimeError;

/// Names of the seven built-in primitive classes.
pub const BUILTIN_CLASSES: [&str; 7] = [
    "Object", "Nil", "Integer", "String", "True", "False", "Block",
];

#[derive(Debug, Default)]
pub struct Program {
    /// Optional metadata carried from the source document.
    pub language: Option<String>,
    pub description: Option<String>,
    classes: HashMap<String, ClassDecl>,
    builtins: HashSet<String>,
}

impl Program {
    /// Build a program table from user-declared classes and register
    /// the built-ins. A user class shadowing a built-in name is
    /// replaced by the built-in.
    pub fn new(classes: HashMap<String, ClassDecl>) -> Self {
        let mut program = Program {
            language: None,
            description: None,
            classes,
            builtins: HashSet::new(),
        };
        program.register_builtins();
        program
    }

    fn register_builtins(&mut self) {
        for name in BUILTIN_CLASSES {
            let parent = if name == "Object" {
                None
            } else {
                Some("Object".to_string())
            };
            self.classes
                .insert(name.to_string(), ClassDecl::new(name, parent));
            self.builtins.insert(name.to_string());
        }
    }

    pub fn class(&self, name: &str) -> Option<&ClassDecl> {
        self.classes.get(name)
    }

    /// Parent of the named class. The class itself must exist; a
    /// missing class mid-chain is a type fault. The root class
    /// answers `None`.
    pub fn parent_of(&self, name: &str) -> Result<Option<&ClassDecl>, RuntimeError> {
        let class = self.class(name).ok_or_else(|| RuntimeError::UnknownClass {
            name: name.to_string(),
        })?;
        match &class.parent {
            None => Ok(None),
            Some(parent) => Ok(self.class(parent)),
        }
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }
}
