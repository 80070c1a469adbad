//! Runtime object representation
//!
//! Every runtime instance is an `ObjectRef`: a shared handle to a
//! class tag, the resolved built-in ancestor, a native payload, and a
//! lazily populated attribute map. Identity is allocation identity —
//! two objects are identical only when they are the same handle.
//! Nil, True and False are lazily created singletons scoped to one
//! interpreter.

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::Block;
use crate::error::RuntimeError;
use crate::program::Program;
use crate::resolve;

/// The built-in primitive classes. Every object resolves to exactly
/// one of these by walking its inheritance chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Object,
    Nil,
    Integer,
    String,
    True,
    False,
    Block,
}

impl Primitive {
    pub fn from_class_name(name: &str) -> Option<Primitive> {
        match name {
            "Object" => Some(Primitive::Object),
            "Nil" => Some(Primitive::Nil),
            "Integer" => Some(Primitive::Integer),
            "String" => Some(Primitive::String),
            "True" => Some(Primitive::True),
            "False" => Some(Primitive::False),
            "Block" => Some(Primitive::Block),
            _ => None,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Primitive::Object => "Object",
            Primitive::Nil => "Nil",
            Primitive::Integer => "Integer",
            Primitive::String => "String",
            Primitive::True => "True",
            Primitive::False => "False",
            Primitive::Block => "Block",
        }
    }
}

/// A runtime block value: the shared syntax block plus the receiver
/// captured when the block expression was evaluated. No enclosing
/// variables are captured — only the receiver crosses the boundary.
#[derive(Debug, Clone)]
pub struct BlockValue {
    pub block: Rc<Block>,
    pub captured: ObjectRef,
}

/// Native payload slot. Exactly one kind, matching the object's
/// primitive ancestor.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Object and Nil instances carry no native data.
    Unit,
    Bool(bool),
    Int(i64),
    Str(String),
    Block(BlockValue),
}

impl Payload {
    fn default_for(primitive: Primitive, singletons: &Singletons) -> Payload {
        match primitive {
            Primitive::Object | Primitive::Nil => Payload::Unit,
            Primitive::Integer => Payload::Int(0),
            Primitive::String => Payload::Str(String::new()),
            Primitive::True => Payload::Bool(true),
            Primitive::False => Payload::Bool(false),
            Primitive::Block => Payload::Block(BlockValue {
                block: Rc::new(Block::default()),
                captured: singletons.nil(),
            }),
        }
    }
}

#[derive(Debug)]
struct ObjectData {
    class: String,
    primitive: Primitive,
    payload: Payload,
    attributes: HashMap<String, ObjectRef>,
}

/// Shared handle to a heap-resident runtime object.
#[derive(Debug, Clone)]
pub struct ObjectRef(Rc<RefCell<ObjectData>>);

impl ObjectRef {
    fn allocate(class: impl Into<String>, primitive: Primitive, payload: Payload) -> ObjectRef {
        ObjectRef(Rc::new(RefCell::new(ObjectData {
            class: class.into(),
            primitive,
            payload,
            attributes: HashMap::new(),
        })))
    }

    /// Default-construct an instance of a declared class. Resolves the
    /// primitive ancestor, which is where circular inheritance and
    /// missing-built-in chains fault.
    pub fn instantiate(
        program: &Program,
        singletons: &Singletons,
        class: &str,
    ) -> Result<ObjectRef, RuntimeError> {
        let primitive = resolve::primitive_ancestor(program, class)?;
        let payload = Payload::default_for(primitive, singletons);
        Ok(ObjectRef::allocate(class, primitive, payload))
    }

    pub fn integer(value: i64) -> ObjectRef {
        ObjectRef::allocate("Integer", Primitive::Integer, Payload::Int(value))
    }

    pub fn string(value: impl Into<String>) -> ObjectRef {
        ObjectRef::allocate("String", Primitive::String, Payload::Str(value.into()))
    }

    pub fn block(value: BlockValue) -> ObjectRef {
        ObjectRef::allocate("Block", Primitive::Block, Payload::Block(value))
    }

    /// Allocation identity: same handle, not structural equality.
    pub fn is_identical(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn class_name(&self) -> String {
        self.0.borrow().class.clone()
    }

    pub fn primitive(&self) -> Primitive {
        self.0.borrow().primitive
    }

    pub fn int_value(&self) -> Option<i64> {
        match &self.0.borrow().payload {
            Payload::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn str_value(&self) -> Option<String> {
        match &self.0.borrow().payload {
            Payload::Str(s) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn bool_value(&self) -> Option<bool> {
        match &self.0.borrow().payload {
            Payload::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn block_value(&self) -> Option<BlockValue> {
        match &self.0.borrow().payload {
            Payload::Block(b) => Some(b.clone()),
            _ => None,
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<ObjectRef> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: ObjectRef) {
        self.0.borrow_mut().attributes.insert(name.into(), value);
    }

    /// Copy-construction support for `from:`: adopt the source's
    /// payload and attribute map. Attribute values stay shared.
    pub fn copy_state_from(&self, source: &ObjectRef) {
        let (payload, attributes) = {
            let src = source.0.borrow();
            (src.payload.clone(), src.attributes.clone())
        };
        let mut data = self.0.borrow_mut();
        data.payload = payload;
        data.attributes = attributes;
    }
}

/// Lazily created Nil/True/False instances. At most one of each per
/// interpreter; identity comparisons rely on reuse.
#[derive(Debug, Default)]
pub struct Singletons {
    nil: OnceCell<ObjectRef>,
    truth: OnceCell<ObjectRef>,
    falsity: OnceCell<ObjectRef>,
}

impl Singletons {
    pub fn nil(&self) -> ObjectRef {
        self.nil
            .get_or_init(|| ObjectRef::allocate("Nil", Primitive::Nil, Payload::Unit))
            .clone()
    }

    pub fn boolean(&self, value: bool) -> ObjectRef {
        if value {
            self.truth
                .get_or_init(|| {
                    ObjectRef::allocate("True", Primitive::True, Payload::Bool(true))
                })
                .clone()
        } else {
            self.falsity
                .get_or_init(|| {
                    ObjectRef::allocate("False", Primitive::False, Payload::Bool(false))
                })
                .clone()
        }
    }
}
