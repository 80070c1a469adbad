//! Abstract syntax model
//!
//! Immutable-after-construction description of a Sable program:
//! classes, methods, blocks, assignment statements, and expressions.
//! Blocks are shared via `Rc` because the same node doubles as a
//! method body and as a closure literal captured inside runtime
//! block values.

use std::collections::HashMap;
use std::rc::Rc;

/// A declared class: unique name, optional parent, selector-keyed
/// method table. A later declaration for the same selector overwrites
/// the earlier one.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    /// Parent class name. `None` only for the built-in root class.
    pub parent: Option<String>,
    pub methods: HashMap<String, MethodDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>, parent: Option<String>) -> Self {
        Self {
            name: name.into(),
            parent,
            methods: HashMap::new(),
        }
    }
}

/// A user-defined method: its selector and the block serving as its
/// body. Owned by its class declaration.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub selector: String,
    pub body: Rc<Block>,
}

/// A block: ordered parameter names, ordered assignment statements.
/// The arity is the parameter count. The receiver a block closes over
/// is not stored here — it is captured into the runtime block value
/// at the moment the block expression is evaluated.
#[derive(Debug, Default)]
pub struct Block {
    pub params: Vec<String>,
    pub statements: Vec<Assignment>,
}

impl Block {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// One statement: evaluate the expression, store the result under the
/// target variable name in the current frame.
#[derive(Debug)]
pub struct Assignment {
    pub target: String,
    pub expr: Expr,
}

/// Expression shapes.
#[derive(Debug)]
pub enum Expr {
    Literal(Literal),
    /// A variable reference. The names `self` and `super` are
    /// reserved and resolve to the current receiver.
    Variable(String),
    Send(Send),
    Block(Rc<Block>),
}

/// A literal: class tag plus textual value. The tag is carried as
/// data and checked when the literal is turned into a runtime
/// instance, so a bad tag faults exactly where the literal is used.
#[derive(Debug, Clone)]
pub struct Literal {
    pub class: String,
    pub value: String,
}

/// A message send: selector, receiver expression, ordered arguments.
/// A receiver that is a literal with the `class` tag routes the send
/// to the class-level constructors instead of method lookup.
#[derive(Debug)]
pub struct Send {
    pub selector: String,
    pub receiver: Box<Expr>,
    pub args: Vec<Expr>,
}
