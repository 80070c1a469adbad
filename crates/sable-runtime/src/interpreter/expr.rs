//! Expression resolution and message dispatch
//!
//! The recursive half of the evaluator. Dispatch order for an
//! instance send: user method tables up the chain, native tables of
//! built-in classes, the block value-family, then the attribute
//! fallback. Class-literal receivers never reach this order; they go
//! to the class-level constructors instead.

use std::mem;
use std::rc::Rc;

use crate::ast::{Assignment, Block, Expr, Literal, Send};
use crate::builtins::NativeMethod;
use crate::error::RuntimeError;
use crate::resolve::{self, MethodHit};
use crate::stack::Frame;
use crate::value::{BlockValue, ObjectRef, Primitive};

use super::Interpreter;

impl Interpreter<'_> {
    /// Evaluate one expression in the current frame.
    pub(crate) fn resolve_expr(&mut self, expr: &Expr) -> Result<ObjectRef, RuntimeError> {
        match expr {
            Expr::Literal(literal) => self.literal_instance(literal),
            Expr::Variable(name) => self.resolve_variable(name),
            Expr::Send(send) => self.interpret_send(send),
            Expr::Block(block) => Ok(ObjectRef::block(BlockValue {
                block: Rc::clone(block),
                captured: self.current_self.clone(),
            })),
        }
    }

    fn resolve_variable(&self, name: &str) -> Result<ObjectRef, RuntimeError> {
        if name == "self" || name == "super" {
            return Ok(self.current_self.clone());
        }
        self.stack
            .top()
            .lookup(name)
            .ok_or_else(|| RuntimeError::UnknownIdentifier {
                name: name.to_string(),
            })
    }

    /// Turn a literal node into a runtime instance. The class tag is
    /// validated here, so a malformed literal faults where it is used.
    fn literal_instance(&self, literal: &Literal) -> Result<ObjectRef, RuntimeError> {
        match literal.class.as_str() {
            "Integer" => match literal.value.parse::<i64>() {
                Ok(n) => Ok(ObjectRef::integer(n)),
                Err(_) => Err(malformed(literal)),
            },
            "String" => Ok(ObjectRef::string(literal.value.clone())),
            "Nil" if literal.value == "nil" => Ok(self.nil()),
            "True" if literal.value == "true" => Ok(self.boolean(true)),
            "False" if literal.value == "false" => Ok(self.boolean(false)),
            "Nil" | "True" | "False" => Err(malformed(literal)),
            // A bare class literal in value position makes a fresh
            // default instance of the named class.
            "class" => {
                ObjectRef::instantiate(&self.program, &self.singletons, &literal.value)
            }
            _ => Err(RuntimeError::UnknownLiteralClass {
                class: literal.class.clone(),
            }),
        }
    }

    /// Evaluate a send: arguments left to right, then the receiver,
    /// then dispatch. A class-literal receiver routes to the
    /// class-level constructors.
    fn interpret_send(&mut self, send: &Send) -> Result<ObjectRef, RuntimeError> {
        let mut args = Vec::with_capacity(send.args.len());
        for arg in &send.args {
            args.push(self.resolve_expr(arg)?);
        }

        if let Expr::Literal(lit) = &*send.receiver {
            if lit.class == "class" {
                let class = lit.value.clone();
                return self.class_send(&class, &send.selector, &args);
            }
        }

        let from_super = matches!(&*send.receiver, Expr::Variable(name) if name == "super");
        let receiver = self.resolve_expr(&send.receiver)?;
        self.dispatch(receiver, &send.selector, &args, from_super)
    }

    /// Class-level constructors: `new`, `from:`, and `read` on
    /// String. Anything else on a class receiver is a fault of its
    /// own kind.
    fn class_send(
        &mut self,
        class: &str,
        selector: &str,
        args: &[ObjectRef],
    ) -> Result<ObjectRef, RuntimeError> {
        if self.program.class(class).is_none() {
            return Err(RuntimeError::UnknownClass {
                name: class.to_string(),
            });
        }

        match selector {
            // `new` on a boolean or Nil class answers the singleton,
            // keeping identity comparisons meaningful.
            "new" => match class {
                "Nil" => Ok(self.nil()),
                "True" => Ok(self.boolean(true)),
                "False" => Ok(self.boolean(false)),
                _ => ObjectRef::instantiate(&self.program, &self.singletons, class),
            },
            "from:" => {
                let source = crate::builtins::first_arg("from:", args)?.clone();
                self.construct_from(class, &source)
            }
            "read" if class == "String" => self.read_input_line(),
            _ => Err(RuntimeError::ClassDoesNotUnderstand {
                class: class.to_string(),
                selector: selector.to_string(),
            }),
        }
    }

    /// Copy-construction. A plain Object source contributes nothing
    /// and leaves the fresh instance at its defaults; otherwise the
    /// source must share the target's primitive ancestor.
    fn construct_from(
        &mut self,
        class: &str,
        source: &ObjectRef,
    ) -> Result<ObjectRef, RuntimeError> {
        let target = ObjectRef::instantiate(&self.program, &self.singletons, class)?;
        if source.primitive() == Primitive::Object {
            return Ok(target);
        }
        if source.primitive() != target.primitive() {
            return Err(RuntimeError::CopySourceMismatch {
                class: class.to_string(),
            });
        }
        target.copy_state_from(source);
        Ok(target)
    }

    /// Dispatch a message to a resolved receiver. Native control-flow
    /// methods re-enter here, so every send in the program funnels
    /// through this one path.
    pub(crate) fn dispatch(
        &mut self,
        receiver: ObjectRef,
        selector: &str,
        args: &[ObjectRef],
        from_super: bool,
    ) -> Result<ObjectRef, RuntimeError> {
        let program = self.program();
        let class = receiver.class_name();

        match resolve::lookup_method(&program, &class, selector, from_super)? {
            Some(MethodHit::User(method)) => {
                let body = Rc::clone(&method.body);
                self.invoke_block(receiver, body, args)
            }
            Some(MethodHit::Native(native)) => self.invoke_native(native, receiver, args),
            None => self.dispatch_fallback(receiver, selector, args),
        }
    }

    fn invoke_native(
        &mut self,
        native: NativeMethod,
        receiver: ObjectRef,
        args: &[ObjectRef],
    ) -> Result<ObjectRef, RuntimeError> {
        match native {
            NativeMethod::Pure(f) => f(self, &receiver, args),
            NativeMethod::Write(f) => {
                let caller_self = self.current_self.clone();
                f(self, &receiver, &caller_self)
            }
            NativeMethod::Read(f) => f(self, &receiver),
            NativeMethod::Reentrant(f) => f(self, &receiver, args),
        }
    }

    /// When method lookup misses: the block value-family, then the
    /// attribute read/write fallback, then does-not-understand.
    fn dispatch_fallback(
        &mut self,
        receiver: ObjectRef,
        selector: &str,
        args: &[ObjectRef],
    ) -> Result<ObjectRef, RuntimeError> {
        if receiver.primitive() == Primitive::Block {
            let value = receiver
                .block_value()
                .expect("a Block-primitive object carries a block payload");
            // The invocation selector is fixed by the block's arity;
            // any other selector takes the attribute fallback like an
            // ordinary send. Invocation binds self to the receiver the
            // block captured when it was created, not to the sender's
            // self.
            if selector == value_selector(value.block.arity()) {
                return self.invoke_block(value.captured.clone(), value.block, args);
            }
        }

        let colons = selector.matches(':').count();
        if colons == 0 {
            if let Some(value) = receiver.get_attribute(selector) {
                return Ok(value);
            }
        } else if colons == 1 && selector.ends_with(':') {
            let value = crate::builtins::first_arg(selector, args)?;
            receiver.set_attribute(&selector[..selector.len() - 1], value.clone());
            return Ok(receiver);
        }

        Err(RuntimeError::DoesNotUnderstand {
            class: receiver.class_name(),
            selector: selector.to_string(),
        })
    }

    /// Run a block body: arity check, fresh frame, receiver rebound
    /// for the duration. Answers the last statement's value, or Nil
    /// for an empty body.
    fn invoke_block(
        &mut self,
        receiver: ObjectRef,
        block: Rc<Block>,
        args: &[ObjectRef],
    ) -> Result<ObjectRef, RuntimeError> {
        if block.arity() != args.len() {
            return Err(RuntimeError::BlockArity {
                expected: block.arity(),
                supplied: args.len(),
            });
        }

        self.stack.push(Frame::with_params(&block.params, args));
        let saved_self = mem::replace(&mut self.current_self, receiver);

        let outcome = self.run_statements(&block.statements);

        self.stack.pop();
        self.current_self = saved_self;
        outcome
    }

    fn run_statements(&mut self, statements: &[Assignment]) -> Result<ObjectRef, RuntimeError> {
        let mut last = self.nil();
        for statement in statements {
            last = self.interpret_statement(statement)?;
        }
        Ok(last)
    }

    fn interpret_statement(&mut self, statement: &Assignment) -> Result<ObjectRef, RuntimeError> {
        let value = self.resolve_expr(&statement.expr)?;
        self.stack
            .top_mut()
            .assign(statement.target.clone(), value.clone());
        Ok(value)
    }
}

fn malformed(literal: &Literal) -> RuntimeError {
    RuntimeError::MalformedLiteral {
        class: literal.class.clone(),
        value: literal.value.clone(),
    }
}

/// The one selector that invokes a block of the given arity: `value`
/// for zero parameters, `value:` repeated once per parameter.
fn value_selector(arity: usize) -> String {
    if arity == 0 {
        "value".to_string()
    } else {
        "value:".repeat(arity)
    }
}
