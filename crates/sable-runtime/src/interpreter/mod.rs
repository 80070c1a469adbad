//! The evaluator
//!
//! Owns everything one program run needs: the class table, the
//! per-run singletons, the call stack, the current receiver binding,
//! and borrowed handles to the host i/o boundary. Evaluation is a
//! recursive walk over the syntax model; all control flow, including
//! the native loop constructs, goes through `dispatch`.

mod expr;

use std::rc::Rc;

use crate::error::RuntimeError;
use crate::io::{InputSource, OutputSink};
use crate::program::Program;
use crate::stack::CallStack;
use crate::value::{ObjectRef, Singletons};

/// Tree-walking evaluator for one program run.
pub struct Interpreter<'io> {
    program: Rc<Program>,
    singletons: Singletons,
    stack: CallStack,
    current_self: ObjectRef,
    input: &'io mut dyn InputSource,
    output: &'io mut dyn OutputSink,
}

impl<'io> Interpreter<'io> {
    pub fn new(
        program: Program,
        input: &'io mut dyn InputSource,
        output: &'io mut dyn OutputSink,
    ) -> Interpreter<'io> {
        let singletons = Singletons::default();
        let current_self = singletons.nil();
        Interpreter {
            program: Rc::new(program),
            singletons,
            stack: CallStack::default(),
            current_self,
            input,
            output,
        }
    }

    /// Run the program: check the entry point, instantiate `Main`,
    /// and send it `run`.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        entry_check(&self.program)?;

        let program = Rc::clone(&self.program);
        let main = ObjectRef::instantiate(&program, &self.singletons, "Main")?;
        self.current_self = main.clone();
        self.dispatch(main, "run", &[], false)?;
        Ok(())
    }

    pub(crate) fn program(&self) -> Rc<Program> {
        Rc::clone(&self.program)
    }

    pub(crate) fn nil(&self) -> ObjectRef {
        self.singletons.nil()
    }

    pub(crate) fn boolean(&self, value: bool) -> ObjectRef {
        self.singletons.boolean(value)
    }

    /// One line from the host input, as a String instance. Exhaustion
    /// is an input-source fault.
    pub(crate) fn read_input_line(&mut self) -> Result<ObjectRef, RuntimeError> {
        match self.input.read_line()? {
            Some(line) => Ok(ObjectRef::string(line)),
            None => Err(RuntimeError::InputExhausted),
        }
    }

    pub(crate) fn write_output(&mut self, text: &str) -> Result<(), RuntimeError> {
        self.output.write_text(text)?;
        Ok(())
    }
}

/// Entry-point shape: a `Main` class declaring, in its own method
/// table, a parameterless `run`.
pub(crate) fn entry_check(program: &Program) -> Result<(), RuntimeError> {
    let main = program.class("Main").ok_or(RuntimeError::MissingMain)?;
    match main.methods.get("run") {
        Some(method) if method.body.arity() == 0 => Ok(()),
        _ => Err(RuntimeError::MissingRun),
    }
}
