//! Embedding facade
//!
//! `Sable` bundles the host i/o boundary and drives a full
//! load-and-run cycle, so embedders and the command-line front end
//! never touch the evaluator directly. Static validation lives here
//! too: `check_str` runs every pre-flight check without executing
//! anything.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::{LoadError, RuntimeError};
use crate::interpreter::{self, Interpreter};
use crate::io::{InputSource, OutputSink, StdinSource, StdoutSink};
use crate::loader;
use crate::resolve;

/// Anything a full load-and-run cycle can fail with.
#[derive(Debug, Error)]
pub enum SableError {
    #[error("cannot read program file: {0}")]
    Source(std::io::Error),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Runtime(#[from] RuntimeError),
}

impl SableError {
    /// Process exit status: source files that cannot be read get
    /// their own code, the rest defer to the inner fault.
    pub fn exit_code(&self) -> i32 {
        match self {
            SableError::Source(_) => 11,
            SableError::Load(e) => e.exit_code(),
            SableError::Runtime(e) => e.exit_code(),
        }
    }
}

/// A ready-to-run engine bound to an input source and an output sink.
pub struct Sable {
    input: Box<dyn InputSource>,
    output: Box<dyn OutputSink>,
}

impl Sable {
    /// Engine bound to the process's standard streams.
    pub fn new() -> Sable {
        Sable::with_io(Box::new(StdinSource), Box::new(StdoutSink))
    }

    pub fn with_io(input: Box<dyn InputSource>, output: Box<dyn OutputSink>) -> Sable {
        Sable { input, output }
    }

    /// Load a program document from text and run it.
    pub fn run_str(&mut self, source: &str) -> Result<(), SableError> {
        let program = loader::load_str(source)?;
        let mut interp = Interpreter::new(program, &mut *self.input, &mut *self.output);
        interp.run()?;
        Ok(())
    }

    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<(), SableError> {
        let source = fs::read_to_string(path).map_err(SableError::Source)?;
        self.run_str(&source)
    }

    /// Validate a program document without executing it: it must
    /// parse, declare a usable entry point, and every class chain
    /// must reach a built-in ancestor.
    pub fn check_str(source: &str) -> Result<(), SableError> {
        let program = loader::load_str(source)?;
        interpreter::entry_check(&program)?;
        let names: Vec<String> = program.class_names().map(str::to_string).collect();
        for name in names {
            resolve::primitive_ancestor(&program, &name)?;
        }
        Ok(())
    }

    pub fn check_file(path: impl AsRef<Path>) -> Result<(), SableError> {
        let source = fs::read_to_string(path).map_err(SableError::Source)?;
        Sable::check_str(&source)
    }
}

impl Default for Sable {
    fn default() -> Sable {
        Sable::new()
    }
}
