//! Sable runtime
//!
//! A tree-walking interpreter for Sable, a small class-based
//! message-passing language. Programs arrive as JSON documents,
//! are loaded into an immutable class table, and run by sending
//! `run` to a fresh `Main` instance. The `Sable` facade covers the
//! common embed cases; `Interpreter` plus the i/o traits cover the
//! rest.
//!
//! ```no_run
//! use sable_runtime::Sable;
//!
//! let mut sable = Sable::new();
//! if let Err(err) = sable.run_file("program.json") {
//!     eprintln!("{err}");
//!     std::process::exit(err.exit_code());
//! }
//! ```

pub mod ast;
mod builtins;
pub mod error;
mod interpreter;
pub mod io;
mod loader;
pub mod program;
mod resolve;
mod runtime;
mod stack;
pub mod value;

pub use error::{FaultCategory, LoadError, RuntimeError};
pub use interpreter::Interpreter;
pub use io::{InputSource, OutputSink, ScriptedInput, StdinSource, StdoutSink};
pub use loader::load_str;
pub use program::Program;
pub use runtime::{Sable, SableError};
pub use value::{ObjectRef, Primitive};
