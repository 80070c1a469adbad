//! Fault types
//!
//! Every fault is unrecoverable at the point raised: there is no
//! in-language catch mechanism, so errors propagate straight to the
//! embedding boundary where they are reported once with a
//! category-specific status.

use thiserror::Error;

/// Broad fault categories, one per reportable status class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCategory {
    /// Program shape is unusable: missing `Main`/`run`, circular
    /// inheritance, a chain that never reaches a built-in class.
    Structural,
    /// Bad literal, unknown literal class, undeclared identifier.
    Type,
    /// No method, no block value-family match, no attribute fallback.
    DoesNotUnderstand,
    /// Wrong primitive kind of an operand, division by zero, a
    /// mismatched `from:` copy-construction, bad block arity.
    Value,
    /// The external input source could not supply a requested line,
    /// or the output sink failed.
    InputSource,
}

/// A fault raised during evaluation (or during the pre-flight
/// structural checks).
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("missing class Main")]
    MissingMain,

    #[error("class Main does not declare a zero-parameter method run")]
    MissingRun,

    #[error("circular inheritance involving class '{class}'")]
    CircularInheritance { class: String },

    #[error("class '{class}' never reaches a built-in ancestor")]
    NoBuiltinAncestor { class: String },

    #[error("unknown class '{name}'")]
    UnknownClass { name: String },

    #[error("literal value '{value}' is not valid for literal class '{class}'")]
    MalformedLiteral { class: String, value: String },

    #[error("unknown literal class '{class}'")]
    UnknownLiteralClass { class: String },

    #[error("unknown identifier '{name}'")]
    UnknownIdentifier { name: String },

    #[error("instance of '{class}' does not understand '{selector}'")]
    DoesNotUnderstand { class: String, selector: String },

    #[error("class '{class}' does not understand '{selector}'")]
    ClassDoesNotUnderstand { class: String, selector: String },

    #[error("argument of '{selector}' is not an Integer")]
    IntegerArgumentExpected { selector: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("'from:' source does not share a primitive ancestor with '{class}'")]
    CopySourceMismatch { class: String },

    #[error("block of arity {expected} invoked with {supplied} arguments")]
    BlockArity { expected: usize, supplied: usize },

    #[error("message '{selector}' is missing its argument")]
    MissingArgument { selector: String },

    #[error("input source exhausted while reading")]
    InputExhausted,

    #[error("i/o failure on the host boundary")]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    pub fn category(&self) -> FaultCategory {
        use RuntimeError::*;
        match self {
            MissingMain | MissingRun | CircularInheritance { .. } | NoBuiltinAncestor { .. } => {
                FaultCategory::Structural
            }
            UnknownClass { .. }
            | MalformedLiteral { .. }
            | UnknownLiteralClass { .. }
            | UnknownIdentifier { .. } => FaultCategory::Type,
            DoesNotUnderstand { .. } | ClassDoesNotUnderstand { .. } => {
                FaultCategory::DoesNotUnderstand
            }
            IntegerArgumentExpected { .. }
            | DivisionByZero
            | CopySourceMismatch { .. }
            | BlockArity { .. }
            | MissingArgument { .. } => FaultCategory::Value,
            InputExhausted | Io(_) => FaultCategory::InputSource,
        }
    }

    /// Process exit status for this fault. Missing `Main` and missing
    /// `run` get their own codes; the remaining structural faults
    /// share one.
    pub fn exit_code(&self) -> i32 {
        match self {
            RuntimeError::MissingMain => 51,
            RuntimeError::MissingRun => 52,
            _ => match self.category() {
                FaultCategory::Structural => 50,
                FaultCategory::Type => 53,
                FaultCategory::DoesNotUnderstand => 54,
                FaultCategory::Value => 55,
                FaultCategory::InputSource => 56,
            },
        }
    }
}

/// A fault raised while ingesting the program document, before any
/// evaluation happens.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed program document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("class '{class}': declared arity {declared} does not match {params} parameters")]
    ArityMismatch {
        class: String,
        declared: usize,
        params: usize,
    },

    #[error("class '{name}' is missing a parent")]
    MissingParent { name: String },
}

impl LoadError {
    pub fn exit_code(&self) -> i32 {
        31
    }
}
