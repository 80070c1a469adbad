//! Call stack
//!
//! One frame per block invocation: a parameter map bound at entry and
//! a variable map accumulated by assignments. No frame ever reads
//! another frame's bindings; only the receiver travels across
//! invocation boundaries.

use std::collections::HashMap;

use crate::value::ObjectRef;

#[derive(Debug, Default)]
pub struct Frame {
    params: HashMap<String, ObjectRef>,
    vars: HashMap<String, ObjectRef>,
}

impl Frame {
    /// Bind parameter names positionally to the supplied arguments.
    /// Callers check arity before building the frame.
    pub fn with_params(names: &[String], values: &[ObjectRef]) -> Frame {
        let params = names
            .iter()
            .cloned()
            .zip(values.iter().cloned())
            .collect();
        Frame {
            params,
            vars: HashMap::new(),
        }
    }

    /// Assigned variables shadow parameters of the same name.
    pub fn lookup(&self, name: &str) -> Option<ObjectRef> {
        self.vars
            .get(name)
            .or_else(|| self.params.get(name))
            .cloned()
    }

    pub fn assign(&mut self, name: impl Into<String>, value: ObjectRef) {
        self.vars.insert(name.into(), value);
    }
}

/// Strictly LIFO stack of frames, owned by the evaluator.
#[derive(Debug, Default)]
pub struct CallStack {
    frames: Vec<Frame>,
}

impl CallStack {
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Frame of the currently executing block invocation. Expressions
    /// are only ever resolved while a block body runs, so a frame is
    /// always present.
    pub fn top(&self) -> &Frame {
        self.frames.last().expect("a block invocation frame is active")
    }

    pub fn top_mut(&mut self) -> &mut Frame {
        self.frames
            .last_mut()
            .expect("a block invocation frame is active")
    }
}
