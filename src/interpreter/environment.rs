use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{error::RuntimeError, interpreter::{evaluator::core::EvalResult, value::Value}};

/// A single scope level: a mapping from names to shared, mutable value cells.
///
/// The cell indirection is what gives closures their semantics: capturing an
/// environment clones the frame *maps* but shares the *cells*, so an
/// assignment through any path is visible to every holder of the cell.
pub type Frame = HashMap<String, Rc<RefCell<Value>>>;

/// The ordered stack of scopes the evaluator resolves names against.
///
/// Index 0 is the outermost (global) frame; the last index is the innermost.
/// The stack is never empty. Blocks and function calls push exactly one
/// frame on entry and pop it on every exit path.
pub struct Environment {
    frames: Vec<Frame>,
}

impl Environment {
    /// Creates an environment holding a single, empty global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Frame::new()] }
    }

    /// Creates an environment from an existing frame stack, as when a
    /// function call switches to its closure's captured frames.
    #[must_use]
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Pushes a fresh, empty frame onto the stack.
    pub fn push_frame(&mut self) {
        self.frames.push(Frame::new());
    }

    /// Pops the innermost frame.
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Declares `name` in the innermost frame.
    ///
    /// # Errors
    /// Returns [`RuntimeError::AlreadyDefined`] if the innermost frame
    /// already binds `name`; shadowing across frames is allowed, duplicate
    /// declaration within one frame is not.
    pub fn bind(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let frame = self.frames.last_mut().expect("at least the global frame");
        if frame.contains_key(name) {
            return Err(RuntimeError::AlreadyDefined { name: name.to_string(),
                                                      line });
        }
        frame.insert(name.to_string(), Rc::new(RefCell::new(value)));
        Ok(())
    }

    /// Assigns `value` to the nearest enclosing binding of `name`, mutating
    /// the found cell in place.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if no frame binds `name`.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        for frame in self.frames.iter().rev() {
            if let Some(cell) = frame.get(name) {
                *cell.borrow_mut() = value;
                return Ok(());
            }
        }
        Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                              line })
    }

    /// Looks `name` up, walking from the innermost frame outward, and
    /// returns a clone of the first bound value found.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Value> {
        for frame in self.frames.iter().rev() {
            if let Some(cell) = frame.get(name) {
                return Some(cell.borrow().clone());
            }
        }
        None
    }

    /// Snapshots the current frame stack for a closure.
    ///
    /// The frame maps are cloned, so names bound *after* the capture are
    /// invisible to the closure; the value cells are shared, so assignments
    /// to already-bound names remain visible.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.bind("x", Value::Number(1.0), 1).unwrap();
    ///
    /// let captured = env.capture();
    /// env.assign("x", Value::Number(2.0), 2).unwrap();
    ///
    /// assert_eq!(*captured[0]["x"].borrow(), Value::Number(2.0));
    /// ```
    #[must_use]
    pub fn capture(&self) -> Vec<Frame> {
        self.frames.clone()
    }

    /// Returns the frame stack, outermost first. Used by the REPL to dump
    /// the environment after each line.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
