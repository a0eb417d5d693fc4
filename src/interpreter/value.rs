use std::{fmt, rc::Rc};

use crate::{
    ast::{Block, LiteralValue},
    error::RuntimeError,
    interpreter::{environment::Frame, evaluator::core::EvalResult},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: `nil`, numbers,
/// booleans, strings, and function values. `Return` is internal plumbing;
/// it wraps the payload of a `return` statement while it unwinds through
/// enclosing blocks, and is consumed at the function-call boundary before a
/// user can ever observe it.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value, `nil`.
    Nil,
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A string value.
    Str(String),
    /// A user-defined function together with its captured environment.
    /// Calls through clones of this value share one underlying function.
    Function(Rc<Function>),
    /// A `return` payload unwinding towards its call frame. Never
    /// user-observable.
    Return(Box<Self>),
}

/// A function value: the declaration's shape plus the environment frames
/// captured when it was declared.
pub struct Function {
    /// The declared function name, also bound inside calls for recursion.
    pub name:     String,
    /// Parameter names, in declaration order.
    pub params:   Vec<String>,
    /// The body block evaluated on every call.
    pub body:     Block,
    /// The frame stack snapshotted at declaration time.
    pub captured: Vec<Frame>,
}

impl fmt::Debug for Function {
    // The captured frames can contain this function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

impl Value {
    /// Applies the language's truthiness rule: `false` and `nil` are falsy,
    /// every other value (including `0` and `""`) is truthy.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::Str(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Converts the value to an `f64`, or returns an error if it is not a
    /// number.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeMismatch)`: Otherwise.
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a number, got {}",
                                                                   self.type_name()),
                                                  line }),
        }
    }

    /// Returns the name of this value's kind, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Function(_) => "function",
            Self::Return(_) => "return",
        }
    }

    /// Returns `true` if the value is [`Function`].
    ///
    /// [`Function`]: Value::Function
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(..))
    }
}

/// Equality is same-kind and equal-content; values of different kinds are
/// unequal, never an error. Function values compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Function(function) => {
                write!(f, "<fun {}(", function.name)?;
                for (index, param) in function.params.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ")>")
            },
            Self::Return(inner) => write!(f, "{inner}"),
        }
    }
}
