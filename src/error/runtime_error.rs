#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are abrupt: the evaluator performs no local recovery and
/// bubbles the error out to whoever invoked it. The REPL recovers at the
/// line boundary; batch mode exits with a nonzero code.
pub enum RuntimeError {
    /// Tried to read or assign an undeclared variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a name that already exists in the current scope.
    AlreadyDefined {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands of the wrong kind.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to call a value that is not a function.
    NotCallable {
        /// The name the call went through.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// How many parameters the function declares.
        expected: usize,
        /// How many arguments the call supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => write!(f,
                                                             "Error on line {line}: Variable '{name}' is not declared in this scope."),

            Self::AlreadyDefined { name, line } => write!(f,
                                                          "Error on line {line}: Variable '{name}' already exists in this scope. Use \"{name} = ...;\" to assign instead."),

            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },

            Self::NotCallable { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a function.")
            },

            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Function '{name}' expects {expected} argument(s), but {found} were supplied."),
        }
    }
}

impl std::error::Error for RuntimeError {}
