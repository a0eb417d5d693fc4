use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two already-evaluated values.
    ///
    /// Arithmetic and ordering operators require numbers on both sides.
    /// Equality compares by kind and content, so operands of different
    /// kinds are simply unequal. `and`/`or` coerce both operands through
    /// truthiness; both were evaluated before this point, so there is no
    /// short-circuiting.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use rill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let left = Value::Number(3.0);
    /// let right = Value::Number(4.0);
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Equal, &left, &Value::Nil, 1);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right, line),
            Less | LessEqual | Greater | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            Equal => Ok(Value::Bool(left == right)),
            NotEqual => Ok(Value::Bool(left != right)),
            And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
            Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        }
    }

    /// Evaluates `+ - * /` over two numbers.
    ///
    /// Division follows IEEE-754: dividing by zero produces an infinity or
    /// NaN rather than an error.
    fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let (left, right) = Self::numeric_operands(op, left, right, line)?;
        Ok(Value::Number(match op {
                             Add => left + right,
                             Sub => left - right,
                             Mul => left * right,
                             Div => left / right,
                             _ => unreachable!(),
                         }))
    }

    /// Evaluates `< <= > >=` over two numbers.
    fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Greater, GreaterEqual, Less, LessEqual};

        let (left, right) = Self::numeric_operands(op, left, right, line)?;
        Ok(Value::Bool(match op {
                           Less => left < right,
                           LessEqual => left <= right,
                           Greater => left > right,
                           GreaterEqual => left >= right,
                           _ => unreachable!(),
                       }))
    }

    /// Extracts the two numbers an arithmetic or ordering operator needs.
    fn numeric_operands(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<(f64, f64)> {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
            _ => {
                Err(RuntimeError::TypeMismatch { details: format!("'{op}' needs numbers on both sides, got {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line })
            },
        }
    }
}
