use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking evaluator.
///
/// An `Interpreter` owns the environment stack and reduces AST nodes to
/// runtime values. It is created once and may evaluate any number of
/// programs against the same environment, which is how the REPL keeps
/// bindings alive across lines.
pub struct Interpreter {
    pub(crate) env: Environment,
}

impl Interpreter {
    /// Creates an interpreter with a single empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::new() }
    }

    /// Evaluates a program and returns its final value.
    ///
    /// The result is the value of the last statement, unless a `return`
    /// statement executed at the top level or unwound out of a top-level
    /// block, in which case its payload is the result.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised; evaluation stops at that
    /// point.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Value> {
        let mut result = Value::Nil;
        for statement in &program.statements {
            match self.eval_statement(statement)? {
                Value::Return(inner) => return Ok(*inner),
                value => result = value,
            }
        }
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// Statements that produce something meaningful (expressions, variable
    /// declarations, taken `if` branches) yield that value; the rest yield
    /// nil. A `return` statement yields a `Value::Return` marker that the
    /// enclosing block machinery bubbles outward.
    pub(crate) fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Expression { expr, .. } => self.eval_expression(expr),
            Statement::VariableDeclaration { name, value, line } => {
                let value = self.eval_expression(value)?;
                self.env.bind(name, value.clone(), *line)?;
                Ok(value)
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval_expression(value)?;
                self.env.assign(name, value, *line)?;
                Ok(Value::Nil)
            },
            Statement::Block(block) => self.eval_block(block),
            Statement::If { condition,
                            on_true,
                            on_false,
                            .. } => {
                if self.eval_expression(condition)?.is_truthy() {
                    self.eval_block(on_true)
                } else if let Some(block) = on_false {
                    self.eval_block(block)
                } else {
                    Ok(Value::Nil)
                }
            },
            Statement::While { condition, body, .. } => {
                while self.eval_expression(condition)?.is_truthy() {
                    let value = self.eval_block(body)?;
                    if matches!(value, Value::Return(_)) {
                        return Ok(value);
                    }
                }
                Ok(Value::Nil)
            },
            Statement::Function(def) => self.eval_function_declaration(def),
            Statement::Return { value, .. } => {
                let inner = match value {
                    Some(expr) => self.eval_expression(expr)?,
                    None => Value::Nil,
                };
                Ok(Value::Return(Box::new(inner)))
            },
            Statement::Print { value, .. } => {
                let value = self.eval_expression(value)?;
                println!("{value}");
                Ok(Value::Nil)
            },
        }
    }

    /// Evaluates a block inside a fresh environment frame.
    ///
    /// The frame is pushed on entry and popped on *every* exit path:
    /// normal completion, a bubbling `return` marker, and runtime errors
    /// alike.
    pub(crate) fn eval_block(&mut self, block: &Block) -> EvalResult<Value> {
        self.env.push_frame();
        let result = self.eval_block_statements(&block.statements);
        self.env.pop_frame();
        result
    }

    /// Evaluates the statements of a block in order.
    ///
    /// The block's value is its last statement's value; an empty block is
    /// nil. A `return` marker stops the walk and bubbles outward unchanged.
    fn eval_block_statements(&mut self, statements: &[Statement]) -> EvalResult<Value> {
        let mut result = Value::Nil;
        for statement in statements {
            match self.eval_statement(statement)? {
                marker @ Value::Return(_) => return Ok(marker),
                value => result = value,
            }
        }
        Ok(result)
    }

    /// Evaluates an expression to a runtime value.
    ///
    /// Evaluation order is strictly left-to-right: a binary operation fully
    /// evaluates its left operand before its right one, and argument lists
    /// evaluate in source order.
    pub(crate) fn eval_expression(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => {
                self.env
                    .resolve(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },
            Expr::UnaryOp { op, right, line } => {
                let value = self.eval_expression(right)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval_expression(left)?;
                let right = self.eval_expression(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::FunctionCall { callee,
                                 arguments,
                                 line, } => self.eval_function_call(callee, arguments, *line),
        }
    }

    /// Returns the environment stack, for callers that want to inspect it
    /// (the REPL's per-line dump).
    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.env
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
