use std::{cell::RefCell, mem, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Frame},
        evaluator::core::{EvalResult, Interpreter},
        value::{Function, Value},
    },
};

impl Interpreter {
    /// Evaluates a function declaration.
    ///
    /// The closure snapshots the environment *before* its own name is
    /// bound, so the captured stack never contains the function itself;
    /// recursion goes through the self-binding installed per call instead.
    pub(crate) fn eval_function_declaration(&mut self, def: &FunctionDef) -> EvalResult<Value> {
        let captured = self.env.capture();
        let function = Value::Function(Rc::new(Function { name: def.name.clone(),
                                                          params: def.params.clone(),
                                                          body: def.body.clone(),
                                                          captured }));
        self.env.bind(&def.name, function, def.line)?;
        Ok(Value::Nil)
    }

    /// Evaluates a call to a named function.
    ///
    /// The callee is resolved through the *caller's* environment, the
    /// arguments are evaluated in source order, and then the call runs on
    /// the closure's captured stack plus one fresh frame holding the
    /// parameter bindings and a self-binding for recursion. A `return`
    /// marker coming out of the body is unwrapped here; this is the one
    /// place that consumes it. A body that never returns yields nil.
    ///
    /// # Errors
    /// - [`RuntimeError::UndefinedVariable`] if the callee name is unbound.
    /// - [`RuntimeError::NotCallable`] if it is bound to a non-function.
    /// - [`RuntimeError::ArityMismatch`] if the argument count differs from
    ///   the parameter count.
    /// - Any error raised while evaluating arguments or the body.
    pub(crate) fn eval_function_call(&mut self,
                                     callee: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        let Some(value) = self.env.resolve(callee) else {
            return Err(RuntimeError::UndefinedVariable { name: callee.to_string(),
                                                         line });
        };
        let Value::Function(function) = value else {
            return Err(RuntimeError::NotCallable { name: callee.to_string(),
                                                   line });
        };

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_expression(argument)?);
        }
        if args.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     callee.to_string(),
                                                     expected: function.params.len(),
                                                     found:    args.len(),
                                                     line });
        }

        let mut frame = Frame::new();
        // Self-binding first; parameters shadow it.
        frame.insert(function.name.clone(),
                     Rc::new(RefCell::new(Value::Function(Rc::clone(&function)))));
        for (param, arg) in function.params.iter().zip(args) {
            frame.insert(param.clone(), Rc::new(RefCell::new(arg)));
        }

        let mut call_frames = function.captured.clone();
        call_frames.push(frame);

        // Switch to the captured stack for the body.
        let saved = mem::replace(&mut self.env, Environment::from_frames(call_frames));
        let result = self.eval_block(&function.body);
        self.env = saved;

        match result? {
            Value::Return(inner) => Ok(*inner),
            _ => Ok(Value::Nil),
        }
    }
}
