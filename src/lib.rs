//! # rill
//!
//! rill is a small, dynamically typed scripting language with C-like syntax,
//! implemented as a tree-walking interpreter. It supports numbers, strings,
//! booleans and `nil`, lexically scoped variables, `if`/`while` control
//! flow, and named functions with closures and recursion.
//!
//! The pipeline is the classic one: the lexer turns source text into
//! tokens, the parser turns tokens into an AST via Pratt parsing, and the
//! evaluator walks the AST against a stack of environment frames.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{evaluator::core::Interpreter, lexer::Lexer, parser::Parser, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Prints every node back out as re-parseable source.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. Compile-time diagnostics carry line and column and
/// are accumulated rather than fatal; runtime errors abort evaluation and
/// bubble out.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Integrates with the standard error-handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and the environment model to provide a complete runtime
/// for source code. It exposes the building blocks the CLI and the
/// top-level entry points assemble.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Lexes and parses `source`, returning the program together with every
/// diagnostic recorded along the way.
///
/// The program is always returned, even when it is partial; callers decide
/// whether the error list permits evaluation. The CLI skips evaluation
/// whenever the list is non-empty, and so does [`interpret`].
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    let errors = parser.into_errors();
    (program, errors)
}

/// Parses and evaluates `source` in a fresh interpreter, returning the
/// program's final value.
///
/// # Errors
/// Returns the first parse diagnostic if any were recorded, or the runtime
/// error that aborted evaluation.
///
/// # Examples
/// ```
/// use rill::interpret;
///
/// let value = interpret("var x = 2 + 2; return x * 10;").unwrap();
/// assert_eq!(value.to_string(), "40");
///
/// // 'y' is never declared, so evaluation fails.
/// assert!(interpret("return y;").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let (program, errors) = parse(source);
    if let Some(error) = errors.into_iter().next() {
        return Err(Box::new(error));
    }

    let mut interpreter = Interpreter::new();
    Ok(interpreter.eval_program(&program)?)
}
