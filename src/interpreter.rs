/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// maintains the lexical scope chain, and propagates `return` values and
/// runtime errors. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, closures, calls, and control flow.
/// - Reports runtime errors such as undefined names or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with exact line and
///   column positions.
/// - Handles numeric and string literals, identifiers, and keywords.
/// - Records lexical errors for invalid or malformed input and keeps going.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements, using Pratt parsing for operator precedence.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, accumulating errors with location info.
/// - Recovers at statement boundaries and always yields a program.
pub mod parser;
/// The environment module tracks variable bindings across scopes.
///
/// An environment is an ordered stack of frames, innermost last. Names map
/// to shared mutable cells, which is what gives closures their capture
/// semantics.
///
/// # Responsibilities
/// - Declares names in the innermost frame and rejects duplicates.
/// - Assigns through the nearest enclosing binding.
/// - Snapshots frame stacks for closures.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every value a program can produce (`nil`, numbers,
/// booleans, strings, and functions) plus the internal `return` marker the
/// evaluator uses to unwind nested blocks.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, same-kind equality, and display forms.
/// - Carries function values together with their captured environments.
pub mod value;
