/// Parser state and expression parsing.
///
/// Holds the `Parser` type itself: the two-token lookahead window over the
/// lexer, the accumulated error list, and the Pratt (precedence-climbing)
/// expression machinery.
pub mod core;
/// Statement grammar.
///
/// Extends `Parser` with one parse method per statement form, plus the
/// recovery logic that resynchronizes at statement boundaries.
pub mod statement;

pub use core::Parser;
