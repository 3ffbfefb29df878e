/// The parser state machine and Pratt expression parsing.
///
/// Declares the [`core::Parser`] struct, the operator precedence ladder,
/// and the expression entry point that prefix and infix rules hang off.
pub mod core;
/// Prefix and infix expression constructs.
///
/// Grouping, prefix operators, assignments, calls, function literals,
/// array, map and index expressions.
pub mod expression;
/// Statement parsing.
///
/// Statement dispatch plus the individual statement forms: declarations,
/// control flow, loops, switch, try/catch and expression statements.
pub mod statement;
