/// Parsing diagnostics.
///
/// Defines the diagnostics the parser records while turning tokens into an
/// AST. Parsing is best-effort; diagnostics accumulate in order and never
/// halt the parser.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error values the evaluator and the intrinsic functions can
/// produce. The rendered message of each variant is part of the language's
/// observable behavior.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
