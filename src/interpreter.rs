/// Lexically-scoped name binding frames.
///
/// Implements the environment chain the evaluator threads through every
/// call: lookup walks outward, definition lands in the innermost frame,
/// and updates mutate the defining frame. Const bindings are tracked here.
pub mod environment;
/// Walks the AST and produces values.
///
/// Implements the language semantics: operators, control flow, closures,
/// exception propagation and the intrinsic function table. Non-local
/// control transfer travels as sentinels through the result channel.
pub mod evaluator;
/// Turns source text into positioned tokens.
///
/// Handles comments, string escapes, number and identifier shapes, and
/// longest-match operator disambiguation. Bad input becomes illegal
/// tokens, never a halt.
pub mod lexer;
/// Turns tokens into an AST.
///
/// A Pratt expression parser with a recursive-descent statement layer.
/// Problems are recorded as ordered diagnostics while parsing continues
/// best-effort.
pub mod parser;
/// The token vocabulary shared by the lexer and parser.
pub mod token;
/// Runtime values and their supporting types.
pub mod value;
