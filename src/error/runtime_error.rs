/// Represents all errors that can occur during evaluation.
///
/// Errors propagate through block and program evaluation unchanged. A
/// `try`/`catch` observes them as strings, so the `Display` text of each
/// variant is a stable part of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// A name was read before any binding introduced it.
    IdentifierNotFound {
        /// The unresolved name.
        name:   String,
        /// Line of the reference.
        line:   usize,
        /// Column of the reference.
        column: usize,
    },
    /// Assignment to a name bound with `const`.
    ConstReassignment {
        /// The const-bound name.
        name:   String,
        /// Line of the assignment operator.
        line:   usize,
        /// Column of the assignment operator.
        column: usize,
    },
    /// Index assignment through a const binding.
    ConstModification {
        /// The const-bound name.
        name: String,
    },
    /// A numeric literal that does not form a valid number.
    LiteralParse {
        /// The literal source text.
        literal: String,
        /// Line of the literal.
        line:    usize,
        /// Column of the literal.
        column:  usize,
    },
    /// A binary operator applied across two different value kinds.
    TypeMismatch {
        left:     &'static str,
        operator: String,
        right:    &'static str,
    },
    /// A binary operator the operand kinds do not support.
    UnknownInfixOperator {
        left:     &'static str,
        operator: String,
        right:    &'static str,
    },
    /// A prefix operator the operand kind does not support.
    UnknownPrefixOperator {
        operator: String,
        right:    &'static str,
    },
    /// Division or remainder by zero.
    DivisionByZero,
    /// A call whose callee is neither a function nor an intrinsic.
    NotAFunction { kind: &'static str },
    /// Index read on a value kind that does not support it.
    IndexNotSupported { kind: &'static str },
    /// Index assignment on a value kind that does not support it.
    IndexAssignNotSupported { kind: &'static str },
    /// Array index assignment with a non-numeric index.
    ArrayIndexType { kind: &'static str },
    /// Array index assignment outside `[0, len)`.
    ArrayIndexOutOfBounds { index: i64, length: i64 },
    /// A non-hashable value used as a map key.
    UnusableAsHashKey { kind: &'static str },
    /// A non-hashable value passed to `delete`.
    UnusableAsMapKey { kind: &'static str },
    /// `for`-`in` over a value that is neither array nor map.
    ForInNotSupported { kind: &'static str },
    /// A `throw` that escaped to the program top level.
    UncaughtException {
        /// The rendered thrown payload.
        payload: String,
    },

    /// An intrinsic called with the wrong number of arguments.
    WrongArgumentCount {
        got:  usize,
        want: &'static str,
    },
    /// An intrinsic argument of a kind outside its accepted set.
    ArgumentNotSupported {
        builtin: &'static str,
        kind:    &'static str,
    },
    /// An intrinsic argument of the wrong kind at a fixed position.
    ArgumentMustBe {
        /// Position prefix such as `"first "`, or `""` for the sole one.
        position: &'static str,
        builtin:  &'static str,
        expected: &'static str,
        kind:     &'static str,
    },
    /// A variadic numeric intrinsic received a non-number.
    NumberedArgumentMustBe {
        index:   usize,
        builtin: &'static str,
        kind:    &'static str,
    },
    /// A string that does not parse as the requested target type.
    CannotConvertValue {
        value:  String,
        target: &'static str,
    },
    /// A value kind with no conversion to the requested target type.
    CannotConvertKind {
        kind:   &'static str,
        target: &'static str,
    },
    /// `sqrt` of a negative number.
    SqrtOfNegative { value: f64 },
    /// `substring` start index outside the string.
    SubstringStartOutOfRange { index: i64, length: usize },
    /// `substring` end index outside the string.
    SubstringEndOutOfRange { index: i64, length: usize },
    /// `substring` start index past the end index.
    SubstringStartAfterEnd { start: i64, end: i64 },
    /// `in` failed to read a line.
    InputFailed { reason: String },
    /// An intrinsic unavailable in the embedding that ran it.
    NotAvailable { builtin: &'static str },
    /// `readFile` failure.
    FileRead { path: String, reason: String },
    /// `writeFile` failure.
    FileWrite { path: String, reason: String },
    /// `appendFile` failed to open its target.
    FileOpen { path: String, reason: String },
    /// `appendFile` failed to write.
    FileAppend { path: String, reason: String },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name, line, column } => {
                write!(f, "line {line}, column {column}: identifier not found: {name}")
            },
            Self::ConstReassignment { name, line, column } => write!(f,
                                                                     "line {line}, column {column}: cannot reassign to const variable: {name}"),
            Self::ConstModification { name } => {
                write!(f, "cannot modify const variable: {name}")
            },
            Self::LiteralParse { literal, line, column } => write!(f,
                                                                  "line {line}, column {column}: could not parse {literal:?} as number"),
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::IndexAssignNotSupported { kind } => {
                write!(f, "index assignment not supported: {kind}")
            },
            Self::ArrayIndexType { kind } => {
                write!(f, "array index must be a number, got {kind}")
            },
            Self::ArrayIndexOutOfBounds { index, length } => {
                write!(f, "array index out of bounds: {index} (length: {length})")
            },
            Self::UnusableAsHashKey { kind } => write!(f, "unusable as hash key: {kind}"),
            Self::UnusableAsMapKey { kind } => write!(f, "unusable as map key: {kind}"),
            Self::ForInNotSupported { kind } => {
                write!(f, "for-in requires ARRAY or MAP, got {kind}")
            },
            Self::UncaughtException { payload } => write!(f, "uncaught exception: {payload}"),
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::ArgumentNotSupported { builtin, kind } => {
                write!(f, "argument to `{builtin}` not supported, got {kind}")
            },
            Self::ArgumentMustBe { position,
                                   builtin,
                                   expected,
                                   kind, } => {
                write!(f, "{position}argument to `{builtin}` must be {expected}, got {kind}")
            },
            Self::NumberedArgumentMustBe { index, builtin, kind } => {
                write!(f, "argument {index} to `{builtin}` must be NUMBER, got {kind}")
            },
            Self::CannotConvertValue { value, target } => {
                write!(f, "cannot convert {value:?} to {target}")
            },
            Self::CannotConvertKind { kind, target } => {
                write!(f, "cannot convert {kind} to {target}")
            },
            Self::SqrtOfNegative { value } => {
                write!(f, "cannot calculate square root of negative number: {value}")
            },
            Self::SubstringStartOutOfRange { index, length } => {
                write!(f, "substring start index out of range: {index} (length: {length})")
            },
            Self::SubstringEndOutOfRange { index, length } => {
                write!(f, "substring end index out of range: {index} (length: {length})")
            },
            Self::SubstringStartAfterEnd { start, end } => {
                write!(f, "substring start index {start} is greater than end index {end}")
            },
            Self::InputFailed { reason } => write!(f, "failed to read input: {reason}"),
            Self::NotAvailable { builtin } => {
                write!(f, "{builtin}() is not available in the handler environment")
            },
            Self::FileRead { path, reason } => {
                write!(f, "failed to read file {path:?}: {reason}")
            },
            Self::FileWrite { path, reason } => {
                write!(f, "failed to write file {path:?}: {reason}")
            },
            Self::FileOpen { path, reason } => {
                write!(f, "failed to open file {path:?}: {reason}")
            },
            Self::FileAppend { path, reason } => {
                write!(f, "failed to append to file {path:?}: {reason}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
