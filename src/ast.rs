use crate::interpreter::token::Token;

/// An identifier occurrence, with the token that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Builds an identifier node from its token.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A brace-delimited sequence of statements.
///
/// Blocks delimit lexical scopes only where the evaluator decides they do
/// (function bodies and loop frames); syntactically they are just ordered
/// statement lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub token:      Token,
    pub statements: Vec<Statement>,
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        write!(f, " }}")
    }
}

/// One `case VALUE: BLOCK` clause of a switch statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub token: Token,
    pub value: Expression,
    pub body:  Block,
}

impl std::fmt::Display for CaseClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "case {}: {}", self.value, self.body)
    }
}

/// An expression node.
///
/// Every variant keeps the token that started it so the evaluator can
/// report positions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A name reference.
    Identifier(Identifier),
    /// A numeric literal. `value` is the exact source text; conversion to a
    /// number happens at evaluation time.
    Number { token: Token, value: String },
    /// A string literal after escape processing.
    StringLit { token: Token, value: String },
    /// `true` or `false`.
    Boolean { token: Token, value: bool },
    /// `null`.
    Null { token: Token },
    /// A prefix operation, `!x` or `-x`.
    Prefix {
        token:    Token,
        operator: String,
        right:    Box<Expression>,
    },
    /// A binary operation.
    Infix {
        token:    Token,
        left:     Box<Expression>,
        operator: String,
        right:    Box<Expression>,
    },
    /// `name = value`.
    Assign {
        token: Token,
        name:  Identifier,
        value: Box<Expression>,
    },
    /// `container[index] = value`.
    IndexAssign {
        token: Token,
        left:  Box<Expression>,
        index: Box<Expression>,
        value: Box<Expression>,
    },
    /// A call with its evaluated-left-to-right argument list.
    Call {
        token:     Token,
        function:  Box<Expression>,
        arguments: Vec<Expression>,
    },
    /// A function literal, optionally named.
    Function {
        token:      Token,
        name:       Option<Identifier>,
        parameters: Vec<Identifier>,
        body:       Block,
    },
    /// `[a, b, ...]`.
    Array { token: Token, elements: Vec<Expression> },
    /// `{ key: value, ... }` with pairs in source order.
    MapLit {
        token: Token,
        pairs: Vec<(Expression, Expression)>,
    },
    /// `container[index]`.
    Index {
        token: Token,
        left:  Box<Expression>,
        index: Box<Expression>,
    },
}

impl Expression {
    /// The token that started this expression.
    #[must_use]
    pub fn token(&self) -> &Token {
        match self {
            Self::Identifier(ident) => &ident.token,
            Self::Number { token, .. }
            | Self::StringLit { token, .. }
            | Self::Boolean { token, .. }
            | Self::Null { token }
            | Self::Prefix { token, .. }
            | Self::Infix { token, .. }
            | Self::Assign { token, .. }
            | Self::IndexAssign { token, .. }
            | Self::Call { token, .. }
            | Self::Function { token, .. }
            | Self::Array { token, .. }
            | Self::MapLit { token, .. }
            | Self::Index { token, .. } => token,
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::StringLit { value, .. } => write!(f, "\"{value}\""),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Null { .. } => write!(f, "null"),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::Assign { name, value, .. } => write!(f, "{name} = {value}"),
            Self::IndexAssign { left, index, value, .. } => {
                write!(f, "{left}[{index}] = {value}")
            },
            Self::Call { function, arguments, .. } => {
                let args: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{function}({})", args.join(", "))
            },
            Self::Function { name,
                             parameters,
                             body,
                             .. } => {
                let params: Vec<String> = parameters.iter().map(ToString::to_string).collect();
                write!(f, "func")?;
                if let Some(name) = name {
                    write!(f, " {name}")?;
                }
                write!(f, "({}) => {body}", params.join(", "))
            },
            Self::Array { elements, .. } => {
                let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            },
            Self::MapLit { pairs, .. } => {
                let pairs: Vec<String> = pairs.iter()
                                              .map(|(key, value)| format!("{key}: {value}"))
                                              .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
        }
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `mut NAME = EXPR;` or `const NAME = EXPR;`. The token distinguishes
    /// the binder kind.
    Variable {
        token: Token,
        name:  Identifier,
        value: Expression,
    },
    /// `return EXPR;` with an optional expression.
    Return { token: Token, value: Option<Expression> },
    /// `if (COND) BLOCK [else BLOCK]`. An `else if` chain is sugar; the
    /// alternative then holds a single-statement block with the nested if.
    If {
        token:       Token,
        condition:   Expression,
        consequence: Block,
        alternative: Option<Block>,
    },
    /// `while (COND) BLOCK`.
    While {
        token:     Token,
        condition: Expression,
        body:      Block,
    },
    /// `for (INIT?; COND?; UPDATE?) BLOCK`.
    For {
        token:     Token,
        init:      Option<Box<Statement>>,
        condition: Option<Expression>,
        update:    Option<Expression>,
        body:      Block,
    },
    /// `for (KEY in EXPR) BLOCK` or `for (KEY, VALUE in EXPR) BLOCK`.
    ForIn {
        token:    Token,
        key:      Identifier,
        value:    Option<Identifier>,
        iterable: Expression,
        body:     Block,
    },
    /// `switch (EXPR) { case ...: {...} default: {...} }`.
    Switch {
        token:   Token,
        value:   Expression,
        cases:   Vec<CaseClause>,
        default: Option<Block>,
    },
    /// `break;`
    Break { token: Token },
    /// `continue;`
    Continue { token: Token },
    /// `try BLOCK catch (NAME) BLOCK`.
    Try {
        token:       Token,
        try_block:   Block,
        catch_param: Identifier,
        catch_block: Block,
    },
    /// `throw EXPR;`
    Throw { token: Token, value: Expression },
    /// A bare expression used as a statement.
    Expression { token: Token, expression: Expression },
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable { token, name, value } => {
                write!(f, "{} {name} = {value};", token.literal)
            },
            Self::Return { value, .. } => match value {
                Some(value) => write!(f, "return {value};"),
                None => write!(f, "return;"),
            },
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::While { condition, body, .. } => write!(f, "while ({condition}) {body}"),
            Self::For { init,
                        condition,
                        update,
                        body,
                        .. } => {
                write!(f, "for (")?;
                if let Some(init) = init {
                    let init = init.to_string();
                    write!(f, "{}", init.strip_suffix(';').unwrap_or(&init))?;
                }
                write!(f, "; ")?;
                if let Some(condition) = condition {
                    write!(f, "{condition}")?;
                }
                write!(f, "; ")?;
                if let Some(update) = update {
                    write!(f, "{update}")?;
                }
                write!(f, ") {body}")
            },
            Self::ForIn { key,
                          value,
                          iterable,
                          body,
                          .. } => {
                write!(f, "for ({key}")?;
                if let Some(value) = value {
                    write!(f, ", {value}")?;
                }
                write!(f, " in {iterable}) {body}")
            },
            Self::Switch { value,
                           cases,
                           default,
                           .. } => {
                write!(f, "switch ({value}) {{ ")?;
                for case in cases {
                    write!(f, "{case}")?;
                }
                if let Some(default) = default {
                    write!(f, "default: {default}")?;
                }
                write!(f, " }}")
            },
            Self::Break { .. } => write!(f, "break;"),
            Self::Continue { .. } => write!(f, "continue;"),
            Self::Try { try_block,
                        catch_param,
                        catch_block,
                        .. } => {
                write!(f, "try {try_block} catch ({catch_param}) {catch_block}")
            },
            Self::Throw { value, .. } => write!(f, "throw {value};"),
            Self::Expression { expression, .. } => write!(f, "{expression}"),
        }
    }
}

/// The root node: an ordered list of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
