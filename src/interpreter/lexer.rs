use logos::{Logos, Skip};

use crate::interpreter::token::{Token, TokenKind, lookup_ident};

/// Error payload attached to input the raw lexer rejects.
///
/// A populated message is a diagnostic produced while scanning a string
/// literal. An empty payload means the input simply matched no token; the
/// offending slice itself then serves as the diagnostic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LexError {
    message: Option<String>,
}

impl LexError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }
}

/// Raw token recognition, one variant per lexeme shape.
///
/// Positions are not tracked here; the [`Lexer`] wrapper derives line and
/// column information from byte spans.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("==")]
    Eq,
    #[token("=>")]
    Arrow,
    #[token("=")]
    Assign,
    #[token("++")]
    PlusPlus,
    #[token("+=")]
    PlusAssign,
    #[token("+")]
    Plus,
    #[token("--")]
    MinusMinus,
    #[token("-=")]
    MinusAssign,
    #[token("-")]
    Minus,
    #[token("*=")]
    AsteriskAssign,
    #[token("*")]
    Asterisk,
    #[token("/=")]
    SlashAssign,
    #[token("/")]
    Slash,
    #[token("%=")]
    PercentAssign,
    #[token("%")]
    Percent,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    /// Identifier or keyword; the wrapper consults the keyword table.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    /// Digits with an optional fraction. No sign, no exponent.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// String literal, scanned manually from the opening quote.
    #[token("\"", lex_string)]
    Str(String),

    /// `// ...` to end of line. The pattern deliberately rejects `--` right
    /// after the slashes so the multi-line form below wins there.
    #[regex(r"//-?([^\-\n][^\n]*)?", logos::skip)]
    LineComment,
    /// `//-- ... --//`, closed by the first `--//`; an unterminated comment
    /// swallows the rest of the input.
    #[token("//--", lex_block_comment, priority = 10)]
    BlockComment,
}

/// Consumes a string literal body after the opening `"`.
///
/// Recognized escapes are `\n`, `\t`, `\r`, `\"` and `\\`. Any other escape
/// aborts the token with `unknown escape sequence: \x`, and a backslash as
/// the last byte of input aborts with `unexpected end of string after \`.
/// Reaching end of input before the closing quote yields the partial
/// content as an ordinary string token.
fn lex_string(lex: &mut logos::Lexer<'_, RawToken>) -> Result<String, LexError> {
    let remainder = lex.remainder();
    let mut content = String::new();
    let mut chars = remainder.char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' => {
                lex.bump(offset + 1);
                return Ok(content);
            },
            '\\' => match chars.next() {
                None => {
                    lex.bump(offset + 1);
                    return Err(LexError::new("unexpected end of string after \\"));
                },
                Some((esc_offset, esc)) => match esc {
                    'n' => content.push('\n'),
                    't' => content.push('\t'),
                    'r' => content.push('\r'),
                    '"' => content.push('"'),
                    '\\' => content.push('\\'),
                    other => {
                        lex.bump(esc_offset + other.len_utf8());
                        return Err(LexError::new(format!("unknown escape sequence: \\{other}")));
                    },
                },
            },
            other => content.push(other),
        }
    }

    lex.bump(remainder.len());
    Ok(content)
}

/// Skips a multi-line comment opened by `//--`.
fn lex_block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> Skip {
    match lex.remainder().find("--//") {
        Some(end) => lex.bump(end + 4),
        None => lex.bump(lex.remainder().len()),
    }
    Skip
}

/// Turns source text into a stream of positioned [`Token`]s.
///
/// `next_token` produces one token per call and returns an end-of-input
/// token indefinitely once the source is exhausted. Lines and columns are
/// 1-based; a column counts bytes from the most recent newline.
///
/// # Example
/// ```
/// use sugu::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("mut x = 1;");
/// assert_eq!(lexer.next_token().kind, TokenKind::Mut);
/// let name = lexer.next_token();
/// assert_eq!(name.kind, TokenKind::Ident);
/// assert_eq!(name.literal, "x");
/// assert_eq!((name.line, name.column), (1, 5));
/// ```
pub struct Lexer<'src> {
    source:     &'src str,
    raw:        logos::SpannedIter<'src, RawToken>,
    line:       usize,
    line_start: usize,
    scanned:    usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               raw: RawToken::lexer(source).spanned(),
               line: 1,
               line_start: 0,
               scanned: 0 }
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Token {
        match self.raw.next() {
            Some((raw, span)) => {
                self.advance_to(span.start);
                let line = self.line;
                let column = span.start - self.line_start + 1;
                let text = &self.source[span.clone()];

                let token = match raw {
                    Ok(raw) => Self::materialize(raw, text, line, column),
                    Err(error) => {
                        let literal = error.message.unwrap_or_else(|| text.to_string());
                        Token::new(TokenKind::Illegal, literal, line, column)
                    },
                };

                self.advance_to(span.end);
                token
            },
            None => {
                self.advance_to(self.source.len());
                Token::eof(self.line, self.source.len() - self.line_start + 1)
            },
        }
    }

    /// Accounts for newlines between the last scanned offset and `offset`.
    fn advance_to(&mut self, offset: usize) {
        for (index, byte) in self.source[self.scanned..offset].bytes().enumerate() {
            if byte == b'\n' {
                self.line += 1;
                self.line_start = self.scanned + index + 1;
            }
        }
        self.scanned = offset;
    }

    fn materialize(raw: RawToken, text: &str, line: usize, column: usize) -> Token {
        let kind = match raw {
            RawToken::Ident => lookup_ident(text),
            RawToken::Number => TokenKind::Number,
            RawToken::Str(content) => return Token::new(TokenKind::Str, content, line, column),
            RawToken::Eq => TokenKind::Eq,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::Assign => TokenKind::Assign,
            RawToken::PlusPlus => TokenKind::PlusPlus,
            RawToken::PlusAssign => TokenKind::PlusAssign,
            RawToken::Plus => TokenKind::Plus,
            RawToken::MinusMinus => TokenKind::MinusMinus,
            RawToken::MinusAssign => TokenKind::MinusAssign,
            RawToken::Minus => TokenKind::Minus,
            RawToken::AsteriskAssign => TokenKind::AsteriskAssign,
            RawToken::Asterisk => TokenKind::Asterisk,
            RawToken::SlashAssign => TokenKind::SlashAssign,
            RawToken::Slash => TokenKind::Slash,
            RawToken::PercentAssign => TokenKind::PercentAssign,
            RawToken::Percent => TokenKind::Percent,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Bang => TokenKind::Bang,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::And => TokenKind::And,
            RawToken::Or => TokenKind::Or,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Colon => TokenKind::Colon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::LineComment | RawToken::BlockComment => unreachable!("skipped during lexing"),
        };
        Token::new(kind, text, line, column)
    }
}
