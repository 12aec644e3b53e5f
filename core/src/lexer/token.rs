//! Token and span types produced by the lexer.

use core::fmt;
use core::ops::Range;

/// Byte range into the source string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span(start..end)
    }

    /// Empty span at `pos`.
    pub fn at(pos: usize) -> Self {
        Span(pos..pos)
    }

    /// Smallest span covering both `a` and `b`.
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start.min(b.0.start), a.0.end.max(b.0.end))
    }

    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.0.start, self.0.end)
    }
}

/// Base of a `log2` / `log10` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogBase {
    Two,
    Ten,
}

impl LogBase {
    /// Function name as written in the source.
    pub fn name(self) -> &'static str {
        match self {
            LogBase::Two => "log2",
            LogBase::Ten => "log10",
        }
    }

    pub fn value(self) -> f64 {
        match self {
            LogBase::Two => 2.0,
            LogBase::Ten => 10.0,
        }
    }
}

/// Kind of a token, with the literal value for integers and log calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Integer(i64),
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    Pow,
    Sqrt,
    Log(LogBase),
    LParen,
    RParen,
    /// `[`: recognised but not part of any grammar rule.
    LBracket,
    /// `]`: recognised but not part of any grammar rule.
    RBracket,
    Ge,
    Gt,
    Lt,
    Le,
    Eq,
    Ne,
    Eof,
}

impl TokenKind {
    /// Upper-case kind name, e.g. `INTEGER` or `LP`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Integer(_) => "INTEGER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::Pow => "POW",
            TokenKind::Sqrt => "SQRT",
            TokenKind::Log(_) => "LOG",
            TokenKind::LParen => "LP",
            TokenKind::RParen => "RP",
            TokenKind::LBracket => "LB",
            TokenKind::RBracket => "RB",
            TokenKind::Ge => "GE",
            TokenKind::Gt => "GT",
            TokenKind::Lt => "LT",
            TokenKind::Le => "LE",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Source text of fixed tokens. `None` for integers and end of input.
    pub fn lexeme(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Integer(_) | TokenKind::Eof => return None,
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::Pow => "^",
            TokenKind::Sqrt => "sqrt",
            TokenKind::Log(base) => base.name(),
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Ge => ">=",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Le => "<=",
            TokenKind::Eq => "==",
            TokenKind::Ne => "!=",
        };
        Some(text)
    }

    /// Human-readable description used in syntax errors.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Integer(value) => format!("integer {}", value),
            TokenKind::Eof => "end of input".to_string(),
            other => match other.lexeme() {
                Some(text) => format!("'{}'", text),
                None => other.name().to_string(),
            },
        }
    }
}

/// A classified lexical unit together with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Integer(value) => write!(f, "Token(INTEGER, {})", value),
            TokenKind::Eof => write!(f, "Token(EOF, None)"),
            kind => match kind.lexeme() {
                Some(text) => write!(f, "Token({}, '{}')", kind.name(), text),
                None => write!(f, "Token({}, None)", kind.name()),
            },
        }
    }
}
