//! On-demand tokenizer for SimpleInt expressions.
//!
//! The lexer hands out one token per call to [`Lexer::next_token`]. It never
//! looks further ahead than one character past the token being built, and once
//! the input is exhausted it keeps returning [`TokenKind::Eof`].
//!
//! ## Example
//!
//! ```
//! use simpleint_core::lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("12 >= 3");
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(12));
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Ge);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(3));
//! assert!(lexer.next_token().unwrap().is_eof());
//! assert!(lexer.next_token().unwrap().is_eof());
//! ```

mod error;
mod token;


pub use error::{LexError, LexErrorKind};
pub use token::{LogBase, Span, Token, TokenKind};

use tracing::trace;

/// Function names, matched longest-first among the entries sharing the
/// current character.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("sqrt", TokenKind::Sqrt),
    ("log2", TokenKind::Log(LogBase::Two)),
    ("log10", TokenKind::Log(LogBase::Ten)),
];

/// Cursor over an expression string.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    /// Set once the iterator has yielded EOF or an error.
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            done: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Scan the next token.
    ///
    /// On failure the cursor is left at the offending input.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.pos;
        let Some(current) = self.peek_char() else {
            return Ok(Token::new(TokenKind::Eof, Span::at(self.source.len())));
        };

        let token = match current {
            '0'..='9' => self.integer(start)?,
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Mul),
            '%' => self.single(TokenKind::Mod),
            '/' => self.single(TokenKind::Div),
            '^' => self.single(TokenKind::Pow),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '>' => self.comparison(TokenKind::Ge, Some(TokenKind::Gt), '>')?,
            '<' => self.comparison(TokenKind::Le, Some(TokenKind::Lt), '<')?,
            '=' => self.comparison(TokenKind::Eq, None, '=')?,
            '!' => self.comparison(TokenKind::Ne, None, '!')?,
            c if KEYWORDS.iter().any(|(text, _)| text.starts_with(c)) => self.keyword(start)?,
            c => {
                return Err(LexError::new(
                    LexErrorKind::UnexpectedChar(c),
                    Span::new(start, start + c.len_utf8()),
                ));
            }
        };

        trace!(token = %token, span = %token.span, "lexed token");
        Ok(token)
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        self.pos += 1;
        Token::new(kind, Span::new(start, self.pos))
    }

    fn integer(&mut self, start: usize) -> Result<Token, LexError> {
        let rest = &self.source[start..];
        let len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let text = &rest[..len];
        let span = Span::new(start, start + len);

        let value = text.parse::<i64>().map_err(|_| {
            LexError::new(LexErrorKind::IntegerTooLarge(text.to_string()), span.clone())
        })?;

        self.pos = start + len;
        Ok(Token::new(TokenKind::Integer(value), span))
    }

    /// Two-character operator ending in `=`, or the single-character
    /// `fallback` when the next character is something else.
    fn comparison(
        &mut self,
        with_eq: TokenKind,
        fallback: Option<TokenKind>,
        first: char,
    ) -> Result<Token, LexError> {
        let start = self.pos;
        if self.source[start + 1..].starts_with('=') {
            self.pos += 2;
            return Ok(Token::new(with_eq, Span::new(start, self.pos)));
        }

        match fallback {
            Some(kind) => Ok(self.single(kind)),
            None => Err(LexError::new(
                LexErrorKind::IncompleteOperator(first),
                Span::new(start, start + 1),
            )),
        }
    }

    fn keyword(&mut self, start: usize) -> Result<Token, LexError> {
        let rest = &self.source[start..];
        let matched = KEYWORDS
            .iter()
            .filter(|(text, _)| rest.starts_with(text))
            .max_by_key(|(text, _)| text.len());

        match matched {
            Some((text, kind)) => {
                self.pos = start + text.len();
                Ok(Token::new(*kind, Span::new(start, self.pos)))
            }
            None => {
                let len = rest
                    .find(|c: char| !c.is_ascii_alphanumeric())
                    .unwrap_or(rest.len());
                Err(LexError::new(
                    LexErrorKind::UnknownKeyword(rest[..len].to_string()),
                    Span::new(start, start + len),
                ))
            }
        }
    }
}

/// Yields every token before EOF, or the first error.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Tokenize the whole input, including the trailing EOF token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens: Vec<Token> = lexer.by_ref().collect::<Result<_, _>>()?;
    tokens.push(lexer.next_token()?);
    Ok(tokens)
}
