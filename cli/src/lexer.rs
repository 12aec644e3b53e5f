use logos::Logos;
use reedline::{ValidationResult, Validator};

/// Coarse tokens for the REPL: enough to balance brackets and colour input
/// while it is still being typed.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"[0-9]+")]
    Integer,

    #[token("sqrt")]
    #[token("log2")]
    #[token("log10")]
    Function,

    #[token(">=")]
    #[token("<=")]
    #[token("==")]
    #[token("!=")]
    #[token(">")]
    #[token("<")]
    Comparison,

    #[regex(r"[-+*/%^]")]
    Operator,

    // Words that are not built-in functions.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", priority = 1)]
    Word,
}

/// Net number of open brackets in `buffer`, or `None` if it contains
/// something the REPL lexer does not recognise.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LBracket) | Ok(Token::LParen) => depth += 1,
            Ok(Token::RBracket) | Ok(Token::RParen) => depth -= 1,
            Ok(_) => {}
            // Let the evaluator report it.
            Err(_) => return None,
        }
    }

    Some(depth.max(0) as usize)
}

/// Keeps reading lines while parentheses are open.
pub struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}
