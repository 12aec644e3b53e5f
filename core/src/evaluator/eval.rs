//! Core evaluation logic.
//!
//! Each grammar rule parses its part of the input and returns the value it
//! denotes; no syntax tree is built.
//!
//! ```text
//! expr       := comparison (('+' | '-') comparison)*
//! comparison := term (('>=' | '<=' | '<' | '>' | '==' | '!=') term)?
//! term       := factor (('*' | '/' | '%' | '^') factor)*
//! factor     := ('+' | '-') factor | INTEGER | 'sqrt' '(' expr ')'
//!             | LOG '(' expr ')' | '(' expr ')'
//! ```

use tracing::debug;

use crate::{
    evaluator::{
        EvalError, EvaluatorOptions,
        operators::{self, BinaryOp, ComparisonOp, Operand, UnaryOp},
    },
    lexer::{Lexer, LogBase, Span, Token, TokenKind},
    stdlib::math,
    values::Value,
};

/// Recursive-descent evaluator over a single input string.
///
/// An evaluator is consumed by [`Evaluator::evaluate`]; build a new one for
/// every input.
pub struct Evaluator<'src> {
    options: EvaluatorOptions,
    lexer: Lexer<'src>,
    /// One token of lookahead. Holds a placeholder until `evaluate` primes it.
    current: Token,
    depth: usize,
}

impl<'src> Evaluator<'src> {
    pub fn new(options: EvaluatorOptions, source: &'src str) -> Self {
        Self {
            options,
            lexer: Lexer::new(source),
            current: Token::new(TokenKind::Eof, Span::at(0)),
            depth: 0,
        }
    }

    /// Evaluate the whole input.
    ///
    /// The input must be exactly one expression; anything left over after it
    /// is a syntax error.
    pub fn evaluate(mut self) -> Result<Value, EvalError> {
        self.advance()?;
        let result = self.expr()?;
        if !self.current.is_eof() {
            return Err(self.unexpected("end of input"));
        }

        debug!(source = self.lexer.source(), result = %result.value, "evaluated");
        Ok(result.value)
    }

    /// Move to the next token, returning the span of the one consumed.
    fn advance(&mut self) -> Result<Span, EvalError> {
        let next = self.lexer.next_token()?;
        let previous = core::mem::replace(&mut self.current, next);
        Ok(previous.span)
    }

    /// Consume a token of the given kind or fail with a syntax error.
    fn eat(&mut self, kind: TokenKind) -> Result<Span, EvalError> {
        if self.current.kind == kind {
            self.advance()
        } else {
            let expected = kind.describe();
            Err(self.unexpected(&expected))
        }
    }

    fn unexpected(&self, expected: &str) -> EvalError {
        EvalError::Syntax {
            expected: expected.to_string(),
            found: self.current.kind.describe(),
            span: self.current.span.clone(),
        }
    }

    fn expr(&mut self) -> Result<Operand, EvalError> {
        let mut left = self.comparison()?;

        while let Some(op) = BinaryOp::additive(&self.current.kind) {
            // A comparison result can't start an arithmetic chain.
            operators::ensure_numeric(&left, op.symbol())?;
            self.advance()?;
            let right = self.comparison()?;
            let value = operators::eval_binary(op, &left, &right)?;
            left = Operand::new(value, Span::combine(&left.span, &right.span));
        }

        Ok(left)
    }

    /// At most one relational operator; `a < b < c` does not chain.
    fn comparison(&mut self) -> Result<Operand, EvalError> {
        let left = self.term()?;

        let Some(op) = ComparisonOp::from_token(&self.current.kind) else {
            return Ok(left);
        };
        self.advance()?;
        let right = self.term()?;
        let value = operators::eval_comparison(op, &left, &right)?;
        Ok(Operand::new(value, Span::combine(&left.span, &right.span)))
    }

    fn term(&mut self) -> Result<Operand, EvalError> {
        let mut left = self.factor()?;

        while let Some(op) = BinaryOp::multiplicative(&self.current.kind) {
            self.advance()?;
            // The right operand is evaluated once and reused for the zero
            // check and the operation itself.
            let right = self.factor()?;
            let value = operators::eval_binary(op, &left, &right)?;
            left = Operand::new(value, Span::combine(&left.span, &right.span));
        }

        Ok(left)
    }

    /// Every recursive path goes through `factor`, so the depth limit is
    /// enforced here.
    fn factor(&mut self) -> Result<Operand, EvalError> {
        if self.depth >= self.options.max_depth {
            return Err(EvalError::DepthExceeded {
                max_depth: self.options.max_depth,
                span: self.current.span.clone(),
            });
        }

        self.depth += 1;
        let result = self.factor_inner();
        self.depth -= 1;

        result
    }

    fn factor_inner(&mut self) -> Result<Operand, EvalError> {
        let start = self.current.span.clone();
        let kind = self.current.kind;

        if let Some(op) = UnaryOp::from_token(&kind) {
            self.advance()?;
            let operand = self.factor()?;
            let span = Span::combine(&start, &operand.span);
            let value = operators::eval_unary(op, &operand, &span)?;
            return Ok(Operand::new(value, span));
        }

        match kind {
            TokenKind::Integer(value) => {
                self.advance()?;
                Ok(Operand::new(Value::Int(value), start))
            }
            TokenKind::Sqrt => {
                self.advance()?;
                let (argument, end) = self.call_argument()?;
                let x = operators::to_f64(&argument, "sqrt")?;
                let root = math::sqrt(x).ok_or_else(|| EvalError::Domain {
                    function: "sqrt",
                    value: argument.value,
                    span: argument.span.clone(),
                })?;
                Ok(Operand::new(Value::Float(root), Span::combine(&start, &end)))
            }
            TokenKind::Log(base) => {
                self.advance()?;
                let (argument, end) = self.call_argument()?;
                let value = logarithm(base, &argument)?;
                Ok(Operand::new(Value::Float(value), Span::combine(&start, &end)))
            }
            TokenKind::LParen => {
                self.advance()?;
                let inner = self.expr()?;
                let end = self.eat(TokenKind::RParen)?;
                Ok(Operand::new(inner.value, Span::combine(&start, &end)))
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// `'(' expr ')'` after a function name. Returns the argument and the
    /// span of the closing parenthesis.
    fn call_argument(&mut self) -> Result<(Operand, Span), EvalError> {
        self.eat(TokenKind::LParen)?;
        let argument = self.expr()?;
        let end = self.eat(TokenKind::RParen)?;
        Ok((argument, end))
    }
}

fn logarithm(base: LogBase, argument: &Operand) -> Result<f64, EvalError> {
    let x = operators::to_f64(argument, base.name())?;
    math::log(x, base.value()).ok_or_else(|| EvalError::Domain {
        function: base.name(),
        value: argument.value,
        span: argument.span.clone(),
    })
}
