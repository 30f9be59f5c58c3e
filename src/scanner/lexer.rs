use std::sync::Arc;

use num_bigint::BigInt;
use tracing::{debug, trace};
use winnow::ascii::digit0;
use winnow::combinator::opt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;

use crate::error::LexError;
use crate::scanner::position::{Position, Source};
use crate::scanner::token::Token;

/// `digits ('.' digits)?`. Stops at a second point, which stays in the input.
fn number_lexeme<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (digit0, opt(('.', digit0))).take().parse_next(input)
}

fn number_literal(input: &mut &str) -> ModalResult<Token> {
    let lexeme = number_lexeme.parse_next(input)?;
    if !lexeme.contains('.') {
        return lexeme
            .parse::<BigInt>()
            .map(Token::Int)
            .map_err(|_| ErrMode::Backtrack(ContextError::new()));
    }

    // "5." and ".3" are accepted; pad the missing side with a zero.
    let mut normalized = lexeme.to_string();
    if normalized.starts_with('.') {
        normalized.insert(0, '0');
    }
    if normalized.ends_with('.') {
        normalized.push('0');
    }
    normalized
        .parse::<f64>()
        .map(Token::Float)
        .map_err(|_| ErrMode::Backtrack(ContextError::new()))
}

fn starts_number(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Single-use scanner over one source text.
pub struct Scanner {
    pos: Position,
    current: Option<char>,
}

impl Scanner {
    pub fn new(source_name: impl Into<String>, text: impl Into<String>) -> Self {
        let source = Arc::new(Source::new(source_name, text));
        let mut scanner = Self {
            pos: Position::before_start(source),
            current: None,
        };
        scanner.advance();
        scanner
    }

    fn advance(&mut self) {
        self.pos.advance(self.current);
        self.current = self.rest().chars().next();
    }

    /// Text from the current character onwards.
    fn rest(&self) -> &str {
        let text = self.pos.source_text();
        text.get(self.pos.byte_offset()..).unwrap_or_default()
    }

    /// Drive the scanner to the end of input, or fail on the first unrecognized character.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        debug!(source = self.pos.source_name(), "scan started");
        let mut tokens = Vec::new();

        while let Some(c) = self.current {
            let token = match c {
                ' ' | '\t' => {
                    self.advance();
                    continue;
                }
                c if starts_number(c) => match self.number() {
                    Some(token) => token,
                    None => return Err(self.illegal_character(c)),
                },
                c => match Token::operator(c) {
                    Some(token) => {
                        self.advance();
                        token
                    }
                    None => return Err(self.illegal_character(c)),
                },
            };
            trace!(%token, "token");
            tokens.push(token);
        }

        debug!(
            source = self.pos.source_name(),
            tokens = tokens.len(),
            "scan finished"
        );
        Ok(tokens)
    }

    /// Scan a number literal starting at the current character.
    fn number(&mut self) -> Option<Token> {
        let rest = self.rest();
        let mut input = rest;
        let token = number_literal.parse_next(&mut input).ok()?;
        // number lexemes are ASCII, so bytes and characters agree
        let consumed = rest.len() - input.len();
        for _ in 0..consumed {
            self.advance();
        }
        Some(token)
    }

    /// Consume `c` and build the error spanning it.
    fn illegal_character(&mut self, c: char) -> LexError {
        let start = self.pos.clone();
        self.advance();
        let err = LexError::illegal_character(start, self.pos.clone(), c);
        debug!(position = %err.start(), error = %err.detail(), "scan aborted");
        err
    }
}
