use std::fmt;

use num_bigint::BigInt;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    Int,
    Float,
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
}

/// Integers serialize as JSON numbers while they fit in an `i64`, and as decimal strings beyond.
fn serialize_int<S: Serializer>(n: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    match i64::try_from(n) {
        Ok(small) => serializer.serialize_i64(small),
        Err(_) => serializer.collect_str(n),
    }
}

/// Numeric payload of an `INT` or `FLOAT` token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    #[serde(serialize_with = "serialize_int")]
    Int(BigInt),
    Float(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            // Debug keeps the fractional part: 5.0 rather than 5
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "UPPERCASE")]
pub enum Token {
    #[serde(serialize_with = "serialize_int")]
    Int(BigInt),
    Float(f64),
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Int(_) => TokenKind::Int,
            Self::Float(_) => TokenKind::Float,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
        }
    }

    pub fn value(&self) -> Option<Literal> {
        match self {
            Self::Int(n) => Some(Literal::Int(n.clone())),
            Self::Float(x) => Some(Literal::Float(*x)),
            _ => None,
        }
    }

    /// The token for a single-character operator or parenthesis.
    pub fn operator(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}:{}", self.kind(), value),
            None => write!(f, "{}", self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Token::Int(123.into()), "INT:123")]
    #[case(Token::Int(0.into()), "INT:0")]
    #[case(Token::Float(2.75), "FLOAT:2.75")]
    #[case(Token::Float(5.0), "FLOAT:5.0")]
    #[case(Token::Plus, "PLUS")]
    #[case(Token::Minus, "MINUS")]
    #[case(Token::Mul, "MUL")]
    #[case(Token::Div, "DIV")]
    #[case(Token::LParen, "LPAREN")]
    #[case(Token::RParen, "RPAREN")]
    fn display(#[case] token: Token, #[case] expected: &str) {
        assert_eq!(token.to_string(), expected);
    }

    #[test]
    fn display_wide_integer() {
        let n: BigInt = "123456789012345678901234567890".parse().expect("digits");
        assert_eq!(Token::Int(n).to_string(), "INT:123456789012345678901234567890");
    }

    #[test]
    fn only_numbers_carry_a_value() {
        assert_eq!(Token::Int(7.into()).value(), Some(Literal::Int(7.into())));
        assert_eq!(Token::Float(0.5).value(), Some(Literal::Float(0.5)));
        assert_eq!(Token::Mul.value(), None);
        assert_eq!(Token::LParen.value(), None);
    }

    #[test]
    fn operator_lookup() {
        let ops: Vec<TokenKind> = "+-*/()"
            .chars()
            .filter_map(Token::operator)
            .map(|t| t.kind())
            .collect();
        assert_eq!(
            ops,
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::LParen,
                TokenKind::RParen,
            ]
        );
        assert_eq!(Token::operator('.'), None);
        assert_eq!(Token::operator('%'), None);
    }

    #[test]
    fn serializes_kind_and_value() {
        let json = serde_json::to_string(&vec![Token::Int(1.into()), Token::Plus, Token::Float(2.5)])
            .expect("tokens serialize");
        assert_eq!(
            json,
            r#"[{"kind":"INT","value":1},{"kind":"PLUS"},{"kind":"FLOAT","value":2.5}]"#
        );
    }

    #[test]
    fn wide_integer_serializes_as_string() {
        let n: BigInt = "99999999999999999999".parse().expect("digits");
        let json = serde_json::to_string(&Token::Int(n.clone())).expect("token serializes");
        assert_eq!(json, r#"{"kind":"INT","value":"99999999999999999999"}"#);
        let json = serde_json::to_string(&Literal::Int(n)).expect("literal serializes");
        assert_eq!(json, r#""99999999999999999999""#);
    }
}
