//! Tokenizer — splits a normalized line into numbers, identifiers and
//! operators.
//!
//! The input is expected to come from [`crate::normalize::normalize`], so
//! tokens are already separated by single spaces. Pieces that are neither a
//! number nor an identifier are read one character at a time as operators,
//! which also covers operator characters that were left fused together.

use std::fmt;

use crate::error::{CalcDiagnostic, CalcError, CalcResult};

/// Rank used for parentheses. Never compared against for popping.
pub const PAREN_PRIORITY: u8 = 99;

/// Operators and parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
    LeftParen,
    RightParen,
}

impl Operator {
    /// Look up an operator by its sign character.
    pub fn from_sign(sign: char) -> Option<Self> {
        match sign {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Times),
            '/' => Some(Self::Divide),
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            _ => None,
        }
    }

    pub fn sign(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Times => '*',
            Self::Divide => '/',
            Self::LeftParen => '(',
            Self::RightParen => ')',
        }
    }

    /// Binding strength: additive 0, multiplicative 1, parentheses 99.
    pub fn priority(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 0,
            Self::Times | Self::Divide => 1,
            Self::LeftParen | Self::RightParen => PAREN_PRIORITY,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

/// A token of an infix or postfix expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Integer literal text, optionally starting with `-`.
    Number(String),
    Identifier(String),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Render a token sequence separated by spaces.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One or more ASCII letters.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}

/// An optional leading `-` followed by one or more ASCII digits.
pub fn is_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Split a normalized line into tokens.
pub fn tokenize(normalized: &str) -> CalcResult<Vec<Token>> {
    let mut tokens = Vec::new();

    for piece in normalized.split_whitespace() {
        if is_number(piece) {
            tokens.push(Token::Number(piece.to_string()));
        } else if is_identifier(piece) {
            tokens.push(Token::Identifier(piece.to_string()));
        } else {
            for sign in piece.chars() {
                let op = Operator::from_sign(sign).ok_or_else(|| {
                    CalcDiagnostic::new(CalcError::InvalidExpression)
                        .with_detail(format!("unexpected character '{sign}'"))
                })?;
                tokens.push(Token::Operator(op));
            }
        }
    }

    Ok(tokens)
}
