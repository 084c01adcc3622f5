//! Postfix evaluation over arbitrary-precision integers.

use num_bigint::BigInt;
use num_traits::Zero;
use tracing::trace;

use crate::error::{CalcDiagnostic, CalcError, CalcResult};
use crate::lexer::{Operator, Token};
use crate::store::VariableStore;

/// Evaluate a postfix sequence, resolving identifiers in `store`.
///
/// Exactly one value must be left on the operand stack at the end; an empty
/// expression or leftover operands (`2 3`) are rejected.
pub fn evaluate_postfix(postfix: &[Token], store: &VariableStore) -> CalcResult<BigInt> {
    let mut operands: Vec<BigInt> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(text) => {
                let value = text.parse::<BigInt>().map_err(|_| {
                    CalcDiagnostic::new(CalcError::InvalidExpression)
                        .with_detail(format!("'{text}' is not a number"))
                })?;
                operands.push(value);
            }
            Token::Identifier(name) => operands.push(store.get(name)?.clone()),
            Token::Operator(op) => {
                let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
                    return Err(invalid("Too many signs in expression"));
                };
                let result = apply(*op, &lhs, &rhs)?;
                trace!(%lhs, %op, %rhs, %result, "apply");
                operands.push(result);
            }
        }
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(result), true) => Ok(result),
        (Some(_), false) => Err(invalid("Too many operands in expression")),
        (None, _) => Err(invalid("Empty expression")),
    }
}

fn apply(op: Operator, lhs: &BigInt, rhs: &BigInt) -> CalcResult<BigInt> {
    match op {
        Operator::Plus => Ok(lhs + rhs),
        Operator::Minus => Ok(lhs - rhs),
        Operator::Times => Ok(lhs * rhs),
        Operator::Divide => {
            if rhs.is_zero() {
                return Err(CalcDiagnostic::new(CalcError::DivisionByZero)
                    .with_detail(format!("{lhs} / 0")));
            }
            // BigInt division truncates toward zero
            Ok(lhs / rhs)
        }
        Operator::LeftParen | Operator::RightParen => {
            Err(invalid("Unbalanced parentheses in expression"))
        }
    }
}

fn invalid(detail: &str) -> CalcDiagnostic {
    CalcDiagnostic::new(CalcError::InvalidExpression).with_detail(detail)
}
