//! Shunting-yard conversion — infix tokens to postfix.
//!
//! Operands go straight to the output. Operators wait on a stack until an
//! operator of lower priority, a closing parenthesis, or the end of input
//! flushes them. Equal priorities are flushed before the newcomer is
//! pushed, which makes `+ -` and `* /` chains left-associative.

use crate::error::{CalcDiagnostic, CalcError, CalcResult};
use crate::lexer::{Operator, Token};

/// Convert an infix token sequence to postfix order.
///
/// The result contains no parentheses.
pub fn to_postfix(tokens: Vec<Token>) -> CalcResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Operator> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token),
            Token::Operator(cur) => push_operator(cur, &mut stack, &mut output)?,
        }
    }

    while let Some(op) = stack.pop() {
        if op == Operator::LeftParen {
            return Err(invalid("Left brace without right brace"));
        }
        output.push(Token::Operator(op));
    }

    Ok(output)
}

fn push_operator(
    cur: Operator,
    stack: &mut Vec<Operator>,
    output: &mut Vec<Token>,
) -> CalcResult<()> {
    if cur == Operator::RightParen {
        loop {
            match stack.pop() {
                Some(Operator::LeftParen) => return Ok(()),
                Some(op) => output.push(Token::Operator(op)),
                None => return Err(invalid("Right brace without left brace")),
            }
        }
    }

    let Some(&top) = stack.last() else {
        stack.push(cur);
        return Ok(());
    };

    if top == Operator::LeftParen || cur == Operator::LeftParen || cur.priority() > top.priority()
    {
        stack.push(cur);
        return Ok(());
    }

    while let Some(&top) = stack.last() {
        if top == Operator::LeftParen || top.priority() < cur.priority() {
            break;
        }
        output.push(Token::Operator(top));
        stack.pop();
    }
    stack.push(cur);
    Ok(())
}

fn invalid(detail: &str) -> CalcDiagnostic {
    CalcDiagnostic::new(CalcError::InvalidExpression).with_detail(detail)
}
