//! smartcalc — an integer calculator with named arbitrary-precision
//! variables.
//!
//! A line goes through four stages: sign normalization, tokenization,
//! shunting-yard conversion to postfix, and postfix evaluation against a
//! [`store::VariableStore`]. [`session::Session`] wraps the pipeline with
//! commands and assignments for the interactive binary.

pub mod error;
pub mod eval;
pub mod lexer;
pub mod normalize;
pub mod parser;
pub mod session;
pub mod store;

use num_bigint::BigInt;
use tracing::debug;

use crate::error::CalcResult;
use crate::lexer::tokens_to_string;
use crate::store::VariableStore;

/// Evaluate one infix expression line.
///
/// The store is only read; assignments are handled by the session.
pub fn evaluate(line: &str, store: &VariableStore) -> CalcResult<BigInt> {
    let normalized = normalize::normalize(line);
    debug!(%normalized, "normalized");

    let tokens = lexer::tokenize(&normalized)?;
    let postfix = parser::to_postfix(tokens)?;
    debug!(postfix = %tokens_to_string(&postfix), "converted");

    eval::evaluate_postfix(&postfix, store)
}
