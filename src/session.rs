//! Line interpretation for an interactive session.
//!
//! A line is one of: blank, a `/command`, an assignment `name = value`, a
//! bare variable name, or an expression. The session owns the variable
//! store; only assignments change it, and never on failure.

use num_bigint::BigInt;
use tracing::debug;

use crate::error::{CalcDiagnostic, CalcError, CalcResult};
use crate::lexer::is_identifier;
use crate::store::VariableStore;

pub const HELP: &str = "\
The program evaluates integer expressions of any size.
Supported operators: + - * / and parentheses. Division truncates toward zero.
Runs of signs collapse: `2 -- 2` is `2 + 2`, `2 --- 2` is `2 - 2`.
Assign with `name = 42` or `name = other`; names are latin letters only.
Type a variable name to print its value.
Commands: /help, /exit";

/// What a successfully processed line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to print (blank line or assignment).
    Silent,
    Value(BigInt),
    Help,
    Exit,
}

#[derive(Debug, Default)]
pub struct Session {
    store: VariableStore,
}

impl Session {
    pub fn new() -> Self {
        Self {
            store: VariableStore::new(),
        }
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Interpret one line of input.
    pub fn process(&mut self, line: &str) -> CalcResult<Outcome> {
        let line = line.trim();

        if line.is_empty() {
            return Ok(Outcome::Silent);
        }
        if let Some(command) = line.strip_prefix('/') {
            return run_command(command);
        }
        if line.contains('=') {
            self.assign(line)?;
            return Ok(Outcome::Silent);
        }
        if is_identifier(line) {
            return Ok(Outcome::Value(self.store.get(line)?.clone()));
        }

        crate::evaluate(line, &self.store).map(Outcome::Value)
    }

    fn assign(&mut self, line: &str) -> CalcResult<()> {
        let sides: Vec<&str> = line.split('=').map(str::trim).collect();
        let [name, value] = sides[..] else {
            return Err(CalcDiagnostic::new(CalcError::InvalidAssignment)
                .with_detail("expected exactly one '='"));
        };

        if !is_identifier(name) {
            return Err(CalcDiagnostic::new(CalcError::InvalidIdentifier)
                .with_detail(format!("'{name}' is not a name")));
        }

        if is_integer_literal(value) {
            let unsigned = value.strip_prefix('+').unwrap_or(value);
            let parsed = unsigned.parse::<BigInt>().map_err(|_| {
                CalcDiagnostic::new(CalcError::InvalidAssignment)
                    .with_detail(format!("'{value}' is not a number"))
            })?;
            debug!(%name, value = %parsed, "assign");
            self.store.set(name, parsed);
            Ok(())
        } else if is_identifier(value) {
            debug!(%name, source = %value, "assign from variable");
            self.store.set_from_variable(name, value)
        } else {
            Err(CalcDiagnostic::new(CalcError::InvalidAssignment)
                .with_detail(format!("'{value}' is neither a number nor a name")))
        }
    }
}

fn run_command(command: &str) -> CalcResult<Outcome> {
    match command {
        "exit" => Ok(Outcome::Exit),
        "help" => Ok(Outcome::Help),
        _ => Err(CalcDiagnostic::new(CalcError::UnknownCommand)
            .with_detail(format!("'/{command}'"))),
    }
}

/// Optional sign followed by one or more ASCII digits.
fn is_integer_literal(text: &str) -> bool {
    let digits = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
