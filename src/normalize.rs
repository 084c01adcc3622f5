//! Sign normalization — collapse runs of `+`/`-` and space out tokens.
//!
//! Three rewrite passes run once each, in order, over the current string:
//!
//! 1. every `--` becomes `+`
//! 2. every run of `+` becomes a single `+`
//! 3. every `+-`, and every run of `-`, becomes a single `-`
//!
//! The passes are not repeated until nothing changes, so long mixed runs
//! such as `-+-+-` can come out as more than one sign. That output is what
//! the later stages are defined against.
//!
//! After the passes every number and operator is surrounded by single
//! spaces. A sign in unary position directly before a number is folded
//! into the literal: `-` becomes part of it, `+` is dropped.

/// Characters that form operator or parenthesis tokens.
const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '(', ')'];

/// Normalize a raw input line for tokenization.
pub fn normalize(line: &str) -> String {
    let collapsed = collapse_minus_runs(&collapse_plus_runs(&line.replace("--", "+")));
    space_tokens(&collapsed)
}

fn collapse_plus_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '+' {
            while chars.peek() == Some(&'+') {
                chars.next();
            }
        }
    }
    out
}

fn collapse_minus_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '+' if chars.peek() == Some(&'-') => {
                chars.next();
                out.push('-');
            }
            '-' => {
                while chars.peek() == Some(&'-') {
                    chars.next();
                }
                out.push('-');
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Split into pieces at number, identifier and operator boundaries and
/// join them with single spaces.
fn space_tokens(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut pieces: Vec<String> = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];

        if ch.is_whitespace() {
            pos += 1;
        } else if ch.is_ascii_digit() {
            let (digits, next) = take_while(&chars, pos, |c| c.is_ascii_digit());
            pieces.push(digits);
            pos = next;
        } else if ch.is_ascii_alphabetic() {
            let (word, next) = take_while(&chars, pos, |c| c.is_ascii_alphabetic());
            pieces.push(word);
            pos = next;
        } else if OPERATOR_CHARS.contains(&ch) {
            pos += 1;
            let unary = matches!(ch, '+' | '-') && in_unary_position(&pieces);
            let digit_at = skip_whitespace(&chars, pos);
            if unary && chars.get(digit_at).is_some_and(char::is_ascii_digit) {
                let (digits, next) = take_while(&chars, digit_at, |c| c.is_ascii_digit());
                if ch == '-' {
                    pieces.push(format!("-{digits}"));
                } else {
                    pieces.push(digits);
                }
                pos = next;
            } else {
                pieces.push(ch.to_string());
            }
        } else {
            // Unrecognised characters stay glued together; the tokenizer
            // rejects them.
            let (junk, next) = take_while(&chars, pos, |c| {
                !c.is_whitespace()
                    && !c.is_ascii_alphanumeric()
                    && !OPERATOR_CHARS.contains(&c)
            });
            pieces.push(junk);
            pos = next;
        }
    }

    pieces.join(" ")
}

/// A sign is unary at the start of input or right after another operator
/// or an opening parenthesis.
fn in_unary_position(pieces: &[String]) -> bool {
    match pieces.last() {
        None => true,
        Some(last) => matches!(last.as_str(), "+" | "-" | "*" | "/" | "("),
    }
}

fn skip_whitespace(chars: &[char], mut pos: usize) -> usize {
    while chars.get(pos).is_some_and(|c| c.is_whitespace()) {
        pos += 1;
    }
    pos
}

fn take_while(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> (String, usize) {
    let mut end = start;
    while end < chars.len() && pred(chars[end]) {
        end += 1;
    }
    (chars[start..end].iter().collect(), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_minus_becomes_plus() {
        assert_eq!(normalize("2 -- 2"), "2 + 2");
    }

    #[test]
    fn plus_runs_collapse() {
        assert_eq!(normalize("1 +++ 2"), "1 + 2");
        assert_eq!(normalize("9 +++ 10 -- 8"), "9 + 10 + 8");
    }

    #[test]
    fn odd_minus_run_stays_minus() {
        assert_eq!(normalize("3 --- 5"), "3 - 5");
    }

    #[test]
    fn plus_minus_becomes_minus() {
        assert_eq!(normalize("7 +- 2"), "7 - 2");
    }

    #[test]
    fn whitespace_is_collapsed_and_trimmed() {
        assert_eq!(normalize("   14       -   12  "), "14 - 12");
    }

    #[test]
    fn tokens_are_spaced_out() {
        assert_eq!(normalize("8*3+12*(4-2)"), "8 * 3 + 12 * ( 4 - 2 )");
        assert_eq!(normalize("a+b"), "a + b");
    }

    #[test]
    fn canonical_input_is_stable() {
        let input = "8 * 3 + 12 * (4 - 2)";
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
        assert_eq!(once.replace(' ', ""), input.replace(' ', ""));
    }

    #[test]
    fn leading_minus_joins_number() {
        assert_eq!(normalize("-5 + 3"), "-5 + 3");
        assert_eq!(normalize("(-5)"), "( -5 )");
    }

    #[test]
    fn minus_after_operator_joins_number() {
        assert_eq!(normalize("2 * -3"), "2 * -3");
        assert_eq!(normalize("2 - -3"), "2 - -3");
    }

    #[test]
    fn binary_minus_stays_separate() {
        assert_eq!(normalize("2 -3"), "2 - 3");
        assert_eq!(normalize("a-3"), "a - 3");
    }

    #[test]
    fn unary_plus_is_dropped() {
        assert_eq!(normalize("+5"), "5");
        assert_eq!(normalize("2 * +5"), "2 * 5");
    }

    #[test]
    fn unary_sign_before_identifier_is_kept() {
        assert_eq!(normalize("-a"), "- a");
    }

    #[test]
    fn passes_run_once_not_to_fixed_point() {
        // pass 3 turns `-+-+-` into `---`, which no later pass revisits
        assert_eq!(normalize("1 -+-+- 2"), "1 - - -2");
    }

    #[test]
    fn unknown_characters_stay_together() {
        assert_eq!(normalize("2 %% 3"), "2 %% 3");
        assert_eq!(normalize("2^3"), "2 ^ 3");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
