//! Recursive-descent parser that computes the value while it parses. Each precedence
//! level first calls the next tighter level and then consumes its own operators from
//! left to right:
//!
//! ```text
//! sum     := product (('+' | '-') product)*
//! product := atom (('*' | '/') atom)*
//! atom    := '(' sum ')' | number
//! number  := digit* ('.' digit*)?     at least one character
//! ```
use crate::{exerr, scanner::Scanner, DataType, ExResult};
use log::trace;

/// Length of the number literal at the beginning of `text`. Digits and at most one
/// decimal point are accepted, scanning stops at anything else.
fn number_literal_len(text: &str) -> usize {
    let mut seen_dot = false;
    text.bytes()
        .take_while(|&c| match c {
            b'0'..=b'9' => true,
            b'.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
        .count()
}

fn describe_current(scanner: &Scanner) -> String {
    match scanner.current_char() {
        Some(c) => format!("'{c}'"),
        None => "end of expression".to_string(),
    }
}

/// Lexes the number at the cursor and leaves the cursor on the first character that
/// does not belong to it.
pub fn parse_number<T: DataType>(scanner: &mut Scanner) -> ExResult<T> {
    let start = scanner.cursor();
    let rest = scanner.rest();
    let n_chars = number_literal_len(rest);
    if n_chars == 0 {
        return Err(exerr!(
            InvalidNumberFormat,
            "expected a number, found {}",
            describe_current(scanner)
        )
        .at(start));
    }
    let literal = &rest[..n_chars];
    scanner.advance_by(n_chars);
    literal
        .parse::<T>()
        .map_err(|_| exerr!(InvalidNumberFormat, "cannot parse '{}' as number", literal).at(start))
}

/// Parenthesized sub-expression or number.
pub fn parse_atom<T: DataType>(scanner: &mut Scanner) -> ExResult<T> {
    match scanner.peek() {
        None => Err(exerr!(UnexpectedEndOfExpression, "expected a number or '('")
            .at(scanner.cursor())),
        Some(b'(') => {
            scanner.open_paren()?;
            trace!("entering parenthesis level {}", scanner.depth());
            let res = parse_sum(scanner)?;
            scanner.close_paren()?;
            trace!("leaving parenthesis with {:?}", res);
            Ok(res)
        }
        Some(_) => parse_number(scanner),
    }
}

/// Multiplications and divisions, left-associative. Division by zero yields infinity
/// or NaN as usual for floats.
pub fn parse_product<T: DataType>(scanner: &mut Scanner) -> ExResult<T> {
    let mut res = parse_atom::<T>(scanner)?;
    while let Some(op @ (b'*' | b'/')) = scanner.peek() {
        scanner.advance();
        let rhs = parse_atom::<T>(scanner)?;
        trace!("{:?} {} {:?}", res, op as char, rhs);
        res = if op == b'*' { res * rhs } else { res / rhs };
    }
    Ok(res)
}

/// Additions and subtractions, left-associative. This is the entry point for a
/// complete expression as well as for the content of parentheses.
pub fn parse_sum<T: DataType>(scanner: &mut Scanner) -> ExResult<T> {
    let mut res = parse_product::<T>(scanner)?;
    while let Some(op @ (b'+' | b'-')) = scanner.peek() {
        scanner.advance();
        let rhs = parse_product::<T>(scanner)?;
        trace!("{:?} {} {:?}", res, op as char, rhs);
        res = if op == b'+' { res + rhs } else { res - rhs };
    }
    Ok(res)
}
