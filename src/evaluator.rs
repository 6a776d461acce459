use std::{borrow::Cow, fmt, marker::PhantomData};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{exerr, parser::parse_sum, scanner::Scanner, DataType, EvalOptions, ExResult};

/// Removes all whitespace from `text`. Nothing is allocated if there is no whitespace.
///
/// ```rust
/// use descalc::strip_whitespace;
/// assert_eq!(strip_whitespace(" 3 +\t5\n"), "3+5");
/// ```
pub fn strip_whitespace(text: &str) -> Cow<'_, str> {
    lazy_static! {
        static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    }
    RE_WHITESPACE.replace_all(text, "")
}

/// Result of [`Evaluator::eval_prefix`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluated<T> {
    pub value: T,
    /// Number of bytes of the whitespace-free expression that have been consumed.
    pub consumed: usize,
    /// Length in bytes of the whitespace-free expression.
    pub len: usize,
}

impl<T> Evaluated<T> {
    /// Whether the whole expression has been consumed.
    pub fn is_complete(&self) -> bool {
        self.consumed == self.len
    }
}

/// Evaluates arithmetic expressions with `+`, `-`, `*`, `/`, parentheses, and
/// non-negative decimal numbers.
///
/// An evaluator only holds its [`EvalOptions`]. The scan state is created anew for
/// every call, hence one evaluator can be shared between threads.
///
/// ```rust
/// use descalc::{Evaluator, ExResult};
/// # fn main() -> ExResult<()> {
/// let evaluator = Evaluator::<f32>::new();
/// assert_eq!(evaluator.eval("(3 + 5) * 2")?, 16.0);
/// assert_eq!(evaluator.eval("10 / 2 + 3")?, 8.0);
/// # Ok(())
/// # }
/// ```
pub struct Evaluator<T> {
    options: EvalOptions,
    value_dummy: PhantomData<fn() -> T>,
}

impl<T: DataType> Evaluator<T> {
    pub fn new() -> Self {
        Self::with_options(EvalOptions::default())
    }

    pub fn with_options(options: EvalOptions) -> Self {
        Evaluator {
            options,
            value_dummy: PhantomData,
        }
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    fn eval_stripped(&self, stripped: &str, full_consumption: bool) -> ExResult<Evaluated<T>> {
        let mut scanner = Scanner::new(stripped, self.options.max_depth);
        let value = parse_sum::<T>(&mut scanner)?;
        if full_consumption && !scanner.is_at_end() {
            return Err(match scanner.peek() {
                Some(b')') => exerr!(MismatchedParentheses, "')' without matching '('")
                    .at(scanner.cursor()),
                _ => exerr!(
                    TrailingCharacters,
                    "'{}' is not part of the expression",
                    scanner.rest()
                )
                .at(scanner.cursor()),
            });
        }
        Ok(Evaluated {
            value,
            consumed: scanner.cursor(),
            len: scanner.len(),
        })
    }

    fn eval_text(&self, text: &str, full_consumption: bool) -> ExResult<Evaluated<T>> {
        if text.is_empty() {
            return Err(exerr!(InvalidExpression, "expression cannot be empty"));
        }
        let stripped = strip_whitespace(text);
        debug!("evaluating '{}'", stripped);
        let evaluated = self.eval_stripped(&stripped, full_consumption);
        match &evaluated {
            Ok(ev) => debug!(
                "'{}' evaluated to {:?}, consumed {} of {}",
                stripped, ev.value, ev.consumed, ev.len
            ),
            Err(e) => debug!("'{}' failed, {}", stripped, e),
        }
        evaluated
    }

    /// Evaluates the longest valid prefix of `text` and reports how much of the
    /// whitespace-free expression was consumed. The option
    /// [`require_full_consumption`](EvalOptions::require_full_consumption) is ignored.
    ///
    /// # Errors
    ///
    /// See [`eval`](Evaluator::eval).
    ///
    pub fn eval_prefix(&self, text: &str) -> ExResult<Evaluated<T>> {
        self.eval_text(text, false)
    }

    /// Evaluates `text`. Whitespace is ignored.
    ///
    /// # Errors
    ///
    /// * [`InvalidExpression`](crate::ExErrorKind::InvalidExpression) if `text` is empty,
    /// * [`InvalidNumberFormat`](crate::ExErrorKind::InvalidNumberFormat) if an operand
    ///   starts with something that is neither a digit, a dot, nor `(`,
    /// * [`MismatchedParentheses`](crate::ExErrorKind::MismatchedParentheses) if a
    ///   parenthesis is not closed,
    /// * [`UnexpectedEndOfExpression`](crate::ExErrorKind::UnexpectedEndOfExpression)
    ///   if the text ends where an operand is expected,
    /// * [`NestingTooDeep`](crate::ExErrorKind::NestingTooDeep) and
    ///   [`TrailingCharacters`](crate::ExErrorKind::TrailingCharacters) depending on
    ///   the [`EvalOptions`].
    ///
    pub fn eval(&self, text: &str) -> ExResult<T> {
        self.eval_text(text, self.options.require_full_consumption)
            .map(|ev| ev.value)
    }
}

impl<T: DataType> Default for Evaluator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Evaluator<T> {
    fn clone(&self) -> Self {
        Evaluator {
            options: self.options,
            value_dummy: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Evaluator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("options", &self.options)
            .finish()
    }
}

/// Evaluates `text` as `f64` with default options.
///
/// ```rust
/// use descalc::{eval_str, ExErrorKind};
/// assert_eq!(eval_str("3 + 5 * 2").unwrap(), 13.0);
/// assert_eq!(eval_str("3 + * 5").unwrap_err().kind, ExErrorKind::InvalidNumberFormat);
/// ```
///
/// # Errors
///
/// See [`Evaluator::eval`].
///
pub fn eval_str(text: &str) -> ExResult<f64> {
    Evaluator::<f64>::new().eval(text)
}
