#![doc(html_root_url = "https://docs.rs/descalc/0.1.0")]
//! Descalc evaluates arithmetic expressions such as `(3 + 5) * 2.5` to floating point
//! numbers.
//!
//! Supported are non-negative decimal numbers, the binary operators `+`, `-`, `*`, `/`
//! with the usual precedence and left associativity, and parentheses. Whitespace is
//! ignored everywhere, so `"1 2 + 3"` is the same as `"12+3"`.
//!
//! ```rust
//! use descalc::{eval_str, ExResult};
//! # fn main() -> ExResult<()> {
//! assert_eq!(eval_str("3 + 5 * 2")?, 13.0);
//! assert_eq!(eval_str("(3 + 5) * 2")?, 16.0);
//! assert_eq!(eval_str("3.5 + 2.5 * 2")?, 8.5);
//! # Ok(())
//! # }
//! ```
//!
//! The expression is parsed by recursive descent and the value is computed on the fly,
//! no syntax tree is built. Each evaluation owns its scan state, so evaluations never
//! interfere with each other, also not across threads.
//!
//! ## Errors
//!
//! All failures are reported as [`ExError`] with an [`ExErrorKind`] and, where it makes
//! sense, the position in the whitespace-free expression.
//! ```rust
//! use descalc::{eval_str, ExErrorKind};
//! let err = eval_str("3 + (5 * 2").unwrap_err();
//! assert_eq!(err.kind, ExErrorKind::MismatchedParentheses);
//! assert_eq!(err.position, Some(6));
//! assert!(eval_str("").is_err());
//! ```
//!
//! ## Options
//!
//! By default anything that follows a complete expression is ignored, e.g., `"1+2)"`
//! evaluates to `3`. Use [`EvalOptions::require_full_consumption`] to reject such
//! inputs or [`Evaluator::eval_prefix`] to find out how much was consumed. The nesting
//! depth of parentheses is bounded by [`EvalOptions::max_depth`].
//! ```rust
//! use descalc::{EvalOptions, Evaluator, ExErrorKind};
//! let strict = Evaluator::<f64>::with_options(
//!     EvalOptions::default().require_full_consumption(true)
//! );
//! assert_eq!(strict.eval("1+2)").unwrap_err().kind, ExErrorKind::MismatchedParentheses);
//! let prefix = Evaluator::<f64>::new().eval_prefix("1+2)").unwrap();
//! assert_eq!((prefix.value, prefix.consumed, prefix.len), (3.0, 3, 4));
//! ```
//!
//! With the feature `serde`, [`EvalOptions`] can be read from configuration files.
//!
//! ## Logging
//!
//! Descalc logs via the [`log`](https://docs.rs/log) facade, evaluations on `debug` and
//! single operations on `trace` level.

mod data_type;
mod definitions;
mod evaluator;
mod options;
mod parser;
mod result;
mod scanner;
mod util;

pub use {
    data_type::DataType,
    definitions::DEFAULT_MAX_DEPTH,
    evaluator::{eval_str, strip_whitespace, Evaluated, Evaluator},
    options::EvalOptions,
    result::{ExError, ExErrorKind, ExResult},
};
