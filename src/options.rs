use crate::definitions::DEFAULT_MAX_DEPTH;

/// Knobs of an [`Evaluator`](crate::Evaluator).
///
/// The defaults reproduce the lenient behavior of [`eval_str`](crate::eval_str), i.e.,
/// characters after a complete expression are ignored.
///
/// ```rust
/// use descalc::{EvalOptions, Evaluator, ExErrorKind};
/// let options = EvalOptions::default()
///     .max_depth(2)
///     .require_full_consumption(true);
/// let evaluator = Evaluator::<f64>::with_options(options);
/// assert!(evaluator.eval("((1))").is_ok());
/// assert_eq!(
///     evaluator.eval("(((1)))").unwrap_err().kind,
///     ExErrorKind::NestingTooDeep
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EvalOptions {
    /// Maximal number of simultaneously open parentheses.
    pub max_depth: usize,
    /// If set, leftover characters after the expression are an error.
    pub require_full_consumption: bool,
}

impl EvalOptions {
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
    pub fn require_full_consumption(mut self, require: bool) -> Self {
        self.require_full_consumption = require;
        self
    }
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            require_full_consumption: false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{definitions::DEFAULT_MAX_DEPTH, EvalOptions};

    #[test]
    fn test_builder() {
        let options = EvalOptions::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!options.require_full_consumption);
        let options = options.max_depth(3).require_full_consumption(true);
        assert_eq!(
            options,
            EvalOptions {
                max_depth: 3,
                require_full_consumption: true
            }
        );
    }
}
