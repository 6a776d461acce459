use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// The different ways an evaluation can fail. Every failure is terminal, there is no
/// error recovery and no partial result.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExErrorKind {
    /// The input string is empty.
    InvalidExpression,
    /// A number was expected but no digits were found at the cursor.
    InvalidNumberFormat,
    /// An opening parenthesis is not closed or a closing one has no partner.
    MismatchedParentheses,
    /// The input ended where an operand was expected, e.g., after a trailing operator.
    UnexpectedEndOfExpression,
    /// Parentheses are nested deeper than [`EvalOptions::max_depth`](crate::EvalOptions::max_depth).
    NestingTooDeep,
    /// Unconsumed characters follow a valid expression. Only reported with
    /// [`EvalOptions::require_full_consumption`](crate::EvalOptions::require_full_consumption).
    TrailingCharacters,
}

impl Display for ExErrorKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = match self {
            ExErrorKind::InvalidExpression => "invalid expression",
            ExErrorKind::InvalidNumberFormat => "invalid number format",
            ExErrorKind::MismatchedParentheses => "mismatched parentheses",
            ExErrorKind::UnexpectedEndOfExpression => "unexpected end of expression",
            ExErrorKind::NestingTooDeep => "nesting too deep",
            ExErrorKind::TrailingCharacters => "trailing characters",
        };
        write!(f, "{s}")
    }
}

/// This will be thrown at you if the evaluation went wrong. Ok, obviously it is not an
/// exception, so thrown needs to be understood figuratively.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct ExError {
    pub kind: ExErrorKind,
    pub msg: String,
    /// Position in the whitespace-free expression where the problem was detected.
    pub position: Option<usize>,
}

impl ExError {
    pub fn new(kind: ExErrorKind, msg: &str) -> ExError {
        ExError {
            kind,
            msg: msg.to_string(),
            position: None,
        }
    }
    pub fn at(mut self, position: usize) -> ExError {
        self.position = Some(position);
        self
    }
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }
}

impl Display for ExError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} at {}: {}", self.kind, pos, self.msg),
            None => write!(f, "{}: {}", self.kind, self.msg),
        }
    }
}
impl Error for ExError {}

/// Descalc' result type with [`ExError`](ExError) as error type.
pub type ExResult<U> = Result<U, ExError>;

/// Creates an [`ExError`] of the given kind with a formatted message.
///
/// ```rust
/// use descalc::{exerr, ExErrorKind};
/// let err = exerr!(InvalidNumberFormat, "no digits at {}", 3);
/// assert_eq!(err.kind, ExErrorKind::InvalidNumberFormat);
/// assert_eq!(err.msg, "no digits at 3");
/// ```
#[macro_export]
macro_rules! exerr {
    ($kind:ident, $s:literal, $( $exps:expr ),*) => {
        $crate::ExError::new($crate::ExErrorKind::$kind, format!($s, $($exps,)*).as_str())
    };
    ($kind:ident, $s:literal) => {
        $crate::ExError::new($crate::ExErrorKind::$kind, format!($s).as_str())
    };
}

#[cfg(test)]
mod test {
    use crate::{ExError, ExErrorKind};

    #[test]
    fn test_display() {
        let err = exerr!(MismatchedParentheses, "expected ')' but found '{}'", '+');
        assert_eq!(
            format!("{err}"),
            "mismatched parentheses: expected ')' but found '+'"
        );
        let err = err.at(4);
        assert_eq!(err.position, Some(4));
        assert_eq!(
            format!("{err}"),
            "mismatched parentheses at 4: expected ')' but found '+'"
        );
    }

    #[test]
    fn test_kind() {
        let err = ExError::new(ExErrorKind::InvalidExpression, "empty");
        assert_eq!(err.kind(), ExErrorKind::InvalidExpression);
        assert_eq!(err.position, None);
        let boxed: Box<dyn std::error::Error> = Box::new(err.clone());
        assert_eq!(boxed.to_string(), err.to_string());
    }
}
