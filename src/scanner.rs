use crate::{definitions::N_PARENS_ON_STACK, exerr, ExResult};
use smallvec::SmallVec;

/// Scan cursor over a whitespace-free expression. One scanner is created per
/// evaluation and handed down through all precedence levels, so no state survives
/// between two evaluations.
///
/// Positions are byte offsets into the expression. The cursor only moves forward and
/// never passes the end of the text.
#[derive(Debug)]
pub struct Scanner<'a> {
    text: &'a str,
    cursor: usize,
    // positions of the currently open parentheses, innermost last
    open_parens: SmallVec<[usize; N_PARENS_ON_STACK]>,
    max_depth: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, max_depth: usize) -> Self {
        Scanner {
            text,
            cursor: 0,
            open_parens: SmallVec::new(),
            max_depth,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Byte at the cursor, `None` at the end of the text.
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.cursor).copied()
    }

    /// Character at the cursor, only used for messages.
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Not yet consumed part of the text.
    pub fn rest(&self) -> &'a str {
        self.text.get(self.cursor..).unwrap_or("")
    }

    /// Moves the cursor `n` bytes forward, at most to the end of the text.
    pub fn advance_by(&mut self, n: usize) {
        self.cursor = (self.cursor + n).min(self.text.len());
    }

    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Registers an opening parenthesis at the cursor and moves past it.
    pub fn open_paren(&mut self) -> ExResult<()> {
        if self.open_parens.len() >= self.max_depth {
            return Err(exerr!(
                NestingTooDeep,
                "more than {} nested parentheses",
                self.max_depth
            )
            .at(self.cursor));
        }
        self.open_parens.push(self.cursor);
        self.advance();
        Ok(())
    }

    /// Expects a closing parenthesis at the cursor that matches the innermost open one.
    pub fn close_paren(&mut self) -> ExResult<()> {
        let opened_at = self.open_parens.last().copied();
        match (self.peek(), opened_at) {
            (Some(b')'), Some(_)) => {
                self.open_parens.pop();
                self.advance();
                Ok(())
            }
            (_, Some(opened_at)) => {
                let found = match self.current_char() {
                    Some(c) => format!("'{c}'"),
                    None => "end of expression".to_string(),
                };
                Err(exerr!(
                    MismatchedParentheses,
                    "'(' at {} is not closed, found {}",
                    opened_at,
                    found
                )
                .at(self.cursor))
            }
            (_, None) => Err(exerr!(MismatchedParentheses, "no open parenthesis to close")
                .at(self.cursor)),
        }
    }

    /// Number of currently open parentheses.
    pub fn depth(&self) -> usize {
        self.open_parens.len()
    }
}

#[cfg(test)]
mod test {
    use crate::{scanner::Scanner, ExErrorKind};

    #[test]
    fn test_advance() {
        let mut scanner = Scanner::new("1+2", 8);
        assert_eq!(scanner.len(), 3);
        assert_eq!(scanner.peek(), Some(b'1'));
        scanner.advance();
        assert_eq!(scanner.peek(), Some(b'+'));
        assert_eq!(scanner.rest(), "+2");
        scanner.advance_by(5);
        assert_eq!(scanner.cursor(), 3);
        assert!(scanner.is_at_end());
        assert_eq!(scanner.peek(), None);
        assert_eq!(scanner.current_char(), None);
        assert_eq!(scanner.rest(), "");
        scanner.advance();
        assert_eq!(scanner.cursor(), 3);
    }

    #[test]
    fn test_parens() {
        let mut scanner = Scanner::new("(()", 2);
        scanner.open_paren().unwrap();
        scanner.open_paren().unwrap();
        assert_eq!(scanner.depth(), 2);
        scanner.close_paren().unwrap();
        assert_eq!(scanner.depth(), 1);
        let err = scanner.close_paren().unwrap_err();
        assert_eq!(err.kind, ExErrorKind::MismatchedParentheses);
        assert_eq!(err.position, Some(3));
        assert!(err.msg.contains("'(' at 0"));
    }

    #[test]
    fn test_max_depth() {
        let mut scanner = Scanner::new("((", 1);
        scanner.open_paren().unwrap();
        let err = scanner.open_paren().unwrap_err();
        assert_eq!(err.kind, ExErrorKind::NestingTooDeep);
        assert_eq!(err.position, Some(1));
        assert_eq!(scanner.cursor(), 1);
    }

    #[test]
    fn test_close_without_open() {
        let mut scanner = Scanner::new(")", 1);
        let err = scanner.close_paren().unwrap_err();
        assert_eq!(err.kind, ExErrorKind::MismatchedParentheses);
        assert_eq!(scanner.cursor(), 0);
    }

    #[test]
    fn test_non_ascii() {
        let scanner = Scanner::new("é1", 1);
        assert_eq!(scanner.current_char(), Some('é'));
        assert_eq!(scanner.len(), 3);
    }
}
