/// Default upper bound of parenthesis nesting, see [`EvalOptions`](crate::EvalOptions).
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Number of open parentheses that are tracked without heap allocation.
pub const N_PARENS_ON_STACK: usize = 16;
