use std::num::ParseFloatError;

use thiserror::Error;

/// Everything that can go wrong while evaluating an expression tree.
///
/// The first failure anywhere in the traversal aborts the whole evaluation;
/// nothing is retried or swallowed.
#[derive(Debug, Error)]
pub enum EvalError {
    /// An identifier had no binding in the scope.
    #[error("no value for `{name}` in scope {{{scope}}}")]
    UnboundVariable { name: String, scope: String },

    /// A binary node carried an operator symbol outside `+ - * /`.
    #[error("unsupported binary operator `{0}`")]
    UnsupportedOperator(char),

    /// Literal text did not parse as a number. The underlying parse error
    /// is carried unchanged.
    #[error("malformed numeric literal `{text}`: {source}")]
    MalformedLiteral {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// A call named a function missing from the function table.
    #[error("no function named `{name}`, available functions are {available:?}")]
    UnknownFunction {
        name: String,
        available: Vec<String>,
    },

    /// A call whose callee is not a plain identifier.
    #[error("call target must be a plain identifier, got {0}")]
    UnsupportedCallee(String),

    /// A failure reported by a user-supplied callable, passed through
    /// verbatim.
    #[error("{0}")]
    Callable(String),
}
