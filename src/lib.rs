//! Tree-walking evaluator for parsed arithmetic expressions.
//!
//! An upstream parser produces an [`Expression`] tree; this crate reduces
//! that tree to a single number against caller-supplied variable bindings
//! ([`Scope`]) and named functions ([`Functions`]). Parsing itself —
//! tokenization, precedence, associativity — is deliberately out of scope:
//! the tree arrives with its shape already final.
//!
//! Evaluation is a pure recursive walk with no internal state, so evaluating
//! independent trees from multiple threads is safe. Stack use grows with
//! tree depth; bounding pathologically deep trees from untrusted sources is
//! the caller's concern.
//!
//! # Example
//!
//! ```rust
//! use scalar_expr::*;
//!
//! // The tree an upstream parser would produce for "2 + price * n".
//! let tree = Expression::Binary(
//!     '+',
//!     Box::new(Expression::Literal("2".to_string())),
//!     Box::new(Expression::Binary(
//!         '*',
//!         Box::new(Expression::Identifier("price".to_string())),
//!         Box::new(Expression::Identifier("n".to_string())),
//!     )),
//! );
//!
//! let scope = Scope::from([("price".to_string(), 3.0), ("n".to_string(), 4.0)]);
//! let functions = Functions::new();
//! assert_eq!(tree.evaluate(&scope, &functions).unwrap(), 14.0);
//! ```

mod error;
mod evaluate;
mod expression;

pub use error::EvalError;
pub use evaluate::{Callable, Functions, Scope};
pub use expression::Expression;

/// Floating-point types the engine can evaluate to.
pub trait Real:
    num_traits::Float
    + std::str::FromStr<Err = std::num::ParseFloatError>
    + std::fmt::Debug
    + Send
    + Sync
{
}
impl Real for f32 {}
impl Real for f64 {}
