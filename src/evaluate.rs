use std::collections::HashMap;

use crate::error::EvalError;
use crate::expression::Expression;
use crate::Real;

/// Variable bindings consulted when an [`Expression::Identifier`] is
/// evaluated. Caller-owned and read-only for the duration of one call.
pub type Scope<T> = HashMap<String, T>;

/// Named callables usable inside call expressions.
pub type Functions<T> = HashMap<String, Box<dyn Callable<T>>>;

/// A named function registered in a [`Functions`] table.
///
/// The engine knows nothing about a callable beyond this one operation: it
/// hands over the fully evaluated arguments in order and returns whatever
/// comes back, success or failure, unchanged. Arity and domain checking are
/// the callable's own business.
pub trait Callable<T>: Send + Sync {
    fn call(&self, args: &[T]) -> Result<T, EvalError>;
}

impl<T, F> Callable<T> for F
where
    F: Fn(&[T]) -> Result<T, EvalError> + Send + Sync,
{
    fn call(&self, args: &[T]) -> Result<T, EvalError> {
        self(args)
    }
}

impl Expression {
    /// Reduces the tree to a single number against `scope` and `functions`.
    ///
    /// Evaluation is strictly left-to-right and stops at the first failure;
    /// on failure no partial result exists. Division follows IEEE-754, so
    /// `x / 0.0` yields an infinity and `0.0 / 0.0` yields NaN rather than
    /// an error.
    pub fn evaluate<T: Real>(
        &self,
        scope: &Scope<T>,
        functions: &Functions<T>,
    ) -> Result<T, EvalError> {
        match self {
            Self::Identifier(name) => evaluate_identifier(name, scope),
            Self::Binary(op, lhs, rhs) => evaluate_binary(*op, lhs, rhs, scope, functions),
            Self::Paren(inner) => inner.evaluate(scope, functions),
            Self::Literal(text) => text.parse().map_err(|source| EvalError::MalformedLiteral {
                text: text.clone(),
                source,
            }),
            Self::Call(callee, args) => {
                let mut arg_values = Vec::with_capacity(args.len());
                for arg in args {
                    arg_values.push(arg.evaluate(scope, functions)?);
                }
                evaluate_call(callee, functions, arg_values)
            }
        }
    }
}

fn evaluate_identifier<T: Real>(name: &str, scope: &Scope<T>) -> Result<T, EvalError> {
    scope
        .get(name)
        .copied()
        .ok_or_else(|| EvalError::UnboundVariable {
            name: name.to_string(),
            scope: render_scope(scope),
        })
}

fn evaluate_binary<T: Real>(
    op: char,
    lhs: &Expression,
    rhs: &Expression,
    scope: &Scope<T>,
    functions: &Functions<T>,
) -> Result<T, EvalError> {
    let lhs_value = lhs.evaluate(scope, functions)?;
    let rhs_value = rhs.evaluate(scope, functions)?;

    match op {
        '+' => Ok(lhs_value + rhs_value),
        '-' => Ok(lhs_value - rhs_value),
        '*' => Ok(lhs_value * rhs_value),
        '/' => Ok(lhs_value / rhs_value),
        _ => Err(EvalError::UnsupportedOperator(op)),
    }
}

fn evaluate_call<T: Real>(
    callee: &Expression,
    functions: &Functions<T>,
    arg_values: Vec<T>,
) -> Result<T, EvalError> {
    let name = match callee {
        Expression::Identifier(name) => name,
        other => return Err(EvalError::UnsupportedCallee(format!("{other:?}"))),
    };

    match functions.get(name) {
        Some(function) => function.call(&arg_values),
        None => {
            let mut available: Vec<String> = functions.keys().cloned().collect();
            available.sort();
            Err(EvalError::UnknownFunction {
                name: name.clone(),
                available,
            })
        }
    }
}

// Sorted so diagnostics are deterministic regardless of hash order.
fn render_scope<T: Real>(scope: &Scope<T>) -> String {
    let mut entries: Vec<String> = scope
        .iter()
        .map(|(name, value)| format!("{name}: {value:?}"))
        .collect();
    entries.sort();
    entries.join(", ")
}
