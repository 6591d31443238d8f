/// A parsed arithmetic expression, as handed over by an upstream parser.
///
/// The set of node kinds is closed: the upstream parser resolved precedence
/// and associativity already, so the tree shape is final and the evaluator
/// only ever walks it read-only.
#[derive(Clone, Debug)]
pub enum Expression {
    /// Variable reference, resolved against the scope.
    Identifier(String),
    /// Binary operation: the operator symbol as the parser delivered it,
    /// then the left and right operands.
    Binary(char, Box<Expression>, Box<Expression>),
    /// Explicit grouping. No semantic effect of its own.
    Paren(Box<Expression>),
    /// Numeric literal, kept as text until evaluation.
    Literal(String),
    /// Function call: callee expression and ordered arguments. The callee
    /// must turn out to be a plain [`Expression::Identifier`].
    Call(Box<Expression>, Vec<Expression>),
}
