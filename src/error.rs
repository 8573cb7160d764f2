use crate::Variable;
use thiserror::Error;

/// Errors raised while building, minimizing or displaying a function.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum QmError {
    /// An index does not fit in the truth table
    #[error("Index {index} is out of range for {variables} variables")]
    InvalidIndex { index: usize, variables: usize },

    /// Some indices are both minterms and don't-cares
    #[error("Indices {0:?} are both minterms and don't-cares")]
    OverlappingSets(Vec<usize>),

    /// No minterm and no don't-care
    #[error("No minterm and no don't-care: nothing to minimize")]
    EmptyInput,

    /// The number of variables is not supported
    #[error("Unsupported number of variables: {0}")]
    InvalidVariableCount(usize),

    /// The name is invalid
    #[error("The name '{0}' is invalid")]
    InvalidName(String),

    /// The name conflicts
    #[error("The name '{0}' conflicts with an other variable")]
    ConflictingName(String),

    /// The variable has no name in the collection
    #[error("There is no variable '{0}' in this collection")]
    NoSuchVariable(Variable),

    /// The term contains an unknown symbol
    #[error("Not a valid term: '{0}'")]
    InvalidTerm(String),

    /// The expression is invalid
    #[error("Not a valid expression: {0}")]
    InvalidExpression(String),

    /// The cancellation flag was raised
    #[error("Minimization cancelled in merge round {round}")]
    Cancelled { round: usize },
}
