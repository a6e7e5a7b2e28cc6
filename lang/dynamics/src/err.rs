use crate::syntax::{Node, VarName};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("type mismatch in `{op}`: expected {expected}, found `{found}`")]
    TypeMismatch { op: &'static str, expected: &'static str, found: Node },
    #[error("unbound variable `{0}`")]
    UnboundVariable(VarName),
    #[error("condition must be a boolean, found `{0}`")]
    NonBooleanCondition(Node),
    #[error("`{0}` cannot make progress")]
    Stuck(Node),
    #[error("gave up after {0} steps")]
    StepLimit(usize),
}

pub type Result<T> = std::result::Result<T, EvalError>;
