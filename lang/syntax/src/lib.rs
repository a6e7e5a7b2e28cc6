#![allow(clippy::style)]
#![allow(clippy::useless_format)]

pub mod fmt;
pub use fmt::*;

mod impls;
pub use impls::build;

use derive_more::From;

/* --------------------------------- Binder --------------------------------- */

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarName(pub String);

pub type BoxNode = Box<Node>;

/* ------------------------------- Expression ------------------------------- */

/// `42`
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Number(pub i64);
/// `true` / `false`
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Boolean(pub bool);

/// `a + b`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Add {
    pub left: BoxNode,
    pub right: BoxNode,
}
/// `a * b`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Multiply {
    pub left: BoxNode,
    pub right: BoxNode,
}
/// `a < b`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct LessThan {
    pub left: BoxNode,
    pub right: BoxNode,
}

/// `x`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Variable(pub VarName);

/* -------------------------------- Statement ------------------------------- */

/// `do-nothing`, the finished statement
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DoNothing;

/// `x = e`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Assign {
    pub name: VarName,
    pub expression: BoxNode,
}

/// `if (c) { a } else { b }`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct If {
    pub condition: BoxNode,
    pub consequence: BoxNode,
    pub alternative: BoxNode,
}

/// `a; b`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Sequence {
    pub first: BoxNode,
    pub second: BoxNode,
}

/// `while (c) { b }`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct While {
    pub condition: BoxNode,
    pub body: BoxNode,
}

/* ---------------------------------- Node ---------------------------------- */

/// Every construct of the language; expressions and statements share one
/// tree so that a statement may rewrite into another.
#[derive(From, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Node {
    Number(Number),
    Boolean(Boolean),
    Add(Add),
    Multiply(Multiply),
    LessThan(LessThan),
    Variable(Variable),
    DoNothing(DoNothing),
    Assign(Assign),
    If(If),
    Sequence(Sequence),
    While(While),
}
