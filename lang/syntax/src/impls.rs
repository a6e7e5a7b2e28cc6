use crate::*;
use std::fmt;

macro_rules! impl_name {
    ($name:ident) => {
        impl $name {
            pub fn plain(&self) -> &str {
                let $name(name) = self;
                name.as_str()
            }
        }
        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                $name(name.to_string())
            }
        }
        impl From<String> for $name {
            fn from(name: String) -> Self {
                $name(name)
            }
        }
        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                self.plain()
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.plain())
            }
        }
    };
}

impl_name!(VarName);

impl Node {
    /// Literals and `do-nothing` have nothing left to rewrite.
    pub fn is_terminal(&self) -> bool {
        match self {
            | Node::Number(_) | Node::Boolean(_) | Node::DoNothing(_) => true,
            | Node::Add(_)
            | Node::Multiply(_)
            | Node::LessThan(_)
            | Node::Variable(_)
            | Node::Assign(_)
            | Node::If(_)
            | Node::Sequence(_)
            | Node::While(_) => false,
        }
    }

    /// Name of the construct, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            | Node::Number(_) => "number",
            | Node::Boolean(_) => "boolean",
            | Node::Add(_) => "add",
            | Node::Multiply(_) => "multiply",
            | Node::LessThan(_) => "less-than",
            | Node::Variable(_) => "variable",
            | Node::DoNothing(_) => "do-nothing",
            | Node::Assign(_) => "assign",
            | Node::If(_) => "if",
            | Node::Sequence(_) => "sequence",
            | Node::While(_) => "while",
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        DoNothing.into()
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Number(value).into()
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Boolean(value).into()
    }
}

/// Shorthands for writing programs by hand.
pub mod build {
    use crate::*;

    fn mk_box(node: impl Into<Node>) -> BoxNode {
        Box::new(node.into())
    }

    pub fn num(value: i64) -> Node {
        Number(value).into()
    }
    pub fn bool(value: bool) -> Node {
        Boolean(value).into()
    }
    pub fn var(name: impl Into<VarName>) -> Node {
        Variable(name.into()).into()
    }
    pub fn add(left: impl Into<Node>, right: impl Into<Node>) -> Node {
        Add { left: mk_box(left), right: mk_box(right) }.into()
    }
    pub fn mul(left: impl Into<Node>, right: impl Into<Node>) -> Node {
        Multiply { left: mk_box(left), right: mk_box(right) }.into()
    }
    pub fn lt(left: impl Into<Node>, right: impl Into<Node>) -> Node {
        LessThan { left: mk_box(left), right: mk_box(right) }.into()
    }
    pub fn do_nothing() -> Node {
        DoNothing.into()
    }
    pub fn assign(name: impl Into<VarName>, expression: impl Into<Node>) -> Node {
        Assign { name: name.into(), expression: mk_box(expression) }.into()
    }
    pub fn if_(
        condition: impl Into<Node>, consequence: impl Into<Node>, alternative: impl Into<Node>,
    ) -> Node {
        If {
            condition: mk_box(condition),
            consequence: mk_box(consequence),
            alternative: mk_box(alternative),
        }
        .into()
    }
    pub fn seq(first: impl Into<Node>, second: impl Into<Node>) -> Node {
        Sequence { first: mk_box(first), second: mk_box(second) }.into()
    }
    /// Right-nested sequence of any number of statements; empty is `do-nothing`.
    pub fn block(stmts: impl IntoIterator<Item = Node>) -> Node {
        let stmts: Vec<Node> = stmts.into_iter().collect();
        let mut iter = stmts.into_iter().rev();
        let Some(last) = iter.next() else { return do_nothing() };
        iter.fold(last, |tail, stmt| seq(stmt, tail))
    }
    pub fn while_(condition: impl Into<Node>, body: impl Into<Node>) -> Node {
        While { condition: mk_box(condition), body: mk_box(body) }.into()
    }
}
