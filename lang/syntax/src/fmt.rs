//! The formatter traits, and how nodes are shown with them.

use crate::*;

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Ugly<'a, Fmter> {
    fn ugly(&self, f: &'a Fmter) -> String;
}

use pretty::RcDoc;

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Pretty<'a, Fmter> {
    fn pretty(&self, f: &'a Fmter) -> RcDoc<'a>;
}

/* -------------------------------- Formatter ------------------------------- */

pub struct Formatter {
    /// line width used by [`Formatter::render`]
    pub width: usize,
}
impl Formatter {
    pub fn new() -> Self {
        Formatter { width: 80 }
    }
    pub fn with_width(width: usize) -> Self {
        Formatter { width }
    }
    pub fn render<'a, T>(&'a self, item: &T) -> String
    where
        T: Pretty<'a, Formatter>,
    {
        item.pretty(self).pretty(self.width).to_string()
    }
}
impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

/* ---------------------------------- Ugly ---------------------------------- */

impl<'a> Ugly<'a, Formatter> for VarName {
    fn ugly(&self, _f: &'a Formatter) -> String {
        self.plain().to_string()
    }
}

impl<'a> Ugly<'a, Formatter> for Node {
    fn ugly(&self, f: &'a Formatter) -> String {
        match self {
            | Node::Number(Number(value)) => format!("{}", value),
            | Node::Boolean(Boolean(value)) => format!("{}", value),
            | Node::Add(Add { left, right }) => {
                format!("«{} + {}»", left.ugly(f), right.ugly(f))
            }
            | Node::Multiply(Multiply { left, right }) => {
                format!("«{} * {}»", left.ugly(f), right.ugly(f))
            }
            | Node::LessThan(LessThan { left, right }) => {
                format!("«{} < {}»", left.ugly(f), right.ugly(f))
            }
            | Node::Variable(Variable(name)) => name.ugly(f),
            | Node::DoNothing(DoNothing) => "do-nothing".to_string(),
            | Node::Assign(Assign { name, expression }) => {
                format!("«{} = {}»", name.ugly(f), expression.ugly(f))
            }
            | Node::If(If { condition, consequence, alternative }) => {
                format!(
                    "if ({}) {{ {} }} else {{ {} }}",
                    condition.ugly(f),
                    consequence.ugly(f),
                    alternative.ugly(f)
                )
            }
            | Node::Sequence(Sequence { first, second }) => {
                format!("«{}; {}»", first.ugly(f), second.ugly(f))
            }
            | Node::While(While { condition, body }) => {
                format!("while ({}) {{ {} }}", condition.ugly(f), body.ugly(f))
            }
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ugly(&Formatter::new()))
    }
}

/* --------------------------------- Pretty --------------------------------- */

fn braced<'a>(body: RcDoc<'a>) -> RcDoc<'a> {
    RcDoc::text("{")
        .append(RcDoc::line().append(body).nest(2))
        .append(RcDoc::line())
        .append(RcDoc::text("}"))
}

impl<'a> Pretty<'a, Formatter> for Node {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        match self {
            | Node::Assign(Assign { name, expression }) => RcDoc::text(name.ugly(f))
                .append(RcDoc::text(" = "))
                .append(RcDoc::text(expression.ugly(f))),
            | Node::If(If { condition, consequence, alternative }) => RcDoc::text("if (")
                .append(RcDoc::text(condition.ugly(f)))
                .append(RcDoc::text(") "))
                .append(braced(consequence.pretty(f)))
                .append(RcDoc::text(" else "))
                .append(braced(alternative.pretty(f)))
                .group(),
            | Node::Sequence(Sequence { first, second }) => first
                .pretty(f)
                .append(RcDoc::text(";"))
                .append(RcDoc::line())
                .append(second.pretty(f)),
            | Node::While(While { condition, body }) => RcDoc::text("while (")
                .append(RcDoc::text(condition.ugly(f)))
                .append(RcDoc::text(") "))
                .append(braced(body.pretty(f)))
                .group(),
            | Node::Number(_)
            | Node::Boolean(_)
            | Node::Add(_)
            | Node::Multiply(_)
            | Node::LessThan(_)
            | Node::Variable(_)
            | Node::DoNothing(_) => RcDoc::text(self.ugly(f)),
        }
    }
}
