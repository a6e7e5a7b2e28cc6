use crate::{env::Env, err::*, syntax::*};

/// Small-step semantics over a node and the environment threaded through it.
pub trait Eval: Sized {
    /// `false` once there is nothing left to rewrite.
    fn is_reducible(&self) -> bool;
    /// Exactly one rewrite. A node that is not reducible comes back unchanged.
    fn reduce(self, env: Env) -> Result<(Self, Env)>;
    /// All the way down to an irreducible node.
    fn evaluate(self, env: Env) -> Result<(Self, Env)>;
    /// Repeat [`Eval::reduce`] until the node is irreducible.
    fn fixpoint(self, env: Env) -> Result<(Self, Env)> {
        let (mut res, mut env) = (self, env);
        while res.is_reducible() {
            (res, env) = res.reduce(env)?;
        }
        Ok((res, env))
    }
}

fn mk_box(node: impl Into<Node>) -> BoxNode {
    Box::new(node.into())
}

/* -------------------------------- Operators ------------------------------- */

#[derive(Clone, Copy)]
enum BinOp {
    Add,
    Multiply,
    LessThan,
}

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            | BinOp::Add => "+",
            | BinOp::Multiply => "*",
            | BinOp::LessThan => "<",
        }
    }
    fn rebuild(self, left: BoxNode, right: BoxNode) -> Node {
        match self {
            | BinOp::Add => Add { left, right }.into(),
            | BinOp::Multiply => Multiply { left, right }.into(),
            | BinOp::LessThan => LessThan { left, right }.into(),
        }
    }
    fn number(self, node: Node) -> Result<i64> {
        match node {
            | Node::Number(Number(n)) => Ok(n),
            | found => Err(EvalError::TypeMismatch { op: self.symbol(), expected: "a number", found }),
        }
    }
    /// Both operands are terminal; compute the result.
    fn fold(self, left: Node, right: Node) -> Result<Node> {
        let (a, b) = (self.number(left)?, self.number(right)?);
        Ok(match self {
            | BinOp::Add => Number(a.wrapping_add(b)).into(),
            | BinOp::Multiply => Number(a.wrapping_mul(b)).into(),
            | BinOp::LessThan => Boolean(a < b).into(),
        })
    }
    fn reduce(self, left: BoxNode, right: BoxNode, env: Env) -> Result<(Node, Env)> {
        if left.is_reducible() {
            let (left, env) = (*left).evaluate(env)?;
            Ok((self.rebuild(mk_box(left), right), env))
        } else if right.is_reducible() {
            let (right, env) = (*right).evaluate(env)?;
            Ok((self.rebuild(left, mk_box(right)), env))
        } else {
            Ok((self.fold(*left, *right)?, env))
        }
    }
    fn evaluate(self, left: BoxNode, right: BoxNode, env: Env) -> Result<(Node, Env)> {
        let (left, env) = (*left).evaluate(env)?;
        let (right, env) = (*right).evaluate(env)?;
        Ok((self.fold(left, right)?, env))
    }
}

/* -------------------------------- Variables ------------------------------- */

/// Look `name` up and make sure what comes back is a value. A bound node that
/// is still reducible is evaluated without `name` in scope, so a binding that
/// refers back to itself ends in `UnboundVariable` instead of looping.
fn resolve(name: VarName, env: Env) -> Result<(Node, Env)> {
    let bound = env.get(name.plain()).cloned();
    let Some(bound) = bound else {
        return Err(EvalError::UnboundVariable(name));
    };
    if !bound.is_reducible() {
        return Ok((bound, env));
    }
    log::trace!("resolving `{}` through `{}`", name, bound);
    let (value, _) = bound.evaluate(env.without(name.plain()))?;
    Ok((value, env))
}

/* ---------------------------------- Node ---------------------------------- */

impl Eval for Node {
    fn is_reducible(&self) -> bool {
        !self.is_terminal()
    }

    fn reduce(self, env: Env) -> Result<(Self, Env)> {
        match self {
            | Node::Number(_) | Node::Boolean(_) | Node::DoNothing(_) => Ok((self, env)),
            | Node::Add(Add { left, right }) => BinOp::Add.reduce(left, right, env),
            | Node::Multiply(Multiply { left, right }) => BinOp::Multiply.reduce(left, right, env),
            | Node::LessThan(LessThan { left, right }) => BinOp::LessThan.reduce(left, right, env),
            | Node::Variable(Variable(name)) => resolve(name, env),
            | Node::Assign(Assign { name, expression }) => {
                if expression.is_reducible() {
                    let (expression, env) = (*expression).reduce(env)?;
                    return Ok((Assign { name, expression: mk_box(expression) }.into(), env));
                }
                let binding: Env = [(name, *expression)].into_iter().collect();
                Ok((DoNothing.into(), env.merge(&binding)))
            }
            | Node::If(If { condition, consequence, alternative }) => {
                if condition.is_reducible() {
                    let (condition, env) = (*condition).reduce(env)?;
                    let node = If { condition: mk_box(condition), consequence, alternative };
                    return Ok((node.into(), env));
                }
                match *condition {
                    | Node::Boolean(Boolean(true)) => Ok((*consequence, env)),
                    | Node::Boolean(Boolean(false)) => Ok((*alternative, env)),
                    | found => Err(EvalError::NonBooleanCondition(found)),
                }
            }
            | Node::Sequence(Sequence { first, second }) => match *first {
                | Node::DoNothing(DoNothing) => Ok((*second, env)),
                | first if first.is_reducible() => {
                    let (first, env) = first.reduce(env)?;
                    Ok((Sequence { first: mk_box(first), second }.into(), env))
                }
                | first => Err(EvalError::Stuck(Sequence { first: mk_box(first), second }.into())),
            },
            | Node::While(While { condition, body }) => {
                let again = While { condition: condition.clone(), body: body.clone() };
                let node = If {
                    condition,
                    consequence: mk_box(Sequence { first: body, second: mk_box(again) }),
                    alternative: mk_box(DoNothing),
                };
                Ok((node.into(), env))
            }
        }
    }

    fn evaluate(self, env: Env) -> Result<(Self, Env)> {
        match self {
            | Node::Number(_) | Node::Boolean(_) | Node::DoNothing(_) => Ok((self, env)),
            | Node::Add(Add { left, right }) => BinOp::Add.evaluate(left, right, env),
            | Node::Multiply(Multiply { left, right }) => BinOp::Multiply.evaluate(left, right, env),
            | Node::LessThan(LessThan { left, right }) => {
                BinOp::LessThan.evaluate(left, right, env)
            }
            | Node::Variable(Variable(name)) => resolve(name, env),
            | Node::Assign(_) | Node::If(_) | Node::Sequence(_) | Node::While(_) => {
                self.fixpoint(env)
            }
        }
    }
}
