//! Variable bindings threaded through every reduction step.

use crate::syntax::*;
use derive_more::{Deref, From, Into};
use std::ops::{Add, Index};

/// A persistent map from variable names to the nodes bound under them.
///
/// Every operation that changes bindings returns a new `Env`; the old one is
/// left as it was, and the two share structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, From, Into, Deref)]
pub struct Env(im::HashMap<VarName, Node>);

impl Env {
    pub fn new() -> Self {
        Self(im::HashMap::new())
    }
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.0.get(name)
    }
    /// Right-biased union: bindings of `overlay` win on collision.
    pub fn merge(&self, overlay: &Env) -> Env {
        self.clone() + overlay.clone()
    }
    pub fn extended(&self, name: VarName, node: Node) -> Env {
        Env(self.0.update(name, node))
    }
    pub fn without(&self, name: &str) -> Env {
        Env(self.0.without(name))
    }
    /// Bindings sorted by name.
    pub fn bindings(&self) -> Vec<(&VarName, &Node)> {
        let mut bindings: Vec<_> = self.0.iter().collect();
        bindings.sort_by(|(a, _), (b, _)| a.cmp(b));
        bindings
    }
}

mod impls_env {
    use super::*;

    impl<Iter> Add<Iter> for Env
    where
        Iter: IntoIterator<Item = (VarName, Node)>,
    {
        type Output = Self;
        fn add(self, iter: Iter) -> Self {
            let Env(mut defs) = self;
            for (name, node) in iter {
                defs.insert(name, node);
            }
            Self(defs)
        }
    }
    impl Index<&str> for Env {
        type Output = Node;
        fn index(&self, name: &str) -> &Node {
            &self.0[name]
        }
    }
    impl<K> FromIterator<(K, Node)> for Env
    where
        K: Into<VarName>,
    {
        fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
            Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
        }
    }
    impl IntoIterator for Env {
        type Item = (VarName, Node);
        type IntoIter = im::hashmap::ConsumingIter<(VarName, Node)>;
        fn into_iter(self) -> Self::IntoIter {
            self.0.into_iter()
        }
    }
    impl<'a> Ugly<'a, Formatter> for Env {
        fn ugly(&self, f: &'a Formatter) -> String {
            let bindings = self
                .bindings()
                .into_iter()
                .map(|(name, node)| format!("{}: {}", name.ugly(f), node.ugly(f)))
                .collect::<Vec<_>>();
            format!("{{{}}}", bindings.join(", "))
        }
    }
    impl std::fmt::Display for Env {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.ugly(&Formatter::new()))
        }
    }
}
