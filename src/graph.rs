//! Arena-backed expression graphs describing sampling programs.
//!
//! A graph is a DAG of [`Expr`] nodes stored in an [`ExprGraph`] arena and
//! addressed by [`ExprId`] handles. Sharing a subgraph means reusing its
//! `ExprId`; node identity is handle equality, never deep comparison.
//!
//! Graphs are built once through the builder methods and then treated as
//! immutable; extraction only reads them.
//!
//! # Example
//!
//! ```
//! use configspace::graph::ExprGraph;
//!
//! let mut g = ExprGraph::new();
//! let lr = g.log_uniform("lr", 1e-5, 1e-1);
//! let momentum = g.uniform("momentum", 0.0, 1.0);
//! let root = g.choice("optimizer", vec![lr, momentum]);
//! # let _ = root;
//! ```

use crate::distribution::Distribution;

/// Handle to a node in an [`ExprGraph`].
///
/// Handles are only meaningful for the graph that issued them. Two handles
/// are equal iff they address the same node, which is the identity notion
/// used for duplicate-label detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprId(u32);

impl ExprId {
    /// Returns the arena index of this handle.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl core::fmt::Display for ExprId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "expr_{}", self.0)
    }
}

/// A node in a sampling-expression graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Selects one of `options` based on the value of the `index`
    /// hyperparameter. Option `i` is active when the index equals `i`.
    Switch {
        /// The index hyperparameter reference; must be a [`Expr::Param`]
        /// wrapping a categorical distribution.
        index: ExprId,
        /// One subgraph per possible index value, in value order.
        options: Vec<ExprId>,
    },
    /// A named hyperparameter defined by the distribution subgraph `obj`.
    Param {
        /// The hyperparameter's label, unique per distinct definition.
        label: String,
        /// The defining distribution node.
        obj: ExprId,
    },
    /// A sampling distribution leaf.
    Dist(Distribution),
    /// A numeric constant leaf.
    Literal(f64),
    /// Any other operator: arithmetic, tuple/dict construction, and so on.
    /// Extraction descends `inputs` positionally and never descends `named`.
    Apply {
        /// Symbolic operator name.
        op: String,
        /// Positional argument subgraphs.
        inputs: Vec<ExprId>,
        /// Keyword argument subgraphs, carried but not traversed.
        named: Vec<(String, ExprId)>,
    },
}

impl Expr {
    /// Returns a short name for this node's kind, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Switch { .. } => "switch",
            Self::Param { .. } => "param",
            Self::Dist(_) => "dist",
            Self::Literal(_) => "literal",
            Self::Apply { .. } => "apply",
        }
    }
}

/// Arena holding the nodes of one sampling-expression graph.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprGraph {
    nodes: Vec<Expr>,
}

impl ExprGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn push(&mut self, node: Expr) -> ExprId {
        let id = ExprId(u32::try_from(self.nodes.len()).expect("graph exceeds u32::MAX nodes"));
        self.nodes.push(node);
        id
    }

    /// Returns the node addressed by `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different graph and is out of range.
    #[must_use]
    pub fn node(&self, id: ExprId) -> &Expr {
        &self.nodes[id.index()]
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a numeric constant leaf.
    pub fn literal(&mut self, value: f64) -> ExprId {
        self.push(Expr::Literal(value))
    }

    /// Adds a distribution leaf.
    pub fn dist(&mut self, distribution: Distribution) -> ExprId {
        self.push(Expr::Dist(distribution))
    }

    /// Adds a hyperparameter reference over an existing defining node.
    pub fn param(&mut self, label: impl Into<String>, obj: ExprId) -> ExprId {
        self.push(Expr::Param {
            label: label.into(),
            obj,
        })
    }

    /// Adds a hyperparameter sampled uniformly from `[low, high]`.
    pub fn uniform(&mut self, label: impl Into<String>, low: f64, high: f64) -> ExprId {
        let obj = self.dist(Distribution::uniform(low, high));
        self.param(label, obj)
    }

    /// Adds a hyperparameter sampled log-uniformly from `[low, high]`.
    pub fn log_uniform(&mut self, label: impl Into<String>, low: f64, high: f64) -> ExprId {
        let obj = self.dist(Distribution::log_uniform(low, high));
        self.param(label, obj)
    }

    /// Adds a hyperparameter sampled uniformly from the integers `0..n`.
    pub fn randint(&mut self, label: impl Into<String>, n: usize) -> ExprId {
        let obj = self.dist(Distribution::randint(n));
        self.param(label, obj)
    }

    /// Adds a choice over `options`: allocates an index hyperparameter
    /// named `label` with one outcome per option, then a switch wiring the
    /// index to the options.
    pub fn choice(&mut self, label: impl Into<String>, options: Vec<ExprId>) -> ExprId {
        let index = self.randint(label, options.len());
        self.switch(index, options)
    }

    /// Adds a raw switch node over an arbitrary index node.
    ///
    /// [`choice`](Self::choice) is the well-formed front-end; this form
    /// does not validate the index shape, extraction does.
    pub fn switch(&mut self, index: ExprId, options: Vec<ExprId>) -> ExprId {
        self.push(Expr::Switch { index, options })
    }

    /// Adds a generic operator node with positional inputs.
    pub fn apply(&mut self, op: impl Into<String>, inputs: Vec<ExprId>) -> ExprId {
        self.push(Expr::Apply {
            op: op.into(),
            inputs,
            named: Vec::new(),
        })
    }

    /// Adds a generic operator node with positional and keyword inputs.
    pub fn apply_named(
        &mut self,
        op: impl Into<String>,
        inputs: Vec<ExprId>,
        named: Vec<(String, ExprId)>,
    ) -> ExprId {
        self.push(Expr::Apply {
            op: op.into(),
            inputs,
            named,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_dense_and_ordered() {
        let mut g = ExprGraph::new();
        let a = g.literal(1.0);
        let b = g.literal(2.0);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn choice_wires_an_index_param_over_a_randint() {
        let mut g = ExprGraph::new();
        let x = g.uniform("x", 0.0, 1.0);
        let y = g.uniform("y", 0.0, 1.0);
        let root = g.choice("pick", vec![x, y]);

        let Expr::Switch { index, options } = g.node(root) else {
            panic!("choice must build a switch");
        };
        assert_eq!(options, &[x, y]);
        let Expr::Param { label, obj } = g.node(*index) else {
            panic!("choice index must be a param");
        };
        assert_eq!(label, "pick");
        let Expr::Dist(d) = g.node(*obj) else {
            panic!("choice index param must wrap a distribution");
        };
        assert_eq!(d.index_arity(), Some(2));
    }

    #[test]
    fn shared_subgraphs_share_handles() {
        let mut g = ExprGraph::new();
        let z = g.randint("z", 10);
        let sum = g.apply("add", vec![z, z]);
        let Expr::Apply { inputs, .. } = g.node(sum) else {
            panic!("apply must build an apply node");
        };
        assert_eq!(inputs[0], inputs[1]);
    }
}
