//! Flattening a sampling-expression graph into a conditional
//! configuration space.
//!
//! [`extract`] walks a graph once and produces a [`ConfigSpace`]: for every
//! hyperparameter label, the node that defines its distribution and the set
//! of switch paths under which it is live. Hyperparameters nested under
//! switch options are conditional: they carry one path condition per
//! enclosing branch, so mutually exclusive subspaces stay disjoint in the
//! result.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::condition::{Condition, ConditionPath};
use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::graph::{Expr, ExprGraph, ExprId};

/// The configuration-space record for one hyperparameter label.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamEntry {
    /// The defining distribution node, fixed on first encounter.
    node: ExprId,
    /// Every path along which the label is reachable: an OR over AND
    /// conjunctions.
    conditions: HashSet<ConditionPath>,
}

impl ParamEntry {
    /// Returns the handle of the defining distribution node.
    #[must_use]
    pub fn node(&self) -> ExprId {
        self.node
    }

    /// Returns the set of paths under which this hyperparameter is live.
    #[must_use]
    pub fn conditions(&self) -> &HashSet<ConditionPath> {
        &self.conditions
    }

    /// Resolves the defining node to its distribution, if it is a
    /// distribution leaf in `graph`.
    #[must_use]
    pub fn distribution<'g>(&self, graph: &'g ExprGraph) -> Option<&'g Distribution> {
        match graph.node(self.node) {
            Expr::Dist(d) => Some(d),
            _ => None,
        }
    }
}

/// The flattened, conditional structure of a sampling space: one
/// [`ParamEntry`] per hyperparameter label.
///
/// Built by a single [`extract`] traversal and immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigSpace {
    params: HashMap<String, ParamEntry>,
}

impl ConfigSpace {
    /// Returns the entry for `label`, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&ParamEntry> {
        self.params.get(label)
    }

    /// Returns `true` if `label` appears in the space.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.params.contains_key(label)
    }

    /// Iterates over the labels in the space, in arbitrary order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Iterates over `(label, entry)` pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamEntry)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of hyperparameters in the space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if the space holds no hyperparameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders a human-readable summary of the space, resolving defining
    /// nodes against `graph`.
    ///
    /// Labels are sorted and condition paths rendered deterministically so
    /// the output is stable across runs.
    #[must_use]
    pub fn summary(&self, graph: &ExprGraph) -> String {
        use core::fmt::Write as _;

        let mut labels: Vec<&str> = self.labels().collect();
        labels.sort_unstable();

        let mut out = String::new();
        for label in labels {
            let entry = &self.params[label];
            let _ = writeln!(out, "{label}");
            match entry.distribution(graph) {
                Some(dist) => {
                    let _ = writeln!(out, "  dist: {dist}");
                }
                None => {
                    let _ = writeln!(out, "  dist: <{}>", graph.node(entry.node).kind_name());
                }
            }
            let mut paths: Vec<String> = entry.conditions.iter().map(ToString::to_string).collect();
            paths.sort_unstable();
            if paths.len() > 1 {
                let _ = writeln!(out, "  conditions (OR):");
                for path in paths {
                    let _ = writeln!(out, "    {path}");
                }
            } else if let Some(path) = paths.first() {
                let _ = writeln!(out, "  conditions: {path}");
            }
        }
        out
    }
}

/// Flattens the graph reachable from `root` into a [`ConfigSpace`].
///
/// `seed` is the path prefix every recorded condition starts from;
/// [`ConditionPath::root`] is the conventional choice, but any caller
/// context is accepted. The graph is only read.
///
/// # Errors
///
/// Returns [`Error::DuplicateLabel`] when a label is redefined by a
/// different node, and one of the structural-violation variants when a
/// switch is malformed (non-param index, non-categorical index
/// distribution, no options, or an index/option arity mismatch). Any error
/// aborts the traversal; the partial table is discarded.
pub fn extract(graph: &ExprGraph, root: ExprId, seed: &ConditionPath) -> Result<ConfigSpace> {
    let mut space = ConfigSpace::default();
    walk(graph, root, seed, &mut space.params)?;
    trace_info!(params = space.params.len(), "extraction complete");
    Ok(space)
}

fn walk(
    graph: &ExprGraph,
    id: ExprId,
    path: &ConditionPath,
    params: &mut HashMap<String, ParamEntry>,
) -> Result<()> {
    match graph.node(id) {
        Expr::Switch { index, options } => {
            let label = validate_switch(graph, *index, options)?;
            trace_debug!(index = label, options = options.len(), "descending switch");

            // The index variable is live regardless of which option wins.
            walk(graph, *index, path, params)?;
            for (value, option) in options.iter().enumerate() {
                let branch = path.extended(Condition::eq(label, value));
                walk(graph, *option, &branch, params)?;
            }
            Ok(())
        }
        Expr::Param { label, obj } => register(params, label, *obj, path),
        Expr::Dist(_) | Expr::Literal(_) => Ok(()),
        Expr::Apply { inputs, .. } => {
            // Named arguments are deliberately not descended: only
            // positional inputs propagate structural conditions.
            for input in inputs {
                walk(graph, *input, path, params)?;
            }
            Ok(())
        }
    }
}

/// Checks the required shape of a switch and returns its index label.
///
/// The index must be a hyperparameter reference wrapping a distribution
/// that enumerates exactly one outcome per option.
fn validate_switch<'g>(graph: &'g ExprGraph, index: ExprId, options: &[ExprId]) -> Result<&'g str> {
    let (label, obj) = match graph.node(index) {
        Expr::Param { label, obj } => (label.as_str(), *obj),
        other => {
            return Err(Error::SwitchIndexNotParam {
                found: other.kind_name(),
            })
        }
    };
    let arity = match graph.node(obj) {
        Expr::Dist(d) => d.index_arity(),
        _ => None,
    };
    let Some(arity) = arity else {
        return Err(Error::SwitchIndexNotCategorical {
            label: label.to_owned(),
        });
    };
    if options.is_empty() {
        return Err(Error::EmptySwitch {
            label: label.to_owned(),
        });
    }
    if arity != options.len() {
        return Err(Error::SwitchArityMismatch {
            label: label.to_owned(),
            arity,
            options: options.len(),
        });
    }
    Ok(label)
}

/// Records one encounter of `label` at `path`.
///
/// First encounter fixes the defining node; later encounters must present
/// the identical node (by handle) and only union in the new path.
fn register(
    params: &mut HashMap<String, ParamEntry>,
    label: &str,
    obj: ExprId,
    path: &ConditionPath,
) -> Result<()> {
    match params.entry(label.to_owned()) {
        Entry::Occupied(mut entry) => {
            if entry.get().node != obj {
                return Err(Error::DuplicateLabel {
                    label: label.to_owned(),
                });
            }
            entry.get_mut().conditions.insert(path.clone());
        }
        Entry::Vacant(entry) => {
            trace_debug!(label, "registered hyperparameter");
            entry.insert(ParamEntry {
                node: obj,
                conditions: HashSet::from([path.clone()]),
            });
        }
    }
    Ok(())
}
