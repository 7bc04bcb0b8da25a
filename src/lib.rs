#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Conditional configuration-space extraction for sampling programs.
//!
//! A sampling space is described as an expression graph: distribution
//! leaves, hyperparameter references, switch/choice selectors, and generic
//! operator nodes. This crate flattens such a graph into a
//! [`ConfigSpace`] — a table mapping every hyperparameter label to its
//! defining distribution node and to the set of branch conditions under
//! which the hyperparameter is actually live. Optimizers that understand
//! conditional search spaces consume the table; this crate does not sample
//! or optimize anything itself.
//!
//! # Getting Started
//!
//! ```
//! use configspace::prelude::*;
//!
//! let mut g = ExprGraph::new();
//! let lr_sgd = g.log_uniform("lr_sgd", 1e-5, 1e-1);
//! let lr_adam = g.log_uniform("lr_adam", 1e-5, 1e-2);
//! let root = g.choice("optimizer", vec![lr_sgd, lr_adam]);
//!
//! let space = extract(&g, root, &ConditionPath::root()).unwrap();
//!
//! // "lr_adam" only exists on the optimizer = 1 branch.
//! let entry = space.get("lr_adam").unwrap();
//! let path = entry.conditions().iter().next().unwrap();
//! assert_eq!(path.last(), Some(&Condition::eq("optimizer", 1)));
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`ExprGraph`](graph::ExprGraph) | Arena holding the sampling-expression DAG; nodes addressed by [`ExprId`](graph::ExprId). |
//! | [`Condition`](condition::Condition) | One equality constraint gating a branch (`name = value`). |
//! | [`ConditionPath`](condition::ConditionPath) | Ordered AND-conjunction of conditions from root to a node. |
//! | [`ConfigSpace`] | The extraction result: label → defining node + OR-set of condition paths. |
//! | [`extract`] | The single traversal that builds a [`ConfigSpace`]. |
//!
//! # Conditional structure
//!
//! Each switch option `i` extends the current path with `index = i`, so
//! hyperparameters exclusive to sibling options never share a condition
//! suffix. A label reachable along several paths accumulates all of them;
//! a label redefined by a *different* node aborts extraction with
//! [`Error::DuplicateLabel`].
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on graphs, conditions, and spaces | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) during extraction | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod condition;
pub mod distribution;
mod error;
mod extract;
pub mod graph;

pub use condition::{Condition, ConditionPath};
pub use distribution::Distribution;
pub use error::{Error, Result};
pub use extract::{extract, ConfigSpace, ParamEntry};
pub use graph::{Expr, ExprGraph, ExprId};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use configspace::prelude::*;
/// ```
pub mod prelude {
    pub use crate::condition::{Condition, ConditionPath};
    pub use crate::distribution::Distribution;
    pub use crate::error::{Error, Result};
    pub use crate::extract::{extract, ConfigSpace, ParamEntry};
    pub use crate::graph::{Expr, ExprGraph, ExprId};
}
