//! Path conditions: the equality constraints under which a hyperparameter
//! is active, and ordered conjunctions of them.

use smallvec::SmallVec;

/// An atomic path constraint on a categorical variable.
///
/// Two conditions are equal iff their variant, name, and value all match,
/// and they hash consistently with that, so conditions can key sets and
/// maps directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    /// The sentinel "always true" marker, conventionally used to seed the
    /// root of a traversal.
    Always,
    /// The categorical variable `name` must equal `value` for the path to
    /// be active. Equality is the only supported comparison.
    Eq {
        /// Name of the constrained categorical variable.
        name: String,
        /// Required value, as an option position.
        value: usize,
    },
}

impl Condition {
    /// Creates an equality constraint `name = value`.
    #[must_use]
    pub fn eq(name: impl Into<String>, value: usize) -> Self {
        Self::Eq {
            name: name.into(),
            value,
        }
    }
}

impl core::fmt::Display for Condition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Always => write!(f, "true"),
            Self::Eq { name, value } => write!(f, "{name} = {value}"),
        }
    }
}

/// An ordered conjunction (AND) of [`Condition`]s accumulated while
/// descending from the graph root to a node.
///
/// Paths are immutable: descending one branch of a switch produces a new
/// path via [`extended`](ConditionPath::extended) rather than mutating the
/// current one. Equality and hashing are structural and order-sensitive,
/// so paths can be stored in hash sets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionPath(SmallVec<[Condition; 4]>);

impl ConditionPath {
    /// The conventional seed path: a single [`Condition::Always`].
    #[must_use]
    pub fn root() -> Self {
        Self(SmallVec::from_elem(Condition::Always, 1))
    }

    /// Creates a path from an ordered sequence of conditions.
    pub fn new(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self(conditions.into_iter().collect())
    }

    /// Returns a new path with `condition` appended.
    #[must_use]
    pub fn extended(&self, condition: Condition) -> Self {
        let mut conditions = self.0.clone();
        conditions.push(condition);
        Self(conditions)
    }

    /// Returns the conditions in path order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.0
    }

    /// Returns the most recently appended condition, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Condition> {
        self.0.last()
    }

    /// Returns the number of conditions on this path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path carries no conditions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for ConditionPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, condition) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn conditions_compare_by_value() {
        assert_eq!(Condition::eq("a", 0), Condition::eq("a", 0));
        assert_ne!(Condition::eq("a", 0), Condition::eq("a", 1));
        assert_ne!(Condition::eq("a", 0), Condition::eq("b", 0));
        assert_ne!(Condition::eq("a", 0), Condition::Always);
    }

    #[test]
    fn extended_leaves_the_original_untouched() {
        let root = ConditionPath::root();
        let branch = root.extended(Condition::eq("a", 1));
        assert_eq!(root.len(), 1);
        assert_eq!(branch.len(), 2);
        assert_eq!(branch.last(), Some(&Condition::eq("a", 1)));
    }

    #[test]
    fn equal_paths_collapse_in_a_hash_set() {
        let a = ConditionPath::root().extended(Condition::eq("a", 0));
        let b = ConditionPath::root().extended(Condition::eq("a", 0));
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn path_order_is_significant() {
        let ab = ConditionPath::new([Condition::eq("a", 0), Condition::eq("b", 0)]);
        let ba = ConditionPath::new([Condition::eq("b", 0), Condition::eq("a", 0)]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn display_joins_with_and() {
        let path = ConditionPath::root()
            .extended(Condition::eq("a", 1))
            .extended(Condition::eq("d", 0));
        assert_eq!(path.to_string(), "true AND a = 1 AND d = 0");
    }
}
