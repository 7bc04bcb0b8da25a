//! Sampling distribution types referenced by expression graphs.

/// Distribution for floating-point hyperparameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatDistribution {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
    /// Whether to sample in log space.
    pub log_scale: bool,
}

/// Distribution for integer hyperparameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntDistribution {
    /// Lower bound (inclusive).
    pub low: i64,
    /// Upper bound (inclusive).
    pub high: i64,
}

/// Distribution for categorical hyperparameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoricalDistribution {
    /// Number of choices available.
    pub n_choices: usize,
}

/// Enum wrapping all sampling distribution types.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distribution {
    /// A floating-point distribution.
    Float(FloatDistribution),
    /// An integer distribution.
    Int(IntDistribution),
    /// A categorical distribution.
    Categorical(CategoricalDistribution),
}

impl Distribution {
    /// Uniform sampling over `[low, high]`.
    #[must_use]
    pub fn uniform(low: f64, high: f64) -> Self {
        Self::Float(FloatDistribution {
            low,
            high,
            log_scale: false,
        })
    }

    /// Log-uniform sampling over `[low, high]`.
    #[must_use]
    pub fn log_uniform(low: f64, high: f64) -> Self {
        Self::Float(FloatDistribution {
            low,
            high,
            log_scale: true,
        })
    }

    /// Uniform integer sampling over `0..n`, the conventional index form.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn randint(n: usize) -> Self {
        Self::Int(IntDistribution {
            low: 0,
            high: n.saturating_sub(1) as i64,
        })
    }

    /// Categorical sampling over `n_choices` alternatives.
    #[must_use]
    pub fn categorical(n_choices: usize) -> Self {
        Self::Categorical(CategoricalDistribution { n_choices })
    }

    /// Returns the number of distinct outcomes when this distribution can
    /// legally drive a switch, `None` otherwise.
    ///
    /// A switch index must enumerate option positions `0..N` exactly, so
    /// only categoricals and zero-based integer ranges qualify.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn index_arity(&self) -> Option<usize> {
        match self {
            Self::Categorical(d) => Some(d.n_choices),
            Self::Int(d) if d.low == 0 && d.high >= 0 => Some(d.high as usize + 1),
            _ => None,
        }
    }
}

impl core::fmt::Display for Distribution {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Float(d) if d.log_scale => write!(f, "loguniform({}, {})", d.low, d.high),
            Self::Float(d) => write!(f, "uniform({}, {})", d.low, d.high),
            Self::Int(d) => write!(f, "randint({}, {})", d.low, d.high + 1),
            Self::Categorical(d) => write!(f, "categorical({})", d.n_choices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn randint_arity_matches_outcome_count() {
        assert_eq!(Distribution::randint(10).index_arity(), Some(10));
        assert_eq!(Distribution::categorical(3).index_arity(), Some(3));
    }

    #[test]
    fn continuous_distributions_cannot_drive_a_switch() {
        assert_eq!(Distribution::uniform(-1.0, 1.0).index_arity(), None);
        assert_eq!(Distribution::log_uniform(0.0, 1.0).index_arity(), None);
    }

    #[test]
    fn non_zero_based_int_range_cannot_drive_a_switch() {
        let d = Distribution::Int(IntDistribution { low: 1, high: 5 });
        assert_eq!(d.index_arity(), None);
    }

    #[test]
    fn display_uses_constructor_names() {
        assert_eq!(Distribution::uniform(-1.0, 1.0).to_string(), "uniform(-1, 1)");
        assert_eq!(
            Distribution::log_uniform(0.0, 1.0).to_string(),
            "loguniform(0, 1)"
        );
        assert_eq!(Distribution::randint(10).to_string(), "randint(0, 10)");
    }
}
