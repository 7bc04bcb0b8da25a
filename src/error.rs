#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a label is bound to two structurally different defining
    /// nodes during one extraction.
    #[error("duplicate label '{label}': already defined by a different distribution node")]
    DuplicateLabel {
        /// The label that was redefined.
        label: String,
    },

    /// Returned when a switch's index input is not a hyperparameter reference.
    #[error("switch index must be a hyperparameter reference, found {found} node")]
    SwitchIndexNotParam {
        /// The kind of node found in the index position.
        found: &'static str,
    },

    /// Returned when a switch index's distribution cannot enumerate option
    /// positions (not categorical, or not a zero-based integer range).
    #[error("switch index '{label}' is not driven by a categorical distribution")]
    SwitchIndexNotCategorical {
        /// The label of the offending index hyperparameter.
        label: String,
    },

    /// Returned when a switch has no options to select from.
    #[error("switch on '{label}' has no options")]
    EmptySwitch {
        /// The label of the switch's index hyperparameter.
        label: String,
    },

    /// Returned when a switch index's outcome count does not match the
    /// number of options.
    #[error("switch on '{label}': index has {arity} outcomes but {options} options were given")]
    SwitchArityMismatch {
        /// The label of the switch's index hyperparameter.
        label: String,
        /// The number of outcomes the index distribution can produce.
        arity: usize,
        /// The number of option subgraphs attached to the switch.
        options: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
