use crate::{State, VarSet, VarSpace};
use std::fmt;

/// Common API for all Boolean rules.
///
/// This trait defines the API to evaluate and display Boolean rules
pub trait Rule {
    /// Display the rule using the selected helper
    fn fmt_rule(&self, f: &mut fmt::Formatter, namer: &VarSpace) -> fmt::Result;

    /// Evaluate the rule on the given state
    fn eval(&self, state: &State) -> bool;

    /// Add all variables used by the rule to the set of variables
    fn collect_support(&self, support: &mut VarSet);

    /// Construct the set of variables used by the rule
    fn get_support(&self) -> VarSet {
        let mut support = VarSet::default();
        self.collect_support(&mut support);
        support
    }

    /// Evaluate the rule on the state encoded by a minterm index
    fn eval_index(&self, index: usize, width: usize) -> bool {
        self.eval(&State::from_index(index, width))
    }
}
