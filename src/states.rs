use crate::variable::Iter;
use crate::*;
use std::fmt;
use std::iter::FromIterator;

/// A state defined by the set of active variables, the others are implicitly inactive.
///
/// A state is an assignment of all variables, it corresponds to a single row of the truth table.
/// It can be decoded from a minterm index, where variable 0 is the most significant bit.
///
/// ```
/// use qmkit::{State, Variable};
///
/// // 0b110 with three variables: A and B are active, C is not
/// let state = State::from_index(6, 3);
///
/// assert!(state.is_active(Variable::from(0)));
/// assert!(state.is_active(Variable::from(1)));
/// assert!(!state.is_active(Variable::from(2)));
/// assert_eq!(state.to_index(3), 6);
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct State {
    pub(crate) active: VarSet,
}

impl State {
    /// Decode a minterm index into a state of the given width
    pub fn from_index(index: usize, width: usize) -> Self {
        (0..width)
            .filter(|pos| index & (1 << (width - 1 - pos)) != 0)
            .map(Variable::from)
            .collect()
    }

    /// Encode this state into a minterm index, ignoring active variables beyond the width
    pub fn to_index(&self, width: usize) -> usize {
        self.active
            .iter()
            .filter(|v| v.uid() < width)
            .fold(0, |index, v| index | (1 << (width - 1 - v.uid())))
    }

    /// Test if a specific variable is active in this state
    pub fn is_active(&self, var: Variable) -> bool {
        self.active.contains(var)
    }

    pub fn active(&self) -> &VarSet {
        &self.active
    }

    /// Iterate over the set of active variables
    pub fn iter_active(&self) -> Iter<'_> {
        self.active.iter()
    }
}

impl From<VarSet> for State {
    fn from(active: VarSet) -> Self {
        Self { active }
    }
}

impl FromIterator<Variable> for State {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        Self::from(VarSet::from_iter(iter))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut pos = 0;
        for v in &self.active {
            while pos < v.uid() {
                write!(f, "0")?;
                pos += 1;
            }
            write!(f, "1")?;
            pos += 1;
        }
        write!(f, "")
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn index_conversion() {
        for width in 1..6 {
            for index in 0..(1 << width) {
                assert_eq!(State::from_index(index, width).to_index(width), index);
            }
        }
        let state = State::from_index(0b0101, 4);
        assert_eq!(format!("{}", state), "0101");
        assert_eq!(state.iter_active().count(), 2);
    }
}
