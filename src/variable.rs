//! Boolean variables, identified by their position in a term

use crate::*;

use bit_set::BitSet;
use std::fmt;
use std::iter::FromIterator;

/// A single Boolean variable, identified by its position.
///
/// Position 0 is the most significant bit of a minterm index: with four variables,
/// the index `0b1000` sets variable 0 (displayed as `A` by default) and clears the others.
#[derive(Clone, Copy, Default, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Variable(pub(crate) usize);

impl Variable {
    /// Return the position of this variable
    pub fn uid(&self) -> usize {
        self.0
    }
}

impl From<usize> for Variable {
    fn from(uid: usize) -> Self {
        Self(uid)
    }
}

impl Rule for Variable {
    fn fmt_rule(&self, f: &mut fmt::Formatter, namer: &VarSpace) -> fmt::Result {
        namer.format_variable(f, *self)
    }

    fn eval(&self, state: &State) -> bool {
        state.is_active(*self)
    }

    fn collect_support(&self, support: &mut VarSet) {
        support.insert(*self);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", space::default_name(self.0))
    }
}

/// A set of selected variables with efficient bitwise operations.
///
/// A VarSet is an abstraction over [BitSet], providing a similar API.
///
/// ```
/// use qmkit::{Variable, VarSet};
///
/// let mut vs = VarSet::default();
/// vs.insert(Variable::from(1));
/// vs.insert(Variable::from(3));
/// vs.remove(Variable::from(3));
///
/// # assert!(!vs.contains(Variable::from(0)));
/// # assert!( vs.contains(Variable::from(1)));
/// # assert!(!vs.contains(Variable::from(3)));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct VarSet {
    pub variables: BitSet,
}

impl VarSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an iterator over the contained variables
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Add the given variable
    pub fn insert(&mut self, var: Variable) {
        self.variables.insert(var.uid());
    }

    /// Remove the given variable
    pub fn remove(&mut self, var: Variable) {
        self.variables.remove(var.uid());
    }

    /// Test if a specific variable is selected
    pub fn contains(&self, var: Variable) -> bool {
        self.variables.contains(var.uid())
    }

    /// Remove all variables from the other set
    pub fn difference_with(&mut self, vars: &Self) {
        self.variables.difference_with(&vars.variables);
    }

    /// Add all variables from the other set
    pub fn union_with(&mut self, vars: &Self) {
        self.variables.union_with(&vars.variables);
    }

    /// Return true if this set contains all variables of the other set
    pub fn contains_all(&self, other: &Self) -> bool {
        self.variables.is_superset(&other.variables)
    }

    /// Return true if the two sets have no common variable
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.variables.is_disjoint(&other.variables)
    }

    /// Return the number of variables in this set
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Return whether there are no selected variable in this set
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl From<BitSet> for VarSet {
    fn from(variables: BitSet) -> Self {
        Self { variables }
    }
}

impl From<VarSet> for BitSet {
    fn from(vs: VarSet) -> Self {
        vs.variables
    }
}

impl AsRef<BitSet> for VarSet {
    fn as_ref(&self) -> &BitSet {
        &self.variables
    }
}

impl FromIterator<Variable> for VarSet {
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut vs = VarSet::default();
        for v in iter {
            vs.insert(v);
        }
        vs
    }
}

impl Extend<Variable> for VarSet {
    fn extend<T: IntoIterator<Item = Variable>>(&mut self, iter: T) {
        for v in iter {
            self.insert(v);
        }
    }
}

/// Iterate over variables in a [VarSet]
pub struct Iter<'a>(bit_set::Iter<'a, u32>);

impl Iterator for Iter<'_> {
    type Item = Variable;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|uid| uid.into())
    }
}

impl<'a> IntoIterator for &'a VarSet {
    type Item = Variable;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.variables.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn set_operations() {
        let mut vs: VarSet = [0, 2, 5].iter().map(|v| Variable::from(*v)).collect();
        let other: VarSet = [2, 3].iter().map(|v| Variable::from(*v)).collect();

        assert_eq!(vs.len(), 3);
        assert!(!vs.is_disjoint(&other));

        vs.union_with(&other);
        assert_eq!(vs.len(), 4);
        assert!(vs.contains_all(&other));

        vs.difference_with(&other);
        assert_eq!(vs.iter().map(|v| v.uid()).collect::<Vec<_>>(), vec![0, 5]);
        assert!(vs.is_disjoint(&other));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Variable::from(0)), "A");
        assert_eq!(format!("{}", Variable::from(3)), "D");
    }
}
