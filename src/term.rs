use crate::*;

use std::fmt;
use std::str::FromStr;

/// A product term over a fixed number of variables, some of them eliminated.
///
/// It is defined as two sets (bit-sets) of variables fixed at `1` and at `0`, while the
/// other positions are free (eliminated by merging). The width is the total number of
/// variables of the function, so that free positions at the end of the term are preserved.
///
/// A Term is displayed as a string where the position defines the variable and the
/// character its value: `1` for active, `0` for inactive and `*` for free.
/// When parsing, `-` is accepted as an alias of `*` and spaces or `_` are ignored.
///
/// ```
/// use qmkit::Term;
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let t1: Term = "0101".parse()?;
/// let t2: Term = "0111".parse()?;
///
/// let merged = t1.merge_with(&t2).unwrap();
/// assert_eq!(format!("{}", merged), "01*1");
/// assert!(merged.contains_index(0b0101));
/// assert!(!merged.contains_index(0b1101));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Term {
    pub(crate) positive: VarSet,
    pub(crate) negative: VarSet,
    width: usize,
}

impl Term {
    /// Create a term from the two inner sets of fixed variables
    pub(crate) fn with(positive: VarSet, negative: VarSet, width: usize) -> Self {
        Self {
            positive,
            negative,
            width,
        }
    }

    /// The term where all positions are free, covering the whole domain
    pub fn universal(width: usize) -> Self {
        Self::with(VarSet::default(), VarSet::default(), width)
    }

    /// The term covering a single minterm, i.e. its binary representation
    pub fn from_index(index: usize, width: usize) -> Self {
        let mut term = Self::universal(width);
        for pos in 0..width {
            term.set(Variable(pos), index & (1 << (width - 1 - pos)) != 0);
        }
        term
    }

    /// Number of variables, free or fixed
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of positions fixed at 1
    pub fn weight(&self) -> usize {
        self.positive.len()
    }

    /// Number of fixed positions, i.e. of literals in the product
    pub fn literal_count(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    /// Number of free (`*`) positions
    pub fn free_count(&self) -> usize {
        self.width - self.literal_count()
    }

    /// Test if all positions are free
    pub fn is_universal(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// The value of a fixed position, None if it is free
    pub fn value(&self, var: Variable) -> Option<bool> {
        if self.positive.contains(var) {
            Some(true)
        } else if self.negative.contains(var) {
            Some(false)
        } else {
            None
        }
    }

    /// Iterate over the fixed positions in variable order
    pub fn iter_fixed_values(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        (0..self.width)
            .map(Variable)
            .filter_map(move |var| self.value(var).map(|val| (var, val)))
    }

    /// Fix a variable to a specific value.
    ///
    /// If it was fixed to the opposite value, the existing restriction is replaced.
    pub fn set(&mut self, var: Variable, value: bool) {
        if value {
            self.negative.remove(var);
            self.positive.insert(var);
        } else {
            self.positive.remove(var);
            self.negative.insert(var);
        }
    }

    /// Remove all constraints on a given variable.
    pub fn free_variable(&mut self, var: Variable) {
        self.positive.remove(var);
        self.negative.remove(var);
    }

    /// Test if the two terms have the same free positions
    pub fn same_free_positions(&self, other: &Self) -> bool {
        let mut fixed = self.positive.clone();
        fixed.union_with(&self.negative);
        let mut other_fixed = other.positive.clone();
        other_fixed.union_with(&other.negative);
        fixed == other_fixed
    }

    /// Combine two terms differing in exactly one position.
    ///
    /// The two terms must have the same width and the same free positions, and a single
    /// fixed position with opposite values. This position becomes free in the merged term,
    /// which then covers exactly the minterms of both terms.
    pub fn merge_with(&self, other: &Self) -> Option<Self> {
        if self.width != other.width || !self.same_free_positions(other) {
            return None;
        }

        // With identical fixed positions, the conflicts are given by the difference of the positive sets
        let mut conflicts = self.positive.variables.symmetric_difference(&other.positive.variables);
        let uid = conflicts.next()?;
        if conflicts.next().is_some() {
            return None;
        }

        let mut merged = self.clone();
        merged.free_variable(Variable(uid));
        Some(merged)
    }

    /// Check if a minterm index is covered by this term
    pub fn contains_index(&self, index: usize) -> bool {
        self.iter_fixed_values()
            .all(|(var, val)| (index & (1 << (self.width - 1 - var.uid())) != 0) == val)
    }

    /// Check if a state is covered by this term
    pub fn contains_state(&self, state: &State) -> bool {
        state.active.contains_all(&self.positive) && state.active.is_disjoint(&self.negative)
    }

    /// Test if this term contains the given term.
    pub fn contains(&self, t: &Term) -> bool {
        t.positive.contains_all(&self.positive) && t.negative.contains_all(&self.negative)
    }

    /// Enumerate all minterm indices covered by this term, in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..(1usize << self.width)).filter(move |idx| self.contains_index(*idx))
    }
}

impl FromStr for Term {
    type Err = QmError;

    fn from_str(descr: &str) -> Result<Term, QmError> {
        let mut t = Term::default();
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '_' => (), // skip spacing for formatting
                '*' | '-' => t.width += 1,
                '0' | '1' => {
                    t.set(Variable(t.width), c == '1');
                    t.width += 1;
                }
                _ => return Err(QmError::InvalidTerm(descr.into())),
            };
        }
        Ok(t)
    }
}

impl Rule for Term {
    fn fmt_rule(&self, f: &mut fmt::Formatter, namer: &VarSpace) -> fmt::Result {
        let mut w = efmt::SopWriter::new(f, namer, &efmt::DEFAULT_FMT_CFG);
        w.write_term(self)
    }

    fn eval(&self, state: &State) -> bool {
        self.contains_state(state)
    }

    fn collect_support(&self, support: &mut VarSet) {
        support.union_with(&self.positive);
        support.union_with(&self.negative);
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = (0..self.width)
            .map(|pos| match self.value(Variable(pos)) {
                Some(true) => '1',
                Some(false) => '0',
                None => '*',
            })
            .collect();
        write!(f, "{}", &s)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn construct_and_display() -> Result<(), QmError> {
        let t: Term = "-0*01 1".parse()?;
        assert_eq!(format!("{}", t), "*0*011");
        assert_eq!(t.width(), 6);
        assert_eq!(t.weight(), 2);
        assert_eq!(t.literal_count(), 4);
        assert_eq!(t.free_count(), 2);

        assert_eq!(format!("{}", Term::from_index(5, 4)), "0101");
        assert_eq!(format!("{}", Term::universal(3)), "***");
        assert!("01x".parse::<Term>().is_err());
        Ok(())
    }

    #[test]
    fn merge() -> Result<(), QmError> {
        let t1: Term = "0*01".parse()?;
        let t2: Term = "0*11".parse()?;
        let t3: Term = "1*10".parse()?;
        let t4: Term = "00*1".parse()?;

        assert_eq!(format!("{}", t1.merge_with(&t2).unwrap()), "0**1");
        // two differences
        assert!(t1.merge_with(&t3).is_none());
        // different free positions
        assert!(t1.merge_with(&t4).is_none());
        // identical terms
        assert!(t1.merge_with(&t1).is_none());
        Ok(())
    }

    #[test]
    fn covered_indices() -> Result<(), QmError> {
        let t: Term = "*1*0".parse()?;
        assert_eq!(t.indices().collect::<Vec<_>>(), vec![4, 6, 12, 14]);
        for idx in 0..16 {
            assert_eq!(t.contains_index(idx), t.contains_state(&State::from_index(idx, 4)));
        }

        let wide: Term = "**10".parse()?;
        assert!(!wide.contains(&t));
        assert!(t.contains(&"0110".parse()?));
        assert!(Term::universal(4).contains(&t));
        Ok(())
    }
}
