//! Implicants carrying their provenance, and lists of implicants.

use crate::*;
use bit_set::BitSet;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;
use std::vec::IntoIter;

/// A term together with the set of original indices it subsumes.
///
/// The source set of a well-formed implicant contains exactly the `2^k` indices
/// matching its term, where `k` is the number of free positions.
/// The merge flag is only used while building prime implicants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Implicant {
    term: Term,
    sources: BitSet,
    pub(crate) merged: bool,
}

impl Implicant {
    #[cfg(test)]
    pub(crate) fn with(term: Term, sources: BitSet) -> Self {
        Self {
            term,
            sources,
            merged: false,
        }
    }

    /// The implicant for a single minterm or don't-care index
    pub fn from_index(index: usize, width: usize) -> Self {
        let mut sources = BitSet::default();
        sources.insert(index);
        Self {
            term: Term::from_index(index, width),
            sources,
            merged: false,
        }
    }

    /// The implicant covering all indices of the domain
    pub fn universal(width: usize) -> Self {
        Self {
            term: Term::universal(width),
            sources: (0..(1usize << width)).collect(),
            merged: false,
        }
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn sources(&self) -> &BitSet {
        &self.sources
    }

    /// Iterate over the source indices in ascending order
    pub fn iter_sources(&self) -> impl Iterator<Item = usize> + '_ {
        self.sources.iter()
    }

    /// Test if an index is part of the sources
    pub fn covers(&self, index: usize) -> bool {
        self.sources.contains(index)
    }

    /// Combine two implicants whose terms differ in exactly one position.
    ///
    /// The merged implicant subsumes the sources of both. Merge flags are left untouched.
    pub fn merge_with(&self, other: &Self) -> Option<Self> {
        let term = self.term.merge_with(&other.term)?;
        let mut sources = self.sources.clone();
        sources.union_with(&other.sources);
        Some(Self {
            term,
            sources,
            merged: false,
        })
    }

    /// Check that the sources are exactly the indices matched by the term
    pub fn is_consistent(&self) -> bool {
        self.sources.len() == 1 << self.term.free_count()
            && self.sources.iter().all(|idx| self.term.contains_index(idx))
    }
}

impl Rule for Implicant {
    fn fmt_rule(&self, f: &mut fmt::Formatter, namer: &VarSpace) -> fmt::Result {
        self.term.fmt_rule(f, namer)
    }

    fn eval(&self, state: &State) -> bool {
        self.term.eval(state)
    }

    fn collect_support(&self, support: &mut VarSet) {
        self.term.collect_support(support)
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.term)?;
        for (i, idx) in self.sources.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, ")")
    }
}

/// Boolean function represented as an ordered list of implicants.
///
/// The function is true in all states covered by at least one implicant of the list.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ImplicantSet {
    implicants: Vec<Implicant>,
}

impl ImplicantSet {
    pub fn iter(&self) -> Iter<'_, Implicant> {
        self.implicants.iter()
    }

    /// Add an implicant at the end of the list
    pub fn push(&mut self, implicant: Implicant) {
        self.implicants.push(implicant);
    }

    /// Test if an implicant with the given term is part of the list
    pub fn contains_term(&self, term: &Term) -> bool {
        self.iter().any(|i| i.term() == term)
    }

    /// Collect the sources of all implicants
    pub fn covered(&self) -> BitSet {
        self.iter().fold(BitSet::default(), |mut covered, i| {
            covered.union_with(i.sources());
            covered
        })
    }

    /// Get the number of implicants in this list
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    /// Return whether there are no implicant (the rule is always false)
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }
}

impl Index<usize> for ImplicantSet {
    type Output = Implicant;

    fn index(&self, idx: usize) -> &Implicant {
        &self.implicants[idx]
    }
}

impl FromIterator<Implicant> for ImplicantSet {
    fn from_iter<I: IntoIterator<Item = Implicant>>(iter: I) -> Self {
        Self {
            implicants: iter.into_iter().collect(),
        }
    }
}

impl Extend<Implicant> for ImplicantSet {
    fn extend<T: IntoIterator<Item = Implicant>>(&mut self, iter: T) {
        self.implicants.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ImplicantSet {
    type Item = &'a Implicant;
    type IntoIter = Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.iter()
    }
}

impl IntoIterator for ImplicantSet {
    type Item = Implicant;
    type IntoIter = IntoIter<Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.into_iter()
    }
}

impl Rule for ImplicantSet {
    fn fmt_rule(&self, f: &mut fmt::Formatter, namer: &VarSpace) -> fmt::Result {
        let mut w = efmt::SopWriter::new(f, namer, &efmt::DEFAULT_FMT_CFG);
        w.write_sop(self.iter().map(|i| i.term()))
    }

    fn eval(&self, state: &State) -> bool {
        self.implicants.iter().any(|i| i.eval(state))
    }

    fn collect_support(&self, support: &mut VarSet) {
        for i in &self.implicants {
            i.collect_support(support);
        }
    }
}

impl fmt::Display for ImplicantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in &self.implicants {
            writeln!(f, "{}", i)?;
        }
        write!(f, "")
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn merge_sources() {
        let i1 = Implicant::from_index(0b0101, 4);
        let i2 = Implicant::from_index(0b0111, 4);
        let i3 = Implicant::from_index(0b1101, 4);
        assert!(i1.is_consistent());

        let m1 = i1.merge_with(&i2).unwrap();
        assert_eq!(format!("{}", m1), "01*1 (5,7)");
        assert!(m1.is_consistent());

        let m2 = i3.merge_with(&Implicant::from_index(0b1111, 4)).unwrap();
        let quad = m1.merge_with(&m2).unwrap();
        assert_eq!(format!("{}", quad), "*1*1 (5,7,13,15)");
        assert!(quad.is_consistent());

        assert!(m1.merge_with(&i3).is_none());
    }

    #[test]
    fn evaluate_list() {
        let set: ImplicantSet = [Implicant::from_index(1, 3), Implicant::from_index(6, 3)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.covered().iter().collect::<Vec<_>>(), vec![1, 6]);
        for idx in 0..8 {
            assert_eq!(set.eval_index(idx, 3), idx == 1 || idx == 6);
        }
        assert!(Implicant::universal(3).is_consistent());
    }
}
