//! Validated input functions and their encoding into single-minterm implicants.

use crate::*;
use bit_set::BitSet;
use std::collections::BTreeSet;

/// Largest supported number of variables.
pub const MAX_VARIABLES: usize = 16;

/// An incompletely specified Boolean function given by its truth table.
///
/// The function is true on its minterms, unconstrained on its don't-cares and false elsewhere.
/// Both lists are validated, sorted and free of duplicates.
///
/// ```
/// use qmkit::{Function, QmError};
///
/// let f = Function::new(3, &[5, 1, 7], &[3])?;
/// assert_eq!(f.minterms(), &[1, 5, 7]);
/// assert_eq!(f.dont_cares(), &[3]);
///
/// assert_eq!(Function::new(2, &[1, 4], &[]), Err(QmError::InvalidIndex { index: 4, variables: 2 }));
/// assert_eq!(Function::new(2, &[1, 2], &[2]), Err(QmError::OverlappingSets(vec![2])));
/// # Ok::<(), QmError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    variables: usize,
    minterms: Vec<usize>,
    dont_cares: Vec<usize>,
}

/// The initial implicants of a function: one per minterm and one per don't-care.
#[derive(Clone, Debug, Default)]
pub struct EncodedTerms {
    pub minterms: ImplicantSet,
    pub dont_cares: ImplicantSet,
}

impl Function {
    /// Define a function from its true minterms and don't-cares.
    pub fn new(
        variables: usize,
        minterms: &[usize],
        dont_cares: &[usize],
    ) -> Result<Self, QmError> {
        check_variables(variables)?;
        let minterms = collect_indices(variables, minterms)?;
        let dont_cares = collect_indices(variables, dont_cares)?;
        if minterms.is_empty() && dont_cares.is_empty() {
            return Err(QmError::EmptyInput);
        }
        check_disjoint(&minterms, &dont_cares)?;

        Ok(Self {
            variables,
            minterms: minterms.into_iter().collect(),
            dont_cares: dont_cares.into_iter().collect(),
        })
    }

    /// Define a function from its false maxterms and don't-cares.
    ///
    /// All other indices of the domain are true minterms.
    pub fn from_maxterms(
        variables: usize,
        maxterms: &[usize],
        dont_cares: &[usize],
    ) -> Result<Self, QmError> {
        check_variables(variables)?;
        let maxterms = collect_indices(variables, maxterms)?;
        let dont_cares = collect_indices(variables, dont_cares)?;
        if maxterms.is_empty() && dont_cares.is_empty() {
            return Err(QmError::EmptyInput);
        }
        check_disjoint(&maxterms, &dont_cares)?;

        let minterms = (0..tools::domain_size(variables))
            .filter(|idx| !maxterms.contains(idx) && !dont_cares.contains(idx))
            .collect();
        Ok(Self {
            variables,
            minterms,
            dont_cares: dont_cares.into_iter().collect(),
        })
    }

    /// Number of variables
    pub fn variables(&self) -> usize {
        self.variables
    }

    /// The sorted list of true minterms
    pub fn minterms(&self) -> &[usize] {
        &self.minterms
    }

    /// The sorted list of don't-cares
    pub fn dont_cares(&self) -> &[usize] {
        &self.dont_cares
    }

    /// The sorted list of false indices
    pub fn maxterms(&self) -> Vec<usize> {
        (0..tools::domain_size(self.variables))
            .filter(|idx| self.is_zero(*idx))
            .collect()
    }

    pub fn is_minterm(&self, index: usize) -> bool {
        self.minterms.binary_search(&index).is_ok()
    }

    pub fn is_dont_care(&self, index: usize) -> bool {
        self.dont_cares.binary_search(&index).is_ok()
    }

    /// Test if the function is false for this index
    pub fn is_zero(&self, index: usize) -> bool {
        !self.is_minterm(index) && !self.is_dont_care(index)
    }

    /// Test if the function is true on the whole domain
    pub fn is_tautology(&self) -> bool {
        self.minterms.len() == tools::domain_size(self.variables)
    }

    /// The set of don't-care indices
    pub fn dont_care_set(&self) -> BitSet {
        self.dont_cares.iter().copied().collect()
    }

    /// The set of all indices given as input (minterms and don't-cares)
    pub fn input_set(&self) -> BitSet {
        self.minterms.iter().chain(&self.dont_cares).copied().collect()
    }

    /// Create the single-index implicants, in ascending index order
    pub fn encode(&self) -> EncodedTerms {
        let width = self.variables;
        EncodedTerms {
            minterms: self.minterms.iter().map(|idx| Implicant::from_index(*idx, width)).collect(),
            dont_cares: self.dont_cares.iter().map(|idx| Implicant::from_index(*idx, width)).collect(),
        }
    }
}

fn check_variables(variables: usize) -> Result<(), QmError> {
    match variables {
        1..=MAX_VARIABLES => Ok(()),
        _ => Err(QmError::InvalidVariableCount(variables)),
    }
}

fn collect_indices(variables: usize, indices: &[usize]) -> Result<BTreeSet<usize>, QmError> {
    let size = tools::domain_size(variables);
    indices
        .iter()
        .map(|&index| match index < size {
            true => Ok(index),
            false => Err(QmError::InvalidIndex { index, variables }),
        })
        .collect()
}

fn check_disjoint(first: &BTreeSet<usize>, second: &BTreeSet<usize>) -> Result<(), QmError> {
    let shared: Vec<usize> = first.intersection(second).copied().collect();
    match shared.is_empty() {
        true => Ok(()),
        false => Err(QmError::OverlappingSets(shared)),
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn validation() {
        assert_eq!(Function::new(2, &[], &[]), Err(QmError::EmptyInput));
        assert_eq!(
            Function::new(4, &[3, 16], &[]),
            Err(QmError::InvalidIndex { index: 16, variables: 4 })
        );
        assert_eq!(
            Function::new(4, &[3], &[20]),
            Err(QmError::InvalidIndex { index: 20, variables: 4 })
        );
        assert_eq!(
            Function::new(3, &[1, 2, 5], &[5, 0, 2]),
            Err(QmError::OverlappingSets(vec![2, 5]))
        );
        assert_eq!(Function::new(0, &[0], &[]), Err(QmError::InvalidVariableCount(0)));
        assert_eq!(Function::new(17, &[0], &[]), Err(QmError::InvalidVariableCount(17)));
    }

    #[test]
    fn duplicates_are_collapsed() -> Result<(), QmError> {
        let f = Function::new(3, &[4, 1, 4, 1], &[])?;
        assert_eq!(f.minterms(), &[1, 4]);
        assert!(f.dont_cares().is_empty());
        assert_eq!(f.maxterms(), vec![0, 2, 3, 5, 6, 7]);
        Ok(())
    }

    #[test]
    fn maxterms() -> Result<(), QmError> {
        let f = Function::from_maxterms(3, &[0, 7], &[3])?;
        assert_eq!(f.minterms(), &[1, 2, 4, 5, 6]);
        assert_eq!(f.dont_cares(), &[3]);
        assert_eq!(f.maxterms(), vec![0, 7]);

        assert_eq!(Function::from_maxterms(3, &[], &[]), Err(QmError::EmptyInput));
        assert_eq!(
            Function::from_maxterms(3, &[1], &[1]),
            Err(QmError::OverlappingSets(vec![1]))
        );
        Ok(())
    }

    #[test]
    fn encoding() -> Result<(), QmError> {
        let f = Function::new(3, &[5, 0], &[6])?;
        let encoded = f.encode();
        let terms: Vec<String> = encoded.minterms.iter().map(|i| i.term().to_string()).collect();
        assert_eq!(terms, vec!["000", "101"]);
        assert_eq!(encoded.dont_cares[0].term().to_string(), "110");
        assert!(encoded.minterms.iter().all(|i| i.sources().len() == 1));
        assert!(f.is_dont_care(6));
        assert!(f.is_zero(7));
        Ok(())
    }
}
