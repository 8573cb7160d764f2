use crate::*;

use bit_set::BitSet;
use delegate::delegate;
use itertools::Itertools;
use log::debug;
use std::ops::Index;
use std::slice::Iter;
use std::vec::IntoIter;

/// The canonical list of prime implicants of a function.
///
/// This is a special case of [ImplicantSet].
/// An implicant is "prime" if it could not be merged with any other implicant.
/// The list only retains the primes which are useful to cover the true minterms:
/// primes covering only don't-cares and primes shadowed by another prime are removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Primes {
    implicants: ImplicantSet,
}

impl Primes {
    /// Extract the canonical primes from the candidates produced by the merge rounds.
    ///
    /// 1) remove duplicated terms
    /// 2) remove the primes covering only don't-cares
    /// 3) remove the primes whose sources are contained in the sources of another prime
    ///    (for identical sources, the first one is kept)
    pub fn extract(candidates: ImplicantSet, dont_cares: &BitSet) -> Self {
        let total = candidates.len();
        let relevant: Vec<Implicant> = candidates
            .into_iter()
            .unique_by(|i| i.term().clone())
            .filter(|i| !i.sources().is_subset(dont_cares))
            .collect();

        let implicants: ImplicantSet = relevant
            .iter()
            .enumerate()
            .filter(|(idx, i)| !is_shadowed(*idx, i, &relevant))
            .map(|(_, i)| Implicant::clone(i))
            .collect();

        debug!("{} prime implicants out of {} candidates", implicants.len(), total);
        Self { implicants }
    }

    delegate! {
        to self.implicants {
            /// Get the number of prime implicants
            pub fn len(&self) -> usize;
            /// Return whether there are no prime implicant (the function is always false)
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> Iter<'_, Implicant>;
            /// Test if a prime with the given term is part of the list
            pub fn contains_term(&self, term: &Term) -> bool;
        }
    }
}

fn is_shadowed(idx: usize, implicant: &Implicant, all: &[Implicant]) -> bool {
    all.iter().enumerate().any(|(other_idx, other)| {
        other_idx != idx
            && implicant.sources().is_subset(other.sources())
            && (other_idx < idx || implicant.sources() != other.sources())
    })
}

impl From<Implicant> for Primes {
    fn from(implicant: Implicant) -> Self {
        Self {
            implicants: [implicant].into_iter().collect(),
        }
    }
}

impl Index<usize> for Primes {
    type Output = Implicant;

    fn index(&self, idx: usize) -> &Implicant {
        &self.implicants[idx]
    }
}

impl<'a> IntoIterator for &'a Primes {
    type Item = &'a Implicant;
    type IntoIter = Iter<'a, Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.iter()
    }
}

impl IntoIterator for Primes {
    type Item = Implicant;
    type IntoIter = IntoIter<Implicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.implicants.into_iter()
    }
}

impl Rule for Primes {
    fn fmt_rule(&self, f: &mut fmt::Formatter, namer: &VarSpace) -> fmt::Result {
        self.implicants.fmt_rule(f, namer)
    }

    fn eval(&self, state: &State) -> bool {
        self.implicants.eval(state)
    }

    fn collect_support(&self, support: &mut VarSet) {
        self.implicants.collect_support(support);
    }
}

// delegate Display impl to the implicant set
impl fmt::Display for Primes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.implicants, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use bit_set::BitSet;

    fn implicant(descr: &str, sources: &[usize]) -> Implicant {
        Implicant::with(descr.parse().unwrap(), sources.iter().copied().collect())
    }

    #[test]
    fn extract() {
        let dont_cares: BitSet = [6, 7].iter().copied().collect();
        let candidates: ImplicantSet = [
            implicant("00*", &[0, 1]),
            implicant("11*", &[6, 7]),
            implicant("00*", &[0, 1]),
            implicant("0*1", &[1, 3]),
        ]
        .into_iter()
        .collect();

        let primes = Primes::extract(candidates, &dont_cares);
        let terms: Vec<String> = primes.iter().map(|i| i.term().to_string()).collect();
        assert_eq!(terms, vec!["00*", "0*1"]);
        assert!(primes.contains_term(&"0*1".parse().unwrap()));
        assert!(!primes.contains_term(&"11*".parse().unwrap()));
    }

    #[test]
    fn shadowed_primes_are_removed() {
        let candidates: ImplicantSet = [
            Implicant::from_index(5, 3),
            implicant("1*1", &[5, 7]),
            implicant("**1", &[1, 3, 5, 7]),
        ]
        .into_iter()
        .collect();

        let primes = Primes::extract(candidates, &BitSet::default());
        assert_eq!(primes.len(), 1);
        assert_eq!(primes[0].term().to_string(), "**1");
    }
}
