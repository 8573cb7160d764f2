//! Quine-McCluskey merge rounds.
//!
//! Each round compares the implicants of the current generation two by two and combines the
//! pairs which differ in a single position. The implicants which could not be combined in
//! their round are the prime candidates. The loop stops when a round produces no new implicant,
//! which happens after at most `N` rounds since each round frees one more position.

use crate::*;
use itertools::iproduct;
use log::{debug, trace};
use slab::Slab;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

/// Result of the merge rounds
#[derive(Clone, Debug, Default)]
pub struct MergeOutcome {
    /// Implicants which were never combined, in round order
    pub candidates: ImplicantSet,
    /// Number of rounds, including the last one which produced no new implicant
    pub rounds: usize,
}

/// Combine implicants until no pair can be merged.
///
/// Implicants with the same term are only kept once. The optional cancellation flag is checked
/// at the start of each round.
///
/// ```
/// use qmkit::{merge_implicants, Implicant};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let initial = [0, 1, 2, 5].iter().map(|idx| Implicant::from_index(*idx, 3));
/// let outcome = merge_implicants(initial, None)?;
///
/// let primes: Vec<String> = outcome.candidates.iter().map(|i| i.term().to_string()).collect();
/// assert_eq!(primes, vec!["00*", "0*0", "*01"]);
/// # Ok(())
/// # }
/// ```
pub fn merge_implicants(
    initial: impl IntoIterator<Item = Implicant>,
    cancel: Option<&AtomicBool>,
) -> Result<MergeOutcome, QmError> {
    let mut arena: Slab<Implicant> = Slab::new();
    let mut seen = HashSet::new();
    let mut generation: Vec<usize> = initial
        .into_iter()
        .filter(|i| seen.insert(i.term().clone()))
        .map(|i| arena.insert(i))
        .collect();

    let mut outcome = MergeOutcome::default();
    while !generation.is_empty() {
        if cancel.map(|flag| flag.load(Ordering::Relaxed)).unwrap_or(false) {
            debug!("merge cancelled before round {}", outcome.rounds + 1);
            return Err(QmError::Cancelled {
                round: outcome.rounds + 1,
            });
        }
        outcome.rounds += 1;

        let next = merge_round(&mut arena, &generation);

        // Retire the current generation, keeping the implicants which were not merged
        let before = outcome.candidates.len();
        for key in generation {
            let implicant = arena.remove(key);
            if !implicant.merged {
                outcome.candidates.push(implicant);
            }
        }
        debug!(
            "round {}: {} new implicants, {} prime candidates",
            outcome.rounds,
            next.len(),
            outcome.candidates.len() - before
        );
        generation = next;
    }

    Ok(outcome)
}

/// Build the next generation, flagging the merged implicants of the current one
fn merge_round(arena: &mut Slab<Implicant>, generation: &[usize]) -> Vec<usize> {
    // Group by weight, preserving the generation order inside each group
    let mut by_weight: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for key in generation {
        by_weight
            .entry(arena[*key].term().weight())
            .or_default()
            .push(*key);
    }

    let mut seen = HashSet::new();
    let mut next = vec![];
    for (weight, lower) in &by_weight {
        let upper = match by_weight.get(&(weight + 1)) {
            None => continue,
            Some(upper) => upper,
        };
        for (&low, &high) in iproduct!(lower, upper) {
            let merged = match arena[low].merge_with(&arena[high]) {
                None => continue,
                Some(merged) => merged,
            };
            trace!("merge {} + {} => {}", arena[low], arena[high], merged.term());
            arena[low].merged = true;
            arena[high].merged = true;
            if seen.insert(merged.term().clone()) {
                next.push(arena.insert(merged));
            }
        }
    }
    next
}
