//! Selection of the prime implicants covering the true minterms.

use crate::*;
use log::debug;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// How the minterms left uncovered by the essential primes are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoverStrategy {
    /// Repeatedly pick the prime covering the most remaining minterms,
    /// then drop the picks made redundant by later ones.
    #[default]
    Greedy,

    /// Search for the smallest set of primes (then the fewest literals) covering the remaining minterms.
    Exact,
}

/// The prime implicant chart: for each true minterm, the primes covering it.
///
/// Don't-cares are never part of the chart, they can not make a prime essential.
#[derive(Clone, Debug, Default)]
pub struct Chart {
    rows: BTreeMap<usize, Vec<usize>>,
}

/// The selected primes, given by their position in the list of primes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    /// Essential primes first, in discovery order, then the other picks
    pub selected: Vec<usize>,
    /// Number of essential primes at the start of the selection
    pub essential: usize,
}

impl Chart {
    pub fn new(primes: &Primes, minterms: &[usize]) -> Self {
        let rows = minterms
            .iter()
            .map(|m| {
                let coverers = primes
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.covers(*m))
                    .map(|(pos, _)| pos)
                    .collect();
                (*m, coverers)
            })
            .collect();
        Self { rows }
    }

    /// Number of uncovered minterms
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Return whether all minterms are covered
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The primes covering an uncovered minterm
    pub fn coverers(&self, minterm: usize) -> Option<&[usize]> {
        self.rows.get(&minterm).map(|c| c.as_slice())
    }

    /// Iterate over the uncovered minterms, in ascending order
    pub fn minterms(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.keys().copied()
    }

    /// Remove all the minterms covered by a prime
    pub fn remove_covered_by(&mut self, prime: &Implicant) {
        self.rows.retain(|m, _| !prime.covers(*m));
    }

    /// The primes which are the single coverer of at least one minterm, in minterm order
    fn single_coverers(&self) -> Vec<usize> {
        self.rows
            .values()
            .filter(|coverers| coverers.len() == 1)
            .map(|coverers| coverers[0])
            .collect()
    }

    /// Count the uncovered minterms of a prime and find the smallest one
    fn coverage(&self, prime: &Implicant) -> Option<(usize, usize)> {
        let mut covered = self.minterms().filter(|m| prime.covers(*m));
        let first = covered.next()?;
        Some((covered.count() + 1, first))
    }
}

/// Select the primes covering all true minterms.
///
/// The essential primes are selected first, the remaining minterms are then covered
/// according to the strategy.
pub fn select_cover(primes: &Primes, minterms: &[usize], strategy: CoverStrategy) -> Cover {
    let mut chart = Chart::new(primes, minterms);
    let mut cover = Cover::default();

    loop {
        let mut found = false;
        for prime in chart.single_coverers() {
            if cover.selected.contains(&prime) {
                continue;
            }
            debug!("essential prime: {}", primes[prime]);
            cover.selected.push(prime);
            chart.remove_covered_by(&primes[prime]);
            found = true;
        }
        if !found || chart.is_empty() {
            break;
        }
    }
    cover.essential = cover.selected.len();
    debug!(
        "{} essential primes, {} minterms left to cover",
        cover.essential,
        chart.len()
    );

    match strategy {
        CoverStrategy::Greedy => greedy_cover(primes, minterms, &mut chart, &mut cover),
        CoverStrategy::Exact => exact_cover(primes, &chart, &mut cover),
    }
    cover
}

fn greedy_cover(primes: &Primes, minterms: &[usize], chart: &mut Chart, cover: &mut Cover) {
    while !chart.is_empty() {
        let best = (0..primes.len())
            .filter(|p| !cover.selected.contains(p))
            .filter_map(|p| chart.coverage(&primes[p]).map(|(count, first)| (p, count, first)))
            .min_by_key(|(p, count, first)| (Reverse(*count), *first, *p));

        let (prime, count, _) = match best {
            None => break,
            Some(best) => best,
        };
        debug!("greedy pick: {} covering {} minterms", primes[prime], count);
        cover.selected.push(prime);
        chart.remove_covered_by(&primes[prime]);
    }

    // Drop the picks whose minterms are all covered by the other selected primes
    let mut pos = cover.selected.len();
    while pos > cover.essential {
        pos -= 1;
        let candidate = cover.selected[pos];
        let redundant = minterms
            .iter()
            .filter(|m| primes[candidate].covers(**m))
            .all(|m| {
                cover
                    .selected
                    .iter()
                    .any(|other| *other != candidate && primes[*other].covers(*m))
            });
        if redundant {
            debug!("redundant pick: {}", primes[candidate]);
            cover.selected.remove(pos);
        }
    }
}

/// Cost of a set of primes: number of primes, then number of literals, then positions
type Cost = (usize, usize, Vec<usize>);

fn exact_cover(primes: &Primes, chart: &Chart, cover: &mut Cover) {
    let rows: Vec<(usize, &[usize])> = chart
        .minterms()
        .filter_map(|m| chart.coverers(m).map(|c| (m, c)))
        .collect();
    let mut best: Option<Cost> = None;
    let mut chosen = vec![];
    search_cover(primes, &rows, &mut chosen, &mut best);

    if let Some((count, literals, picks)) = best {
        debug!("exact cover: {} primes, {} literals", count, literals);
        cover.selected.extend(picks);
    }
}

/// Branch on the primes covering the first uncovered minterm
fn search_cover(
    primes: &Primes,
    rows: &[(usize, &[usize])],
    chosen: &mut Vec<usize>,
    best: &mut Option<Cost>,
) {
    let uncovered = rows
        .iter()
        .find(|(m, _)| !chosen.iter().any(|p| primes[*p].covers(*m)));

    let coverers = match uncovered {
        Some((_, coverers)) => *coverers,
        None => {
            let mut picks = chosen.clone();
            picks.sort_unstable();
            let literals: usize = picks.iter().map(|p| primes[*p].term().literal_count()).sum();
            let cost = (picks.len(), literals, picks);
            if best.as_ref().map(|b| cost < *b).unwrap_or(true) {
                *best = Some(cost);
            }
            return;
        }
    };

    // A larger set can not improve on the best solution
    if let Some((count, _, _)) = best {
        if chosen.len() >= *count {
            return;
        }
    }

    for prime in coverers {
        chosen.push(*prime);
        search_cover(primes, rows, chosen, best);
        chosen.pop();
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use bit_set::BitSet;
    use test_log::test;

    fn implicant(term: &str, sources: &[usize]) -> Result<Implicant, QmError> {
        Ok(Implicant::with(term.parse()?, sources.iter().copied().collect()))
    }

    fn primes_of(function: &Function) -> Result<Primes, QmError> {
        let encoded = function.encode();
        let outcome = merge_implicants(encoded.dont_cares.into_iter().chain(encoded.minterms), None)?;
        Ok(Primes::extract(outcome.candidates, &function.dont_care_set()))
    }

    fn selected_terms(primes: &Primes, cover: &Cover) -> Vec<String> {
        cover
            .selected
            .iter()
            .map(|p| primes[*p].term().to_string())
            .collect()
    }

    #[test]
    fn chart_ignores_dont_cares() -> Result<(), QmError> {
        let f = Function::new(3, &[0, 1], &[3])?;
        let primes = primes_of(&f)?;
        let chart = Chart::new(&primes, f.minterms());
        assert_eq!(chart.minterms().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(chart.coverers(3), None);
        Ok(())
    }

    #[test]
    fn essential_primes() -> Result<(), QmError> {
        // f = sum(4, 8, 10, 11, 12, 15) + d(9, 14)
        let f = Function::new(4, &[4, 8, 10, 11, 12, 15], &[9, 14])?;
        let primes = primes_of(&f)?;
        let cover = select_cover(&primes, f.minterms(), CoverStrategy::Greedy);

        // 4 and 15 have a single coverer, 8 is left to the greedy step (10** and 1**0 tie)
        assert_eq!(selected_terms(&primes, &cover), vec!["*100", "1*1*", "10**"]);
        assert_eq!(cover.essential, 2);
        Ok(())
    }

    #[test]
    fn cyclic_chart() -> Result<(), QmError> {
        // No essential prime: every minterm is covered by two primes
        let f = Function::new(3, &[0, 1, 2, 5, 6, 7], &[])?;
        let primes = primes_of(&f)?;
        assert_eq!(primes.len(), 6);

        let greedy = select_cover(&primes, f.minterms(), CoverStrategy::Greedy);
        assert_eq!(greedy.essential, 0);
        let exact = select_cover(&primes, f.minterms(), CoverStrategy::Exact);
        assert_eq!(exact.essential, 0);
        assert_eq!(exact.selected.len(), 3);
        assert!(greedy.selected.len() >= 3);

        for cover in [&greedy, &exact] {
            for m in f.minterms() {
                assert!(cover.selected.iter().any(|p| primes[*p].covers(*m)));
            }
        }
        Ok(())
    }

    #[test]
    fn greedy_tie_break() -> Result<(), QmError> {
        let f = Function::new(3, &[0, 1, 2, 5, 6, 7], &[])?;
        let primes = primes_of(&f)?;
        let terms: Vec<String> = primes.iter().map(|p| p.term().to_string()).collect();
        assert_eq!(terms, vec!["00*", "0*0", "*01", "*10", "1*1", "11*"]);

        // 00* and 0*0 both cover minterm 0: the earlier prime wins.
        // Then *10, 1*1 and 11* cover two minterms: *10 covers the smallest one.
        let cover = select_cover(&primes, f.minterms(), CoverStrategy::Greedy);
        assert_eq!(selected_terms(&primes, &cover), vec!["00*", "*10", "1*1"]);
        assert_eq!(cover.selected, vec![0, 3, 4]);
        Ok(())
    }

    #[test]
    fn first_greedy_pick_is_pruned() -> Result<(), QmError> {
        let candidates: ImplicantSet = [
            implicant("1***", &[1, 2, 3, 4])?,
            implicant("01**", &[1, 2, 5, 6])?,
            implicant("001*", &[3, 4, 7, 8])?,
            implicant("0001", &[5, 7])?,
            implicant("0000", &[6, 8])?,
        ]
        .into_iter()
        .collect();
        let primes = Primes::extract(candidates, &BitSet::default());
        assert_eq!(primes.len(), 5);

        // Picks: 0 (tie with 1 on count and first minterm), 1 (tie with 3), then 2.
        // The first pick is covered by the two others.
        let minterms: Vec<usize> = (1..=8).collect();
        let cover = select_cover(&primes, &minterms, CoverStrategy::Greedy);
        assert_eq!(cover.essential, 0);
        assert_eq!(cover.selected, vec![1, 2]);
        Ok(())
    }

    #[test]
    fn exact_cover_prefers_fewer_literals() -> Result<(), QmError> {
        // Any two primes cover the three minterms, with 6, 5 or 3 literals
        let candidates: ImplicantSet = [
            implicant("0000", &[1, 2])?,
            implicant("00**", &[2, 3])?,
            implicant("0***", &[1, 3])?,
        ]
        .into_iter()
        .collect();
        let primes = Primes::extract(candidates, &BitSet::default());
        let minterms = [1, 2, 3];

        let greedy = select_cover(&primes, &minterms, CoverStrategy::Greedy);
        assert_eq!(greedy.selected, vec![0, 1]);

        let exact = select_cover(&primes, &minterms, CoverStrategy::Exact);
        assert_eq!(exact.essential, 0);
        assert_eq!(exact.selected, vec![1, 2]);
        Ok(())
    }

    #[test]
    fn redundant_greedy_picks_are_dropped() -> Result<(), QmError> {
        for minterms in [vec![0, 1, 2, 5, 6, 7], vec![0, 2, 3, 4, 5, 7], vec![1, 3, 4, 5, 6, 7]] {
            let f = Function::new(3, &minterms, &[])?;
            let primes = primes_of(&f)?;
            let cover = select_cover(&primes, f.minterms(), CoverStrategy::Greedy);
            for (pos, p) in cover.selected.iter().enumerate() {
                let others: Vec<usize> = cover
                    .selected
                    .iter()
                    .enumerate()
                    .filter(|(o, _)| *o != pos)
                    .map(|(_, q)| *q)
                    .collect();
                let needed = f
                    .minterms()
                    .iter()
                    .any(|m| primes[*p].covers(*m) && !others.iter().any(|q| primes[*q].covers(*m)));
                assert!(needed, "{} is redundant", primes[*p]);
            }
        }
        Ok(())
    }
}
