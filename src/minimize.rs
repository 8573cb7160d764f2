//! Drive the stages of the minimization and collect the result.

use crate::*;
use log::debug;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// A minimized sum of products, with the information needed to display it.
#[derive(Clone, Debug)]
pub struct Solution {
    implicants: ImplicantSet,
    primes: Primes,
    essential: usize,
    expression: String,
    groups: Vec<Vec<usize>>,
    names: VarSpace,
    variables: usize,
}

impl Solution {
    /// The minimized expression, `0` and `1` for constant functions
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// For each selected implicant, the input indices it covers
    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// The selected implicants, essential ones first
    pub fn implicants(&self) -> &ImplicantSet {
        &self.implicants
    }

    /// All prime implicants found for the function
    pub fn primes(&self) -> &Primes {
        &self.primes
    }

    /// Number of essential implicants at the start of the selection
    pub fn essential_count(&self) -> usize {
        self.essential
    }

    pub fn names(&self) -> &VarSpace {
        &self.names
    }

    /// Number of variables of the minimized function
    pub fn variables(&self) -> usize {
        self.variables
    }

    /// The selected terms as a sum of products
    pub fn sop(&self) -> Sop {
        Sop::from_implicants(&self.implicants, self.variables)
    }
}

impl Rule for Solution {
    fn fmt_rule(&self, f: &mut fmt::Formatter, namer: &VarSpace) -> fmt::Result {
        self.implicants.fmt_rule(f, namer)
    }

    fn eval(&self, state: &State) -> bool {
        self.implicants.eval(state)
    }

    fn collect_support(&self, support: &mut VarSet) {
        self.implicants.collect_support(support)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Settings of the minimization.
///
/// ```
/// use qmkit::{CoverStrategy, Function, Minimizer, VarSpace, PROGRAMMING_FMT_CFG};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let minimizer = Minimizer::new()
///     .with_names(VarSpace::from_names(["x", "y", "z"])?)
///     .with_strategy(CoverStrategy::Exact)
///     .with_format(&PROGRAMMING_FMT_CFG);
///
/// let solution = minimizer.minimize(&Function::new(3, &[1, 3, 5, 7], &[])?)?;
/// assert_eq!(solution.expression(), "z");
///
/// let solution = minimizer.minimize_indices(3, &[0, 1], &[])?;
/// assert_eq!(solution.expression(), "!x & !y");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Minimizer {
    names: Option<VarSpace>,
    strategy: CoverStrategy,
    cfg: &'static FormatterConfig<'static>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for Minimizer {
    fn default() -> Self {
        Self {
            names: None,
            strategy: CoverStrategy::default(),
            cfg: &DEFAULT_FMT_CFG,
            cancel: None,
        }
    }
}

impl Minimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom variable names instead of `A`, `B`, ...
    pub fn with_names(mut self, names: VarSpace) -> Self {
        self.names = Some(names);
        self
    }

    pub fn with_strategy(mut self, strategy: CoverStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Select the notation of the expression
    pub fn with_format(mut self, cfg: &'static FormatterConfig<'static>) -> Self {
        self.cfg = cfg;
        self
    }

    /// Abort the merge rounds when the flag is raised
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Validate the indices and minimize the corresponding function
    pub fn minimize_indices(
        &self,
        variables: usize,
        minterms: &[usize],
        dont_cares: &[usize],
    ) -> Result<Solution, QmError> {
        self.minimize(&Function::new(variables, minterms, dont_cares)?)
    }

    pub fn minimize(&self, function: &Function) -> Result<Solution, QmError> {
        let width = function.variables();
        let names = match &self.names {
            Some(names) => names.clone(),
            None => VarSpace::alphabetic(width),
        };

        let (primes, implicants, essential) = if function.is_tautology() {
            debug!("all {} indices are true: constant function", function.minterms().len());
            let universal = Implicant::universal(width);
            let selected: ImplicantSet = [universal.clone()].into_iter().collect();
            (Primes::from(universal), selected, 0)
        } else {
            // Don't-cares come first so that they take part in the first comparisons
            let encoded = function.encode();
            let initial = encoded.dont_cares.into_iter().chain(encoded.minterms);
            let outcome = merge_implicants(initial, self.cancel.as_deref())?;
            debug!(
                "{} prime candidates after {} rounds",
                outcome.candidates.len(),
                outcome.rounds
            );

            let primes = Primes::extract(outcome.candidates, &function.dont_care_set());
            let cover = select_cover(&primes, function.minterms(), self.strategy);
            let selected: ImplicantSet = cover.selected.iter().map(|p| primes[*p].clone()).collect();
            (primes, selected, cover.essential)
        };

        let expression = self.cfg.sop(&implicants, &names).to_string();
        let groups = extract_groups(&implicants, function);
        debug!("minimized to '{}' with {} implicants", expression, implicants.len());

        Ok(Solution {
            implicants,
            primes,
            essential,
            expression,
            groups,
            names,
            variables: width,
        })
    }
}

/// Minimize a function given by its true minterms and don't-cares, with the default settings.
///
/// ```
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
/// let solution = qmkit::minimize(2, &[1, 3], &[])?;
/// assert_eq!(solution.expression(), "B");
/// assert_eq!(solution.groups(), &[vec![1, 3]]);
/// # Ok(())
/// # }
/// ```
pub fn minimize(variables: usize, minterms: &[usize], dont_cares: &[usize]) -> Result<Solution, QmError> {
    Minimizer::default().minimize_indices(variables, minterms, dont_cares)
}
