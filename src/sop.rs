use crate::*;

/// A sum of products over a fixed number of variables.
///
/// This is the parsed form of a minimized expression, which can be evaluated to check it
/// against the truth table of a function.
///
/// ```
/// use qmkit::{Rule, Sop, VarSpace};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let names = VarSpace::alphabetic(3);
/// let sop = Sop::parse("A'B + C", &names)?;
/// assert_eq!(sop.len(), 2);
/// assert!(sop.eval_index(0b010, 3));
/// assert!(sop.eval_index(0b101, 3));
/// assert!(!sop.eval_index(0b100, 3));
/// assert_eq!(format!("{}", names.named(&sop)), "A'B + C");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sop {
    terms: Vec<Term>,
    width: usize,
}

impl Sop {
    /// Parse a sum of products using the names of a collection.
    ///
    /// Both the default (`A'B + C`) and the programming (`!A & B | C`) notations are accepted,
    /// as well as the constants `0` and `1`. Juxtaposed names are split on the longest known name.
    pub fn parse(text: &str, names: &VarSpace) -> Result<Self, QmError> {
        let terms = parse::parse_terms(text, names)?;
        Ok(Self {
            terms,
            width: names.len(),
        })
    }

    /// The terms of a list of implicants, in the same order
    pub fn from_implicants(implicants: &ImplicantSet, width: usize) -> Self {
        Self {
            terms: implicants.iter().map(|i| i.term().clone()).collect(),
            width,
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Return whether the sum is empty (constant false)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of literals
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(|t| t.literal_count()).sum()
    }
}

impl Rule for Sop {
    fn fmt_rule(&self, f: &mut fmt::Formatter, namer: &VarSpace) -> fmt::Result {
        let mut w = SopWriter::new(f, namer, &DEFAULT_FMT_CFG);
        w.write_sop(self.terms.iter())
    }

    fn eval(&self, state: &State) -> bool {
        self.terms.iter().any(|t| t.eval(state))
    }

    fn collect_support(&self, support: &mut VarSet) {
        for t in &self.terms {
            t.collect_support(support);
        }
    }
}

impl fmt::Display for Sop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_rule(f, &VarSpace::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn evaluate() -> Result<(), QmError> {
        let names = VarSpace::alphabetic(2);
        let xor = Sop::parse("A'B + AB'", &names)?;
        let truth: Vec<bool> = (0..4).map(|idx| xor.eval_index(idx, 2)).collect();
        assert_eq!(truth, vec![false, true, true, false]);
        assert_eq!(xor.literal_count(), 4);

        let one = Sop::parse("1", &names)?;
        assert!((0..4).all(|idx| one.eval_index(idx, 2)));
        let zero = Sop::parse("0", &names)?;
        assert!(zero.is_empty());
        assert!(!(0..4).any(|idx| zero.eval_index(idx, 2)));
        Ok(())
    }

    #[test]
    fn display() -> Result<(), QmError> {
        let names = VarSpace::alphabetic(3);
        let sop = Sop::parse("!A & C | B", &names)?;
        assert_eq!(format!("{}", sop), "A'C + B");
        assert_eq!(sop.get_support().len(), 3);
        Ok(())
    }
}
