//! Formatting API for sum-of-products expressions

use crate::{ImplicantSet, Term, VarSpace, Variable};

use std::fmt;

/// Symbols used to write a sum of products.
pub struct FormatterConfig<'a> {
    s_and: &'a str,
    s_or: &'a str,
    s_not: &'a str,
    postfix_not: bool,
}

/// Textbook notation: `A'B + C`
pub static DEFAULT_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: "",
    s_or: " + ",
    s_not: "'",
    postfix_not: true,
};

/// Programming notation: `!A & B | C`
pub static PROGRAMMING_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: " & ",
    s_or: " | ",
    s_not: "!",
    postfix_not: false,
};

/// Plain words: `not A and B or C`
pub static WORDS_FMT_CFG: FormatterConfig = FormatterConfig {
    s_and: " and ",
    s_or: " or ",
    s_not: "not ",
    postfix_not: false,
};

/// Define hooks to display the parts of a sum of products.
///
/// The default implementations of [SopFormatter::write_term] and [SopFormatter::write_sop]
/// walk the terms and call the other hooks for each literal and separator.
pub trait SopFormatter {
    /// Pass-through function calling an internal [fmt::Formatter].
    ///
    /// This function enables the use of the ```write!``` macro in other functions.
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result;

    /// Write a constant function
    fn write_bool(&mut self, b: bool) -> fmt::Result;

    /// Write a single variable, which can be negated
    fn write_variable(&mut self, var: Variable, value: bool) -> fmt::Result;

    /// Separate two literals of a product
    fn sep_product(&mut self) -> fmt::Result;

    /// Separate two products of the sum
    fn sep_sum(&mut self) -> fmt::Result;

    /// Write a product term, literals are written in variable order.
    ///
    /// A term without literal is the constant `1`.
    fn write_term(&mut self, t: &Term) -> fmt::Result {
        if t.is_universal() {
            return self.write_bool(true);
        }
        let mut first = true;
        for (var, val) in t.iter_fixed_values() {
            match first {
                true => first = false,
                false => self.sep_product()?,
            }
            self.write_variable(var, val)?;
        }
        Ok(())
    }

    /// Write a sum of products, an empty sum is the constant `0`.
    fn write_sop<'t>(&mut self, terms: impl Iterator<Item = &'t Term>) -> fmt::Result
    where
        Self: Sized,
    {
        let mut first = true;
        for t in terms {
            match first {
                true => first = false,
                false => self.sep_sum()?,
            }
            self.write_term(t)?;
        }
        match first {
            true => self.write_bool(false),
            false => Ok(()),
        }
    }
}

impl FormatterConfig<'_> {
    /// Wrap a list of implicants to display it as a sum of products
    pub fn sop<'a>(&'a self, implicants: &'a ImplicantSet, names: &'a VarSpace) -> SopFormatted<'a> {
        SopFormatted {
            implicants,
            names,
            cfg: self,
        }
    }
}

/// Write sums of products using a [FormatterConfig] and variable names
pub struct SopWriter<'a, 'b>(
    &'a mut fmt::Formatter<'b>,
    &'a VarSpace,
    &'a FormatterConfig<'a>,
);

impl<'a, 'b> SopWriter<'a, 'b> {
    pub fn new(
        f: &'a mut fmt::Formatter<'b>,
        names: &'a VarSpace,
        cfg: &'a FormatterConfig<'a>,
    ) -> Self {
        Self(f, names, cfg)
    }
}

impl SopFormatter for SopWriter<'_, '_> {
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result {
        fmt::Formatter::write_fmt(self.0, args)
    }

    fn write_bool(&mut self, b: bool) -> fmt::Result {
        match b {
            false => write!(self, "0"),
            true => write!(self, "1"),
        }
    }

    fn write_variable(&mut self, var: Variable, value: bool) -> fmt::Result {
        let negated = !value;
        if negated && !self.2.postfix_not {
            write!(self, "{}", self.2.s_not)?;
        }
        self.1.format_variable(self.0, var)?;
        if negated && self.2.postfix_not {
            write!(self, "{}", self.2.s_not)?;
        }
        Ok(())
    }

    fn sep_product(&mut self) -> fmt::Result {
        write!(self, "{}", self.2.s_and)
    }

    fn sep_sum(&mut self) -> fmt::Result {
        write!(self, "{}", self.2.s_or)
    }
}

/// A list of implicants displayed as a sum of products
pub struct SopFormatted<'a> {
    implicants: &'a ImplicantSet,
    names: &'a VarSpace,
    cfg: &'a FormatterConfig<'a>,
}

impl fmt::Display for SopFormatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut w = SopWriter::new(f, self.names, self.cfg);
        w.write_sop(self.implicants.iter().map(|i| i.term()))
    }
}

#[cfg(test)]
mod tests {
    use crate::efmt::*;
    use crate::*;

    fn implicants(terms: &[&str]) -> Result<ImplicantSet, QmError> {
        terms
            .iter()
            .map(|t| {
                let term: Term = t.parse()?;
                let sources = term.indices().collect();
                Ok(Implicant::with(term, sources))
            })
            .collect()
    }

    #[test]
    fn render_styles() -> Result<(), QmError> {
        let names = VarSpace::alphabetic(4);
        let set = implicants(&["01**", "***1", "1*00"])?;

        assert_eq!(DEFAULT_FMT_CFG.sop(&set, &names).to_string(), "A'B + D + AC'D'");
        assert_eq!(
            PROGRAMMING_FMT_CFG.sop(&set, &names).to_string(),
            "!A & B | D | A & !C & !D"
        );
        assert_eq!(
            WORDS_FMT_CFG.sop(&set, &names).to_string(),
            "not A and B or D or A and not C and not D"
        );
        Ok(())
    }

    #[test]
    fn constants() -> Result<(), QmError> {
        let names = VarSpace::alphabetic(3);
        let empty = ImplicantSet::default();
        assert_eq!(DEFAULT_FMT_CFG.sop(&empty, &names).to_string(), "0");

        let all = implicants(&["***"])?;
        assert_eq!(DEFAULT_FMT_CFG.sop(&all, &names).to_string(), "1");
        Ok(())
    }

    #[test]
    fn custom_names() -> Result<(), QmError> {
        let names = VarSpace::from_names(["x", "y", "carry"])?;
        let set = implicants(&["1*0", "011"])?;
        assert_eq!(DEFAULT_FMT_CFG.sop(&set, &names).to_string(), "xcarry' + x'ycarry");
        assert_eq!(format!("{}", names.named(&set)), "xcarry' + x'ycarry");
        Ok(())
    }
}
