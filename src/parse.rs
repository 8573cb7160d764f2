//! Parse sums of products written with the default or the programming notation.

use crate::{QmError, Term, VarSpace};
use pest::{iterators::Pair, Parser};

#[derive(Parser)]
#[grammar_inline = r####"
sop     = _{ SOI ~ sum ~ EOI }
sum     =  { product ~ ( or ~ product )* }
or      = _{ "+" | "|" }
product =  { factor ~ ( and? ~ factor )* }
and     = _{ "&" | "*" | "." }
factor  = _{ one | zero | literal }
one     =  { "1" }
zero    =  { "0" }
literal = ${ neg? ~ name ~ tick? }
neg     =  { "!" | "~" }
tick    =  { "'" }
name    = @{ ASCII_ALPHA ~ (ASCII_ALPHANUMERIC | "_")* }

WHITESPACE = _{ " " | "\t" }
"####]
struct SopParser;

/// Parse a sum of products into its product terms.
///
/// A product containing a variable and its negation (or the constant `0`) is always false:
/// it is dropped from the result. The width of the terms is the number of named variables.
pub(crate) fn parse_terms(text: &str, names: &VarSpace) -> Result<Vec<Term>, QmError> {
    let mut parsed = SopParser::parse(Rule::sop, text)
        .map_err(|e| QmError::InvalidExpression(e.to_string()))?;
    let sum = parsed
        .next()
        .ok_or_else(|| QmError::InvalidExpression(text.into()))?;

    let mut terms = vec![];
    for product in sum.into_inner() {
        if let Some(term) = load_product(product, names)? {
            terms.push(term);
        }
    }
    Ok(terms)
}

fn load_product(product: Pair<Rule>, names: &VarSpace) -> Result<Option<Term>, QmError> {
    let mut term = Term::universal(names.len());
    let mut contradiction = false;
    for factor in product.into_inner() {
        match factor.as_rule() {
            Rule::one => (),
            Rule::zero => contradiction = true,
            Rule::literal => {
                let mut prefix = false;
                let mut postfix = false;
                let mut run = "";
                for part in factor.into_inner() {
                    match part.as_rule() {
                        Rule::neg => prefix = true,
                        Rule::tick => postfix = true,
                        Rule::name => run = part.as_str(),
                        _ => (),
                    }
                }

                // A prefix negation applies to the first name of a run, a postfix one to the last
                let variables = names.split_run(run).ok_or_else(|| {
                    QmError::InvalidExpression(format!("unknown variable in '{}'", run))
                })?;
                let last = variables.len() - 1;
                for (pos, var) in variables.into_iter().enumerate() {
                    let mut value = true;
                    if prefix && pos == 0 {
                        value = !value;
                    }
                    if postfix && pos == last {
                        value = !value;
                    }
                    match term.value(var) {
                        Some(current) if current != value => contradiction = true,
                        _ => term.set(var, value),
                    }
                }
            }
            _ => return Err(QmError::InvalidExpression(factor.as_str().into())),
        }
    }

    Ok(match contradiction {
        true => None,
        false => Some(term),
    })
}

#[cfg(test)]
mod tests {
    use crate::parse::parse_terms;
    use crate::*;

    fn terms(text: &str, names: &VarSpace) -> Result<Vec<String>, QmError> {
        Ok(parse_terms(text, names)?.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn default_notation() -> Result<(), QmError> {
        let names = VarSpace::alphabetic(4);
        assert_eq!(terms("A'B + D + AC'D'", &names)?, vec!["01**", "***1", "1*00"]);
        assert_eq!(terms("AB' C", &names)?, vec!["101*"]);
        Ok(())
    }

    #[test]
    fn programming_notation() -> Result<(), QmError> {
        let names = VarSpace::alphabetic(4);
        assert_eq!(terms("!A & B | D | A & !C & !D", &names)?, vec!["01**", "***1", "1*00"]);
        Ok(())
    }

    #[test]
    fn constants_and_contradictions() -> Result<(), QmError> {
        let names = VarSpace::alphabetic(2);
        assert_eq!(terms("1", &names)?, vec!["**"]);
        assert!(terms("0", &names)?.is_empty());
        assert_eq!(terms("AA' + B", &names)?, vec!["*1"]);
        assert_eq!(terms("A & A", &names)?, vec!["1*"]);
        Ok(())
    }

    #[test]
    fn custom_names() -> Result<(), QmError> {
        let names = VarSpace::from_names(["x", "y", "carry"])?;
        assert_eq!(terms("xcarry' + x'ycarry", &names)?, vec!["1*0", "011"]);
        Ok(())
    }

    #[test]
    fn invalid_input() {
        let names = VarSpace::alphabetic(2);
        assert!(parse_terms("A + ", &names).is_err());
        assert!(parse_terms("A + C", &names).is_err());
        assert!(parse_terms("(A)", &names).is_err());
        assert!(parse_terms("", &names).is_err());
    }
}
