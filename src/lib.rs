//! Minimize Boolean functions into sums of products with the Quine-McCluskey method.
//!
//! A [Function] of N variables is given by the indices of its true rows in the truth table
//! (minterms) and of the rows where its value does not matter (don't-cares).
//! Variable 0 is the most significant bit of an index: with 3 variables, the index `6 = 0b110`
//! is the row where `A` and `B` are true and `C` is false.
//!
//! The minimization goes through the following stages:
//! * each index is encoded into a single-row [Implicant] carrying its binary [Term],
//! * [implicants are merged](merge_implicants) round after round until no pair differs in a single position,
//! * the [prime implicants](Primes) are the implicants which could not be merged further,
//! * a [selection](select_cover) of primes covers all minterms, starting with the essential ones,
//! * the selected primes are written as a [sum of products](efmt) and as [groups](extract_groups) of indices.
//!
//! ```
//! use qmkit::minimize;
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let solution = minimize(2, &[1, 3], &[])?;
//! assert_eq!(solution.expression(), "B");
//! assert_eq!(solution.groups(), &[vec![1, 3]]);
//!
//! // Constant functions
//! assert_eq!(minimize(2, &[0, 1, 2, 3], &[])?.expression(), "1");
//! assert_eq!(minimize(2, &[], &[2])?.expression(), "0");
//! # Ok(())
//! # }
//! ```
//!
//! # Don't-cares and essential primes
//!
//! Don't-cares are used to build larger implicants but they never need to be covered.
//! A prime implicant is essential if it is the only one covering one of the minterms.
//!
//! ```
//! use qmkit::{Function, Minimizer};
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let f = Function::new(4, &[4, 8, 10, 11, 12, 15], &[9, 14])?;
//! let solution = Minimizer::new().minimize(&f)?;
//!
//! assert_eq!(solution.expression(), "BC'D' + AC + AB'");
//! assert_eq!(solution.essential_count(), 2);
//! assert_eq!(solution.groups()[0], vec![4, 12]);
//! # Ok(())
//! # }
//! ```
//!
//! # Evaluation and parsing
//!
//! Terms, implicants, solutions and parsed expressions implement the [Rule] trait: they can
//! be evaluated on a [State], i.e. an assignment of all variables.
//! An expression written with the names of a [VarSpace] can be parsed back into a [Sop].
//!
//! ```
//! use qmkit::{minimize, Rule, Sop, VarSpace};
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let solution = minimize(3, &[0, 1, 2, 5], &[])?;
//! let parsed = Sop::parse(solution.expression(), &VarSpace::alphabetic(3))?;
//!
//! for idx in 0..8 {
//!     assert_eq!(parsed.eval_index(idx, 3), [0, 1, 2, 5].contains(&idx));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Karnaugh maps
//!
//! The [KMap] gives the position of each index on a Gray-coded grid, to display the groups.
//!
//! ```
//! use qmkit::{minimize, KMap};
//! # use qmkit::QmError;
//! # fn main() -> Result<(), QmError> {
//!
//! let solution = minimize(2, &[1, 3], &[])?;
//! let kmap = KMap::new(2)?;
//! assert_eq!(kmap.group_cells(&solution.groups()[0]), vec![(0, 1), (1, 1)]);
//! # Ok(())
//! # }
//! ```

mod cover;
pub mod efmt;
mod encode;
mod error;
mod groups;
mod implicants;
mod kmap;
mod merge;
mod minimize;
mod parse;
mod primes;
mod rules;
mod sop;
mod space;
mod states;
mod term;
pub mod tools;
mod variable;

use std::fmt;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use cover::{select_cover, Chart, Cover, CoverStrategy};
pub use efmt::{
    FormatterConfig, SopFormatted, SopFormatter, SopWriter, DEFAULT_FMT_CFG, PROGRAMMING_FMT_CFG,
    WORDS_FMT_CFG,
};
pub use encode::{EncodedTerms, Function, MAX_VARIABLES};
pub use error::QmError;
pub use groups::extract_groups;
pub use implicants::{Implicant, ImplicantSet};
pub use kmap::{CellValue, KMap, KMapView};
pub use merge::{merge_implicants, MergeOutcome};
pub use minimize::{minimize, Minimizer, Solution};
pub use primes::Primes;
pub use rules::Rule;
pub use sop::Sop;
pub use space::{NamedRule, VarSpace};
pub use states::State;
pub use term::Term;
pub use variable::{VarSet, Variable};
