//! Karnaugh map layout of a truth table.
//!
//! Rows are indexed by the high half of the variables and columns by the low half, both in
//! Gray code order so that adjacent cells differ by a single variable. With four variables,
//! the rows are `AB = 00, 01, 11, 10` and the columns `CD = 00, 01, 11, 10`.

use crate::tools::{binary_string, domain_size, gray_code, gray_rank};
use crate::*;
use itertools::Itertools;

/// The value of a cell in the truth table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellValue {
    Zero,
    One,
    DontCare,
}

impl CellValue {
    pub fn of(function: &Function, index: usize) -> Self {
        if function.is_minterm(index) {
            CellValue::One
        } else if function.is_dont_care(index) {
            CellValue::DontCare
        } else {
            CellValue::Zero
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Zero => write!(f, "0"),
            CellValue::One => write!(f, "1"),
            CellValue::DontCare => write!(f, "x"),
        }
    }
}

/// Position of the minterm indices on a Karnaugh map.
///
/// ```
/// use qmkit::KMap;
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let kmap = KMap::new(4)?;
/// assert_eq!((kmap.rows(), kmap.cols()), (4, 4));
/// assert_eq!(kmap.cell(2), (0, 3));
/// assert_eq!(kmap.cell(13), (2, 1));
/// assert_eq!(kmap.index_at(3, 2), 11);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KMap {
    row_bits: usize,
    col_bits: usize,
}

impl KMap {
    pub fn new(variables: usize) -> Result<Self, QmError> {
        match variables {
            1..=MAX_VARIABLES => Ok(Self {
                row_bits: variables / 2,
                col_bits: variables - variables / 2,
            }),
            _ => Err(QmError::InvalidVariableCount(variables)),
        }
    }

    /// The layout of the truth table of a function
    pub fn for_function(function: &Function) -> Self {
        let variables = function.variables();
        Self {
            row_bits: variables / 2,
            col_bits: variables - variables / 2,
        }
    }

    pub fn variables(&self) -> usize {
        self.row_bits + self.col_bits
    }

    pub fn rows(&self) -> usize {
        domain_size(self.row_bits)
    }

    pub fn cols(&self) -> usize {
        domain_size(self.col_bits)
    }

    /// The (row, column) position of a minterm index
    pub fn cell(&self, index: usize) -> (usize, usize) {
        let col_mask = self.cols() - 1;
        (gray_rank(index >> self.col_bits), gray_rank(index & col_mask))
    }

    /// The minterm index displayed at a position
    pub fn index_at(&self, row: usize, col: usize) -> usize {
        (gray_code(row) << self.col_bits) | gray_code(col)
    }

    /// The positions of all indices of a group
    pub fn group_cells(&self, group: &[usize]) -> Vec<(usize, usize)> {
        group.iter().map(|idx| self.cell(*idx)).collect()
    }

    /// The value of each index of the truth table
    pub fn values(&self, function: &Function) -> Vec<CellValue> {
        (0..domain_size(self.variables()))
            .map(|idx| CellValue::of(function, idx))
            .collect()
    }

    /// Draw the map as text, with `1`, `0` and `x` (don't-care) cells.
    pub fn render(&self, function: &Function, names: &VarSpace) -> String {
        self.view(function, names).to_string()
    }

    /// Wrap the map with a function to display it
    pub fn view<'a>(&'a self, function: &'a Function, names: &'a VarSpace) -> KMapView<'a> {
        KMapView {
            kmap: self,
            function,
            names,
        }
    }
}

/// A Karnaugh map filled with the values of a function
pub struct KMapView<'a> {
    kmap: &'a KMap,
    function: &'a Function,
    names: &'a VarSpace,
}

impl fmt::Display for KMapView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kmap = self.kmap;
        let row_names = (0..kmap.row_bits).map(|v| self.names.name(Variable(v))).join("");
        let col_names = (kmap.row_bits..kmap.variables())
            .map(|v| self.names.name(Variable(v)))
            .join("");
        let corner = format!("{}\\{}", row_names, col_names);
        let label_width = corner.len().max(kmap.row_bits);
        let cell_width = kmap.col_bits.max(1);

        write!(f, "{:<w$}", corner, w = label_width)?;
        for col in 0..kmap.cols() {
            write!(f, " {:<w$}", binary_string(gray_code(col), kmap.col_bits), w = cell_width)?;
        }
        writeln!(f)?;

        for row in 0..kmap.rows() {
            write!(f, "{:<w$}", binary_string(gray_code(row), kmap.row_bits), w = label_width)?;
            for col in 0..kmap.cols() {
                let value = CellValue::of(self.function, kmap.index_at(row, col));
                write!(f, " {:<w$}", value.to_string(), w = cell_width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
