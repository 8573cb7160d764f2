use crate::*;

/// The indices covered by each implicant, for display on a Karnaugh map.
///
/// Each group is the source set of an implicant restricted to the indices given as input
/// (minterms and don't-cares), sorted in ascending order. Groups follow the order of the implicants.
///
/// ```
/// use qmkit::{extract_groups, Function, Implicant, ImplicantSet};
/// # use qmkit::QmError;
/// # fn main() -> Result<(), QmError> {
///
/// let f = Function::new(2, &[1], &[3])?;
/// let merged = Implicant::from_index(1, 2).merge_with(&Implicant::from_index(3, 2)).unwrap();
/// let selected: ImplicantSet = [merged].into_iter().collect();
///
/// assert_eq!(extract_groups(&selected, &f), vec![vec![1, 3]]);
/// # Ok(())
/// # }
/// ```
pub fn extract_groups(implicants: &ImplicantSet, function: &Function) -> Vec<Vec<usize>> {
    let inputs = function.input_set();
    implicants
        .iter()
        .map(|i| i.iter_sources().filter(|idx| inputs.contains(*idx)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn groups_follow_selection_order() -> Result<(), QmError> {
        let f = Function::new(3, &[0, 1, 6], &[7])?;
        let selected: ImplicantSet = [
            Implicant::from_index(6, 3).merge_with(&Implicant::from_index(7, 3)).unwrap(),
            Implicant::from_index(0, 3).merge_with(&Implicant::from_index(1, 3)).unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(extract_groups(&selected, &f), vec![vec![6, 7], vec![0, 1]]);
        assert!(extract_groups(&ImplicantSet::default(), &f).is_empty());
        Ok(())
    }

    #[test]
    fn groups_are_restricted_to_inputs() -> Result<(), QmError> {
        let f = Function::new(2, &[0, 1], &[])?;
        let universal: ImplicantSet = [Implicant::universal(2)].into_iter().collect();
        assert_eq!(extract_groups(&universal, &f), vec![vec![0, 1]]);
        Ok(())
    }
}
