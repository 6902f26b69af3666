use log::warn;

use super::VariableSelector;
use crate::basic_types::Variable;
use crate::branching::InOrderTieBreaker;
use crate::engine::ClauseDatabase;

/// A [`VariableSelector`] which selects the variable whose most frequent polarity occurs most
/// often, approximating a maximum-occurrence heuristic. The score is not weighted by clause
/// length. Ties are broken in favour of the smallest variable id.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxOccurrence {
    tie_breaker: InOrderTieBreaker<Variable, u32>,
}

impl VariableSelector for MaxOccurrence {
    fn select_variable(&mut self, database: &ClauseDatabase) -> Option<Variable> {
        if database.is_empty() {
            warn!("The MaxOccurrence variable selector was asked to select from an empty database");
            return None;
        }

        database
            .occurrence_counts()
            .iter()
            .filter(|(_, occurrences)| occurrences.total() > 0)
            .for_each(|(variable, occurrences)| {
                self.tie_breaker
                    .consider(variable, occurrences.max_polarity())
            });

        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_frequent_polarity_wins() {
        let database = ClauseDatabase::from_dimacs(&[&[1, 2], &[5, 4], &[3, -5], &[5, -6]]);

        let selected = MaxOccurrence::default().select_variable(&database);

        assert_eq!(Some(Variable::new(5)), selected);
    }

    #[test]
    fn score_is_not_the_sum_of_both_polarities() {
        // Variable 1 occurs four times but at most twice per polarity, variable 2 occurs three
        // times positively.
        let database = ClauseDatabase::from_dimacs(&[&[1, 2], &[-1, 2], &[1, 2], &[-1, 3]]);

        let selected = MaxOccurrence::default().select_variable(&database);

        assert_eq!(Some(Variable::new(2)), selected);
    }

    #[test]
    fn ties_go_to_the_smallest_variable() {
        let database = ClauseDatabase::from_dimacs(&[&[7, -3], &[-7, 3], &[9, 1]]);

        let selected = MaxOccurrence::default().select_variable(&database);

        assert_eq!(Some(Variable::new(1)), selected);
    }

    #[test]
    fn negative_occurrences_count_as_well() {
        let database = ClauseDatabase::from_dimacs(&[&[-4, 1], &[-4, 2], &[-4, -1]]);

        let selected = MaxOccurrence::default().select_variable(&database);

        assert_eq!(Some(Variable::new(4)), selected);
    }

    #[test]
    fn empty_database_has_no_variable() {
        let database = ClauseDatabase::new();

        assert_eq!(None, MaxOccurrence::default().select_variable(&database));
    }

    #[test]
    fn selector_can_be_reused() {
        let mut selector = MaxOccurrence::default();
        let first = ClauseDatabase::from_dimacs(&[&[2, 3], &[2]]);
        let second = ClauseDatabase::from_dimacs(&[&[1], &[-3]]);

        assert_eq!(Some(Variable::new(2)), selector.select_variable(&first));
        assert_eq!(Some(Variable::new(1)), selector.select_variable(&second));
    }
}
