use std::collections::BTreeMap;

use super::Clause;
use crate::basic_types::Literal;
use crate::basic_types::Variable;

/// How often a variable occurs positively and negatively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occurrences {
    pub positive: u32,
    pub negative: u32,
}

impl Occurrences {
    pub fn total(&self) -> u32 {
        self.positive + self.negative
    }

    /// The number of occurrences of the more frequent polarity.
    pub fn max_polarity(&self) -> u32 {
        self.positive.max(self.negative)
    }

    /// If the variable occurs with only one polarity, returns that polarity (`true` for
    /// positive).
    pub fn pure_polarity(&self) -> Option<bool> {
        match (self.positive, self.negative) {
            (0, 0) => None,
            (_, 0) => Some(true),
            (0, _) => Some(false),
            _ => None,
        }
    }
}

/// The [`Occurrences`] of every variable in a set of clauses. The counts are a snapshot; they
/// are not updated when the clauses change.
///
/// Variables are kept in ascending order of their id, which makes every traversal (and thus every
/// tie-break based on it) deterministic.
#[derive(Clone, Debug, Default)]
pub struct OccurrenceCounts {
    counts: BTreeMap<Variable, Occurrences>,
}

impl OccurrenceCounts {
    pub fn from_clauses<'a>(clauses: impl IntoIterator<Item = &'a Clause>) -> OccurrenceCounts {
        let mut counts: BTreeMap<Variable, Occurrences> = BTreeMap::new();

        for literal in clauses.into_iter().flat_map(Clause::literals) {
            let occurrences = counts.entry(literal.variable()).or_default();
            if literal.is_positive() {
                occurrences.positive += 1;
            } else {
                occurrences.negative += 1;
            }
        }

        OccurrenceCounts { counts }
    }

    /// The occurrences of `variable`; zero for a variable which does not occur.
    pub fn get(&self, variable: Variable) -> Occurrences {
        self.counts.get(&variable).copied().unwrap_or_default()
    }

    /// The number of distinct variables which occur.
    pub fn num_variables(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over the occurring variables in ascending order of their id.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, Occurrences)> + '_ {
        self.counts
            .iter()
            .map(|(&variable, &occurrences)| (variable, occurrences))
    }

    /// The literals whose variable occurs with only their polarity.
    pub fn pure_literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.iter().filter_map(|(variable, occurrences)| {
            occurrences
                .pure_polarity()
                .map(|is_positive| Literal::new(variable, is_positive))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::basic_types::Literal;
    use crate::basic_types::Variable;
    use crate::engine::ClauseDatabase;
    use crate::engine::Occurrences;

    #[test]
    fn polarities_are_counted_separately() {
        let database = ClauseDatabase::from_dimacs(&[&[1, 2], &[5, 4], &[3, -5], &[5, -6]]);
        let counts = database.occurrence_counts();

        assert_eq!(
            Occurrences {
                positive: 2,
                negative: 1
            },
            counts.get(Variable::new(5))
        );
        assert_eq!(6, counts.num_variables());
    }

    #[test]
    fn absent_variables_have_no_occurrences() {
        let database = ClauseDatabase::from_dimacs(&[&[1, -3]]);
        let counts = database.occurrence_counts();

        assert_eq!(0, counts.get(Variable::new(2)).total());
        assert_eq!(
            vec![1, 3],
            counts.iter().map(|(variable, _)| variable.id()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn pure_literals_carry_their_polarity() {
        let database = ClauseDatabase::from_dimacs(&[&[1, 2], &[-1, 2], &[-3, 1]]);
        let pure = database
            .occurrence_counts()
            .pure_literals()
            .map(Literal::to_dimacs)
            .collect::<Vec<_>>();

        assert_eq!(vec![2, -3], pure);
    }

    #[test]
    fn duplicate_literals_are_counted_twice() {
        let database = ClauseDatabase::from_dimacs(&[&[4, 4, -4]]);
        let occurrences = database.occurrence_counts().get(Variable::new(4));

        assert_eq!(2, occurrences.positive);
        assert_eq!(1, occurrences.negative);
        assert_eq!(2, occurrences.max_polarity());
        assert_eq!(None, occurrences.pure_polarity());
    }
}
