//! The clause database holds the clauses of a formula in insertion order.
//!
//! Clauses live in an index-stable arena: every clause occupies a slot which is addressed by its
//! [`ClauseId`]. Removing a clause vacates its slot in constant time and iteration skips vacated
//! slots, so the relative order of the remaining clauses is never disturbed. A database never
//! shares clauses with another database; [`ClauseDatabase::duplicate`] allocates fresh clauses
//! (and fresh ids) for the copy.
use itertools::Itertools;

use super::OccurrenceCounts;
use crate::basic_types::Literal;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::dpll_assert_moderate;

/// The identity of a clause within the [`ClauseDatabase`] which created it.
///
/// An id is only meaningful for the database that issued it; after the clause is removed the id
/// refers to a vacated slot and every lookup with it returns [`None`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseId {
    index: u32,
}

impl StorageKey for ClauseId {
    fn index(&self) -> usize {
        self.index as usize
    }

    fn create_from_index(index: usize) -> Self {
        ClauseId {
            index: index as u32,
        }
    }
}

impl std::fmt::Display for ClauseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.index)
    }
}

/// A disjunction of literals. Duplicate and complementary literals are kept as they are given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// An empty clause cannot be satisfied.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Returns the only literal of the clause if it is a unit clause.
    pub fn unit_literal(&self) -> Option<Literal> {
        match self.literals.as_slice() {
            [literal] => Some(*literal),
            _ => None,
        }
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.literals.contains(&literal)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.literals.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{} 0", self.literals.iter().join(" "))
        }
    }
}

#[derive(Debug, Default)]
pub struct ClauseDatabase {
    /// A vacated slot holds [`None`].
    slots: KeyedVec<ClauseId, Option<Clause>>,
    /// The number of occupied slots.
    num_clauses: usize,
}

impl ClauseDatabase {
    pub fn new() -> ClauseDatabase {
        ClauseDatabase::default()
    }

    /// Create a database holding a copy of every given clause, in the given order.
    pub fn from_clauses<Literals: AsRef<[Literal]>>(
        clauses: impl IntoIterator<Item = Literals>,
    ) -> ClauseDatabase {
        let mut database = ClauseDatabase::new();
        for clause in clauses {
            let _ = database.append(clause.as_ref());
        }
        database
    }

    /// The number of clauses currently in the database.
    pub fn len(&self) -> usize {
        self.num_clauses
    }

    pub fn is_empty(&self) -> bool {
        self.num_clauses == 0
    }

    /// Add a new clause with a copy of `literals` after all other clauses.
    pub fn append(&mut self, literals: &[Literal]) -> ClauseId {
        self.num_clauses += 1;
        self.slots.push(Some(Clause {
            literals: literals.to_vec(),
        }))
    }

    /// Detach the clause with the given id, returning it. Returns [`None`] if the clause was
    /// already removed.
    pub fn remove(&mut self, clause_id: ClauseId) -> Option<Clause> {
        let removed = self.slots.get_mut(clause_id)?.take();

        if removed.is_some() {
            self.num_clauses -= 1;
        }

        dpll_assert_moderate!(
            self.num_clauses == self.slots.iter().filter(|slot| slot.is_some()).count(),
            "the clause counter is out of sync with the occupied slots"
        );

        removed
    }

    pub fn get(&self, clause_id: ClauseId) -> Option<&Clause> {
        self.slots.get(clause_id).and_then(Option::as_ref)
    }

    /// Create an independent copy of the database. The copy contains newly allocated clauses in
    /// the same relative order; mutating either database never affects the other.
    pub fn duplicate(&self) -> ClauseDatabase {
        let mut slots = KeyedVec::with_capacity(self.num_clauses);
        for clause in self.clauses() {
            let _ = slots.push(Some(clause.clone()));
        }

        ClauseDatabase {
            slots,
            num_clauses: self.num_clauses,
        }
    }

    /// The position of the first occurrence of `literal` in the clause, if any.
    pub fn find_literal(&self, clause_id: ClauseId, literal: Literal) -> Option<usize> {
        self.get(clause_id)?
            .literals
            .iter()
            .position(|&candidate| candidate == literal)
    }

    /// Remove the literal at position `index` from the clause, returning it. Returns [`None`] if
    /// the clause was removed or the position is out of bounds.
    pub fn remove_literal_at(&mut self, clause_id: ClauseId, index: usize) -> Option<Literal> {
        let clause = self.slots.get_mut(clause_id)?.as_mut()?;

        if index < clause.literals.len() {
            Some(clause.literals.remove(index))
        } else {
            None
        }
    }

    /// Whether some clause has no literals left, i.e. the database is in conflict.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses().any(Clause::is_empty)
    }

    /// Iterate over the clauses with their ids, in order.
    pub fn iter(&self) -> impl Iterator<Item = (ClauseId, &Clause)> {
        self.slots
            .enumerate()
            .filter_map(|(clause_id, slot)| slot.as_ref().map(|clause| (clause_id, clause)))
    }

    /// Iterate over the clauses, in order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.slots.iter().flatten()
    }

    /// A snapshot of every id issued so far, in order. The iterator does not borrow the
    /// database, which allows clauses to be removed or modified while it is consumed. Ids of
    /// clauses which have been removed are included; lookups with them return [`None`].
    pub fn clause_ids(&self) -> impl Iterator<Item = ClauseId> + 'static {
        (0..self.slots.len()).map(ClauseId::create_from_index)
    }

    /// Count the positive and negative occurrences of every variable in the database.
    pub fn occurrence_counts(&self) -> OccurrenceCounts {
        OccurrenceCounts::from_clauses(self.clauses())
    }

    #[cfg(test)]
    pub(crate) fn from_dimacs(clauses: &[&[i32]]) -> ClauseDatabase {
        ClauseDatabase::from_clauses(clauses.iter().map(|clause| {
            clause
                .iter()
                .map(|&code| Literal::try_from(code).expect("valid literal"))
                .collect::<Vec<_>>()
        }))
    }

    #[cfg(test)]
    pub(crate) fn to_dimacs(&self) -> Vec<Vec<i32>> {
        self.clauses()
            .map(|clause| clause.literals.iter().map(|literal| literal.to_dimacs()).collect())
            .collect()
    }
}
