//! The two simplification rules of DPLL, applied destructively to a [`ClauseDatabase`].
//!
//! - Unit propagation: a unit clause `{l}` forces `l` to be true. Every clause containing `l` is
//!   satisfied and removed (the unit clause included) and `~l` is stripped from every other clause.
//!   Stripping can create new unit clauses, so [`unit_propagate`] repeats this until no unit clause
//!   remains or a clause becomes empty.
//! - Pure-literal elimination: if a variable occurs with only one polarity, every clause
//!   containing it can be satisfied by fixing that polarity, so those clauses are removed.
use log::trace;

use super::ClauseDatabase;
use crate::basic_types::Literal;
use crate::containers::HashSet;

/// What a call to [`simplify`] did to the database.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Simplification {
    pub num_unit_propagations: u64,
    pub num_pure_literals: u64,
}

/// Unit propagation until fixpoint, followed by a single round of pure-literal elimination.
pub fn simplify(database: &mut ClauseDatabase) -> Simplification {
    let num_unit_propagations = unit_propagate(database);
    let num_pure_literals = pure_literal_eliminate(database);

    Simplification {
        num_unit_propagations,
        num_pure_literals,
    }
}

/// Propagate unit clauses until none is left or the database contains an empty clause.
///
/// Returns the number of unit literals which were propagated.
pub fn unit_propagate(database: &mut ClauseDatabase) -> u64 {
    let mut num_propagated = 0;

    while !database.has_empty_clause() {
        match propagate_first_unit(database) {
            Some(_) => num_propagated += 1,
            None => break,
        }
    }

    num_propagated
}

/// A single round of unit propagation for the first unit clause in the database.
///
/// Returns the propagated literal, or [`None`] if the database has no unit clause.
pub fn propagate_first_unit(database: &mut ClauseDatabase) -> Option<Literal> {
    let unit = database
        .clauses()
        .find_map(|clause| clause.unit_literal())?;

    trace!("Propagating unit literal {unit}");
    assign_true(database, unit);

    Some(unit)
}

/// Remove every clause containing `literal` and every occurrence of its complement.
fn assign_true(database: &mut ClauseDatabase, literal: Literal) {
    for clause_id in database.clause_ids() {
        if database.find_literal(clause_id, literal).is_some() {
            let _ = database.remove(clause_id);
            continue;
        }

        while let Some(index) = database.find_literal(clause_id, !literal) {
            let _ = database.remove_literal_at(clause_id, index);
        }
    }
}

/// Remove every clause which contains a pure literal.
///
/// Returns the number of pure literals that were found.
pub fn pure_literal_eliminate(database: &mut ClauseDatabase) -> u64 {
    let pure_literals: HashSet<Literal> = database.occurrence_counts().pure_literals().collect();

    if pure_literals.is_empty() {
        return 0;
    }

    trace!("Eliminating {} pure literals", pure_literals.len());

    for clause_id in database.clause_ids() {
        let is_satisfied = database.get(clause_id).is_some_and(|clause| {
            clause
                .literals()
                .iter()
                .any(|literal| pure_literals.contains(literal))
        });

        if is_satisfied {
            let _ = database.remove(clause_id);
        }
    }

    pure_literals.len() as u64
}
