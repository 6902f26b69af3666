use log::debug;
use log::trace;

use super::simplification::simplify;
use super::ClauseDatabase;
use super::SolverStatistics;
use crate::basic_types::Literal;
use crate::basic_types::Variable;
use crate::branching::MaxOccurrence;
use crate::branching::VariableSelector;
use crate::results::SatisfactionResult;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Decides satisfiability of a [`ClauseDatabase`] with the DPLL procedure.
///
/// Every node of the search simplifies its database, then either concludes (no clauses left means
/// satisfiable, an empty clause means a conflict) or selects a variable `v` and creates two child
/// databases: a duplicate extended with the unit clause `{v}` and a duplicate extended with `{~v}`.
/// The positive child is explored first. Because each child owns its own copy of the clauses, the
/// branches never observe each other's simplifications and no undo information is kept.
///
/// Pending children are kept on an explicit stack rather than on the call stack, so the depth of
/// the search is only limited by memory.
#[derive(Debug)]
pub struct DpllSolver<Selector = MaxOccurrence> {
    variable_selector: Selector,
    statistics: SolverStatistics,
}

/// A solver which branches with the [`MaxOccurrence`] selector.
impl Default for DpllSolver<MaxOccurrence> {
    fn default() -> Self {
        DpllSolver::new(MaxOccurrence::default())
    }
}

/// A database waiting to be explored, with the number of decisions that led to it.
#[derive(Debug)]
struct Branch {
    database: ClauseDatabase,
    depth: u64,
}

impl<Selector: VariableSelector> DpllSolver<Selector> {
    pub fn new(variable_selector: Selector) -> Self {
        DpllSolver {
            variable_selector,
            statistics: SolverStatistics::default(),
        }
    }

    /// Decide whether the formula in `database` is satisfiable.
    pub fn solve(&mut self, database: ClauseDatabase) -> SatisfactionResult {
        debug!(
            "Solving a formula with {} clauses over {} variables",
            database.len(),
            database.occurrence_counts().num_variables()
        );

        let mut pending = vec![Branch { database, depth: 0 }];

        while let Some(branch) = pending.pop() {
            match self.explore(branch) {
                Node::Satisfied => {
                    debug!(
                        "Found a satisfiable branch after {} decisions",
                        self.statistics.num_decisions
                    );
                    return SatisfactionResult::Satisfiable;
                }
                Node::Conflict => {}
                Node::Split { positive, negative } => {
                    // The stack is last-in first-out, the positive branch goes on top.
                    pending.push(negative);
                    pending.push(positive);
                }
            }
        }

        debug!(
            "Every branch is in conflict after {} decisions",
            self.statistics.num_decisions
        );
        SatisfactionResult::Unsatisfiable
    }

    /// Simplify the database of a single branch and decide how the search continues from it.
    fn explore(&mut self, branch: Branch) -> Node {
        let Branch {
            mut database,
            depth,
        } = branch;

        self.statistics.num_nodes += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(depth);

        let simplification = simplify(&mut database);
        self.statistics.num_unit_propagations += simplification.num_unit_propagations;
        self.statistics.num_pure_literals += simplification.num_pure_literals;

        if database.is_empty() {
            return Node::Satisfied;
        }

        if database.has_empty_clause() {
            self.statistics.num_conflicts += 1;
            trace!("Conflict at depth {depth}");
            return Node::Conflict;
        }

        // A non-empty database without empty clauses always contains a literal, but a selector
        // which finds nothing to branch on is treated like an empty database.
        let Some(variable) = self.variable_selector.select_variable(&database) else {
            return Node::Satisfied;
        };

        self.statistics.num_decisions += 1;
        trace!("Branching on {variable} at depth {depth}");

        Node::Split {
            positive: Self::child(&database, variable, true, depth),
            negative: Self::child(&database, variable, false, depth),
        }
    }

    /// A duplicate of the simplified `database` in which `variable` is fixed to `is_positive`.
    fn child(
        database: &ClauseDatabase,
        variable: Variable,
        is_positive: bool,
        depth: u64,
    ) -> Branch {
        let mut child = database.duplicate();
        let _ = child.append(&[Literal::new(variable, is_positive)]);

        Branch {
            database: child,
            depth: depth + 1,
        }
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Log the statistics of the solver if statistic logging has been configured.
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::new(["dpll"]));
            log_statistic_postfix();
        }
    }
}

/// The outcome of exploring a single branch.
#[derive(Debug)]
enum Node {
    Satisfied,
    Conflict,
    Split { positive: Branch, negative: Branch },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(clauses: &[&[i32]]) -> SatisfactionResult {
        let mut solver = DpllSolver::new(MaxOccurrence::default());
        solver.solve(ClauseDatabase::from_dimacs(clauses))
    }

    #[test]
    fn forced_complementary_units_are_unsatisfiable() {
        assert_eq!(
            SatisfactionResult::Unsatisfiable,
            solve(&[&[1, 2, -3], &[1, -2], &[-1], &[2, 3]])
        );
    }

    #[test]
    fn default_solver_branches_on_max_occurrence() {
        let mut solver = DpllSolver::default();
        let database = ClauseDatabase::from_dimacs(&[&[1, 2], &[1, -2], &[-1, 2], &[-1, -2]]);

        assert_eq!(SatisfactionResult::Unsatisfiable, solver.solve(database));
        assert_eq!(1, solver.statistics().num_decisions);
    }

    #[test]
    fn empty_formula_is_satisfiable() {
        assert_eq!(SatisfactionResult::Satisfiable, solve(&[]));
    }

    #[test]
    fn formula_with_empty_clause_is_unsatisfiable() {
        assert_eq!(SatisfactionResult::Unsatisfiable, solve(&[&[1, 2], &[]]));
    }

    #[test]
    fn tautological_clause_is_satisfiable() {
        assert_eq!(SatisfactionResult::Satisfiable, solve(&[&[1, -1]]));
    }

    #[test]
    fn formula_requiring_a_decision_is_satisfiable() {
        let mut solver = DpllSolver::new(MaxOccurrence::default());
        let database = ClauseDatabase::from_dimacs(&[&[1, 2], &[-1, -2], &[1, -2], &[-1, 2, 3]]);

        assert_eq!(SatisfactionResult::Satisfiable, solver.solve(database));
    }

    #[test]
    fn negative_branch_is_explored_after_positive_conflict() {
        // Without pure literals the solver has to branch on variable 1 first; setting it to true
        // leads to a conflict.
        let mut solver = DpllSolver::new(MaxOccurrence::default());
        let database = ClauseDatabase::from_dimacs(&[
            &[-1, 2],
            &[-1, -2],
            &[1, 3],
            &[1, -3, 4],
            &[-4, 3],
            &[1, -2, 3],
        ]);

        assert_eq!(SatisfactionResult::Satisfiable, solver.solve(database));
        assert!(solver.statistics().num_conflicts >= 1);
        assert!(solver.statistics().num_decisions >= 1);
    }

    #[test]
    fn pigeonhole_three_into_two_is_unsatisfiable() {
        // Variable 2 * p + h - 2 states that pigeon p sits in hole h.
        let mut solver = DpllSolver::new(MaxOccurrence::default());
        let database = ClauseDatabase::from_dimacs(&[
            &[1, 2],
            &[3, 4],
            &[5, 6],
            &[-1, -3],
            &[-1, -5],
            &[-3, -5],
            &[-2, -4],
            &[-2, -6],
            &[-4, -6],
        ]);

        assert_eq!(SatisfactionResult::Unsatisfiable, solver.solve(database));

        let statistics = solver.statistics();
        assert!(statistics.num_decisions >= 1);
        assert_eq!(statistics.num_nodes, 2 * statistics.num_decisions + 1);
        assert_eq!(statistics.num_conflicts, statistics.num_decisions + 1);
    }

    #[test]
    fn all_sign_combinations_of_two_variables_are_unsatisfiable() {
        assert_eq!(
            SatisfactionResult::Unsatisfiable,
            solve(&[&[1, 2], &[1, -2], &[-1, 2], &[-1, -2]])
        );
    }

    #[test]
    fn implication_chain_is_satisfied_by_propagation_alone() {
        let mut solver = DpllSolver::new(MaxOccurrence::default());
        let database = ClauseDatabase::from_dimacs(&[&[1], &[-1, 2], &[-2, 3], &[-3, 4]]);

        assert_eq!(SatisfactionResult::Satisfiable, solver.solve(database));
        assert_eq!(0, solver.statistics().num_decisions);
        assert_eq!(4, solver.statistics().num_unit_propagations);
    }

    #[test]
    fn equivalence_cycle_with_odd_parity_is_unsatisfiable() {
        // x_i <-> x_{i+1} for every i, closed by x_1 <-> ~x_n.
        let num_variables = 200;
        let mut clauses = Vec::new();
        for variable in 1..num_variables {
            clauses.push(vec![-variable, variable + 1]);
            clauses.push(vec![variable, -(variable + 1)]);
        }
        clauses.push(vec![1, num_variables]);
        clauses.push(vec![-1, -num_variables]);

        let clauses = clauses.iter().map(Vec::as_slice).collect::<Vec<_>>();
        assert_eq!(SatisfactionResult::Unsatisfiable, solve(&clauses));
    }

    #[test]
    fn each_decision_adds_one_level_of_depth() {
        // Independent pairs (a or b) and (~a or ~b) have no units and no pure literals, so every
        // pair costs exactly one decision on the path to a solution.
        let num_pairs = 300;
        let mut clauses = Vec::new();
        for pair in 0..num_pairs {
            let (a, b) = (2 * pair + 1, 2 * pair + 2);
            clauses.push(vec![a, b]);
            clauses.push(vec![-a, -b]);
        }
        let clauses = clauses.iter().map(Vec::as_slice).collect::<Vec<_>>();

        let mut solver = DpllSolver::new(MaxOccurrence::default());
        let result = solver.solve(ClauseDatabase::from_dimacs(&clauses));

        assert_eq!(SatisfactionResult::Satisfiable, result);
        assert_eq!(num_pairs as u64, solver.statistics().num_decisions);
        assert_eq!(num_pairs as u64, solver.statistics().max_depth);
        assert_eq!(0, solver.statistics().num_conflicts);
    }

    #[derive(Debug)]
    struct LargestVariable;

    impl VariableSelector for LargestVariable {
        fn select_variable(&mut self, database: &ClauseDatabase) -> Option<Variable> {
            database
                .occurrence_counts()
                .iter()
                .map(|(variable, _)| variable)
                .last()
        }
    }

    #[test]
    fn verdict_does_not_depend_on_the_selector() {
        let clauses: &[&[i32]] = &[
            &[1, 2, 3],
            &[-1, -2],
            &[-1, -3],
            &[-2, -3],
            &[1, -2, 3],
            &[-1, 2, -3],
        ];

        let default_result = solve(clauses);
        let custom_result =
            DpllSolver::new(LargestVariable).solve(ClauseDatabase::from_dimacs(clauses));

        assert_eq!(default_result, custom_result);
    }
}
