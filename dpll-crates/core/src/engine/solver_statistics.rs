use crate::create_statistics_struct;

create_statistics_struct!(
    /// Statistics of the search performed by the [`DpllSolver`](super::DpllSolver), accumulated
    /// over every call to `solve`.
    pub SolverStatistics {
        /// The number of databases taken from the work stack and simplified
        num_nodes: u64,
        /// The number of branching decisions, each of which creates two child databases
        num_decisions: u64,
        /// The number of simplified databases which contained an empty clause
        num_conflicts: u64,
        /// The number of unit literals propagated
        num_unit_propagations: u64,
        /// The number of pure literals whose clauses were eliminated
        num_pure_literals: u64,
        /// The largest number of decisions on a single path from the root
        max_depth: u64,
});
