mod clause_database;
mod dpll_solver;
mod occurrence_counts;
pub mod simplification;
mod solver_statistics;

pub use clause_database::*;
pub use dpll_solver::*;
pub use occurrence_counts::*;
pub use solver_statistics::*;
