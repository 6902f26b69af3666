mod max_occurrence;

pub use max_occurrence::MaxOccurrence;

use crate::basic_types::Variable;
use crate::engine::ClauseDatabase;

/// A trait containing the interface for [`VariableSelector`]s, specifying the appropriate hooks
/// and methods.
pub trait VariableSelector {
    /// Determines which variable to select next. Returns [`None`] only if no clause in the
    /// database contains a literal.
    fn select_variable(&mut self, database: &ClauseDatabase) -> Option<Variable>;
}
