//! Contains the variable selection used by the solver to decide which variable to branch on.
//!
//! A [`VariableSelector`] inspects the current (simplified) [`ClauseDatabase`] and returns the
//! variable the solver should branch on next. The solver first explores the branch in which the
//! selected variable is true, and then the branch in which it is false.
//!
//! [`ClauseDatabase`]: crate::engine::ClauseDatabase
pub mod tie_breaking;
pub mod variable_selection;

pub use tie_breaking::InOrderTieBreaker;
pub use variable_selection::MaxOccurrence;
pub use variable_selection::VariableSelector;
