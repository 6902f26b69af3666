//! The core of the DPLL satisfiability solver.
//!
//! A formula in conjunctive normal form is loaded into a [`ClauseDatabase`] and handed to a
//! [`DpllSolver`], which decides whether the formula is satisfiable:
//!
//! ```rust
//! # use dpll_core::basic_types::Literal;
//! # use dpll_core::branching::MaxOccurrence;
//! # use dpll_core::ClauseDatabase;
//! # use dpll_core::DpllSolver;
//! # use dpll_core::SatisfactionResult;
//! let clauses = [vec![1, 2], vec![-1], vec![-2]]
//!     .into_iter()
//!     .map(|clause| {
//!         clause
//!             .into_iter()
//!             .map(|code| Literal::try_from(code).expect("nonzero"))
//!             .collect::<Vec<_>>()
//!     })
//!     .collect::<Vec<_>>();
//!
//! let mut solver = DpllSolver::new(MaxOccurrence::default());
//! let result = solver.solve(ClauseDatabase::from_clauses(clauses));
//!
//! assert_eq!(SatisfactionResult::Unsatisfiable, result);
//! ```
//!
//! The simplification rules used by the solver are exposed in [`engine::simplification`] so they
//! can be applied to a database directly.
pub mod asserts;
pub mod basic_types;
pub mod branching;
pub mod containers;
pub mod engine;
pub mod statistics;

mod results;

pub use engine::ClauseDatabase;
pub use engine::DpllSolver;
pub use results::SatisfactionResult;
