/// The verdict of the solver on a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SatisfactionResult {
    /// Some assignment of the variables satisfies every clause.
    Satisfiable,
    /// No assignment satisfies every clause.
    Unsatisfiable,
}

impl SatisfactionResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatisfactionResult::Satisfiable)
    }
}

impl std::fmt::Display for SatisfactionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SatisfactionResult::Satisfiable => write!(f, "sat"),
            SatisfactionResult::Unsatisfiable => write!(f, "unsat"),
        }
    }
}
