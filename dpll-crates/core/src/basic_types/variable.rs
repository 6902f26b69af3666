use crate::dpll_assert_simple;

/// A propositional variable, identified by the (positive) magnitude of its DIMACS code.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Variable {
    id: u32,
}

impl Variable {
    /// The largest id which still has a representable negative literal.
    pub const MAX_ID: u32 = i32::MAX as u32;

    pub fn new(id: u32) -> Variable {
        dpll_assert_simple!(
            id != 0 && id <= Variable::MAX_ID,
            "variable ids are in the range 1..={}, got {id}",
            Variable::MAX_ID
        );
        Variable { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
