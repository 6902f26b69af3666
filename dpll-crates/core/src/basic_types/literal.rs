use std::num::NonZeroI32;
use std::ops::Not;

use thiserror::Error;

use super::Variable;

/// A variable together with a polarity.
///
/// Internally the literal is stored as its DIMACS code: the magnitude is the id of the variable
/// and the sign is the polarity. The code can therefore never be zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    code: NonZeroI32,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    #[error("0 is a clause terminator and not a literal")]
    Zero,
    #[error("the literal {0} has no representable complement")]
    OutOfRange(i32),
}

impl Literal {
    pub fn new(variable: Variable, is_positive: bool) -> Literal {
        let id = variable.id() as i32;
        let code = if is_positive { id } else { -id };

        Literal {
            code: NonZeroI32::new(code)
                .expect("Variable::new asserts that the id is nonzero at every assert level"),
        }
    }

    pub fn variable(&self) -> Variable {
        Variable::new(self.code.unsigned_abs().get())
    }

    pub fn is_positive(&self) -> bool {
        self.code.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.code.is_negative()
    }

    /// The signed integer which represents this literal in a DIMACS file.
    pub fn to_dimacs(self) -> i32 {
        self.code.get()
    }
}

impl TryFrom<i32> for Literal {
    type Error = LiteralError;

    fn try_from(dimacs_code: i32) -> Result<Self, Self::Error> {
        if dimacs_code == i32::MIN {
            return Err(LiteralError::OutOfRange(dimacs_code));
        }

        NonZeroI32::new(dimacs_code)
            .map(|code| Literal { code })
            .ok_or(LiteralError::Zero)
    }
}

impl Not for Literal {
    type Output = Literal;

    fn not(self) -> Literal {
        Literal { code: -self.code }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
