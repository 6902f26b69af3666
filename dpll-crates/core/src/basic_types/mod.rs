mod literal;
mod variable;

pub use literal::*;
pub use variable::*;
