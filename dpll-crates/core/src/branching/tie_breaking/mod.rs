//! Tie-breaking between variables which score equally under a selection heuristic.
mod in_order_tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;
