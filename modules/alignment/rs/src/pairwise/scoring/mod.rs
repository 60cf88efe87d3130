pub use crate::Score;

pub mod gaps;
pub mod symbols;
