pub mod delegation;
pub mod stats;

pub use delegation::*;
pub use stats::*;
