pub mod recipes;
pub mod saved;

pub use recipes::*;
pub use saved::*;
