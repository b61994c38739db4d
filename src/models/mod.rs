pub mod catalog;
pub mod task;

pub use catalog::*;
pub use task::*;
