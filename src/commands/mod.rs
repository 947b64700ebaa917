//! Command implementations

pub mod scores;
pub mod simple;

pub use scores::{clear_scores, show_scores};
pub use simple::run_simple;
