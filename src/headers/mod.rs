//! Header expectation engine.
//!
//! - `merge`: layers header maps with last-writer-wins per header name
//! - `evaluate`: compares expected values for one header with what a response carried

mod evaluate;
mod merge;

pub use evaluate::{evaluate, HeaderCheck, Verdict};
pub use merge::merge;
