//! Error types for the PageHook protocol layer.

mod send;
mod validation;

pub use send::*;
pub use validation::*;
