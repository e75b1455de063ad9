//! Support analysis and buy plan construction.

pub mod engine;
pub mod plan;

pub use engine::*;
pub use plan::*;
