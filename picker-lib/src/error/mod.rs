//! Error types

mod config;
mod payload;
mod tree;

pub use config::*;
pub use payload::*;
pub use tree::*;
