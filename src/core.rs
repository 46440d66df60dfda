pub mod error;
pub mod weight;

mod edges;

pub use edges::*;
pub use weight::{Weight, DEFAULT_WEIGHT};
