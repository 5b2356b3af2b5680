pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{DifferenceResult, IntPair};
pub use crate::domain::ports::{Console, Pipeline};
pub use crate::utils::error::Result;
