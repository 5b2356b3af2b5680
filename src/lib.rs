pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::StdConsole, CliConfig};
pub use crate::core::{engine::CalcEngine, pipeline::DifferencePipeline};
pub use crate::domain::model::{DifferenceResult, IntPair};
pub use crate::utils::error::{CalcError, Result};
