use crate::domain::model::{DifferenceResult, IntPair};
use crate::utils::error::Result;

pub trait Console {
    /// Writes text without a trailing newline and flushes it, so prompts
    /// appear before the blocking read.
    fn print(&mut self, text: &str) -> Result<()>;
    fn print_line(&mut self, line: &str) -> Result<()>;
    /// Returns the next input line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;
}

pub trait Pipeline {
    fn read(&mut self) -> Result<IntPair>;
    fn compute(&self, pair: IntPair) -> Result<DifferenceResult>;
    fn report(&mut self, result: &DifferenceResult) -> Result<()>;
}
