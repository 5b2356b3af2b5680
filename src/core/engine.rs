use crate::core::Pipeline;
use crate::domain::model::DifferenceResult;
use crate::utils::error::Result;

pub struct CalcEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CalcEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&mut self) -> Result<DifferenceResult> {
        tracing::debug!("Reading input...");
        let pair = self.pipeline.read()?;
        tracing::debug!("Read integers: {} and {}", pair.first, pair.second);

        tracing::debug!("Computing difference...");
        let result = self.pipeline.compute(pair)?;

        tracing::debug!("Reporting result...");
        self.pipeline.report(&result)?;

        Ok(result)
    }
}
