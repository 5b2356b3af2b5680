use crate::core::{Console, Pipeline};
use crate::domain::model::{DifferenceResult, IntPair};
use crate::utils::error::{CalcError, Result};
use std::collections::VecDeque;

const FIRST_PROMPT: &str = "Enter the first integer: ";
const SECOND_PROMPT: &str = "Enter the second integer: ";

pub struct DifferencePipeline<C: Console> {
    console: C,
    tokens: VecDeque<String>,
}

impl<C: Console> DifferencePipeline<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            tokens: VecDeque::new(),
        }
    }

    // Tokens are split on any whitespace, so both integers may arrive on one
    // line and blank lines are skipped.
    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }

            match self.console.read_line()? {
                Some(line) => {
                    self.tokens
                        .extend(line.split_whitespace().map(str::to_string));
                }
                None => return Err(CalcError::InputExhaustedError),
            }
        }
    }

    fn next_int(&mut self) -> Result<i64> {
        let token = self.next_token()?;
        tracing::debug!("Parsing token: {:?}", token);

        token
            .parse::<i64>()
            .map_err(|source| CalcError::InputParseError { token, source })
    }
}

impl<C: Console> Pipeline for DifferencePipeline<C> {
    fn read(&mut self) -> Result<IntPair> {
        self.console.print(FIRST_PROMPT)?;
        let first = self.next_int()?;

        self.console.print(SECOND_PROMPT)?;
        let second = self.next_int()?;

        Ok(IntPair { first, second })
    }

    fn compute(&self, pair: IntPair) -> Result<DifferenceResult> {
        // Unsigned subtraction after comparison: no overflow at the i64 extremes.
        let difference = pair.first.abs_diff(pair.second);

        Ok(DifferenceResult { pair, difference })
    }

    fn report(&mut self, result: &DifferenceResult) -> Result<()> {
        self.console.print_line(&format!(
            "The difference between the two integers is: {}",
            result.difference
        ))
    }
}
