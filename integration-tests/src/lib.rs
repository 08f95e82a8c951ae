//! Passes shared by the integration tests.
//!
//! Together they form a small record pipeline: parse a decimal field, drop
//! values outside an accepted range, scale what remains, and render a
//! report line using a configuration threaded through as the receiver.

use thiserror::Error;
use weft_core::{OrSkip, Pass, Plain};

/// Error produced by [`ParseDecimal`] for malformed fields.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{text}` is not a decimal number")]
pub struct NotDecimal {
    pub text: String,
}

/// Errors surfaced by the record pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] NotDecimal),

    #[error("value {0} exceeds the hard limit")]
    OverLimit(i64),
}

/// Parses a trimmed decimal field.
#[derive(Debug, Clone, Copy)]
pub struct ParseDecimal;

impl<Cx> Pass<Cx> for ParseDecimal {
    type Input = String;
    type Outcome = Plain<i64>;
    type Error = NotDecimal;

    fn call(&self, _this: Option<&Cx>, input: String) -> Result<Self::Outcome, Self::Error> {
        input
            .trim()
            .parse()
            .map(Plain)
            .map_err(|_| NotDecimal { text: input })
    }
}

/// Keeps values inside a closed range, skipping the rest of the chain for
/// anything outside it.
#[derive(Debug, Clone, Copy)]
pub struct KeepInRange {
    pub min: i64,
    pub max: i64,
}

impl<Cx> Pass<Cx> for KeepInRange {
    type Input = i64;
    type Outcome = OrSkip<i64>;
    type Error = PipelineError;

    fn call(&self, _this: Option<&Cx>, input: i64) -> Result<Self::Outcome, Self::Error> {
        if (self.min..=self.max).contains(&input) {
            Ok(OrSkip::Next(input))
        } else {
            Ok(OrSkip::Skip)
        }
    }
}

/// Multiplies a value by a constant factor, failing past a hard limit.
#[derive(Debug, Clone, Copy)]
pub struct ScaleBy {
    pub factor: i64,
    pub limit: i64,
}

impl<Cx> Pass<Cx> for ScaleBy {
    type Input = i64;
    type Outcome = Plain<i64>;
    type Error = PipelineError;

    fn call(&self, _this: Option<&Cx>, input: i64) -> Result<Self::Outcome, Self::Error> {
        let scaled = input * self.factor;

        if scaled > self.limit {
            Err(PipelineError::OverLimit(scaled))
        } else {
            Ok(Plain(scaled))
        }
    }
}

/// Configuration threaded through report-rendering chains as the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub prefix: String,
}

impl ReportConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

/// Renders a report line, honoring the [`ReportConfig`] receiver in effect.
#[derive(Debug, Clone, Copy)]
pub struct RenderReport;

impl Pass<ReportConfig> for RenderReport {
    type Input = i64;
    type Outcome = Plain<String>;
    type Error = PipelineError;

    fn call(
        &self,
        this: Option<&ReportConfig>,
        input: i64,
    ) -> Result<Self::Outcome, Self::Error> {
        let prefix = this.map_or("report", |config| config.prefix.as_str());

        Ok(Plain(format!("{prefix}: {input}")))
    }
}
