use crate::domain::payout::PayoutRequest;
use crate::error::{Result, ValidationError};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    Accepted,
    Rejected,
}

/// Outcome of one submitted request, as reported to the caller.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Decision {
    /// 1-based position of the request in the input.
    pub row: usize,
    pub user_id: Option<String>,
    /// Written as a string (`"5"`, `"10.10"`) in both formats so the exact
    /// decimal value and scale survive JSON output.
    pub amount: Decimal,
    pub currency: Option<String>,
    pub status: DecisionStatus,
    pub reason: Option<String>,
}

impl Decision {
    pub fn new(
        row: usize,
        request: PayoutRequest,
        outcome: std::result::Result<bool, ValidationError>,
    ) -> Self {
        let (status, reason) = match outcome {
            Ok(_) => (DecisionStatus::Accepted, None),
            Err(e) => (DecisionStatus::Rejected, Some(e.to_string())),
        };
        Self {
            row,
            user_id: request.user_id,
            amount: request.amount,
            currency: request.currency,
            status,
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Writes decisions either as CSV with a header row or as JSON lines.
pub enum DecisionWriter<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

impl<W: Write> DecisionWriter<W> {
    pub fn new(sink: W, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv(csv::Writer::from_writer(sink)),
            OutputFormat::Json => Self::Json(sink),
        }
    }

    pub fn write_decision(&mut self, decision: &Decision) -> Result<()> {
        match self {
            Self::Csv(writer) => writer.serialize(decision)?,
            Self::Json(sink) => {
                serde_json::to_writer(&mut *sink, decision)?;
                writeln!(sink)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match self {
            Self::Csv(writer) => writer.flush()?,
            Self::Json(sink) => sink.flush()?,
        }
        Ok(())
    }
}
