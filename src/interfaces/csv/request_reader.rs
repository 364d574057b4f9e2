use crate::domain::payout::PayoutRequest;
use crate::error::{PayoutError, Result};
use std::io::Read;

/// Reads payout requests from a CSV source with a `user_id,amount,currency` header.
///
/// Fields are trimmed and empty fields are read as absent values, so a blank
/// `user_id` or `currency` column reaches validation as missing.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes requests, one result per data row.
    pub fn requests(self) -> impl Iterator<Item = Result<PayoutRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayoutError::from))
    }
}
