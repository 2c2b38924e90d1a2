use crate::domain::order::RawSubmission;
use crate::error::{OrderError, Result};
use std::io::Read;

/// Reads order submissions from a CSV source.
///
/// The header row names the form fields. Columns may come in any order,
/// unknown columns are ignored and missing ones read as empty strings, so a
/// partial export of the form still loads.
pub struct SubmissionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SubmissionReader<R> {
    /// Creates a new `SubmissionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads submissions, one per row.
    pub fn submissions(self) -> impl Iterator<Item = Result<RawSubmission>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
