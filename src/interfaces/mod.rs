//! Ways into the pipeline: CSV batch import and the HTTP order form.

pub mod csv;
pub mod http;
