//! Application layer: orchestration of a single order submission.
//!
//! `OrderPipeline` runs validation, pricing and dating, appends the accepted
//! order through the storage port and returns the receipt.

pub mod pipeline;
