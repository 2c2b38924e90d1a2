//! Adapters implementing the domain's storage port.

pub mod csv_log;
pub mod in_memory;
