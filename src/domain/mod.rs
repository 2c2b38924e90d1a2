//! Domain model of a cake order: the catalog and pricing rules, delivery
//! dates, validation of raw submissions, and the storage port.

pub mod cake;
pub mod catalog;
pub mod delivery;
pub mod money;
pub mod order;
pub mod ports;
pub mod pricing;
pub mod validation;
