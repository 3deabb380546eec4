//! Shared wire contracts for the SnapLink admin dashboard.
//!
//! Every type in this crate mirrors a JSON payload of the SnapLink REST
//! backend verbatim. The crate carries no UI dependencies so the DTOs and
//! status enums can be tested natively.

pub mod dashboards;
pub mod domain;
pub mod shared;
