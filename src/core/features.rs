//! Feature modules
//!
//! Each feature owns its domain logic; the command layer in `api` wraps it
//! into serializable request/response types.

pub mod unit_converter;
