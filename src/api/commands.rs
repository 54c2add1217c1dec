//! Command modules
//!
//! Feature-specific submodules following Modern Rust idioms (no mod.rs pattern).
//!
//! ## Architecture
//!
//! - `converter`: Conversion, category and unit listing commands
//! - `form`: Interactive line-oriented conversion form

pub mod converter;
pub mod form;
