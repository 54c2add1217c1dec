//! Unit converter
//!
//! Converts a value between units of one category (Length, Weight,
//! Temperature). The engine lives in [`core::features::unit_converter`];
//! [`api::commands`] exposes it as serializable commands and an interactive form.

pub mod api;
pub mod core;
pub mod shared;

pub use crate::core::features::unit_converter::{convert_units, Category, Conversion, Unit};
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::errors::{ConversionError, ConversionResult};
