//! Storage boundary for closed enumerations.
//!
//! Enumeration members are persisted as their ids. This crate provides the pieces a
//! storage layer needs to do that:
//!
//! - [`IdConverter`]: a bidirectional member/id converter for mapping layers.
//! - [`serde_id`]: a `#[serde(with = "...")]` adapter for `&'static T` fields.
//! - [`ColumnNaming`]: the naming convention for id columns.
//!
//! Reading back an id that no member owns is a data-integrity error
//! ([`ConversionError::UnknownId`]), never a silent default.

mod converter;
mod naming;
pub mod serde_id;

pub use converter::{ConversionError, IdConverter, ValueConverter};
pub use naming::{ColumnNaming, EnumColumn};
