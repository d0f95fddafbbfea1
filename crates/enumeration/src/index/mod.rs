//! Registry index construction and lookup.
//!
//! [`RegistryBuilder`] turns a discovered member set into an immutable [`Registry`]:
//!
//! ```rust,ignore
//! let registry = RegistryBuilder::new("BookGenre")
//!     .extend([&ANTHOLOGY, &BIOGRAPHY])
//!     .build()?;
//! ```
//!
//! # Index Rules
//!
//! - Members are ordered by fold-cased name, with the exact bytes breaking ties, so
//!   `"alpha"` precedes `"Beta"` and `"Alpha"` precedes `"alpha"`. The order does not
//!   depend on the process locale.
//! - Exact names must be unique; a collision fails the whole build with
//!   [`EnumerationError::DuplicateName`].
//! - Fold-cased names should be unique. A collision there only disables the
//!   case-insensitive index: those lookups return the `DuplicateName` error while every
//!   other lookup keeps working.
//! - Ids may repeat. The id index resolves repeats with the enumeration's
//!   [`DuplicatePolicy`]; the default keeps the member that sorts first by name and
//!   records the skipped one as an [`IdCollision`].
//!
//! [`EnumerationError::DuplicateName`]: crate::EnumerationError::DuplicateName

use std::fmt;

mod build;
mod registry;

pub use build::RegistryBuilder;
pub use registry::{IdCollision, Registry};

/// Policy for members that share an id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Keep the member that sorts first by name.
	#[default]
	FirstWins,
	/// Keep the member that sorts last by name.
	LastWins,
	/// Fail the build with [`EnumerationError::DuplicateId`].
	///
	/// [`EnumerationError::DuplicateId`]: crate::EnumerationError::DuplicateId
	Reject,
}

/// Identifies which name index detected a collision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameIndex {
	/// Exact, case-sensitive names.
	Exact,
	/// Fold-cased names.
	IgnoreCase,
}

impl fmt::Display for NameIndex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exact => write!(f, "exact"),
			Self::IgnoreCase => write!(f, "case-insensitive"),
		}
	}
}

/// Normalizes a name for the case-insensitive index.
///
/// Uses Unicode lower-casing, so `"STRASSE"` and `"strasse"` fold together while
/// `"Straße"` stays distinct. Also the primary key of member order.
pub fn fold_case(name: &str) -> Box<str> {
	name.to_lowercase().into_boxed_str()
}
