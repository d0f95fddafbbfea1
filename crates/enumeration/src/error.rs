use std::fmt;

use thiserror::Error;

use crate::index::NameIndex;

/// Convenience alias for results carrying an [`EnumerationError`].
pub type Result<T, E = EnumerationError> = std::result::Result<T, E>;

/// The key a failed lookup was searching for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
	/// Lookup by identifier, holding the identifier's display form.
	Id(String),
	/// Lookup by name, exact or case-insensitive.
	Name(String),
}

impl fmt::Display for LookupKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Id(id) => write!(f, "Id {id}"),
			Self::Name(name) => write!(f, "Name \"{name}\""),
		}
	}
}

/// Errors raised while building an enumeration registry or looking up members.
///
/// Build-time variants ([`InvalidMember`], [`DuplicateName`], [`DuplicateId`]) describe
/// defects in the static member declarations and repeat deterministically on every build
/// attempt. Lookup-time variants ([`NotFound`], [`InvalidArgument`]) are expected
/// conditions; use the `try_*` accessors when a miss is anticipated.
///
/// [`InvalidMember`]: Self::InvalidMember
/// [`DuplicateName`]: Self::DuplicateName
/// [`DuplicateId`]: Self::DuplicateId
/// [`NotFound`]: Self::NotFound
/// [`InvalidArgument`]: Self::InvalidArgument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
	/// A declared member has an empty name.
	#[error("invalid member in {enumeration}: member with id {id} has an empty name")]
	InvalidMember { enumeration: &'static str, id: String },

	/// Two members collide in one of the name indices.
	#[error(
		"duplicate name in {enumeration} ({index} index): {name:?} is declared by ids {existing_id} and {new_id}"
	)]
	DuplicateName {
		enumeration: &'static str,
		index: NameIndex,
		name: &'static str,
		existing_id: String,
		new_id: String,
	},

	/// Two members share an id and the enumeration opted into [`DuplicatePolicy::Reject`].
	///
	/// [`DuplicatePolicy::Reject`]: crate::DuplicatePolicy::Reject
	#[error("duplicate id in {enumeration}: {id} is declared by {existing_name:?} and {new_name:?}")]
	DuplicateId {
		enumeration: &'static str,
		id: String,
		existing_name: &'static str,
		new_name: &'static str,
	},

	/// No member matched the requested id or name.
	#[error("No {enumeration} with {key} found.")]
	NotFound { enumeration: &'static str, key: LookupKey },

	/// A lookup argument was rejected before consulting the registry.
	#[error("invalid argument `{argument}`: {reason}")]
	InvalidArgument { argument: &'static str, reason: &'static str },
}

impl EnumerationError {
	/// Returns true for errors caused by the member declarations themselves.
	pub fn is_structural(&self) -> bool {
		matches!(
			self,
			Self::InvalidMember { .. } | Self::DuplicateName { .. } | Self::DuplicateId { .. }
		)
	}

	/// Returns true if this is a lookup miss.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}

	pub(crate) fn not_found(enumeration: &'static str, key: LookupKey) -> Self {
		Self::NotFound { enumeration, key }
	}
}
