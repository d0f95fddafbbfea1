use std::fmt;

use crate::error::{EnumerationError, Result};

/// Identity and label of one enumeration member.
///
/// Enumeration types embed a `Member` in a field named `meta` and declare their
/// values as `static` items:
///
/// ```rust,ignore
/// pub struct BookGenre {
///     meta: Member<i32>,
/// }
///
/// pub static ANTHOLOGY: BookGenre = BookGenre { meta: Member::new(1, "Anthology") };
/// ```
///
/// The constructor is `const` so members can live in statics. Names are checked when
/// the owning registry is built; an empty name surfaces as
/// [`EnumerationError::InvalidMember`] on the first lookup.
#[derive(Debug, Clone, Copy)]
pub struct Member<Id> {
	id: Id,
	name: &'static str,
}

impl<Id> Member<Id> {
	/// Creates member metadata from an id and a display name.
	pub const fn new(id: Id, name: &'static str) -> Self {
		Self { id, name }
	}

	/// Returns the member's identifier.
	#[inline]
	pub const fn id(&self) -> &Id {
		&self.id
	}

	/// Returns the member's display name.
	#[inline]
	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// Returns true if the metadata satisfies the member invariants.
	#[inline]
	pub const fn is_valid(&self) -> bool {
		!self.name.is_empty()
	}
}

impl<Id: fmt::Display> Member<Id> {
	/// Creates member metadata, rejecting an empty name here instead of at the first
	/// registry build. Not `const`, so it cannot initialize a `static` directly.
	pub fn try_new(id: Id, name: &'static str, enumeration: &'static str) -> Result<Self> {
		let member = Self::new(id, name);
		member.validate(enumeration)?;
		Ok(member)
	}

	/// Checks the member invariants on behalf of the enumeration named `enumeration`.
	pub fn validate(&self, enumeration: &'static str) -> Result<()> {
		if self.is_valid() {
			Ok(())
		} else {
			Err(EnumerationError::InvalidMember {
				enumeration,
				id: self.id.to_string(),
			})
		}
	}
}

impl<Id> fmt::Display for Member<Id> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
