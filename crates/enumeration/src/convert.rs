//! Conversions between members and their identifiers.

use crate::error::Result;
use crate::traits::Enumeration;

/// Narrows a member to its identifier. Always succeeds.
#[inline]
pub fn id_of<T: Enumeration>(member: &T) -> T::Id {
	member.id().clone()
}

/// Widens an identifier to its member through [`Enumeration::from_id`].
///
/// # Errors
///
/// Returns [`EnumerationError::NotFound`](crate::EnumerationError::NotFound) if no
/// member owns `id`.
#[inline]
pub fn member_from_id<T: Enumeration>(id: T::Id) -> Result<&'static T> {
	T::from_id(&id)
}
