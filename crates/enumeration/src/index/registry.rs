use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap as HashMap;

use super::fold_case;
use crate::error::{EnumerationError, LookupKey, Result};
use crate::traits::Enumeration;

/// A member that lost an id collision during the build.
///
/// Kept for diagnostics only; the skipped member is still part of
/// [`Registry::members`] and reachable by name.
pub struct IdCollision<T: 'static> {
	/// The member the id index resolves to.
	pub kept: &'static T,
	/// The member shadowed in the id index.
	pub skipped: &'static T,
}

impl<T: 'static> Clone for IdCollision<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: 'static> Copy for IdCollision<T> {}

impl<T: Enumeration> fmt::Debug for IdCollision<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("IdCollision")
			.field("id", self.kept.id())
			.field("kept", &self.kept.name())
			.field("skipped", &self.skipped.name())
			.finish()
	}
}

/// Immutable member indices for one enumeration type.
///
/// Built once by [`RegistryBuilder`](super::RegistryBuilder) and published through a
/// [`RegistryCell`](crate::RegistryCell). Every lookup is a plain read.
///
/// A fold-case name collision disables only the case-insensitive index: the error is
/// kept and returned by case-insensitive [`from_name`](Self::from_name) calls, while
/// id, exact-name and member-list lookups work normally.
pub struct Registry<T: Enumeration> {
	pub(super) label: &'static str,
	pub(super) members: Vec<&'static T>,
	pub(super) by_name: HashMap<&'static str, &'static T>,
	pub(super) by_name_ci: Result<HashMap<Box<str>, &'static T>>,
	pub(super) by_id: HashMap<T::Id, &'static T>,
	pub(super) id_collisions: Vec<IdCollision<T>>,
}

impl<T: Enumeration> Registry<T> {
	/// Returns all members sorted by name.
	#[inline]
	pub fn members(&self) -> &[&'static T] {
		&self.members
	}

	/// Returns an iterator over all members sorted by name.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &'static T> + '_ {
		self.members.iter().copied()
	}

	/// Returns the number of members.
	#[inline]
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true if the enumeration declares no members.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Returns the id collisions resolved by the duplicate policy, in name order.
	#[inline]
	pub fn id_collisions(&self) -> &[IdCollision<T>] {
		&self.id_collisions
	}

	/// Looks up the member owning `id`.
	#[inline]
	pub fn try_from_id<Q>(&self, id: &Q) -> Option<&'static T>
	where
		T::Id: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.by_id.get(id).copied()
	}

	/// Looks up the member owning `id`, failing with
	/// [`EnumerationError::NotFound`] when there is none.
	pub fn from_id<Q>(&self, id: &Q) -> Result<&'static T>
	where
		T::Id: Borrow<Q>,
		Q: Hash + Eq + fmt::Display + ?Sized,
	{
		self.try_from_id(id)
			.ok_or_else(|| EnumerationError::not_found(self.label, LookupKey::Id(id.to_string())))
	}

	/// Looks up the member owning `id`, returning `default` when there is none.
	#[inline]
	pub fn from_id_or_default<Q>(&self, id: &Q, default: &'static T) -> &'static T
	where
		T::Id: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.try_from_id(id).unwrap_or(default)
	}

	/// Returns the case-insensitive name collision, if the declarations have one.
	pub fn folded_name_error(&self) -> Option<&EnumerationError> {
		self.by_name_ci.as_ref().err()
	}

	/// Looks up a member by name. An empty name never matches, and neither does a
	/// case-insensitive lookup while [`folded_name_error`](Self::folded_name_error) is set.
	pub fn try_from_name(&self, name: &str, ignore_case: bool) -> Option<&'static T> {
		self.find_name(name, ignore_case).ok().flatten()
	}

	fn find_name(&self, name: &str, ignore_case: bool) -> Result<Option<&'static T>> {
		if name.is_empty() {
			return Ok(None);
		}
		if ignore_case {
			let folded = self.by_name_ci.as_ref().map_err(Clone::clone)?;
			Ok(folded.get(&*fold_case(name)).copied())
		} else {
			Ok(self.by_name.get(name).copied())
		}
	}

	/// Looks up a member by name.
	///
	/// # Errors
	///
	/// - [`EnumerationError::InvalidArgument`] if `name` is empty.
	/// - [`EnumerationError::DuplicateName`] if `ignore_case` is set and two members
	///   share a fold-cased name.
	/// - [`EnumerationError::NotFound`] if no member matches in the selected index.
	pub fn from_name(&self, name: &str, ignore_case: bool) -> Result<&'static T> {
		if name.is_empty() {
			return Err(EnumerationError::InvalidArgument {
				argument: "name",
				reason: "must not be empty",
			});
		}
		self.find_name(name, ignore_case)?.ok_or_else(|| {
			EnumerationError::not_found(self.label, LookupKey::Name(name.to_owned()))
		})
	}
}

impl<T: Enumeration> fmt::Debug for Registry<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("enumeration", &self.label)
			.field("members", &self.members.iter().map(|m| m.name()).collect::<Vec<_>>())
			.field("id_collisions", &self.id_collisions.len())
			.field("ignore_case_index", &self.by_name_ci.is_ok())
			.finish()
	}
}
