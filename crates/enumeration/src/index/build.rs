use std::collections::hash_map::Entry;

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use super::registry::{IdCollision, Registry};
use super::{DuplicatePolicy, NameIndex, fold_case};
use crate::error::{EnumerationError, Result};
use crate::traits::{Enumeration, MemberReg};

/// Builder for constructing a [`Registry`].
///
/// Collects members from explicit lists or inventory, validates them, and produces the
/// final indices. Discovery order does not matter; members are sorted by name before
/// indexing.
pub struct RegistryBuilder<T: Enumeration> {
	label: &'static str,
	members: Vec<&'static T>,
	policy: DuplicatePolicy,
}

impl<T: Enumeration> RegistryBuilder<T> {
	/// Creates a new builder with the given label for error messages.
	///
	/// The id policy defaults to the enumeration's [`Enumeration::ID_POLICY`].
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			members: Vec::new(),
			policy: T::ID_POLICY,
		}
	}

	/// Sets the duplicate id handling policy.
	pub fn id_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Returns the number of members collected so far.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true if no members have been collected.
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Adds a single member.
	pub fn push(mut self, member: &'static T) -> Self {
		self.members.push(member);
		self
	}

	/// Adds multiple members.
	pub fn extend<I: IntoIterator<Item = &'static T>>(mut self, members: I) -> Self {
		self.members.extend(members);
		self
	}

	/// Collects every member submitted through the wrapper type `R`.
	///
	/// `R` must be collected with `inventory::collect!(R)`; the
	/// [`enumeration!`](crate::enumeration) macro does this for `inventory` declarations.
	pub fn extend_inventory<R>(mut self) -> Self
	where
		R: MemberReg<T>,
		inventory::iter<R>: IntoIterator<Item = &'static R>,
	{
		for reg in inventory::iter::<R> {
			self.members.push(reg.member());
		}
		self
	}

	/// Validates the collected members and builds the indices.
	///
	/// # Errors
	///
	/// - [`EnumerationError::InvalidMember`] if a member has an empty name.
	/// - [`EnumerationError::DuplicateName`] on an exact name collision. A fold-cased
	///   collision is kept on the registry and only fails case-insensitive lookups.
	/// - [`EnumerationError::DuplicateId`] on a shared id under [`DuplicatePolicy::Reject`].
	pub fn build(mut self) -> Result<Registry<T>> {
		let label = self.label;

		// The same static may be contributed twice; that is not a name collision.
		let mut seen = HashSet::with_capacity_and_hasher(self.members.len(), Default::default());
		self.members.retain(|m| seen.insert(*m as *const T as usize));

		for member in &self.members {
			member.meta().validate(label)?;
		}

		self.members.sort_by_cached_key(|m| name_order_key(m.name()));

		let len = self.members.len();
		let mut by_name = HashMap::with_capacity_and_hasher(len, Default::default());
		for &member in &self.members {
			insert_name(&mut by_name, member.name(), member, NameIndex::Exact, label)?;
		}

		let by_name_ci = self.fold_names();
		if let Err(e) = &by_name_ci {
			tracing::warn!(enumeration = label, error = %e, "case-insensitive name index disabled");
		}

		let mut by_id = HashMap::with_capacity_and_hasher(len, Default::default());
		let mut id_collisions = Vec::new();

		for &member in &self.members {
			match by_id.entry(member.id().clone()) {
				Entry::Vacant(slot) => {
					slot.insert(member);
				}
				Entry::Occupied(mut slot) => {
					let existing: &'static T = *slot.get();
					let collision = match self.policy {
						DuplicatePolicy::FirstWins => IdCollision {
							kept: existing,
							skipped: member,
						},
						DuplicatePolicy::LastWins => {
							slot.insert(member);
							IdCollision {
								kept: member,
								skipped: existing,
							}
						}
						DuplicatePolicy::Reject => {
							return Err(EnumerationError::DuplicateId {
								enumeration: label,
								id: member.id().to_string(),
								existing_name: existing.name(),
								new_name: member.name(),
							});
						}
					};
					tracing::trace!(
						enumeration = label,
						id = %member.id(),
						kept = collision.kept.name(),
						skipped = collision.skipped.name(),
						"duplicate enumeration id"
					);
					id_collisions.push(collision);
				}
			}
		}

		tracing::debug!(
			enumeration = label,
			members = len,
			id_collisions = id_collisions.len(),
			"enumeration registry built"
		);

		Ok(Registry {
			label,
			members: self.members,
			by_name,
			by_name_ci,
			by_id,
			id_collisions,
		})
	}

	fn fold_names(&self) -> Result<HashMap<Box<str>, &'static T>> {
		let mut folded = HashMap::with_capacity_and_hasher(self.members.len(), Default::default());
		for &member in &self.members {
			insert_name(
				&mut folded,
				fold_case(member.name()),
				member,
				NameIndex::IgnoreCase,
				self.label,
			)?;
		}
		Ok(folded)
	}
}

/// Sort key for member order: fold-cased name first, exact bytes as tie-break.
fn name_order_key(name: &'static str) -> (Box<str>, &'static str) {
	(fold_case(name), name)
}

fn insert_name<K, T>(
	map: &mut HashMap<K, &'static T>,
	key: K,
	member: &'static T,
	index: NameIndex,
	label: &'static str,
) -> Result<()>
where
	K: std::hash::Hash + Eq,
	T: Enumeration,
{
	match map.entry(key) {
		Entry::Vacant(slot) => {
			slot.insert(member);
			Ok(())
		}
		Entry::Occupied(slot) => {
			let existing = *slot.get();
			Err(EnumerationError::DuplicateName {
				enumeration: label,
				index,
				name: member.name(),
				existing_id: existing.id().to_string(),
				new_id: member.id().to_string(),
			})
		}
	}
}
