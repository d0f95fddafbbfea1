use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use crate::cell::RegistryCell;
use crate::error::Result;
use crate::index::{DuplicatePolicy, Registry, RegistryBuilder};
use crate::member::Member;

/// Requirements on an enumeration's identifier type.
///
/// Implemented for every type that is ordered, hashable, printable and shareable
/// across threads (integers, `&'static str`, `String`, UUIDs, ...).
pub trait EnumId: Ord + Hash + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> EnumId for T where T: Ord + Hash + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// A closed family of named singleton values.
///
/// Implement this with the [`enumeration!`](crate::enumeration) macro rather than by
/// hand; the macro also generates identity-based equality, ordering, hashing, display
/// and id conversions for the type.
///
/// The associated lookups build the type's [`Registry`] on first use and read from it
/// afterwards. If the member declarations are defective (empty or duplicate names), the
/// `Result` lookups ([`from_id`](Self::from_id), [`from_name`](Self::from_name)) return
/// the structural error. The helpers without an error channel ([`all`](Self::all),
/// [`try_from_id`](Self::try_from_id), [`try_from_name`](Self::try_from_name),
/// [`from_id_or_default`](Self::from_id_or_default)) panic with it instead.
pub trait Enumeration: Sized + Send + Sync + 'static {
	/// Identifier type compared by equality and ordering.
	type Id: EnumId;

	/// Type tag used in error messages and logs.
	const TYPE_NAME: &'static str;

	/// How the id index resolves members that share an id.
	const ID_POLICY: DuplicatePolicy = DuplicatePolicy::FirstWins;

	/// Returns the member's metadata.
	fn meta(&self) -> &Member<Self::Id>;

	/// Feeds every declared member into `builder`.
	fn discover(builder: RegistryBuilder<Self>) -> RegistryBuilder<Self>;

	/// Returns the process-wide cell caching this type's registry.
	fn registry_cell() -> &'static RegistryCell<Self>;

	/// Returns the member's identifier.
	#[inline]
	fn id(&self) -> &Self::Id {
		self.meta().id()
	}

	/// Returns the member's display name.
	#[inline]
	fn name(&self) -> &'static str {
		self.meta().name()
	}

	/// Discovers the members and builds a fresh registry, bypassing the cache.
	fn build_registry() -> Result<Registry<Self>> {
		Self::discover(RegistryBuilder::new(Self::TYPE_NAME)).build()
	}

	/// Returns the cached registry, building it on first use.
	///
	/// # Errors
	///
	/// Returns the structural build error if the member declarations are defective.
	/// A failed build is not cached; the next call runs discovery again.
	fn try_registry() -> Result<&'static Registry<Self>> {
		Self::registry_cell().get_or_try_init(Self::build_registry)
	}

	/// Returns the cached registry, building it on first use.
	///
	/// # Panics
	///
	/// Panics if the member declarations are defective.
	fn registry() -> &'static Registry<Self> {
		match Self::try_registry() {
			Ok(registry) => registry,
			Err(e) => panic!("registry {}: {}", Self::TYPE_NAME, e),
		}
	}

	/// Returns every member, sorted by name.
	///
	/// # Panics
	///
	/// Panics if the member declarations are defective.
	fn all() -> &'static [&'static Self] {
		Self::registry().members()
	}

	/// Returns the member owning `id`.
	///
	/// When several members share `id`, the one chosen by [`Self::ID_POLICY`] is
	/// returned (by default the first by name).
	///
	/// # Errors
	///
	/// - The structural build error if the member declarations are defective.
	/// - [`EnumerationError::NotFound`] if no member owns `id`.
	///
	/// [`EnumerationError::NotFound`]: crate::EnumerationError::NotFound
	fn from_id<Q>(id: &Q) -> Result<&'static Self>
	where
		Self::Id: Borrow<Q>,
		Q: Hash + Eq + fmt::Display + ?Sized,
	{
		Self::try_registry()?.from_id(id)
	}

	/// Returns the member owning `id`, or `None`.
	///
	/// # Panics
	///
	/// Panics if the member declarations are defective.
	fn try_from_id<Q>(id: &Q) -> Option<&'static Self>
	where
		Self::Id: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		Self::registry().try_from_id(id)
	}

	/// Returns the member owning `id`, or `default`.
	///
	/// # Panics
	///
	/// Panics if the member declarations are defective.
	fn from_id_or_default<Q>(id: &Q, default: &'static Self) -> &'static Self
	where
		Self::Id: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		Self::registry().from_id_or_default(id, default)
	}

	/// Returns the member called `name`.
	///
	/// # Errors
	///
	/// - The structural build error if the member declarations are defective.
	/// - [`EnumerationError::DuplicateName`] for a case-insensitive lookup when two
	///   members share a fold-cased name.
	/// - [`EnumerationError::InvalidArgument`] if `name` is empty.
	/// - [`EnumerationError::NotFound`] if no member has that name.
	///
	/// [`EnumerationError::DuplicateName`]: crate::EnumerationError::DuplicateName
	/// [`EnumerationError::InvalidArgument`]: crate::EnumerationError::InvalidArgument
	/// [`EnumerationError::NotFound`]: crate::EnumerationError::NotFound
	fn from_name(name: &str, ignore_case: bool) -> Result<&'static Self> {
		Self::try_registry()?.from_name(name, ignore_case)
	}

	/// Returns the member called `name`, or `None`. Empty names yield `None`.
	///
	/// # Panics
	///
	/// Panics if the member declarations are defective, including a fold-cased name
	/// collision when `ignore_case` is set.
	fn try_from_name(name: &str, ignore_case: bool) -> Option<&'static Self> {
		match Self::from_name(name, ignore_case) {
			Ok(member) => Some(member),
			Err(e) if e.is_structural() => panic!("registry {}: {}", Self::TYPE_NAME, e),
			Err(_) => None,
		}
	}
}

/// Inventory wrapper exposing a submitted member.
///
/// The [`enumeration!`](crate::enumeration) macro generates one wrapper per
/// `inventory` declaration and [`member!`](crate::member) submits into it.
pub trait MemberReg<T: Enumeration>: 'static {
	/// Returns the submitted member.
	fn member(&self) -> &'static T;
}
