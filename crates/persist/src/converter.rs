use std::fmt;
use std::marker::PhantomData;

use roster_enumeration::{Enumeration, EnumerationError};
use thiserror::Error;

/// Errors raised when reading stored values back into members.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
	/// The stored id does not belong to any member.
	#[error("stored id {id} does not match any {enumeration}")]
	UnknownId {
		enumeration: &'static str,
		id: String,
		#[source]
		source: EnumerationError,
	},

	/// The enumeration's registry could not be built.
	#[error(transparent)]
	Registry(#[from] EnumerationError),
}

/// Two-way mapping between a model value and its stored representation.
pub trait ValueConverter {
	/// In-memory type.
	type Model;
	/// Stored type.
	type Provider;

	/// Converts a model value for storage. Infallible.
	fn to_provider(&self, model: &Self::Model) -> Self::Provider;

	/// Reads a stored value back into the model.
	///
	/// # Errors
	///
	/// Returns [`ConversionError`] if the stored value has no model counterpart.
	fn from_provider(&self, value: Self::Provider) -> Result<Self::Model, ConversionError>;
}

/// Converts members of `T` to and from their ids.
///
/// One converter serves every enumeration type; it is zero-sized and stateless.
///
/// ```rust,ignore
/// let converter = IdConverter::<BookGenre>::new();
/// assert_eq!(converter.to_provider(&&BIOGRAPHY), 2);
/// assert_eq!(converter.from_provider(2)?, &BIOGRAPHY);
/// ```
pub struct IdConverter<T> {
	marker: PhantomData<fn() -> T>,
}

impl<T: Enumeration> IdConverter<T> {
	pub const fn new() -> Self {
		Self { marker: PhantomData }
	}
}

impl<T: Enumeration> ValueConverter for IdConverter<T> {
	type Model = &'static T;
	type Provider = T::Id;

	fn to_provider(&self, model: &&'static T) -> T::Id {
		model.id().clone()
	}

	fn from_provider(&self, id: T::Id) -> Result<&'static T, ConversionError> {
		let registry = T::try_registry()?;
		registry.from_id(&id).map_err(|source| {
			tracing::warn!(enumeration = T::TYPE_NAME, id = %id, "stored id has no matching member");
			ConversionError::UnknownId {
				enumeration: T::TYPE_NAME,
				id: id.to_string(),
				source,
			}
		})
	}
}

impl<T: Enumeration> Default for IdConverter<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Clone for IdConverter<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for IdConverter<T> {}

impl<T: Enumeration> fmt::Debug for IdConverter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IdConverter").field(&T::TYPE_NAME).finish()
	}
}
