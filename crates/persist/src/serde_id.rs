//! Serde field adapter storing a member as its id.
//!
//! ```rust,ignore
//! #[derive(Serialize, Deserialize)]
//! struct Book {
//!     title: String,
//!     #[serde(with = "roster_persist::serde_id")]
//!     genre: &'static BookGenre,
//!     #[serde(with = "roster_persist::serde_id::option", default)]
//!     sequel_genre: Option<&'static BookGenre>,
//! }
//! ```
//!
//! Deserializing an id that no member owns fails with a custom serde error.

use roster_enumeration::Enumeration;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::converter::{IdConverter, ValueConverter};

pub fn serialize<T, S>(member: &&'static T, serializer: S) -> Result<S::Ok, S::Error>
where
	T: Enumeration,
	T::Id: Serialize,
	S: Serializer,
{
	member.id().serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<&'static T, D::Error>
where
	T: Enumeration,
	T::Id: Deserialize<'de>,
	D: Deserializer<'de>,
{
	let id = <T::Id as Deserialize>::deserialize(deserializer)?;
	IdConverter::<T>::new().from_provider(id).map_err(D::Error::custom)
}

/// Adapter for optional member fields; `None` is stored as null.
pub mod option {
	use roster_enumeration::Enumeration;
	use serde::de::Error as _;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::converter::{IdConverter, ValueConverter};

	pub fn serialize<T, S>(member: &Option<&'static T>, serializer: S) -> Result<S::Ok, S::Error>
	where
		T: Enumeration,
		T::Id: Serialize,
		S: Serializer,
	{
		member.map(Enumeration::id).serialize(serializer)
	}

	pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<&'static T>, D::Error>
	where
		T: Enumeration,
		T::Id: Deserialize<'de>,
		D: Deserializer<'de>,
	{
		Option::<T::Id>::deserialize(deserializer)?
			.map(|id| IdConverter::<T>::new().from_provider(id))
			.transpose()
			.map_err(D::Error::custom)
	}
}
