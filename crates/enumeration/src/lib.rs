//! Closed enumerations: fixed sets of named singleton values with identity-based
//! equality and ordering.
//!
//! An enumeration is a struct carrying a [`Member`] in its `meta` field plus any
//! associated data, whose values are `static` items. The [`enumeration!`] macro
//! implements [`Enumeration`] for it, which provides lookups by id and by name:
//!
//! ```rust,ignore
//! use roster_enumeration::{Enumeration, Member, enumeration};
//!
//! #[derive(Debug)]
//! pub struct BookGenre {
//!     meta: Member<i32>,
//! }
//!
//! pub static ANTHOLOGY: BookGenre = BookGenre { meta: Member::new(1, "Anthology") };
//! pub static BIOGRAPHY: BookGenre = BookGenre { meta: Member::new(2, "Biography") };
//!
//! enumeration!(BookGenre, id: i32, members: [ANTHOLOGY, BIOGRAPHY]);
//!
//! assert_eq!(BookGenre::from_id(&2)?, &BIOGRAPHY);
//! assert_eq!(BookGenre::from_name("anthology", true)?, &ANTHOLOGY);
//! assert!(ANTHOLOGY < BIOGRAPHY);
//! ```
//!
//! # Registry Lifecycle
//!
//! Each enumeration type owns one [`RegistryCell`]. The first lookup discovers the
//! members, validates them and builds the id and name indices; concurrent first callers
//! wait for that single build. The published [`Registry`] is immutable and lives for the
//! rest of the process. Defective declarations (empty or duplicate names) fail the
//! build with a structural [`EnumerationError`] and are never cached. Names that clash
//! only by case disable case-insensitive lookups and nothing else.
//!
//! # Duplicate Ids
//!
//! Ids need not be unique. The id index keeps the member that sorts first by name
//! unless the declaration selects another [`DuplicatePolicy`]; skipped members remain
//! reachable by name and are listed in [`Registry::id_collisions`].

mod cell;
mod convert;
mod error;
pub mod index;
mod macros;
mod member;
mod traits;

pub use cell::RegistryCell;
pub use convert::{id_of, member_from_id};
pub use error::{EnumerationError, LookupKey, Result};
pub use index::{DuplicatePolicy, IdCollision, NameIndex, Registry, RegistryBuilder, fold_case};
pub use member::Member;
pub use traits::{EnumId, Enumeration, MemberReg};

#[doc(hidden)]
pub mod __private {
	pub use {inventory, paste};
}
