//! Declaration macros for enumeration types and their members.

/// Implements [`Enumeration`](crate::Enumeration) for a struct with a `meta: Member<Id>` field.
///
/// Two discovery forms are supported:
///
/// - `members: [...]` lists every member static in one place.
/// - `inventory` lets any module of the crate contribute members with
///   [`member!`](crate::member). Use this for a base enumeration whose values are
///   declared next to the variants that own them.
///
/// Both forms also generate, keyed on the id:
/// `PartialEq`, `Eq`, `PartialOrd`, `Ord` and `Hash`, plus `Display` (the name),
/// `From<&Type> for Id` and `TryFrom<Id> for &'static Type`. Do not derive the
/// comparison traits on the struct yourself.
///
/// # Examples
///
/// ```rust,ignore
/// #[derive(Debug)]
/// pub struct BookGenre {
///     meta: Member<i32>,
/// }
///
/// pub static ANTHOLOGY: BookGenre = BookGenre { meta: Member::new(1, "Anthology") };
/// pub static BIOGRAPHY: BookGenre = BookGenre { meta: Member::new(2, "Biography") };
///
/// enumeration!(BookGenre, id: i32, members: [ANTHOLOGY, BIOGRAPHY]);
///
/// // Base type whose members are spread over several modules.
/// #[derive(Debug)]
/// pub struct Shape {
///     meta: Member<u8>,
///     sides: u8,
/// }
///
/// enumeration!(pub Shape, id: u8, inventory);
///
/// mod polygons {
///     roster_enumeration::member! {
///         pub static TRIANGLE: super::Shape = super::Shape::new(3, "Triangle");
///     }
/// }
/// ```
///
/// An optional trailing `id_policy: LastWins` (or `Reject`) overrides the default
/// [`DuplicatePolicy::FirstWins`](crate::DuplicatePolicy::FirstWins).
#[macro_export]
macro_rules! enumeration {
	(
		$ty:ident, id: $id:ty, members: [$($member:path),* $(,)?]
		$(, id_policy: $policy:ident)? $(,)?
	) => {
		impl $crate::Enumeration for $ty {
			type Id = $id;
			const TYPE_NAME: &'static str = stringify!($ty);
			const ID_POLICY: $crate::DuplicatePolicy = $crate::__enum_policy!($($policy)?);

			#[inline]
			fn meta(&self) -> &$crate::Member<$id> {
				&self.meta
			}

			fn discover(builder: $crate::RegistryBuilder<Self>) -> $crate::RegistryBuilder<Self> {
				builder.extend([$(&$member),*])
			}

			fn registry_cell() -> &'static $crate::RegistryCell<Self> {
				static CELL: $crate::RegistryCell<$ty> = $crate::RegistryCell::new();
				&CELL
			}
		}

		$crate::__enum_identity!($ty, $id);
	};

	(
		$vis:vis $ty:ident, id: $id:ty, inventory
		$(, id_policy: $policy:ident)? $(,)?
	) => {
		$crate::__private::paste::paste! {
			#[doc(hidden)]
			$vis struct [<$ty Reg>](&'static $ty);

			$crate::__private::inventory::collect!([<$ty Reg>]);

			impl $crate::MemberReg<$ty> for [<$ty Reg>] {
				fn member(&self) -> &'static $ty {
					self.0
				}
			}

			impl $ty {
				#[doc(hidden)]
				$vis const fn __enumeration_reg(member: &'static $ty) -> [<$ty Reg>] {
					[<$ty Reg>](member)
				}
			}

			impl $crate::Enumeration for $ty {
				type Id = $id;
				const TYPE_NAME: &'static str = stringify!($ty);
				const ID_POLICY: $crate::DuplicatePolicy = $crate::__enum_policy!($($policy)?);

				#[inline]
				fn meta(&self) -> &$crate::Member<$id> {
					&self.meta
				}

				fn discover(builder: $crate::RegistryBuilder<Self>) -> $crate::RegistryBuilder<Self> {
					builder.extend_inventory::<[<$ty Reg>]>()
				}

				fn registry_cell() -> &'static $crate::RegistryCell<Self> {
					static CELL: $crate::RegistryCell<$ty> = $crate::RegistryCell::new();
					&CELL
				}
			}
		}

		$crate::__enum_identity!($ty, $id);
	};
}

/// Declares member statics and submits them to their enumeration's inventory.
///
/// The enumeration must have been declared with the `inventory` form of
/// [`enumeration!`](crate::enumeration).
///
/// ```rust,ignore
/// member! {
///     pub static SQUARE: Shape = Shape::new(4, "Square");
///     pub static PENTAGON: Shape = Shape::new(5, "Pentagon");
/// }
/// ```
#[macro_export]
macro_rules! member {
	($(
		$(#[$attr:meta])*
		$vis:vis static $name:ident: $ty:ty = $init:expr;
	)+) => {
		$(
			$(#[$attr])*
			$vis static $name: $ty = $init;

			$crate::__private::inventory::submit! { <$ty>::__enumeration_reg(&$name) }
		)+
	};
}

/// Selects the declared id policy or the default.
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_policy {
	() => {
		$crate::DuplicatePolicy::FirstWins
	};
	($policy:ident) => {
		$crate::DuplicatePolicy::$policy
	};
}

/// Identity-based comparison, display and conversions shared by both declaration forms.
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_identity {
	($ty:ident, $id:ty) => {
		impl ::core::cmp::PartialEq for $ty {
			#[inline]
			fn eq(&self, other: &Self) -> bool {
				$crate::Enumeration::id(self) == $crate::Enumeration::id(other)
			}
		}

		impl ::core::cmp::Eq for $ty {}

		impl ::core::cmp::PartialOrd for $ty {
			#[inline]
			fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
				::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
			}
		}

		impl ::core::cmp::Ord for $ty {
			#[inline]
			fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
				::core::cmp::Ord::cmp($crate::Enumeration::id(self), $crate::Enumeration::id(other))
			}
		}

		impl ::core::hash::Hash for $ty {
			fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
				::core::hash::Hash::hash($crate::Enumeration::id(self), state)
			}
		}

		impl ::core::fmt::Display for $ty {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str($crate::Enumeration::name(self))
			}
		}

		impl ::core::convert::From<&$ty> for $id {
			#[inline]
			fn from(member: &$ty) -> Self {
				$crate::id_of(member)
			}
		}

		impl ::core::convert::TryFrom<$id> for &'static $ty {
			type Error = $crate::EnumerationError;

			fn try_from(id: $id) -> ::core::result::Result<Self, Self::Error> {
				$crate::member_from_id::<$ty>(id)
			}
		}
	};
}
