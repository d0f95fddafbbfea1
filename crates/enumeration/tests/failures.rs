//! Defective declarations fail every build attempt and are never cached.

use roster_enumeration::{Enumeration, EnumerationError, Member, NameIndex, enumeration};

macro_rules! probe_type {
	($ty:ident, id: $id:ty) => {
		#[derive(Debug)]
		pub struct $ty {
			meta: Member<$id>,
		}

		impl $ty {
			const fn new(id: $id, name: &'static str) -> Self {
				Self {
					meta: Member::new(id, name),
				}
			}
		}
	};
}

probe_type!(Clashing, id: u32);
static CLASH_FIRST: Clashing = Clashing::new(1, "Same");
static CLASH_SECOND: Clashing = Clashing::new(2, "Same");
enumeration!(Clashing, id: u32, members: [CLASH_FIRST, CLASH_SECOND]);

probe_type!(Folded, id: u32);
static FOLDED_UPPER: Folded = Folded::new(1, "LOUD");
static FOLDED_LOWER: Folded = Folded::new(2, "loud");
enumeration!(Folded, id: u32, members: [FOLDED_UPPER, FOLDED_LOWER]);

probe_type!(Nameless, id: u32);
static NAMED: Nameless = Nameless::new(1, "Named");
static UNNAMED: Nameless = Nameless::new(2, "");
enumeration!(Nameless, id: u32, members: [NAMED, UNNAMED]);

probe_type!(Strict, id: u32);
static STRICT_A: Strict = Strict::new(1, "A");
static STRICT_B: Strict = Strict::new(1, "B");
enumeration!(Strict, id: u32, members: [STRICT_A, STRICT_B], id_policy: Reject);

probe_type!(Panicking, id: u32);
static PANIC_A: Panicking = Panicking::new(1, "Twin");
static PANIC_B: Panicking = Panicking::new(2, "Twin");
enumeration!(Panicking, id: u32, members: [PANIC_A, PANIC_B]);

probe_type!(Relaxed, id: u32);
static RELAXED_A: Relaxed = Relaxed::new(1, "A");
static RELAXED_B: Relaxed = Relaxed::new(1, "B");
enumeration!(Relaxed, id: u32, members: [RELAXED_A, RELAXED_B], id_policy: LastWins);

#[test]
fn duplicate_name_fails_and_retries() {
	for attempt in 1..=3 {
		let err = Clashing::try_registry().unwrap_err();
		assert!(err.is_structural());
		assert!(matches!(
			err,
			EnumerationError::DuplicateName {
				index: NameIndex::Exact,
				name: "Same",
				..
			}
		));
		assert_eq!(Clashing::registry_cell().build_attempts(), attempt);
	}
	assert!(!Clashing::registry_cell().is_built());
}

#[test]
fn case_insensitive_clash_only_breaks_ignore_case_lookups() {
	let registry = Folded::try_registry().expect("exact names are unique");
	assert_eq!(registry.len(), 2);
	assert_eq!(Folded::all().len(), 2);

	assert_eq!(Folded::from_name("LOUD", false), Ok(&FOLDED_UPPER));
	assert_eq!(Folded::from_name("loud", false), Ok(&FOLDED_LOWER));
	assert_eq!(Folded::from_id(&2), Ok(&FOLDED_LOWER));
	assert_eq!(Folded::try_from_id(&1), Some(&FOLDED_UPPER));

	assert_eq!(
		Folded::from_name("Loud", true),
		Err(EnumerationError::DuplicateName {
			enumeration: "Folded",
			index: NameIndex::IgnoreCase,
			name: "loud",
			existing_id: "1".into(),
			new_id: "2".into(),
		})
	);
}

#[test]
#[should_panic(expected = "duplicate name in Folded (case-insensitive index)")]
fn try_from_name_panics_on_case_insensitive_clash() {
	let _ = Folded::try_from_name("loud", true);
}

#[test]
fn empty_name_fails_with_invalid_member() {
	assert_eq!(
		Nameless::try_registry().unwrap_err(),
		EnumerationError::InvalidMember {
			enumeration: "Nameless",
			id: "2".into(),
		}
	);
}

#[test]
fn reject_policy_fails_on_shared_id() {
	let err = Strict::try_registry().unwrap_err();
	assert_eq!(
		err.to_string(),
		"duplicate id in Strict: 1 is declared by \"A\" and \"B\""
	);
}

#[test]
fn last_wins_policy_from_declaration() {
	assert_eq!(Relaxed::from_id(&1), Ok(&RELAXED_B));
}

#[test]
fn result_lookups_return_build_errors() {
	let err = Panicking::from_id(&1).unwrap_err();
	assert!(matches!(err, EnumerationError::DuplicateName { name: "Twin", .. }));
	assert!(Panicking::from_name("Twin", false).unwrap_err().is_structural());
	assert!(<&Panicking>::try_from(2u32).unwrap_err().is_structural());
}

#[test]
#[should_panic(expected = "duplicate name in Panicking")]
fn all_panics_on_defective_declarations() {
	let _ = Panicking::all();
}
