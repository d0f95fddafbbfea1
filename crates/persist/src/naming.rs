use roster_enumeration::Enumeration;
use serde::{Deserialize, Serialize};

/// Naming convention for columns holding enumeration ids.
///
/// A property `genre` of an enumeration type is stored in the column
/// `genre` + [`suffix`](Self::suffix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNaming {
	/// Appended to the property name.
	#[serde(default = "default_suffix")]
	pub suffix: String,
}

/// Returns the default id column suffix.
fn default_suffix() -> String {
	"_id".to_owned()
}

impl Default for ColumnNaming {
	fn default() -> Self {
		Self {
			suffix: default_suffix(),
		}
	}
}

/// Column mapping produced for one enumeration-typed property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumColumn {
	/// Column name.
	pub name: String,
	/// Enumeration type stored in the column.
	pub enumeration: &'static str,
	/// Rust type of the stored id.
	pub id_type: &'static str,
}

impl ColumnNaming {
	/// Returns the column name for `property`.
	pub fn column_name(&self, property: &str) -> String {
		let mut name = String::with_capacity(property.len() + self.suffix.len());
		name.push_str(property);
		name.push_str(&self.suffix);
		name
	}

	/// Describes the column storing `property` of enumeration type `T`.
	pub fn column_for<T: Enumeration>(&self, property: &str) -> EnumColumn {
		EnumColumn {
			name: self.column_name(property),
			enumeration: T::TYPE_NAME,
			id_type: std::any::type_name::<T::Id>(),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn suffix_is_appended_verbatim() {
		let naming = ColumnNaming {
			suffix: "Id".to_owned(),
		};
		assert_eq!(naming.column_name("BookGenre"), "BookGenreId");
		assert_eq!(naming.column_name(""), "Id");
	}

	#[test]
	fn serializes_default_suffix() {
		let json = serde_json::to_string(&ColumnNaming::default()).expect("serialize");
		assert_eq!(json, r#"{"suffix":"_id"}"#);
	}
}
