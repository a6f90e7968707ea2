use super::catalog::DEFAULT_COMMITTED_COLUMNS;

/// The column names the application currently displays.
///
/// Insertion-ordered and duplicate-free; insert and remove are keyed by name
/// and idempotent. Shared between filter panels and the views that read it,
/// so callers own the synchronisation (in the app it sits behind an `RwSignal`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommittedColumns {
	columns: Vec<String>,
}

impl CommittedColumns {
	pub fn new() -> Self {
		Self::default()
	}

	/// The columns shown before any filter was applied.
	pub fn with_defaults() -> Self {
		DEFAULT_COMMITTED_COLUMNS.into_iter().collect()
	}

	/// Appends `column` unless already present. Returns whether it was added.
	pub fn insert(&mut self, column: &str) -> bool {
		if self.contains(column) {
			return false;
		}
		self.columns.push(column.to_owned());
		true
	}

	/// Removes `column` wherever it sits. Returns whether it was present.
	pub fn remove(&mut self, column: &str) -> bool {
		match self.columns.iter().position(|c| c == column) {
			Some(pos) => {
				self.columns.remove(pos);
				true
			}
			None => false,
		}
	}

	pub fn contains(&self, column: &str) -> bool {
		self.columns.iter().any(|c| c == column)
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.columns.iter().map(String::as_str)
	}

	pub fn as_slice(&self) -> &[String] {
		&self.columns
	}
}

impl<'a> FromIterator<&'a str> for CommittedColumns {
	fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
		let mut committed = Self::new();
		for column in iter {
			committed.insert(column);
		}
		committed
	}
}
