use std::collections::HashMap;

use log::{debug, info, warn};

use super::catalog::{COLUMN_OPTIONS, ColumnOption};
use super::committed::CommittedColumns;
use crate::error::{Error, Result};

/// Checkbox state of one filter panel: a flag per catalog column.
///
/// Bulk transitions build the whole next mapping before replacing the old one,
/// so observers never see a half-applied select or reset. Resetting never
/// touches [`CommittedColumns`]; only [`FilterSelection::commit`] writes there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSelection {
	checkboxes: HashMap<ColumnOption, bool>,
}

impl Default for FilterSelection {
	fn default() -> Self {
		Self::new()
	}
}

impl FilterSelection {
	/// Every catalog column unchecked.
	pub fn new() -> Self {
		Self {
			checkboxes: Self::uniform(false),
		}
	}

	fn uniform(checked: bool) -> HashMap<ColumnOption, bool> {
		COLUMN_OPTIONS
			.into_iter()
			.map(|column| (column, checked))
			.collect()
	}

	/// Flips one column and returns its new value. Names outside the catalog
	/// are rejected and leave the state as it was.
	pub fn toggle(&mut self, column: &str) -> Result<bool> {
		let Some(checked) = self.checkboxes.get_mut(column) else {
			warn!("rejecting toggle of unknown column {column:?}");
			return Err(Error::InvalidColumn(column.to_owned()));
		};
		*checked = !*checked;
		Ok(*checked)
	}

	pub fn select_all(&mut self) {
		debug!("selecting all {} filter columns", COLUMN_OPTIONS.len());
		self.checkboxes = Self::uniform(true);
	}

	pub fn reset_all(&mut self) {
		debug!("resetting filter columns");
		self.checkboxes = Self::uniform(false);
	}

	/// Unknown columns read as unchecked.
	pub fn is_selected(&self, column: &str) -> bool {
		self.checkboxes.get(column).copied().unwrap_or(false)
	}

	/// `(column, checked)` pairs in catalog order.
	pub fn iter(&self) -> impl Iterator<Item = (ColumnOption, bool)> + '_ {
		COLUMN_OPTIONS
			.into_iter()
			.map(|column| (column, self.is_selected(column)))
	}

	/// Checked columns in catalog order.
	pub fn selected(&self) -> impl Iterator<Item = ColumnOption> + '_ {
		self.iter()
			.filter_map(|(column, checked)| checked.then_some(column))
	}

	/// Publishes the checked columns to `committed`, in catalog order, skipping
	/// any already there. Returns the columns this call added. Checkbox state is
	/// left as is.
	pub fn commit(&self, committed: &mut CommittedColumns) -> Vec<ColumnOption> {
		let added: Vec<_> = self
			.selected()
			.filter(|column| committed.insert(column))
			.collect();
		if !added.is_empty() {
			info!("committed filter columns {added:?}");
		}
		added
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_starts_unchecked() {
		let selection = FilterSelection::new();
		assert!(COLUMN_OPTIONS.iter().all(|c| !selection.is_selected(c)));
		assert_eq!(selection.selected().count(), 0);
		assert_eq!(selection, FilterSelection::default());
	}

	#[test]
	fn test_toggle_flips_one_column() {
		let mut selection = FilterSelection::new();
		assert_eq!(selection.toggle("Vendor"), Ok(true));
		assert!(selection.is_selected("Vendor"));
		assert_eq!(selection.selected().collect::<Vec<_>>(), ["Vendor"]);
		assert_eq!(selection.toggle("Vendor"), Ok(false));
		assert_eq!(selection, FilterSelection::new());
	}

	#[test]
	fn test_toggle_rejects_unknown_column() {
		let mut selection = FilterSelection::new();
		selection.toggle("Model").unwrap();
		let before = selection.clone();
		assert_eq!(
			selection.toggle("NotARealColumn"),
			Err(Error::InvalidColumn("NotARealColumn".into()))
		);
		assert_eq!(selection, before);
		assert!(!selection.is_selected("NotARealColumn"));
	}

	#[test]
	fn test_select_all_then_reset() {
		let mut selection = FilterSelection::new();
		selection.toggle("Iqn").unwrap();
		selection.select_all();
		assert!(COLUMN_OPTIONS.iter().all(|c| selection.is_selected(c)));
		selection.reset_all();
		assert!(COLUMN_OPTIONS.iter().all(|c| !selection.is_selected(c)));
	}

	#[test]
	fn test_reset_leaves_committed_untouched() {
		let mut committed = CommittedColumns::with_defaults();
		let mut selection = FilterSelection::new();
		selection.toggle("Serial").unwrap();
		selection.commit(&mut committed);
		let before = committed.clone();
		selection.reset_all();
		assert_eq!(committed, before);
		assert!(committed.contains("Serial"));
	}

	#[test]
	fn test_commit_in_catalog_order_without_duplicates() {
		let mut committed = CommittedColumns::new();
		let mut selection = FilterSelection::new();
		selection.toggle("Vendor").unwrap();
		selection.toggle("Serial").unwrap();

		assert_eq!(selection.commit(&mut committed), ["Serial", "Vendor"]);
		assert_eq!(committed.as_slice(), ["Serial", "Vendor"]);
		assert!(selection.commit(&mut committed).is_empty());
		assert_eq!(committed.as_slice(), ["Serial", "Vendor"]);
		// commit does not clear the checkboxes
		assert!(selection.is_selected("Vendor"));
	}

	#[test]
	fn test_commit_appends_after_existing_entries() {
		let mut committed: CommittedColumns = ["CPU", "Vendor"].into_iter().collect();
		let mut selection = FilterSelection::new();
		selection.toggle("Vendor").unwrap();
		selection.toggle("Model").unwrap();
		assert_eq!(selection.commit(&mut committed), ["Model"]);
		assert_eq!(committed.as_slice(), ["CPU", "Vendor", "Model"]);
	}

	#[test]
	fn test_empty_commit_is_noop() {
		let mut committed = CommittedColumns::with_defaults();
		let before = committed.clone();
		assert!(FilterSelection::new().commit(&mut committed).is_empty());
		assert_eq!(committed, before);
	}

	#[test]
	fn test_select_all_commit_publishes_catalog() {
		let mut committed = CommittedColumns::new();
		let mut selection = FilterSelection::new();
		selection.select_all();
		assert_eq!(selection.commit(&mut committed), COLUMN_OPTIONS);
		assert_eq!(committed.len(), COLUMN_OPTIONS.len());
	}

	mod property_tests {
		use super::*;
		use proptest::prelude::*;

		fn column_strategy() -> impl Strategy<Value = ColumnOption> {
			prop::sample::select(COLUMN_OPTIONS.to_vec())
		}

		proptest! {
			#[test]
			fn prop_double_toggle_restores(
				setup in prop::collection::vec(column_strategy(), 0..12),
				column in column_strategy(),
			) {
				let mut selection = FilterSelection::new();
				for c in &setup {
					selection.toggle(c).unwrap();
				}
				let before = selection.clone();
				selection.toggle(column).unwrap();
				selection.toggle(column).unwrap();
				prop_assert_eq!(selection, before);
			}

			#[test]
			fn prop_is_selected_tracks_toggle_parity(
				toggles in prop::collection::vec(column_strategy(), 0..40),
			) {
				let mut selection = FilterSelection::new();
				for c in &toggles {
					selection.toggle(c).unwrap();
				}
				for column in COLUMN_OPTIONS {
					let flips = toggles.iter().filter(|c| **c == column).count();
					prop_assert_eq!(selection.is_selected(column), flips % 2 == 1);
				}
			}

			#[test]
			fn prop_commit_is_idempotent(
				toggles in prop::collection::vec(column_strategy(), 0..20),
			) {
				let mut committed = CommittedColumns::new();
				let mut selection = FilterSelection::new();
				for c in &toggles {
					selection.toggle(c).unwrap();
				}
				let first = selection.commit(&mut committed);
				prop_assert_eq!(first, selection.selected().collect::<Vec<_>>());
				prop_assert!(selection.commit(&mut committed).is_empty());
			}
		}
	}
}
