//! Error types shared by the edge classifier and the filter panel.

use thiserror::Error;

/// Errors raised by the topology panels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// A composite edge id did not split into two `---` segments, or a type tag
	/// was too short to carry its wrapper characters.
	#[error("malformed edge identifier `{0}`")]
	MalformedIdentifier(String),

	/// A column name outside the fixed filter catalog.
	#[error("`{0}` is not a selectable column")]
	InvalidColumn(String),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
