//! Adjacency classification for composite edge ids.
//!
//! An edge id encodes both endpoints of a topology relationship:
//! `<from>;(<fromType>)---<to>;(<toType>)`. The type tags decide whether the
//! edge is drawn in the storage style.

use std::fmt;

use log::trace;

use crate::error::{Error, Result};

/// Separator between the two endpoints of an edge id.
pub const ID_SEPARATOR: &str = "---";
/// Separator between a node id and its wrapped type tag.
pub const TAG_SEPARATOR: char = ';';

/// Topology node types drawn as storage entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageType {
	/// `persistent_volume`
	PersistentVolume,
	/// `storage_class`
	StorageClass,
	/// `persistent_volume_claim`
	PersistentVolumeClaim,
}

/// Every storage type, in tag order.
pub const STORAGE_TYPES: [StorageType; 3] = [
	StorageType::PersistentVolume,
	StorageType::StorageClass,
	StorageType::PersistentVolumeClaim,
];

impl StorageType {
	/// The unwrapped type tag as it appears in edge ids.
	pub const fn as_tag(self) -> &'static str {
		match self {
			Self::PersistentVolume => "persistent_volume",
			Self::StorageClass => "storage_class",
			Self::PersistentVolumeClaim => "persistent_volume_claim",
		}
	}

	/// Exact match against an unwrapped tag.
	pub fn from_tag(tag: &str) -> Option<Self> {
		STORAGE_TYPES.into_iter().find(|ty| ty.as_tag() == tag)
	}
}

/// Style bucket an edge is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdjacencyClass {
	/// At least one endpoint is a storage entity.
	Storage,
	/// Anything else, including ids that fail to parse.
	Plain,
}

impl AdjacencyClass {
	/// CSS class name for the classified path.
	pub const fn as_class(self) -> &'static str {
		match self {
			Self::Storage => "link-storage",
			Self::Plain => "link-none",
		}
	}
}

impl fmt::Display for AdjacencyClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_class())
	}
}

/// One side of a parsed edge id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeEndpoint<'a> {
	/// Node identifier, never interpreted here.
	pub node: &'a str,
	/// Type tag with its wrapper stripped, if the segment carried one.
	pub type_tag: Option<&'a str>,
}

/// Both endpoints of a composite edge id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeTopology<'a> {
	/// Parent side.
	pub from: EdgeEndpoint<'a>,
	/// Child side.
	pub to: EdgeEndpoint<'a>,
}

impl EdgeTopology<'_> {
	/// Storage classification. Both endpoints need a tag, and either tag being a
	/// storage type is enough.
	pub fn adjacency_class(&self) -> AdjacencyClass {
		match (self.from.type_tag, self.to.type_tag) {
			(Some(from), Some(to))
				if StorageType::from_tag(from).is_some() || StorageType::from_tag(to).is_some() =>
			{
				AdjacencyClass::Storage
			}
			_ => AdjacencyClass::Plain,
		}
	}
}

/// Drops the first and last character of a raw tag like `(storage_class)`.
fn unwrap_tag(raw: &str) -> Option<&str> {
	let mut chars = raw.chars();
	chars.next()?;
	chars.next_back()?;
	Some(chars.as_str())
}

fn parse_endpoint<'a>(id: &str, segment: &'a str) -> Result<EdgeEndpoint<'a>> {
	let mut parts = segment.split(TAG_SEPARATOR);
	// split always yields at least one item
	let node = parts.next().unwrap_or_default();
	let type_tag = match parts.next() {
		Some(raw) => {
			Some(unwrap_tag(raw).ok_or_else(|| Error::MalformedIdentifier(id.to_owned()))?)
		}
		None => None,
	};
	Ok(EdgeEndpoint { node, type_tag })
}

/// Parses a composite edge id into its two endpoints.
///
/// Fails with [`Error::MalformedIdentifier`] unless the id splits into exactly
/// two segments on [`ID_SEPARATOR`], and every present type tag is at least two
/// characters long.
pub fn parse_edge_id(id: &str) -> Result<EdgeTopology<'_>> {
	let mut segments = id.split(ID_SEPARATOR);
	let (Some(from), Some(to), None) = (segments.next(), segments.next(), segments.next()) else {
		return Err(Error::MalformedIdentifier(id.to_owned()));
	};
	Ok(EdgeTopology {
		from: parse_endpoint(id, from)?,
		to: parse_endpoint(id, to)?,
	})
}

/// Classifies an edge for drawing. Never fails: ids that do not parse are
/// drawn as [`AdjacencyClass::Plain`].
pub fn classify(id: &str) -> AdjacencyClass {
	match parse_edge_id(id) {
		Ok(topology) => topology.adjacency_class(),
		Err(err) => {
			trace!("{err}, drawing as {}", AdjacencyClass::Plain);
			AdjacencyClass::Plain
		}
	}
}
