mod classify;
mod component;
mod types;

pub use classify::{
	AdjacencyClass, EdgeEndpoint, EdgeTopology, ID_SEPARATOR, STORAGE_TYPES, StorageType,
	TAG_SEPARATOR, classify, parse_edge_id,
};
pub use component::Edge;
pub use types::EdgeHints;
