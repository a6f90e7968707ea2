//! Leptos client-side components for a storage topology viewer: edges styled by
//! the storage role of their endpoints, and a column filter panel.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod error;
mod pages;

pub use components::edge::{
	AdjacencyClass, Edge, EdgeEndpoint, EdgeHints, EdgeTopology, ID_SEPARATOR, STORAGE_TYPES,
	StorageType, TAG_SEPARATOR, classify, parse_edge_id,
};
pub use components::filter_table::{
	COLUMN_OPTIONS, Checkbox, ColumnOption, CommittedColumns, DEFAULT_COMMITTED_COLUMNS,
	FilterSelection, FilterTable, lookup as lookup_column,
};
pub use error::{Error, Result};

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the topology page and handles 404's
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		<Title text="Storage Topology" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
