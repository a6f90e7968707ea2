use leptos::prelude::*;
use log::debug;

use crate::components::edge::{Edge, EdgeHints};
use crate::components::filter_table::{CommittedColumns, FilterTable};

/// A sample edge: composite id, SVG path and endpoints.
struct SampleEdge {
	id: &'static str,
	path: &'static str,
	source: &'static str,
	target: &'static str,
}

/// A pod mounting a claim, bound to a volume provisioned by a storage class.
fn sample_edges() -> Vec<SampleEdge> {
	vec![
		SampleEdge {
			id: "web-0;(pod)---data-web-0;(persistent_volume_claim)",
			path: "M 60 80 L 220 80",
			source: "web-0",
			target: "data-web-0",
		},
		SampleEdge {
			id: "data-web-0;(persistent_volume_claim)---pvc-1f3a;(persistent_volume)",
			path: "M 220 80 L 380 80",
			source: "data-web-0",
			target: "pvc-1f3a",
		},
		SampleEdge {
			id: "pvc-1f3a;(persistent_volume)---openebs-hostpath;(storage_class)",
			path: "M 380 80 L 540 80",
			source: "pvc-1f3a",
			target: "openebs-hostpath",
		},
		SampleEdge {
			id: "web-0;(pod)---node-a;(host)",
			path: "M 60 80 L 60 220",
			source: "web-0",
			target: "node-a",
		},
		SampleEdge {
			id: "web-0---web-0",
			path: "M 60 80 C 20 20, 100 20, 60 80",
			source: "web-0",
			target: "web-0",
		},
	]
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let committed = RwSignal::new(CommittedColumns::with_defaults());
	let (show_filter, set_show_filter) = signal(false);
	let (focused, set_focused) = signal(None::<String>);

	let on_enter = Callback::new(move |id: String| {
		debug!("enter edge {id}");
		set_focused.set(Some(id));
	});
	let on_leave = Callback::new(move |id: String| {
		debug!("leave edge {id}");
		set_focused.set(None);
	});
	let on_close = Callback::new(move |_: ()| set_show_filter.set(false));

	let edges = sample_edges()
		.into_iter()
		.map(|edge| {
			let hints = Signal::derive(move || EdgeHints {
				highlighted: focused.with(|f| f.as_deref() == Some(edge.id)),
				source: edge.source.into(),
				target: edge.target.into(),
				..EdgeHints::default()
			});
			view! {
				<Edge
					id=edge.id
					path=edge.path.to_owned()
					hints=hints
					on_enter=on_enter
					on_leave=on_leave
				/>
			}
		})
		.collect_view();

	view! {
		<div class="topology">
			<svg class="topology-canvas" width="600" height="260">
				<defs>
					<marker id="end-arrow" viewBox="0 -5 10 10" refX="10" markerWidth="6" markerHeight="6" orient="auto">
						<path d="M0,-5L10,0L0,5" />
					</marker>
				</defs>
				{edges}
			</svg>
			<button class="view-mode-selector-action" on:click=move |_| set_show_filter.update(|v| *v = !*v)>
				"Filter"
			</button>
			<Show when=move || show_filter.get()>
				<FilterTable
					committed=committed
					margin_top=24.0
					on_close=on_close
				/>
			</Show>
			<h3>"Columns shown"</h3>
			<ul class="committed-columns">
				{move || {
					committed
						.get()
						.iter()
						.map(|column| view! { <li>{column.to_owned()}</li> })
						.collect_view()
				}}
			</ul>
		</div>
	}
}
