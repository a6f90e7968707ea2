use leptos::prelude::*;
use web_sys::MouseEvent;

use super::classify::classify;
use super::types::{CLASSIFIED_STROKE_WIDTH, END_ARROW_MARKER, EdgeHints};

/// One topology edge drawn as three stacked SVG paths: a shadow, the
/// adjacency-classified stroke and the visible link.
///
/// `id` is the composite edge id. `encode_id` turns it into a DOM-safe element
/// id; the raw id is used when no codec is given. Enter/leave hooks always
/// receive the logical id.
#[component]
pub fn Edge(
	#[prop(into)] id: String,
	#[prop(into)] path: Signal<String>,
	#[prop(into, default = Signal::stored(EdgeHints::default()))] hints: Signal<EdgeHints>,
	#[prop(optional, into)] encode_id: Option<Callback<String, String>>,
	#[prop(optional, into)] on_enter: Option<Callback<String>>,
	#[prop(optional, into)] on_leave: Option<Callback<String>>,
) -> impl IntoView {
	let adjacency = classify(&id);
	let dom_id = match encode_id {
		Some(encode) => encode.run(id.clone()),
		None => id.clone(),
	};

	let enter_id = id.clone();
	let on_mouseenter = move |_: MouseEvent| {
		if let Some(cb) = on_enter {
			cb.run(enter_id.clone());
		}
	};
	let leave_id = id;
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(cb) = on_leave {
			cb.run(leave_id.clone());
		}
	};

	view! {
		<g
			id=dom_id
			class=move || hints.with(EdgeHints::group_class)
			on:mouseenter=on_mouseenter
			on:mouseleave=on_mouseleave
		>
			<path
				class="shadow"
				d=move || path.get()
				style=move || format!("stroke-width: {}", hints.with(EdgeHints::shadow_stroke_width))
			/>
			<path
				class=adjacency.as_class()
				d=move || path.get()
				style=format!("stroke-width: {CLASSIFIED_STROKE_WIDTH}")
			/>
			<path
				class="link"
				d=move || path.get()
				marker-end=move || hints.with(|h| h.should_render_marker().then_some(END_ARROW_MARKER))
				style=move || format!("stroke-width: {}", hints.with(|h| h.thickness))
			/>
		</g>
	}
}
