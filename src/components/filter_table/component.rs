use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use web_sys::MouseEvent;

use super::catalog::{COLUMN_OPTIONS, ColumnOption};
use super::committed::CommittedColumns;
use super::state::FilterSelection;

/// A labelled checkbox bound to one catalog column.
#[component]
pub fn Checkbox(
	label: ColumnOption,
	#[prop(into)] checked: Signal<bool>,
	#[prop(into)] on_toggle: Callback<ColumnOption>,
) -> impl IntoView {
	view! {
		<div class="form-check">
			<input
				type="checkbox"
				name=label
				class="form-check-input"
				prop:checked=move || checked.get()
				on:change=move |_| on_toggle.run(label)
			/>
			{label}
		</div>
	}
}

/// Filter panel: one checkbox per catalog column, bulk select and reset, and a
/// submit that publishes the checked columns to `committed`.
///
/// The checkbox state lives and dies with the panel; `committed` is owned by
/// the caller and outlives it.
#[component]
pub fn FilterTable(
	committed: RwSignal<CommittedColumns>,
	#[prop(default = 0.0)] margin_top: f64,
	#[prop(optional, into)] on_close: Option<Callback<()>>,
) -> impl IntoView {
	let selection = RwSignal::new(FilterSelection::new());

	let on_toggle = Callback::new(move |column: ColumnOption| {
		selection.update(|s| {
			// catalog columns only, so this cannot be rejected
			let _ = s.toggle(column);
		});
	});
	let on_select_all = move |_: MouseEvent| selection.update(FilterSelection::select_all);
	let on_reset = move |_: MouseEvent| selection.update(FilterSelection::reset_all);
	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		selection.with_untracked(|s| {
			committed.update(|c| {
				s.commit(c);
			});
		});
	};
	let on_close_click = move |_: MouseEvent| {
		if let Some(cb) = on_close {
			cb.run(());
		}
	};

	let checkboxes = COLUMN_OPTIONS
		.into_iter()
		.map(|column| {
			let checked = Signal::derive(move || selection.with(|s| s.is_selected(column)));
			view! { <Checkbox label=column checked=checked on_toggle=on_toggle /> }
		})
		.collect_view();

	view! {
		<div class="help-panel-wrapper">
			<div class="help-panel" style=format!("margin-top: {margin_top}px")>
				<div class="help-panel-header">
					<h2>"Filter"</h2>
				</div>
				<div class="help-panel-main">
					<div class="help-panel-fields">
						<h2>"Filter Columns"</h2>
						<p>"Filter columns in the currently selected topology:"</p>
						<div class="help-panel-fields-fields">
							<div class="help-panel-fields-fields-column">
								<h3>"Columns"</h3>
								<form on:submit=on_submit>
									<div class="help-panel-fields-fields-column-content">
										{checkboxes}
									</div>
									<div class="form-group mt-2">
										<button
											type="button"
											class="view-mode-selector-action"
											on:click=on_select_all
										>
											"Select All"
										</button>
										<button
											type="button"
											class="view-mode-selector-action"
											on:click=on_reset
										>
											"Reset"
										</button>
										<button type="submit" class="view-mode-selector-action">
											"Show"
										</button>
									</div>
								</form>
								<div class="help-panel-tools">
									<i
										title="Close details"
										class="fa fa-times"
										on:click=on_close_click
									/>
								</div>
							</div>
						</div>
					</div>
				</div>
			</div>
		</div>
	}
}
