use leptos::prelude::*;

use crate::graph::VertexId;

/// Vertex dropdown with a disabled placeholder entry selected by default.
///
/// An empty `selected` string means "still on the placeholder". The DOM
/// selection is re-asserted after every change to `options` or `selected`,
/// since inserting an option lets the browser pick it on its own.
#[component]
pub fn VertexSelect(
	/// Vertex ids offered after the placeholder.
	#[prop(into)]
	options: Signal<Vec<VertexId>>,
	/// Chosen id, empty while on the placeholder.
	selected: RwSignal<String>,
	/// Text of the placeholder entry.
	placeholder: &'static str,
) -> impl IntoView {
	let select_ref = NodeRef::<leptos::html::Select>::new();

	Effect::new(move |_| {
		let value = options.with(|ids| resolve_selection(&selected.get(), ids));
		if value != selected.get_untracked() {
			selected.set(value.clone());
		}
		let Some(select) = select_ref.get() else {
			return;
		};
		select.set_value(&value);
		if value.is_empty() {
			select.set_selected_index(0);
		}
	});

	view! {
		<select node_ref=select_ref on:change=move |ev| selected.set(event_target_value(&ev))>
			<option value="" disabled=true selected=true>
				{placeholder}
			</option>
			<For
				each=move || options.get()
				key=|id: &VertexId| id.clone()
				children=move |id: VertexId| {
					view! { <option value=id.to_string()>{id.to_string()}</option> }
				}
			/>
		</select>
	}
}

/// `current` if it still names one of `options`, otherwise the placeholder.
pub fn resolve_selection(current: &str, options: &[VertexId]) -> String {
	if options.iter().any(|id| id.as_str() == current) {
		current.to_string()
	} else {
		String::new()
	}
}

/// Current selection, or `None` while on the placeholder.
pub fn selection(selected: RwSignal<String>) -> Option<String> {
	let value = selected.get_untracked();
	(!value.is_empty()).then_some(value)
}

/// Both selections of a from/to pair, resetting the pair to the placeholders.
///
/// Leaves the pair alone and returns `None` while either is unset.
pub fn take_pair(from: RwSignal<String>, to: RwSignal<String>) -> Option<(String, String)> {
	let pair = (selection(from)?, selection(to)?);
	from.set(String::new());
	to.set(String::new());
	Some(pair)
}

#[cfg(test)]
mod tests {
	use leptos::reactive::owner::Owner;

	use super::*;

	fn ids(labels: &[&str]) -> Vec<VertexId> {
		labels.iter().map(|&l| VertexId::from(l)).collect()
	}

	#[test]
	fn resolve_keeps_live_selection() {
		assert_eq!(resolve_selection("B", &ids(&["A", "B"])), "B");
	}

	#[test]
	fn resolve_falls_back_when_vertex_gone() {
		assert_eq!(resolve_selection("B", &ids(&["A", "C"])), "");
		assert_eq!(resolve_selection("A", &[]), "");
		assert_eq!(resolve_selection("", &ids(&["A"])), "");
	}

	#[test]
	fn placeholder_is_no_selection() {
		Owner::new().with(|| {
			let sel = RwSignal::new(String::new());
			assert_eq!(selection(sel), None);
			sel.set("A".to_string());
			assert_eq!(selection(sel), Some("A".to_string()));
		});
	}

	#[test]
	fn take_pair_resets_both() {
		Owner::new().with(|| {
			let (from, to) = (RwSignal::new("A".to_string()), RwSignal::new("B".to_string()));
			assert_eq!(take_pair(from, to), Some(("A".to_string(), "B".to_string())));
			assert_eq!(from.get_untracked(), "");
			assert_eq!(to.get_untracked(), "");
		});
	}

	#[test]
	fn take_pair_waits_for_both() {
		Owner::new().with(|| {
			let (from, to) = (RwSignal::new("A".to_string()), RwSignal::new(String::new()));
			assert_eq!(take_pair(from, to), None);
			assert_eq!(from.get_untracked(), "A");

			let (from, to) = (RwSignal::new(String::new()), RwSignal::new("B".to_string()));
			assert_eq!(take_pair(from, to), None);
			assert_eq!(to.get_untracked(), "B");
		});
	}
}
