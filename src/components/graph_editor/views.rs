use leptos::prelude::*;

use super::format;
use super::state::EditorState;

const EMPTY_GRAPH: &str = "Graph is empty.";

#[component]
pub fn AdjacencyListView(editor: RwSignal<EditorState>) -> impl IntoView {
	move || {
		editor.with(|s| {
			let list = s.graph.adjacency_list();
			if list.is_empty() {
				return view! { <p>{EMPTY_GRAPH}</p> }.into_any();
			}
			let rows = list
				.into_iter()
				.map(|(id, neighbors)| {
					view! {
						<li>
							<strong>{id.to_string()}</strong>
							{format!(" → [ {} ]", format::join_ids(&neighbors))}
						</li>
					}
				})
				.collect_view();
			view! { <ul>{rows}</ul> }.into_any()
		})
	}
}

#[component]
pub fn AdjacencyMatrixView(editor: RwSignal<EditorState>) -> impl IntoView {
	move || {
		editor.with(|s| {
			let matrix = s.graph.adjacency_matrix();
			if matrix.is_empty() {
				return view! { <p>{EMPTY_GRAPH}</p> }.into_any();
			}
			let header = matrix
				.ids
				.iter()
				.map(|id| view! { <th>{id.to_string()}</th> })
				.collect_view();
			let rows = matrix
				.ids
				.iter()
				.zip(&matrix.cells)
				.map(|(id, row)| {
					let cells = row
						.iter()
						.map(|cell| view! { <td>{cell.to_string()}</td> })
						.collect_view();
					view! {
						<tr>
							<th>{id.to_string()}</th>
							{cells}
						</tr>
					}
				})
				.collect_view();
			view! {
				<table>
					<thead>
						<tr>
							<th>"\u{a0}"</th>
							{header}
						</tr>
					</thead>
					<tbody>{rows}</tbody>
				</table>
			}
			.into_any()
		})
	}
}

#[component]
pub fn PropertiesPanel(editor: RwSignal<EditorState>) -> impl IntoView {
	let props = Memo::new(move |_| editor.with(|s| s.graph.properties()));

	view! {
		<dl class="properties">
			<dt>"Vertices"</dt>
			<dd>{move || props.with(|p| p.vertex_count.to_string())}</dd>
			<dt>"Edges"</dt>
			<dd>{move || props.with(|p| p.edge_count.to_string())}</dd>
			<dt>"Density"</dt>
			<dd>{move || props.with(|p| format::density(p.density))}</dd>
			<dt>"Source Nodes"</dt>
			<dd>{move || props.with(|p| format::node_set(p.sources.as_deref()))}</dd>
			<dt>"Sink Nodes"</dt>
			<dd>{move || props.with(|p| format::node_set(p.sinks.as_deref()))}</dd>
		</dl>
	}
}
