use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::controls::{VertexSelect, selection, take_pair};
use super::render;
use super::state::{DisplayMode, EditorState};
use super::views::{AdjacencyListView, AdjacencyMatrixView, PropertiesPanel};
use crate::graph::VertexId;

fn alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

/// Diagram, editing controls and derived views for one editing session.
///
/// Every mutation goes through `editor`; all views read it back and redraw.
#[component]
pub fn GraphEditor(
	/// The editing session shown and mutated by this editor.
	editor: RwSignal<EditorState>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mode = RwSignal::new(DisplayMode::default());

	let remove_vertex_sel = RwSignal::new(String::new());
	let (add_from, add_to) = (RwSignal::new(String::new()), RwSignal::new(String::new()));
	let (remove_from, remove_to) = (RwSignal::new(String::new()), RwSignal::new(String::new()));

	let vertex_ids =
		Signal::derive(move || editor.with(|s| s.graph.vertices().cloned().collect::<Vec<VertexId>>()));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let bounds = editor.with(|s| s.layout.bounds());
		canvas.set_width(bounds.width as u32);
		canvas.set_height(bounds.height as u32);

		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			warn!("canvas has no 2d context");
			return;
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};
		editor.with(|s| render::render(s, &ctx));
	});

	let on_add_vertex = move |_| {
		editor.update(|s| {
			s.add_vertex(&mut rand::thread_rng());
		});
	};

	let on_remove_vertex = move |_| {
		let Some(id) = selection(remove_vertex_sel) else {
			return;
		};
		// Selects naming `id` fall back to their placeholder on their own.
		editor.update(|s| {
			s.remove_vertex(&id);
		});
	};

	let on_add_edge = move |_| {
		let Some((from, to)) = take_pair(add_from, add_to) else {
			return;
		};
		if let Some(Err(err)) = editor.try_update(|s| s.add_edge(&from, &to)) {
			alert(&err.to_string());
		}
	};

	let on_remove_edge = move |_| {
		let Some((from, to)) = take_pair(remove_from, remove_to) else {
			return;
		};
		editor.update(|s| {
			s.remove_edge(&from, &to);
		});
	};

	view! {
		<div class="graph-editor">
			<section class="diagram">
				<canvas node_ref=canvas_ref class="graph-canvas" />
			</section>

			<section class="controls">
				<div class="control-group">
					<h3>"Vertices"</h3>
					<button on:click=on_add_vertex>"Add Vertex"</button>
					<div class="control-row">
						<VertexSelect
							options=vertex_ids
							selected=remove_vertex_sel
							placeholder="Select Vertex"
						/>
						<button on:click=on_remove_vertex>"Remove Vertex"</button>
					</div>
				</div>

				<div class="control-group">
					<h3>"Edges"</h3>
					<div class="control-row">
						<VertexSelect options=vertex_ids selected=add_from placeholder="From Vertex" />
						<VertexSelect options=vertex_ids selected=add_to placeholder="To Vertex" />
						<button on:click=on_add_edge>"Add Edge"</button>
					</div>
					<div class="control-row">
						<VertexSelect
							options=vertex_ids
							selected=remove_from
							placeholder="From Vertex"
						/>
						<VertexSelect options=vertex_ids selected=remove_to placeholder="To Vertex" />
						<button on:click=on_remove_edge>"Remove Edge"</button>
					</div>
				</div>
			</section>

			<section class="representation">
				<div class="view-toggle">
					<button
						class:active=move || mode.get() == DisplayMode::List
						on:click=move |_| mode.set(DisplayMode::List)
					>
						"Adjacency List"
					</button>
					<button
						class:active=move || mode.get() == DisplayMode::Matrix
						on:click=move |_| mode.set(DisplayMode::Matrix)
					>
						"Adjacency Matrix"
					</button>
				</div>
				<div class="view" class:hidden=move || mode.get() != DisplayMode::List>
					<AdjacencyListView editor=editor />
				</div>
				<div class="view" class:hidden=move || mode.get() != DisplayMode::Matrix>
					<AdjacencyMatrixView editor=editor />
				</div>
			</section>

			<section class="graph-properties">
				<h3>"Graph Properties"</h3>
				<PropertiesPanel editor=editor />
			</section>
		</div>
	}
}
