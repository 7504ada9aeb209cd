use leptos::prelude::*;

use crate::components::graph_editor::{EditorState, GraphEditor};
use crate::graph::CanvasBounds;

/// Default Home Page: a fresh, empty editing session.
#[component]
pub fn Home() -> impl IntoView {
	// The only graph of the session. Reloading the page starts over.
	let editor = RwSignal::new(EditorState::new(CanvasBounds::default()));

	view! {
		<div class="app">
			<header>
				<h1>"Directed Graph Editor"</h1>
				<p class="subtitle">
					"Add vertices and edges; the list, matrix and properties update as you go."
				</p>
			</header>
			<GraphEditor editor=editor />
		</div>
	}
}
