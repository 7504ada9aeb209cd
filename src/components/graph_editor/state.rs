use rand::Rng;

use crate::graph::{CanvasBounds, DiGraph, Layout, Result, VertexId};

/// Radius of a drawn vertex, in pixels.
pub const VERTEX_RADIUS: f64 = 15.0;

/// Which derived view is visible below the diagram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
	/// Adjacency list.
	#[default]
	List,
	/// Adjacency matrix.
	Matrix,
}

/// The editing session: the graph model plus where each vertex is drawn.
///
/// Created once by the page and handed to [`GraphEditor`](super::GraphEditor).
#[derive(Clone, Debug, Default)]
pub struct EditorState {
	/// The structural model.
	pub graph: DiGraph,
	/// Where each vertex of `graph` is drawn.
	pub layout: Layout,
}

impl EditorState {
	/// Empty session drawing inside `bounds`.
	pub fn new(bounds: CanvasBounds) -> Self {
		Self {
			graph: DiGraph::new(),
			layout: Layout::new(bounds),
		}
	}

	/// Add the next vertex and give it a random position.
	pub fn add_vertex<R: Rng>(&mut self, rng: &mut R) -> VertexId {
		let id = self.graph.add_vertex();
		self.layout.place(&id, rng);
		id
	}

	/// Remove a vertex, its edges and its position.
	pub fn remove_vertex(&mut self, id: &str) -> bool {
		self.layout.remove(id);
		self.graph.remove_vertex(id)
	}

	/// See [`DiGraph::add_edge`].
	pub fn add_edge(&mut self, from: &str, to: &str) -> Result<()> {
		self.graph.add_edge(from, to)
	}

	/// See [`DiGraph::remove_edge`].
	pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
		self.graph.remove_edge(from, to)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::graph::GraphError;

	#[test]
	fn vertices_get_positions() {
		let mut state = EditorState::new(CanvasBounds::default());
		let mut rng = StdRng::seed_from_u64(42);
		let a = state.add_vertex(&mut rng);
		let b = state.add_vertex(&mut rng);
		assert_eq!(state.layout.len(), 2);
		assert!(state.layout.position(a.as_str()).is_some());
		assert!(state.layout.position(b.as_str()).is_some());
	}

	#[test]
	fn removing_vertex_drops_position_and_edges() {
		let mut state = EditorState::new(CanvasBounds::default());
		let mut rng = StdRng::seed_from_u64(42);
		state.add_vertex(&mut rng);
		state.add_vertex(&mut rng);
		state.add_edge("A", "B").unwrap();

		assert!(state.remove_vertex("A"));
		assert_eq!(state.layout.position("A"), None);
		assert_eq!(state.graph.edge_count(), 0);
		assert!(!state.remove_vertex("A"));
	}

	#[test]
	fn add_edge_reports_missing_vertex() {
		let mut state = EditorState::default();
		state.add_vertex(&mut StdRng::seed_from_u64(0));
		assert!(matches!(
			state.add_edge("A", "B"),
			Err(GraphError::InvalidReference { .. })
		));
	}

	#[test]
	fn default_mode_is_list() {
		assert_eq!(DisplayMode::default(), DisplayMode::List);
	}
}
