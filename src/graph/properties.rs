use std::collections::HashSet;

use super::id::VertexId;
use super::model::DiGraph;

/// Summary statistics shown in the property panel.
///
/// `None` means "not applicable": density needs at least two vertices,
/// sources and sinks need at least one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphProperties {
	/// Number of vertices.
	pub vertex_count: usize,
	/// Number of edges.
	pub edge_count: usize,
	/// `E / (V * (V - 1))`.
	pub density: Option<f64>,
	/// Vertices without incoming edges, in id order.
	pub sources: Option<Vec<VertexId>>,
	/// Vertices without outgoing edges, in id order.
	pub sinks: Option<Vec<VertexId>>,
}

impl DiGraph {
	/// Counts, density, sources and sinks of the current graph.
	pub fn properties(&self) -> GraphProperties {
		let (v, e) = (self.vertex_count(), self.edge_count());

		// Simple directed graph: at most V * (V - 1) edges.
		let density = (v > 1).then(|| e as f64 / (v * (v - 1)) as f64);

		if v == 0 {
			return GraphProperties {
				vertex_count: v,
				edge_count: e,
				density,
				sources: None,
				sinks: None,
			};
		}

		let mut has_incoming = HashSet::new();
		let mut has_outgoing = HashSet::new();
		for edge in self.edges() {
			has_outgoing.insert(&edge.from);
			has_incoming.insert(&edge.to);
		}

		let sources = self
			.vertices()
			.filter(|id| !has_incoming.contains(id))
			.cloned()
			.collect();
		let sinks = self
			.vertices()
			.filter(|id| !has_outgoing.contains(id))
			.cloned()
			.collect();

		GraphProperties {
			vertex_count: v,
			edge_count: e,
			density,
			sources: Some(sources),
			sinks: Some(sinks),
		}
	}
}
