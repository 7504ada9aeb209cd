use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{debug, warn};

use super::error::{GraphError, Result};
use super::id::VertexId;

/// A directed edge `from -> to`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// Source vertex.
	pub from: VertexId,
	/// Target vertex.
	pub to: VertexId,
}

impl Edge {
	/// Edge `from -> to`.
	pub fn new(from: impl Into<VertexId>, to: impl Into<VertexId>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}

	fn matches(&self, from: &str, to: &str) -> bool {
		self.from.as_str() == from && self.to.as_str() == to
	}

	fn touches(&self, id: &str) -> bool {
		self.from.as_str() == id || self.to.as_str() == id
	}
}

/// Square 0/1 matrix over the vertex ids in lexicographic order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
	/// Row and column labels.
	pub ids: Vec<VertexId>,
	/// `cells[i][j]` is 1 when `ids[i] -> ids[j]` is an edge, else 0.
	pub cells: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
	/// Number of rows, equal to the number of columns.
	pub fn size(&self) -> usize {
		self.ids.len()
	}

	/// True for the 0x0 matrix of an empty graph.
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Cell for `from -> to` by id, `None` if either id is not a row.
	pub fn get(&self, from: &str, to: &str) -> Option<u8> {
		let i = self.ids.iter().position(|id| id.as_str() == from)?;
		let j = self.ids.iter().position(|id| id.as_str() == to)?;
		Some(self.cells[i][j])
	}
}

/// Directed graph with at most one edge per ordered vertex pair.
///
/// Every edge endpoint is a live vertex. Vertex ids come from a session
/// counter and are never handed out twice, even after removal.
#[derive(Clone, Debug, Default)]
pub struct DiGraph {
	vertices: BTreeSet<VertexId>,
	edges: Vec<Edge>,
	next_label: usize,
}

impl DiGraph {
	/// Empty graph whose first vertex will be `A`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a vertex under the next id in the label sequence.
	pub fn add_vertex(&mut self) -> VertexId {
		let id = VertexId::nth(self.next_label);
		self.next_label += 1;
		self.vertices.insert(id.clone());
		debug!("added vertex {id}");
		id
	}

	/// Remove a vertex and every edge touching it. Absent ids are ignored.
	pub fn remove_vertex(&mut self, id: &str) -> bool {
		if !self.vertices.remove(id) {
			return false;
		}
		let before = self.edges.len();
		self.edges.retain(|edge| !edge.touches(id));
		debug!(
			"removed vertex {id} and {} incident edge(s)",
			before - self.edges.len()
		);
		true
	}

	/// Add `from -> to`. Adding an existing edge again changes nothing.
	pub fn add_edge(&mut self, from: &str, to: &str) -> Result<()> {
		for endpoint in [from, to] {
			if !self.vertices.contains(endpoint) {
				warn!("rejected edge {from} -> {to}: no vertex {endpoint}");
				return Err(GraphError::InvalidReference {
					missing: endpoint.into(),
				});
			}
		}
		if self.has_edge(from, to) {
			return Ok(());
		}
		self.edges.push(Edge::new(from, to));
		debug!("added edge {from} -> {to}");
		Ok(())
	}

	/// Remove `from -> to` if present.
	pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
		let before = self.edges.len();
		self.edges.retain(|edge| !edge.matches(from, to));
		let removed = self.edges.len() != before;
		if removed {
			debug!("removed edge {from} -> {to}");
		}
		removed
	}

	/// Whether `id` is a live vertex.
	pub fn contains(&self, id: &str) -> bool {
		self.vertices.contains(id)
	}

	/// Whether `from -> to` is an edge.
	pub fn has_edge(&self, from: &str, to: &str) -> bool {
		self.edges.iter().any(|edge| edge.matches(from, to))
	}

	/// Number of live vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// True when the graph has no vertices.
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	/// Vertex ids in lexicographic order.
	pub fn vertices(&self) -> impl Iterator<Item = &VertexId> {
		self.vertices.iter()
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Out-neighbours of every vertex, in edge insertion order.
	pub fn adjacency_list(&self) -> BTreeMap<VertexId, Vec<VertexId>> {
		let mut list: BTreeMap<VertexId, Vec<VertexId>> = self
			.vertices
			.iter()
			.map(|id| (id.clone(), Vec::new()))
			.collect();
		for edge in &self.edges {
			if let Some(neighbors) = list.get_mut(&edge.from) {
				neighbors.push(edge.to.clone());
			}
		}
		list
	}

	/// 0/1 matrix of every ordered vertex pair, rows in id order.
	pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
		let ids: Vec<VertexId> = self.vertices.iter().cloned().collect();
		let index: HashMap<&VertexId, usize> =
			ids.iter().enumerate().map(|(i, id)| (id, i)).collect();
		let mut cells = vec![vec![0u8; ids.len()]; ids.len()];
		for edge in &self.edges {
			if let (Some(&i), Some(&j)) = (index.get(&edge.from), index.get(&edge.to)) {
				cells[i][j] = 1;
			}
		}
		AdjacencyMatrix { ids, cells }
	}
}
