use std::collections::BTreeMap;

use digraph_editor::graph::{DiGraph, GraphError, VertexId};
use pretty_assertions::assert_eq;

fn graph_with(n: usize) -> DiGraph {
	let mut g = DiGraph::new();
	for _ in 0..n {
		g.add_vertex();
	}
	g
}

fn list_as_str(g: &DiGraph) -> BTreeMap<String, Vec<String>> {
	g.adjacency_list()
		.into_iter()
		.map(|(id, ns)| (id.to_string(), ns.iter().map(ToString::to_string).collect()))
		.collect()
}

// =============================================================================
// Identifiers
// =============================================================================

#[test]
fn ids_are_unique_and_sequential() {
	let mut g = DiGraph::new();
	let ids: Vec<String> = (0..30).map(|_| g.add_vertex().to_string()).collect();
	let expected: Vec<String> = ('A'..='Z')
		.map(String::from)
		.chain(["AA", "AB", "AC", "AD"].map(String::from))
		.collect();
	assert_eq!(ids, expected);
}

#[test]
fn removed_ids_are_never_reissued() {
	let mut g = graph_with(3);
	g.remove_vertex("C");
	g.remove_vertex("B");
	assert_eq!(g.add_vertex(), VertexId::from("D"));
	assert_eq!(g.vertex_count(), 2);
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn remove_vertex_drops_in_and_out_edges() {
	let mut g = graph_with(3);
	g.add_edge("B", "A").unwrap();
	g.add_edge("C", "B").unwrap();
	g.add_edge("A", "C").unwrap();

	g.remove_vertex("B");

	assert_eq!(g.vertex_count(), 2);
	let expected = BTreeMap::from([
		("A".to_string(), vec!["C".to_string()]),
		("C".to_string(), vec![]),
	]);
	assert_eq!(list_as_str(&g), expected);
}

#[test]
fn add_edge_is_idempotent() {
	let mut g = graph_with(2);
	g.add_edge("A", "B").unwrap();
	g.add_edge("A", "B").unwrap();
	assert_eq!(g.edge_count(), 1);
}

#[test]
fn add_edge_to_unknown_vertex_is_reported() {
	let mut g = graph_with(1);
	let result = g.add_edge("A", "B");
	assert_eq!(
		result,
		Err(GraphError::InvalidReference {
			missing: VertexId::from("B")
		})
	);
	assert_eq!(g.edge_count(), 0);
}

#[test]
fn absent_data_is_a_silent_noop() {
	let mut g = graph_with(2);
	assert!(!g.remove_vertex("Q"));
	assert!(!g.remove_edge("A", "B"));
	assert_eq!(g.vertex_count(), 2);
	assert_eq!(g.edge_count(), 0);
}

// =============================================================================
// Derived views
// =============================================================================

#[test]
fn matrix_rows_follow_sorted_ids() {
	let mut g = graph_with(3);
	g.add_edge("C", "A").unwrap();
	g.add_edge("A", "B").unwrap();
	g.add_edge("B", "B").unwrap();

	let m = g.adjacency_matrix();
	let ids: Vec<&str> = m.ids.iter().map(VertexId::as_str).collect();
	assert_eq!(ids, vec!["A", "B", "C"]);
	assert_eq!(m.cells, vec![vec![0, 1, 0], vec![0, 1, 0], vec![1, 0, 0]]);
}

#[test]
fn chain_properties() {
	let mut g = graph_with(3);
	g.add_edge("A", "B").unwrap();
	g.add_edge("B", "C").unwrap();

	let props = g.properties();
	assert_eq!(format!("{:.3}", props.density.unwrap()), "0.333");
	assert_eq!(props.sources, Some(vec![VertexId::from("A")]));
	assert_eq!(props.sinks, Some(vec![VertexId::from("C")]));
}

#[test]
fn empty_graph_views() {
	let g = DiGraph::new();
	let m = g.adjacency_matrix();
	assert!(m.ids.is_empty());
	assert!(m.cells.is_empty());
	assert!(g.adjacency_list().is_empty());

	let props = g.properties();
	assert_eq!(props.density, None);
	assert_eq!(props.sources, None);
	assert_eq!(props.sinks, None);
}
