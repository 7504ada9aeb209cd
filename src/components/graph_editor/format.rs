//! Text shown in the property panel and the adjacency list.

use crate::graph::VertexId;

const NOT_APPLICABLE: &str = "N/A";

pub fn join_ids(ids: &[VertexId]) -> String {
	ids.iter()
		.map(VertexId::as_str)
		.collect::<Vec<_>>()
		.join(", ")
}

pub fn density(density: Option<f64>) -> String {
	density.map_or_else(|| NOT_APPLICABLE.to_string(), |d| format!("{d:.3}"))
}

/// `N/A` when the set is undefined, `None` when it is defined but empty.
pub fn node_set(ids: Option<&[VertexId]>) -> String {
	match ids {
		None => NOT_APPLICABLE.to_string(),
		Some([]) => "None".to_string(),
		Some(ids) => join_ids(ids),
	}
}
