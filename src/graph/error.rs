//! Error types for graph mutations.

use thiserror::Error;

use super::id::VertexId;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors a graph mutation can report.
///
/// Only malformed references are errors. Removing something that is not
/// there, or adding an edge that already exists, is a silent no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// An edge endpoint names a vertex that does not exist.
	///
	/// The message is shown to the user as is.
	#[error("Both vertices must exist to add an edge.")]
	InvalidReference {
		/// The first endpoint found missing. Logged, not displayed.
		missing: VertexId,
	},
}
