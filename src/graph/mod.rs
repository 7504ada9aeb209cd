//! Directed graph model, its derived views, and the display layout side table.
//!
//! [`DiGraph`] is the structural model: a set of vertex ids and a list of
//! directed edges. Display positions are not part of it; they live in
//! [`Layout`], keyed by [`VertexId`].

mod error;
mod id;
mod layout;
mod model;
mod properties;

pub use error::{GraphError, Result};
pub use id::{VertexId, label_for};
pub use layout::{CanvasBounds, Layout, Position};
pub use model::{AdjacencyMatrix, DiGraph, Edge};
pub use properties::GraphProperties;
