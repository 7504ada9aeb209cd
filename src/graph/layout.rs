use std::collections::HashMap;

use rand::Rng;

use super::id::VertexId;

/// Drawing surface size. Vertices are placed at least `margin` away from
/// every edge of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
	/// Minimum distance between a vertex centre and the surface border.
	pub margin: f64,
}

impl Default for CanvasBounds {
	fn default() -> Self {
		Self {
			width: 600.0,
			height: 400.0,
			margin: 30.0,
		}
	}
}

impl CanvasBounds {
	/// Whether `p` lies inside the placement area.
	pub fn contains(&self, p: Position) -> bool {
		(self.margin..=self.width - self.margin).contains(&p.x)
			&& (self.margin..=self.height - self.margin).contains(&p.y)
	}

	fn random_position<R: Rng>(&self, rng: &mut R) -> Position {
		let span_x = (self.width - 2.0 * self.margin).max(0.0);
		let span_y = (self.height - 2.0 * self.margin).max(0.0);
		Position {
			x: self.margin + rng.r#gen::<f64>() * span_x,
			y: self.margin + rng.r#gen::<f64>() * span_y,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Vertex centre in canvas pixels.
pub struct Position {
	/// Horizontal offset from the left border.
	pub x: f64,
	/// Vertical offset from the top border.
	pub y: f64,
}

/// Display positions keyed by vertex id.
///
/// Kept apart from [`DiGraph`](super::DiGraph) so the model carries no
/// presentation data. A position is fixed once placed.
#[derive(Clone, Debug, Default)]
pub struct Layout {
	bounds: CanvasBounds,
	positions: HashMap<VertexId, Position>,
}

impl Layout {
	/// Empty layout placing vertices inside `bounds`.
	pub fn new(bounds: CanvasBounds) -> Self {
		Self {
			bounds,
			positions: HashMap::new(),
		}
	}

	/// Area vertices are placed in.
	pub fn bounds(&self) -> CanvasBounds {
		self.bounds
	}

	/// Give `id` a random position inside the bounds, unless it already has one.
	pub fn place<R: Rng>(&mut self, id: &VertexId, rng: &mut R) -> Position {
		let bounds = self.bounds;
		*self
			.positions
			.entry(id.clone())
			.or_insert_with(|| bounds.random_position(rng))
	}

	/// Where `id` is drawn, if placed.
	pub fn position(&self, id: &str) -> Option<Position> {
		self.positions.get(id).copied()
	}

	/// Forget the position of `id`, returning it if there was one.
	pub fn remove(&mut self, id: &str) -> Option<Position> {
		self.positions.remove(id)
	}

	/// Number of placed vertices.
	pub fn len(&self) -> usize {
		self.positions.len()
	}

	/// True when nothing is placed.
	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}
}
