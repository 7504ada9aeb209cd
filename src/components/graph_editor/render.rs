use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{EditorState, VERTEX_RADIUS};
use crate::graph::Position;

const BACKGROUND: &str = "#fdfdfd";
const EDGE_COLOR: &str = "#555555";
const VERTEX_FILL: &str = "#4a90d9";
const VERTEX_STROKE: &str = "#2c5f93";
const LABEL_COLOR: &str = "white";
const ARROW_SIZE: f64 = 10.0;

/// Redraw the whole diagram. Edges go first so vertices sit on top of them.
pub fn render(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let bounds = state.layout.bounds();
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, bounds.width, bounds.height);
	draw_edges(state, ctx);
	draw_vertices(state, ctx);
}

fn draw_edges(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_fill_style_str(EDGE_COLOR);
	ctx.set_line_width(2.0);

	for edge in state.graph.edges() {
		let (Some(from), Some(to)) = (
			state.layout.position(edge.from.as_str()),
			state.layout.position(edge.to.as_str()),
		) else {
			continue;
		};
		if edge.from == edge.to {
			draw_self_loop(from, ctx);
			continue;
		}

		let (dx, dy) = (to.x - from.x, to.y - from.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(from.x + ux * VERTEX_RADIUS, from.y + uy * VERTEX_RADIUS);
		ctx.line_to(
			to.x - ux * (VERTEX_RADIUS + ARROW_SIZE),
			to.y - uy * (VERTEX_RADIUS + ARROW_SIZE),
		);
		ctx.stroke();

		let (tip_x, tip_y) = (to.x - ux * VERTEX_RADIUS, to.y - uy * VERTEX_RADIUS);
		let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
		let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

// Loop sits on top of the vertex; the lower half is hidden under the circle.
fn draw_self_loop(at: Position, ctx: &CanvasRenderingContext2d) {
	let r = VERTEX_RADIUS * 0.7;
	ctx.begin_path();
	let _ = ctx.arc(at.x, at.y - VERTEX_RADIUS, r, 0.0, 2.0 * PI);
	ctx.stroke();
}

fn draw_vertices(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(2.0);
	ctx.set_font("bold 14px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for id in state.graph.vertices() {
		let Some(Position { x, y }) = state.layout.position(id.as_str()) else {
			continue;
		};
		ctx.begin_path();
		let _ = ctx.arc(x, y, VERTEX_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(VERTEX_FILL);
		ctx.fill();
		ctx.set_stroke_style_str(VERTEX_STROKE);
		ctx.stroke();

		ctx.set_fill_style_str(LABEL_COLOR);
		let _ = ctx.fill_text(id.as_str(), x, y);
	}
}
