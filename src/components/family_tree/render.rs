use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{FamilyTreeState, NODE_RADIUS, TreePhase};

const NODE_COLOR: &str = "#1f77b4";

/// Draw the current state onto the canvas. The group transform mirrors
/// the pan/zoom state; the tree is drawn subject-at-bottom with
/// ancestors rising above, so logical y is negated.
pub fn render(state: &FamilyTreeState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	if state.phase != TreePhase::Rendered {
		return;
	}
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &FamilyTreeState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("black");
	ctx.set_line_width(1.5 / state.transform.k);
	for &(parent, child) in &state.layout.edges {
		let (p, c) = (&state.layout.nodes[parent], &state.layout.nodes[child]);
		ctx.begin_path();
		ctx.move_to(p.x, -p.y);
		ctx.line_to(c.x, -c.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &FamilyTreeState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;

	for node in &state.layout.nodes {
		ctx.begin_path();
		let _ = ctx.arc(node.x, -node.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(NODE_COLOR);
		ctx.fill();
	}

	// Labels sit on the markers, like the SVG original.
	ctx.set_fill_style_str("white");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));
	for node in &state.layout.nodes {
		let _ = ctx.fill_text(&node.label, node.x, -node.y);
	}
}
