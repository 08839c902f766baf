use super::layout::{LOGICAL_WIDTH, TreeLayout};

/// Wheel-zoom scale bounds.
pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 2.0;

pub const NODE_RADIUS: f64 = 10.0;

/// Bottom margin between the subject's row and the canvas edge.
const BOTTOM_MARGIN: f64 = 40.0;

/// Lifecycle of the tree container. Nothing survives a close: each
/// open starts from a fresh fetch and a home transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TreePhase {
	#[default]
	Hidden,
	Loading,
	Rendered,
	FailedEmpty,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

pub struct FamilyTreeState {
	pub phase: TreePhase,
	pub layout: TreeLayout,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
}

impl FamilyTreeState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			phase: TreePhase::Hidden,
			layout: TreeLayout::default(),
			transform: home_transform(width, height),
			pan: PanState::default(),
			width,
			height,
		}
	}

	/// A fresh fetch is underway; any prior render is gone.
	pub fn begin_loading(&mut self) {
		self.layout = TreeLayout::default();
		self.phase = TreePhase::Loading;
	}

	pub fn apply_layout(&mut self, layout: TreeLayout) {
		self.layout = layout;
		self.phase = TreePhase::Rendered;
	}

	/// The fetch failed; the canvas stays in its cleared state.
	pub fn fail(&mut self) {
		self.layout = TreeLayout::default();
		self.phase = TreePhase::FailedEmpty;
	}

	/// Drop all rendered content, reset the view and hide the
	/// container. Safe to call when already hidden.
	pub fn close(&mut self) {
		self.layout = TreeLayout::default();
		self.pan = PanState::default();
		self.transform = home_transform(self.width, self.height);
		self.phase = TreePhase::Hidden;
	}

	pub fn begin_pan(&mut self, x: f64, y: f64) {
		self.pan.active = true;
		self.pan.start_x = x;
		self.pan.start_y = y;
		self.pan.transform_start_x = self.transform.x;
		self.pan.transform_start_y = self.transform.y;
	}

	pub fn pan_to(&mut self, x: f64, y: f64) {
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	/// Zoom by `factor` anchored at canvas point (x, y). The scale is
	/// clamped to [`MIN_SCALE`, `MAX_SCALE`] for any gesture magnitude.
	pub fn apply_zoom(&mut self, factor: f64, x: f64, y: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_SCALE, MAX_SCALE);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}
}

/// Initial transform: tree centered horizontally, subject row just
/// above the bottom edge (ancestors are drawn upward).
fn home_transform(width: f64, height: f64) -> ViewTransform {
	ViewTransform {
		x: (width - LOGICAL_WIDTH) / 2.0,
		y: height - BOTTOM_MARGIN,
		k: 1.0,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::family_tree::FamilyNode;

	fn rendered_state() -> FamilyTreeState {
		let tree: FamilyNode =
			serde_json::from_str(r#"{"name":"1","children":[{"name":"2","role":"Mother"}]}"#)
				.unwrap();
		let mut state = FamilyTreeState::new(800.0, 600.0);
		state.begin_loading();
		state.apply_layout(TreeLayout::compute(&tree));
		state
	}

	#[test]
	fn open_render_close_cycle() {
		let mut state = FamilyTreeState::new(800.0, 600.0);
		assert_eq!(state.phase, TreePhase::Hidden);

		state.begin_loading();
		assert_eq!(state.phase, TreePhase::Loading);
		assert!(state.layout.nodes.is_empty());

		let mut state = rendered_state();
		assert_eq!(state.phase, TreePhase::Rendered);
		assert_eq!(state.layout.nodes.len(), 2);

		state.close();
		assert_eq!(state.phase, TreePhase::Hidden);
		assert!(state.layout.nodes.is_empty());
		assert!(state.layout.edges.is_empty());
	}

	#[test]
	fn close_is_idempotent() {
		let mut state = rendered_state();
		state.apply_zoom(1.1, 10.0, 10.0);
		state.close();
		let (transform, phase) = (state.transform.clone(), state.phase);
		state.close();
		assert_eq!(state.transform, transform);
		assert_eq!(state.phase, phase);
		assert_eq!(state.transform.k, 1.0);
	}

	#[test]
	fn failed_fetch_leaves_canvas_cleared() {
		let mut state = rendered_state();
		state.begin_loading();
		state.fail();
		assert_eq!(state.phase, TreePhase::FailedEmpty);
		assert!(state.layout.nodes.is_empty());
	}

	#[test]
	fn reopen_clears_previous_render() {
		let mut state = rendered_state();
		state.begin_loading();
		assert_eq!(state.phase, TreePhase::Loading);
		assert!(state.layout.nodes.is_empty());
	}

	#[test]
	fn zoom_is_clamped_at_both_ends() {
		let mut state = rendered_state();
		for _ in 0..100 {
			state.apply_zoom(1.1, 400.0, 300.0);
		}
		assert_eq!(state.transform.k, MAX_SCALE);

		for _ in 0..100 {
			state.apply_zoom(0.9, 400.0, 300.0);
		}
		assert_eq!(state.transform.k, MIN_SCALE);
	}

	#[test]
	fn zoom_clamps_single_extreme_gesture() {
		let mut state = rendered_state();
		state.apply_zoom(1000.0, 0.0, 0.0);
		assert_eq!(state.transform.k, MAX_SCALE);
		state.apply_zoom(1e-9, 0.0, 0.0);
		assert_eq!(state.transform.k, MIN_SCALE);
	}

	#[test]
	fn zoom_keeps_the_anchor_point_fixed() {
		let mut state = rendered_state();
		let (ax, ay) = (123.0, 456.0);
		let before = (
			(ax - state.transform.x) / state.transform.k,
			(ay - state.transform.y) / state.transform.k,
		);
		state.apply_zoom(1.1, ax, ay);
		let after = (
			(ax - state.transform.x) / state.transform.k,
			(ay - state.transform.y) / state.transform.k,
		);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
	}

	#[test]
	fn pan_shifts_the_transform_by_the_drag_delta() {
		let mut state = rendered_state();
		let (x0, y0) = (state.transform.x, state.transform.y);
		state.begin_pan(100.0, 100.0);
		state.pan_to(130.0, 80.0);
		assert_eq!(state.transform.x, x0 + 30.0);
		assert_eq!(state.transform.y, y0 - 20.0);

		// Movement without an active pan is ignored.
		state.end_pan();
		state.pan_to(500.0, 500.0);
		assert_eq!(state.transform.x, x0 + 30.0);
	}
}
