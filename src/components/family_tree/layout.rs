//! Tidy layout of a family tree onto a fixed logical canvas.
//!
//! This is the one seam between tree data and drawing: callers hand in
//! a [`FamilyNode`] and get back positioned nodes plus parent-child
//! edges. Swapping in another layout engine only touches this module.

use super::types::FamilyNode;

/// Logical canvas the layout targets, independent of node count.
pub const LOGICAL_WIDTH: f64 = 400.0;
pub const LOGICAL_HEIGHT: f64 = 200.0;

/// A node placed on the logical canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	pub x: f64,
	pub y: f64,
	pub label: String,
}

/// Layout result: one entry per tree node, plus connecting edges as
/// `(parent, child)` index pairs into `nodes`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeLayout {
	pub nodes: Vec<PositionedNode>,
	pub edges: Vec<(usize, usize)>,
}

impl TreeLayout {
	/// Compute positions for every node of `root`.
	///
	/// Leaves are spread evenly across the canvas width, each parent is
	/// centered over its children, and y grows by a fixed step per
	/// generation so the deepest row lands on the canvas edge.
	pub fn compute(root: &FamilyNode) -> Self {
		let depth = tree_depth(root);
		let row_step = if depth > 1 {
			LOGICAL_HEIGHT / (depth - 1) as f64
		} else {
			0.0
		};
		let slot = LOGICAL_WIDTH / leaf_count(root) as f64;

		let mut layout = TreeLayout::default();
		let mut next_leaf = 0usize;
		place(root, 0, row_step, slot, &mut next_leaf, &mut layout);
		layout
	}
}

fn place(
	node: &FamilyNode,
	depth: usize,
	row_step: f64,
	slot: f64,
	next_leaf: &mut usize,
	layout: &mut TreeLayout,
) -> usize {
	let index = layout.nodes.len();
	layout.nodes.push(PositionedNode {
		x: 0.0,
		y: depth as f64 * row_step,
		label: node.label(),
	});

	let x = if node.children.is_empty() {
		let x = (*next_leaf as f64 + 0.5) * slot;
		*next_leaf += 1;
		x
	} else {
		let (mut first, mut last) = (0.0, 0.0);
		for (i, child) in node.children.iter().enumerate() {
			let child_index = place(child, depth + 1, row_step, slot, next_leaf, layout);
			layout.edges.push((index, child_index));
			let cx = layout.nodes[child_index].x;
			if i == 0 {
				first = cx;
			}
			last = cx;
		}
		(first + last) / 2.0
	};
	layout.nodes[index].x = x;
	index
}

fn tree_depth(node: &FamilyNode) -> usize {
	1 + node.children.iter().map(tree_depth).max().unwrap_or(0)
}

fn leaf_count(node: &FamilyNode) -> usize {
	if node.children.is_empty() {
		1
	} else {
		node.children.iter().map(leaf_count).sum()
	}
}
