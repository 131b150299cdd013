//! Attachment target selection.
//!
//! A link rendered as `<a>` carries its own listeners and `href`. A link
//! rendered as any other tag hands them to its first descendant anchor, and
//! keeps them itself when it has none.

use std::sync::Arc;

use crate::node::{NodeData, VNode};

/// Returns true for tags that behave as anchors.
pub fn is_anchor_tag(tag: &str) -> bool {
	tag.eq_ignore_ascii_case("a")
}

/// Child indices leading from a link's children to a descendant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath(Vec<usize>);

impl NodePath {
	/// Creates a path from child indices.
	pub fn new(indices: Vec<usize>) -> Self {
		Self(indices)
	}

	/// Returns the child indices.
	pub fn indices(&self) -> &[usize] {
		&self.0
	}
}

/// Where the link's listeners and `href` go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
	/// The link's own element.
	Root,
	/// A descendant anchor.
	Descendant(NodePath),
}

/// Selects the attachment target for a link rendered as `render_tag`.
pub fn select_target(render_tag: &str, children: &[Arc<VNode>]) -> Target {
	if is_anchor_tag(render_tag) {
		return Target::Root;
	}
	match find_anchor(children) {
		Some(path) => Target::Descendant(path),
		None => Target::Root,
	}
}

/// Finds the first anchor in depth-first pre-order.
pub fn find_anchor(children: &[Arc<VNode>]) -> Option<NodePath> {
	let mut path = Vec::new();
	search(children, &mut path).then(|| NodePath(path))
}

fn search(children: &[Arc<VNode>], path: &mut Vec<usize>) -> bool {
	for (index, child) in children.iter().enumerate() {
		path.push(index);
		if child.tag().is_some_and(is_anchor_tag) || search(child.children(), path) {
			return true;
		}
		path.pop();
	}
	false
}

/// Returns the node at `path`.
pub fn node_at<'a>(children: &'a [Arc<VNode>], path: &NodePath) -> Option<&'a Arc<VNode>> {
	let (first, rest) = path.0.split_first()?;
	let mut node = children.get(*first)?;
	for index in rest {
		node = node.children().get(*index)?;
	}
	Some(node)
}

/// Rebuilds `children` with the node at `path` replaced by a copy whose data
/// is produced by `update`.
///
/// Only the nodes on the path are copied; every other subtree keeps sharing
/// its `Arc`, so the original nodes are never written to. Copies are marked
/// non-static. Nodes an invalid path cannot reach are left as they are.
pub fn attach_at<F>(children: &[Arc<VNode>], path: &NodePath, update: F) -> Vec<Arc<VNode>>
where
	F: FnOnce(&NodeData) -> NodeData,
{
	rebuild(children, path.indices(), update)
}

fn rebuild<F>(children: &[Arc<VNode>], path: &[usize], update: F) -> Vec<Arc<VNode>>
where
	F: FnOnce(&NodeData) -> NodeData,
{
	let mut rebuilt = children.to_vec();
	let Some((&index, rest)) = path.split_first() else {
		return rebuilt;
	};
	let Some(slot) = rebuilt.get_mut(index) else {
		return rebuilt;
	};
	let VNode::Element(el) = &**slot else {
		return rebuilt;
	};

	let mut copy = el.clone();
	copy.is_static = false;
	if rest.is_empty() {
		copy.data = update(&el.data);
	} else {
		copy.children = rebuild(&el.children, rest, update);
	}
	*slot = Arc::new(VNode::Element(copy));
	rebuilt
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::node::{ElementNode, HandlerMap};
	use rstest::rstest;

	fn nested_children() -> Vec<Arc<VNode>> {
		vec![
			VNode::element("span").child("label").into_shared(),
			VNode::element("div")
				.child(VNode::element("a").attr("class", "inner"))
				.into_shared(),
		]
	}

	#[rstest]
	#[case("a")]
	#[case("A")]
	fn test_anchor_tag_targets_root(#[case] tag: &str) {
		assert_eq!(select_target(tag, &nested_children()), Target::Root);
	}

	#[rstest]
	fn test_finds_nested_anchor() {
		let children = nested_children();
		assert_eq!(
			select_target("div", &children),
			Target::Descendant(NodePath::new(vec![1, 0]))
		);
	}

	#[rstest]
	fn test_pre_order_prefers_earlier_subtree() {
		let children = vec![
			VNode::element("div")
				.child(VNode::element("p").child(VNode::element("a").attr("id", "deep")))
				.into_shared(),
			VNode::element("a").attr("id", "shallow").into_shared(),
		];

		let path = find_anchor(&children).unwrap();
		assert_eq!(path.indices(), &[0, 0, 0]);
		let node = node_at(&children, &path).unwrap();
		assert_eq!(
			node.as_element().unwrap().data.attrs.get("id").map(String::as_str),
			Some("deep")
		);
	}

	#[rstest]
	fn test_no_anchor_targets_root() {
		let children = vec![VNode::element("span").child("x").into_shared()];
		assert_eq!(select_target("li", &children), Target::Root);
		assert_eq!(select_target("li", &[]), Target::Root);
	}

	#[rstest]
	fn test_attach_copies_and_keeps_original_untouched() {
		let anchor = VNode::element("a").static_node().into_shared();
		let sibling = VNode::element("span").into_shared();
		let children = vec![
			sibling.clone(),
			ElementNode::new("div")
				.static_node()
				.shared_child(anchor.clone())
				.into_shared(),
		];
		let path = find_anchor(&children).unwrap();

		let rebuilt = attach_at(&children, &path, |data| {
			data.with_navigation(&HandlerMap::new(), "/target")
		});

		let original = anchor.as_element().unwrap();
		assert!(original.is_static);
		assert!(!original.data.attrs.contains_key("href"));

		let copy = node_at(&rebuilt, &path).unwrap();
		assert!(!Arc::ptr_eq(copy, &anchor));
		let copy = copy.as_element().unwrap();
		assert!(!copy.is_static);
		assert_eq!(
			copy.data.attrs.get("href").map(String::as_str),
			Some("/target")
		);

		assert!(Arc::ptr_eq(&rebuilt[0], &sibling));
		assert!(!rebuilt[1].as_element().unwrap().is_static);
		assert!(children[1].as_element().unwrap().is_static);
	}

	#[rstest]
	fn test_attach_with_invalid_path_is_noop() {
		let children: Vec<Arc<VNode>> = vec![Arc::new(VNode::text("only text"))];
		let rebuilt = attach_at(&children, &NodePath::new(vec![0, 3]), |data| data.clone());
		assert!(Arc::ptr_eq(&rebuilt[0], &children[0]));
	}
}
