use serde::Deserialize;

/// One individual in a family tree, as served by the family-tree
/// endpoint. The server builds the tree upward from the subject, so
/// `children` holds the recorded parents ("Mother"/"Father" roles) and
/// omits the field entirely for founders.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FamilyNode {
	pub name: String,
	#[serde(default)]
	pub role: Option<String>,
	#[serde(default)]
	pub children: Vec<FamilyNode>,
}

impl FamilyNode {
	/// Label drawn at the marker: the name, with the role in
	/// parentheses when one is recorded.
	pub fn label(&self) -> String {
		match &self.role {
			Some(role) => format!("{} ({})", self.name, role),
			None => self.name.clone(),
		}
	}

	/// Number of nodes in this subtree, the root included.
	pub fn count(&self) -> usize {
		1 + self.children.iter().map(FamilyNode::count).sum::<usize>()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_tree_with_roles() {
		let node: FamilyNode = serde_json::from_str(
			r#"{"name":"M42","role":"sire","children":[{"name":"M43","children":[]}]}"#,
		)
		.unwrap();
		assert_eq!(node.name, "M42");
		assert_eq!(node.role.as_deref(), Some("sire"));
		assert_eq!(node.children.len(), 1);
		assert_eq!(node.children[0].name, "M43");
		assert_eq!(node.count(), 2);
	}

	#[test]
	fn parses_founder_without_role_or_children() {
		// Founders come back with both fields missing.
		let node: FamilyNode = serde_json::from_str(r#"{"name":"7"}"#).unwrap();
		assert_eq!(node.role, None);
		assert!(node.children.is_empty());
		assert_eq!(node.count(), 1);
	}

	#[test]
	fn parses_null_role() {
		let node: FamilyNode =
			serde_json::from_str(r#"{"name":"7","role":null,"children":[]}"#).unwrap();
		assert_eq!(node.role, None);
	}

	#[test]
	fn label_includes_role_when_present() {
		let node: FamilyNode = serde_json::from_str(
			r#"{"name":"12","role":"Mother","children":[{"name":"3","role":"Father"}]}"#,
		)
		.unwrap();
		assert_eq!(node.label(), "12 (Mother)");
		assert_eq!(node.children[0].label(), "3 (Father)");
	}

	#[test]
	fn label_is_bare_name_without_role() {
		let node: FamilyNode = serde_json::from_str(r#"{"name":"M43"}"#).unwrap();
		assert_eq!(node.label(), "M43");
	}
}
