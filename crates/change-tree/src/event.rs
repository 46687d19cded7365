use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::ProjectPath;

/// What happened to a resource since the last build.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
pub enum ChangeKind {
	Added,
	Removed,
	Changed,
}

/// The filesystem shape of a changed resource. `Other` covers anything the
/// change producer reports that is neither a plain file nor a folder; such
/// nodes are skipped without effect.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
pub enum ResourceKind {
	File,
	Folder,
	Other,
}

/// One node of a change-event tree.
///
/// The tree mirrors the project hierarchy: the root node is the project
/// itself (empty path), folders carry their changed descendants as children
/// and files are leaves. Consumers traverse it pre-order and decide per node
/// whether to descend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
	pub path: ProjectPath,
	pub kind: ChangeKind,
	pub resource: ResourceKind,
	pub children: Vec<ChangeEvent>,
}

impl ChangeEvent {
	#[must_use]
	pub fn file(path: impl Into<ProjectPath>, kind: ChangeKind) -> Self {
		Self {
			path: path.into(),
			kind,
			resource: ResourceKind::File,
			children: Vec::new(),
		}
	}

	#[must_use]
	pub fn folder(
		path: impl Into<ProjectPath>,
		kind: ChangeKind,
		children: Vec<Self>,
	) -> Self {
		Self {
			path: path.into(),
			kind,
			resource: ResourceKind::Folder,
			children,
		}
	}

	/// The depth-0 node standing for the project itself.
	#[must_use]
	pub fn project_root(children: Vec<Self>) -> Self {
		Self::folder(ProjectPath::root(), ChangeKind::Changed, children)
	}

	#[must_use]
	pub fn name(&self) -> Option<&str> {
		self.path.name()
	}

	#[must_use]
	pub fn extension(&self) -> Option<&str> {
		self.path.extension()
	}
}

/// Assembles a [`ChangeEvent`] tree from a flat set of events, synthesizing
/// the intermediate folder nodes a change producer usually reports implicitly.
///
/// Synthesized folders carry [`ChangeKind::Changed`]; an explicit event for a
/// path overrides the synthesized node. Children are ordered by name, so the
/// resulting tree is deterministic.
#[derive(Debug, Default)]
pub struct ChangeTreeBuilder {
	root: BuilderNode,
}

#[derive(Debug, Default)]
struct BuilderNode {
	explicit: Option<(ChangeKind, ResourceKind)>,
	children: BTreeMap<String, BuilderNode>,
}

impl ChangeTreeBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn event(
		mut self,
		path: impl Into<ProjectPath>,
		kind: ChangeKind,
		resource: ResourceKind,
	) -> Self {
		let path = path.into();
		let mut node = &mut self.root;
		for segment in path.segments() {
			node = node.children.entry(segment.to_string()).or_default();
		}
		node.explicit = Some((kind, resource));
		self
	}

	#[must_use]
	pub fn file(self, path: impl Into<ProjectPath>, kind: ChangeKind) -> Self {
		self.event(path, kind, ResourceKind::File)
	}

	#[must_use]
	pub fn folder(self, path: impl Into<ProjectPath>, kind: ChangeKind) -> Self {
		self.event(path, kind, ResourceKind::Folder)
	}

	#[must_use]
	pub fn build(self) -> ChangeEvent {
		assemble(ProjectPath::root(), self.root)
	}
}

fn assemble(path: ProjectPath, node: BuilderNode) -> ChangeEvent {
	let children = node
		.children
		.into_iter()
		.map(|(name, child)| assemble(path.join(name), child))
		.collect();

	let (kind, resource) = node
		.explicit
		.unwrap_or((ChangeKind::Changed, ResourceKind::Folder));

	ChangeEvent {
		path,
		kind,
		resource,
		children,
	}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;

	#[test]
	fn builder_synthesizes_intermediate_folders() {
		let tree = ChangeTreeBuilder::new()
			.file("res/layout/main.xml", ChangeKind::Changed)
			.build();

		assert!(tree.path.is_root());
		assert_eq!(tree.resource, ResourceKind::Folder);
		assert_eq!(tree.children.len(), 1);

		let res = &tree.children[0];
		assert_eq!(res.name(), Some("res"));
		assert_eq!(res.resource, ResourceKind::Folder);
		assert_eq!(res.kind, ChangeKind::Changed);

		let layout = &res.children[0];
		assert_eq!(layout.name(), Some("layout"));

		let main = &layout.children[0];
		assert_eq!(main.path, ProjectPath::from("res/layout/main.xml"));
		assert_eq!(main.resource, ResourceKind::File);
		assert!(main.children.is_empty());
	}

	#[test]
	fn explicit_event_overrides_synthesized_folder() {
		let tree = ChangeTreeBuilder::new()
			.file("res/values/strings.xml", ChangeKind::Added)
			.folder("res/values", ChangeKind::Added)
			.build();

		let values = &tree.children[0].children[0];
		assert_eq!(values.name(), Some("values"));
		assert_eq!(values.kind, ChangeKind::Added);
		assert_eq!(values.children.len(), 1);
	}

	#[test]
	fn children_are_ordered_by_name() {
		let tree = ChangeTreeBuilder::new()
			.file("src/Foo.java", ChangeKind::Changed)
			.file("gen/R.java", ChangeKind::Changed)
			.file("res/raw/data.bin", ChangeKind::Changed)
			.build();

		let names: Vec<_> = tree.children.iter().filter_map(ChangeEvent::name).collect();
		assert_eq!(names, ["gen", "res", "src"]);
	}

	#[test]
	fn extension_is_exposed_per_node() {
		let event = ChangeEvent::file("src/com/app/Foo.aidl", ChangeKind::Changed);
		assert_eq!(event.extension(), Some("aidl"));
		assert_eq!(event.name(), Some("Foo.aidl"));
	}
}
