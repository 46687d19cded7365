//! Discovery of configured source folders during the walk.
//!
//! Source folders are not necessarily direct children of the project root
//! (`something/somethingelse/src` is valid), so an unclassified folder can be
//! a source folder itself, an ancestor of one, or entirely unrelated.

use pb_change_tree::ChangeEvent;
use tracing::trace;

use super::{DeltaClassifier, TraversalContext};

impl DeltaClassifier<'_> {
	/// Returns whether to descend into an as-yet-unclassified folder.
	pub(super) fn discover_folder(
		&self,
		node: &ChangeEvent,
		ctx: &mut TraversalContext,
	) -> bool {
		for folder_path in self.source_folders {
			if folder_path == &node.path {
				// This folder is a configured source folder.
				ctx.in_resources = false;
				ctx.source_folder = self.resolver.resolve_folder(folder_path);
				ctx.in_generated_folder = node.path.depth() == 1
					&& node.path.name()
						== Some(self.layout.generated_sources_root.as_str());

				return true;
			}

			// Still on the way down to this source folder?
			if node.path.is_prefix_of(folder_path) {
				ctx.in_resources = false;
				return true;
			}
		}

		// Unrelated folder (build output, binaries, ...); its contents cannot
		// affect this build phase.
		trace!(path = %node.path, "pruning unrelated folder");
		false
	}
}
