//! Rules for file nodes under the resources root.

use pb_change_tree::{ChangeEvent, ChangeKind, ResourceKind};

use crate::{collab::Severity, error::ClassifyError, messages};

use super::{Classification, DeltaClassifier};

impl DeltaClassifier<'_> {
	pub(super) fn visit_resources_subtree(
		&mut self,
		node: &ChangeEvent,
		result: &mut Classification,
	) -> Result<bool, ClassifyError> {
		// Folders inside the resources subtree never decide anything
		// themselves; go straight to their contents.
		if node.resource == ResourceKind::Folder {
			return Ok(true);
		}

		if node.resource != ResourceKind::File {
			return Ok(false);
		}

		let path = node.path.to_string();
		let symbols_file = &self.layout.resource_symbols_file;

		let message = match node.kind {
			ChangeKind::Changed => messages::resource_changed(&path, symbols_file),
			ChangeKind::Added => messages::resource_added(&path, symbols_file),
			ChangeKind::Removed => messages::resource_removed(&path, symbols_file),
		};
		self.diagnostics
			.report_build_message(Severity::Verbose, &message);

		if node
			.extension()
			.is_some_and(|ext| self.layout.is_xml_extension(ext))
		{
			if node.kind != ChangeKind::Removed {
				self.xml_validator
					.check_validity(&node.path, &mut *self.diagnostics)?;
			}

			// Any XML change can add or remove a generated symbol, whatever
			// the change kind was.
			result.needs_resource_compile = true;
			return Ok(false);
		}

		// Opaque (non-XML) resource: only appearing or disappearing can
		// change the generated symbols. A content-only change is ignored.
		if matches!(node.kind, ChangeKind::Added | ChangeKind::Removed) {
			result.needs_resource_compile = true;
		}

		Ok(false)
	}
}
