//! Project-level manifest handling.

use pb_change_tree::{ChangeEvent, ChangeKind};

use crate::{collab::DiagnosticCategory, error::ClassifyError};

use super::{Classification, DeltaClassifier};

impl DeltaClassifier<'_> {
	/// Any change to the manifest can shift the package namespace of the
	/// generated symbols, so it always forces a resource recompile; the
	/// parse itself is only attempted when the file still exists.
	pub(super) fn handle_manifest(
		&mut self,
		node: &ChangeEvent,
		result: &mut Classification,
	) -> Result<(), ClassifyError> {
		if node.kind != ChangeKind::Removed {
			// Stale annotations on the file belong to the previous parse.
			self.diagnostics.clear_diagnostics(
				&node.path,
				&[DiagnosticCategory::Xml, DiagnosticCategory::Semantic],
			);

			let data =
				self.manifest_parser
					.parse(&node.path, true, &mut *self.diagnostics)?;

			if let Some(data) = data {
				result.manifest_package = data.package;
				result.min_platform_version = data.min_platform_version;
			}

			// A parse was attempted even if it failed or yielded nothing.
			result.manifest_examined = true;
		}

		result.needs_resource_compile = true;

		Ok(())
	}
}
