//! Rules for file nodes inside a configured source folder.
//!
//! The generated-sources folder and ordinary source folders are disjoint
//! cases: generated output is owned by exactly one producer (the resource
//! compiler for the sentinel symbol files, otherwise the first generator that
//! claims it), while ordinary source folders fan every changed file out to
//! every registered generator.

use pb_change_tree::{ChangeEvent, ChangeKind, ResourceKind};

use crate::{collab::Severity, error::ClassifyError, messages};

use super::{Classification, DeltaClassifier, TraversalContext};

impl DeltaClassifier<'_> {
	pub(super) fn visit_source_subtree(
		&mut self,
		node: &ChangeEvent,
		ctx: &TraversalContext,
		result: &mut Classification,
	) -> Result<bool, ClassifyError> {
		if node.resource == ResourceKind::Folder {
			return Ok(true);
		}

		if node.resource != ResourceKind::File {
			return Ok(false);
		}

		let Some(folder) = &ctx.source_folder else {
			return Ok(false);
		};

		if ctx.in_generated_folder {
			self.visit_generated_file(node, folder, result);
		} else {
			for generator in &mut self.generators {
				generator.handle_changed_non_source_file(folder, node, node.kind);
			}
		}

		// Files have no children.
		Ok(false)
	}

	fn visit_generated_file(
		&mut self,
		node: &ChangeEvent,
		folder: &crate::collab::Folder,
		result: &mut Classification,
	) {
		let Some(name) = node.name() else { return };

		let mut output_warning = false;

		if self.layout.is_symbols_file(name) {
			// A removed symbols file may just reflect a package change or a
			// removed interface definition; recompiling costs one extra build
			// at worst.
			result.needs_resource_compile = true;
			output_warning = true;
		} else if node
			.extension()
			.is_some_and(|ext| self.layout.is_source_extension(ext))
		{
			for generator in &mut self.generators {
				if generator.handle_changed_generated_source(folder, node, self.source_folders) {
					output_warning = true;
					// No two generators should own the same generated file.
					break;
				}
			}
		}

		if output_warning {
			match node.kind {
				ChangeKind::Removed => self.diagnostics.report_build_message(
					Severity::Error,
					&messages::removed_recreating(name),
				),
				ChangeKind::Changed => self.diagnostics.report_build_message(
					Severity::Error,
					&messages::modified_manually_recreating(name),
				),
				// A freshly generated file appearing needs no callout.
				ChangeKind::Added => {}
			}
		}
	}
}
