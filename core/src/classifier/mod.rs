//! The delta classifier: one stateful pre-order walk per build cycle.
//!
//! Each node visit returns a descend decision, so the walk stops at the top
//! of every subtree whose fate is already known. The per-walk state lives in
//! an explicit [`TraversalContext`] created inside [`DeltaClassifier::classify`],
//! never on the classifier itself, so repeated calls are independent.

use pb_change_tree::{ChangeEvent, ResourceKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
	collab::{DiagnosticsSink, Folder, FolderResolver, GeneratorHandler, ManifestParser, XmlValidator},
	error::ClassifyError,
	layout::ProjectLayout,
	ProjectPath,
};

mod discovery;
mod manifest;
mod resources;
mod sources;

/// Summary of one classification cycle, handed to the build controller.
///
/// Created empty at traversal start and updated monotonically: flags only
/// ever flip from `false` to `true`, the manifest fields are set at most
/// once, and nothing mutates after `classify` returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
	/// A changed/added/removed file requires recompiling the resources into
	/// the generated symbols file.
	pub needs_resource_compile: bool,
	/// The manifest was parsed (or at least a parse was attempted) during
	/// this cycle.
	pub manifest_examined: bool,
	/// Package declared by the manifest, when it was parsed and declares one.
	pub manifest_package: Option<String>,
	/// Minimum platform version declared by the manifest.
	pub min_platform_version: Option<String>,
}

/// Walk state, scoped to a single traversal.
///
/// Invariant: at most one of `in_resources` / `source_folder` is set at any
/// node; a node is classified into exactly one subtree kind.
#[derive(Debug, Default)]
struct TraversalContext {
	in_resources: bool,
	source_folder: Option<Folder>,
	in_generated_folder: bool,
}

impl TraversalContext {
	/// A direct child of the project root starts a fresh subtree; whatever
	/// classification the previous top-level subtree had does not carry over.
	fn reset_for_project_level(&mut self) {
		self.in_resources = false;
		self.source_folder = None;
		self.in_generated_folder = false;
	}
}

/// Classifies one change-event tree into the set of build actions to run.
///
/// Constructed per build cycle; the collaborators are borrowed for the cycle
/// and called synchronously from inside the walk.
pub struct DeltaClassifier<'cycle> {
	layout: ProjectLayout,
	source_folders: &'cycle [ProjectPath],
	generators: Vec<&'cycle mut dyn GeneratorHandler>,
	resolver: &'cycle dyn FolderResolver,
	manifest_parser: &'cycle mut dyn ManifestParser,
	xml_validator: &'cycle mut dyn XmlValidator,
	diagnostics: &'cycle mut dyn DiagnosticsSink,
}

impl<'cycle> DeltaClassifier<'cycle> {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		layout: ProjectLayout,
		source_folders: &'cycle [ProjectPath],
		generators: Vec<&'cycle mut dyn GeneratorHandler>,
		resolver: &'cycle dyn FolderResolver,
		manifest_parser: &'cycle mut dyn ManifestParser,
		xml_validator: &'cycle mut dyn XmlValidator,
		diagnostics: &'cycle mut dyn DiagnosticsSink,
	) -> Self {
		Self {
			layout,
			source_folders,
			generators,
			resolver,
			manifest_parser,
			xml_validator,
			diagnostics,
		}
	}

	/// Walks `tree` pre-order and returns the resulting classification.
	///
	/// Only I/O failures from collaborators abort the walk; everything else
	/// is reported through the diagnostics sink and classification continues.
	#[instrument(skip_all, fields(source_folders = self.source_folders.len()))]
	pub fn classify(&mut self, tree: &ChangeEvent) -> Result<Classification, ClassifyError> {
		let mut ctx = TraversalContext::default();
		let mut result = Classification::default();

		self.visit(tree, &mut ctx, &mut result)?;

		debug!(?result, "delta classification finished");
		Ok(result)
	}

	fn visit(
		&mut self,
		node: &ChangeEvent,
		ctx: &mut TraversalContext,
		result: &mut Classification,
	) -> Result<(), ClassifyError> {
		if self.decide(node, ctx, result)? {
			for child in &node.children {
				self.visit(child, ctx, result)?;
			}
		}

		Ok(())
	}

	/// Classifies a single node and returns whether to descend into its
	/// children.
	fn decide(
		&mut self,
		node: &ChangeEvent,
		ctx: &mut TraversalContext,
		result: &mut Classification,
	) -> Result<bool, ClassifyError> {
		match node.path.depth() {
			// The root is the project itself; always look at its children.
			0 => return Ok(true),
			1 => {
				ctx.reset_for_project_level();

				if let Some(name) = node.name() {
					if name.eq_ignore_ascii_case(&self.layout.resources_root) {
						// The resources subtree; its contents decide.
						ctx.in_resources = true;
						return Ok(true);
					}

					if name.eq_ignore_ascii_case(&self.layout.manifest_file_name) {
						self.handle_manifest(node, result)?;
						// The manifest is a leaf file.
						return Ok(false);
					}
				}
			}
			_ => {}
		}

		// Anything not settled at project level is either inside a subtree we
		// already entered, or a folder that may be (or lead to) a configured
		// source folder.
		if ctx.source_folder.is_some() {
			return self.visit_source_subtree(node, ctx, result);
		}

		if ctx.in_resources {
			return self.visit_resources_subtree(node, result);
		}

		if node.resource == ResourceKind::Folder {
			return Ok(self.discover_folder(node, ctx));
		}

		// A file directly under an unclassified folder, or a resource kind we
		// do not understand: no effect, no descent.
		Ok(false)
	}
}
