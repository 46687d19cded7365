//! Collaborator capabilities the classifier calls into while walking a
//! change-event tree.
//!
//! The classifier never compiles, parses or validates anything itself; it
//! owns the traversal and delegates the actual work through these traits.
//! All calls are synchronous and blocking, one build cycle at a time.

use std::path::{Path, PathBuf};

use pb_change_tree::{ChangeEvent, ChangeKind, ProjectPath};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::FileIOError;

mod defaults;

pub use defaults::{FsFolderResolver, PathOnlyResolver, TracingDiagnostics};

/// Severity of a user-visible build message.
///
/// `Error` is sometimes used purely for visual prominence (a removed
/// generated file is recreated, not fatal); it never blocks the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Severity {
	Verbose,
	Info,
	Error,
}

/// Category of diagnostic annotations previously recorded on a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DiagnosticCategory {
	Xml,
	Semantic,
}

/// Receives human-readable build messages and clears stale diagnostic
/// annotations. Clearing is always scoped to the named file itself, never to
/// descendants.
pub trait DiagnosticsSink {
	fn report_build_message(&mut self, severity: Severity, message: &str);

	fn clear_diagnostics(&mut self, file: &ProjectPath, categories: &[DiagnosticCategory]);
}

/// Data gathered from a successfully parsed manifest. Either field may be
/// absent even on success, when the manifest simply does not declare it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestData {
	pub package: Option<String>,
	pub min_platform_version: Option<String>,
}

/// Parses the project manifest on demand.
pub trait ManifestParser {
	/// Returns `Ok(None)` for an unrecoverable parse failure that was already
	/// reported through `diagnostics`; only I/O failures reading the file are
	/// `Err` and abort the build cycle.
	fn parse(
		&mut self,
		manifest: &ProjectPath,
		gather_data: bool,
		diagnostics: &mut dyn DiagnosticsSink,
	) -> Result<Option<ManifestData>, FileIOError>;
}

/// Validates an XML resource document.
pub trait XmlValidator {
	/// Validation problems go to `diagnostics`; only I/O failures are `Err`.
	fn check_validity(
		&mut self,
		file: &ProjectPath,
		diagnostics: &mut dyn DiagnosticsSink,
	) -> Result<(), FileIOError>;
}

/// One registered code generator's view of the change delta.
///
/// Handlers over generated files are expected to be mutually exclusive: the
/// classifier stops offering a generated file after the first claim. That
/// disjointness is a documented contract, not something the classifier
/// enforces.
pub trait GeneratorHandler {
	/// Offered a changed file with the generated-source extension inside the
	/// generated-sources folder. Returns whether this generator claims the
	/// file as its own output (and will therefore regenerate it).
	fn handle_changed_generated_source(
		&mut self,
		source_folder: &Folder,
		event: &ChangeEvent,
		source_folders: &[ProjectPath],
	) -> bool;

	/// Offered every changed file inside an ordinary source folder. Unlike
	/// the generated case, every registered handler sees every file.
	fn handle_changed_non_source_file(
		&mut self,
		source_folder: &Folder,
		event: &ChangeEvent,
		kind: ChangeKind,
	);
}

/// Handle to an existing source folder, as produced by a [`FolderResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
	path: ProjectPath,
	location: Option<PathBuf>,
}

impl Folder {
	#[must_use]
	pub fn new(path: ProjectPath) -> Self {
		Self {
			path,
			location: None,
		}
	}

	#[must_use]
	pub fn with_location(path: ProjectPath, location: PathBuf) -> Self {
		Self {
			path,
			location: Some(location),
		}
	}

	/// Project-relative path of this folder.
	#[must_use]
	pub fn path(&self) -> &ProjectPath {
		&self.path
	}

	/// Absolute on-disk location, when the resolver is filesystem backed.
	#[must_use]
	pub fn location(&self) -> Option<&Path> {
		self.location.as_deref()
	}
}

/// Resolves a configured path to a folder handle, returning one only if the
/// path currently exists and is a folder. Injected at construction so the
/// classifier never reaches for process-wide state.
pub trait FolderResolver {
	fn resolve_folder(&self, path: &ProjectPath) -> Option<Folder>;
}
