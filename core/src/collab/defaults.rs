use std::path::PathBuf;

use pb_change_tree::ProjectPath;
use tracing::{error, info, trace};

use super::{DiagnosticCategory, DiagnosticsSink, Folder, FolderResolver, Severity};

/// Diagnostics sink that forwards build messages to `tracing` and has no
/// diagnostics store to clear.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
	fn report_build_message(&mut self, severity: Severity, message: &str) {
		match severity {
			Severity::Verbose => trace!(target: "prebuild", "{message}"),
			Severity::Info => info!(target: "prebuild", "{message}"),
			Severity::Error => error!(target: "prebuild", "{message}"),
		}
	}

	fn clear_diagnostics(&mut self, file: &ProjectPath, categories: &[DiagnosticCategory]) {
		trace!(target: "prebuild", file = %file, ?categories, "no stored diagnostics to clear");
	}
}

/// Resolver backed by the project directory on disk: a configured path
/// resolves only if the corresponding directory actually exists.
#[derive(Debug)]
pub struct FsFolderResolver {
	project_root: PathBuf,
}

impl FsFolderResolver {
	#[must_use]
	pub fn new(project_root: impl Into<PathBuf>) -> Self {
		Self {
			project_root: project_root.into(),
		}
	}
}

impl FolderResolver for FsFolderResolver {
	fn resolve_folder(&self, path: &ProjectPath) -> Option<Folder> {
		let mut location = self.project_root.clone();
		for segment in path.segments() {
			location.push(segment);
		}

		if location.is_dir() {
			Some(Folder::with_location(path.clone(), location))
		} else {
			trace!(path = %path, "configured source folder does not exist on disk");
			None
		}
	}
}

/// Resolver for purely in-memory classification: every path resolves, with no
/// on-disk location attached.
#[derive(Debug, Default)]
pub struct PathOnlyResolver;

impl FolderResolver for PathOnlyResolver {
	fn resolve_folder(&self, path: &ProjectPath) -> Option<Folder> {
		Some(Folder::new(path.clone()))
	}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;
	use std::fs;

	use tempfile::tempdir;

	#[test]
	fn fs_resolver_requires_an_existing_directory() {
		let root = tempdir().unwrap();
		fs::create_dir_all(root.path().join("app/gen")).unwrap();
		fs::write(root.path().join("app/notes.txt"), "x").unwrap();

		let resolver = FsFolderResolver::new(root.path());

		let gen = resolver
			.resolve_folder(&ProjectPath::from("app/gen"))
			.unwrap();
		assert_eq!(gen.path(), &ProjectPath::from("app/gen"));
		assert_eq!(gen.location().unwrap(), root.path().join("app/gen"));

		// Missing folder and plain file both fail to resolve.
		assert!(resolver
			.resolve_folder(&ProjectPath::from("app/src"))
			.is_none());
		assert!(resolver
			.resolve_folder(&ProjectPath::from("app/notes.txt"))
			.is_none());
	}

	#[test]
	fn path_only_resolver_always_resolves() {
		let folder = PathOnlyResolver
			.resolve_folder(&ProjectPath::from("src"))
			.unwrap();
		assert_eq!(folder.path(), &ProjectPath::from("src"));
		assert!(folder.location().is_none());
	}
}
