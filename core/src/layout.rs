use serde::{Deserialize, Serialize};

/// The fixed names and extensions the classifier keys on.
///
/// Defaults follow the conventional Android-style project layout, but every
/// name is configuration: projects with a relocated resources root or a
/// differently named generated-sources folder supply their own layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
	/// Root folder of the declarative resources subtree (matched
	/// case-insensitively against depth-1 folder names).
	pub resources_root: String,
	/// Manifest descriptor at the project root (matched case-insensitively).
	pub manifest_file_name: String,
	/// Name of the source folder that receives generator output. Matched
	/// exactly, and only against direct children of the project root.
	pub generated_sources_root: String,
	/// The generated resource-symbols file.
	pub resource_symbols_file: String,
	/// The generated manifest-symbols file.
	pub manifest_symbols_file: String,
	/// Extension of generated source code, without the dot.
	pub source_extension: String,
	/// Extension of declarative resource documents, without the dot.
	pub xml_extension: String,
}

impl Default for ProjectLayout {
	fn default() -> Self {
		Self {
			resources_root: "res".to_string(),
			manifest_file_name: "AndroidManifest.xml".to_string(),
			generated_sources_root: "gen".to_string(),
			resource_symbols_file: "R.java".to_string(),
			manifest_symbols_file: "Manifest.java".to_string(),
			source_extension: "java".to_string(),
			xml_extension: "xml".to_string(),
		}
	}
}

impl ProjectLayout {
	/// Whether `name` is one of the sentinel generated-symbol files. Manual
	/// edits to these are always overwritten, so any change to them forces a
	/// resource recompile.
	#[must_use]
	pub fn is_symbols_file(&self, name: &str) -> bool {
		name == self.resource_symbols_file || name == self.manifest_symbols_file
	}

	#[must_use]
	pub fn is_source_extension(&self, extension: &str) -> bool {
		extension.eq_ignore_ascii_case(&self.source_extension)
	}

	#[must_use]
	pub fn is_xml_extension(&self, extension: &str) -> bool {
		extension.eq_ignore_ascii_case(&self.xml_extension)
	}
}
