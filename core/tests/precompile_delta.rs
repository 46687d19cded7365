//! End-to-end classification against a project directory on disk.

use std::fs;

use pb_core::{
	collab::{
		DiagnosticsSink, Folder, FsFolderResolver, GeneratorHandler, ManifestData,
		ManifestParser, TracingDiagnostics, XmlValidator,
	},
	ChangeKind, ChangeTreeBuilder, Classification, DeltaClassifier, FileIOError, ProjectLayout,
	ProjectPath,
};

use tempfile::tempdir;
use tracing_test::traced_test;

#[derive(Default)]
struct NoManifest;

impl ManifestParser for NoManifest {
	fn parse(
		&mut self,
		_manifest: &ProjectPath,
		_gather_data: bool,
		_diagnostics: &mut dyn DiagnosticsSink,
	) -> Result<Option<ManifestData>, FileIOError> {
		Ok(None)
	}
}

#[derive(Default)]
struct AcceptAllXml;

impl XmlValidator for AcceptAllXml {
	fn check_validity(
		&mut self,
		_file: &ProjectPath,
		_diagnostics: &mut dyn DiagnosticsSink,
	) -> Result<(), FileIOError> {
		Ok(())
	}
}

#[derive(Default)]
struct InterfaceCompiler {
	claimed: Vec<(ProjectPath, Option<std::path::PathBuf>)>,
}

impl GeneratorHandler for InterfaceCompiler {
	fn handle_changed_generated_source(
		&mut self,
		source_folder: &Folder,
		event: &pb_core::ChangeEvent,
		_source_folders: &[ProjectPath],
	) -> bool {
		self.claimed.push((
			event.path.clone(),
			source_folder.location().map(std::path::Path::to_path_buf),
		));
		true
	}

	fn handle_changed_non_source_file(
		&mut self,
		_source_folder: &Folder,
		_event: &pb_core::ChangeEvent,
		_kind: ChangeKind,
	) {
	}
}

#[test]
#[traced_test]
fn generated_folder_resolves_to_its_on_disk_location() {
	let project = tempdir().expect("tempdir");
	fs::create_dir_all(project.path().join("gen/com/app")).expect("mkdir gen");
	fs::create_dir_all(project.path().join("src/com/app")).expect("mkdir src");

	let source_folders = [ProjectPath::from("src"), ProjectPath::from("gen")];
	let resolver = FsFolderResolver::new(project.path());
	let mut manifest = NoManifest;
	let mut validator = AcceptAllXml;
	let mut diagnostics = TracingDiagnostics;
	let mut generator = InterfaceCompiler::default();

	let tree = ChangeTreeBuilder::new()
		.file("gen/com/app/ServiceStub.java", ChangeKind::Changed)
		.file("res/layout/main.xml", ChangeKind::Changed)
		.build();

	let result = DeltaClassifier::new(
		ProjectLayout::default(),
		&source_folders,
		vec![&mut generator],
		&resolver,
		&mut manifest,
		&mut validator,
		&mut diagnostics,
	)
	.classify(&tree)
	.expect("classification should not hit I/O errors");

	assert!(result.needs_resource_compile);
	assert!(!result.manifest_examined);

	let (claimed_path, claimed_location) = &generator.claimed[0];
	assert_eq!(
		claimed_path,
		&ProjectPath::from("gen/com/app/ServiceStub.java")
	);
	assert_eq!(
		claimed_location.as_deref(),
		Some(project.path().join("gen").as_path())
	);
}

#[test]
fn classification_result_serializes_for_the_controller() {
	let result = Classification {
		needs_resource_compile: true,
		manifest_examined: true,
		manifest_package: Some("com.app".to_string()),
		min_platform_version: Some("8".to_string()),
	};

	let json = serde_json::to_string(&result).expect("serialize");
	let round_tripped: Classification = serde_json::from_str(&json).expect("deserialize");

	assert_eq!(round_tripped, result);
	assert!(json.contains("\"needs_resource_compile\":true"));
}
