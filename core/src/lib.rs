#![warn(
	clippy::all,
	clippy::pedantic,
	clippy::correctness,
	clippy::perf,
	clippy::style,
	clippy::suspicious,
	clippy::complexity,
	clippy::nursery,
	clippy::unwrap_used,
	unused_qualifications,
	rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc)]

//! Incremental pre-compile delta classification.
//!
//! After the change tracker reports a set of filesystem changes for a
//! project, the [`DeltaClassifier`] decides which build phases must run next:
//! recompiling the declarative resources into the generated symbols file,
//! re-parsing the manifest descriptor, or re-running a code generator. It does
//! so with a single stateful pre-order walk over the change-event tree,
//! pruning descent as soon as a subtree's fate is decided, so the cost is
//! bounded by the number of changed paths rather than the project size.
//!
//! Everything that actually builds (resource compilation, codegen, manifest
//! parsing, XML validation, diagnostics storage) lives behind the traits in
//! [`collab`]; the classifier only decides.

pub mod classifier;
pub mod collab;
pub mod error;
pub mod layout;
mod messages;

pub use classifier::{Classification, DeltaClassifier};
pub use error::{ClassifyError, FileIOError};
pub use layout::ProjectLayout;

// Re-exported so consumers only wrangle one crate for the common case.
pub use pb_change_tree::{ChangeEvent, ChangeKind, ChangeTreeBuilder, ProjectPath, ResourceKind};
