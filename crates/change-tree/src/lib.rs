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

//! Data model for filesystem change-event trees.
//!
//! A build cycle receives one [`ChangeEvent`] tree describing everything that
//! was added, removed or modified in a project since the last build. The tree
//! is pre-order traversable (a folder node is visited before its contents) and
//! read-only to consumers; it lives for exactly one traversal.

mod event;
mod path;

pub use event::{ChangeEvent, ChangeKind, ChangeTreeBuilder, ResourceKind};
pub use path::ProjectPath;
