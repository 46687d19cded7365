use std::{fmt, io, path::Path};

use thiserror::Error;

/// File I/O error that includes the path that caused the error.
#[derive(Error, Debug)]
pub struct FileIOError {
	pub path: Box<Path>,
	#[source]
	pub source: io::Error,
}

impl fmt::Display for FileIOError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"file I/O error: {}; path: '{}'",
			self.source,
			self.path.display()
		)
	}
}

impl<P: AsRef<Path>> From<(P, io::Error)> for FileIOError {
	fn from((path, source): (P, io::Error)) -> Self {
		Self {
			path: path.as_ref().into(),
			source,
		}
	}
}

/// Failures that abort a classification cycle.
///
/// Recoverable collaborator problems (malformed manifest, invalid XML) never
/// surface here; they are routed to the diagnostics sink and classification
/// carries on with whatever partial data the collaborator produced. Only an
/// I/O failure reading project data aborts the cycle, since no correct
/// decision can be made without it.
#[derive(Error, Debug)]
pub enum ClassifyError {
	#[error(transparent)]
	FileIO(#[from] FileIOError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn file_io_error_mentions_the_path() {
		let err = FileIOError::from((
			"project/AndroidManifest.xml",
			io::Error::new(io::ErrorKind::NotFound, "gone"),
		));
		let rendered = err.to_string();
		assert!(rendered.contains("AndroidManifest.xml"));
		assert!(rendered.contains("gone"));
	}
}
