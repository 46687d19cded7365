use std::fmt;

use serde::{Deserialize, Serialize};

/// A project-relative path, stored as an ordered sequence of segments.
///
/// The project root itself is the empty path; its direct children have depth
/// 1. Segment comparison is exact; callers that need case-insensitive name
/// matching do so explicitly on the segment they care about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectPath(Vec<String>);

impl ProjectPath {
	#[must_use]
	pub const fn root() -> Self {
		Self(Vec::new())
	}

	pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self(segments.into_iter().map(Into::into).collect())
	}

	/// Number of segments; the project root has depth 0.
	#[must_use]
	pub fn depth(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn segment(&self, index: usize) -> Option<&str> {
		self.0.get(index).map(String::as_str)
	}

	pub fn segments(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Last segment, i.e. the file or folder name. `None` for the root.
	#[must_use]
	pub fn name(&self) -> Option<&str> {
		self.0.last().map(String::as_str)
	}

	/// Extension of the last segment, without the dot.
	#[must_use]
	pub fn extension(&self) -> Option<&str> {
		self.name()
			.and_then(|name| name.rsplit_once('.'))
			.map(|(_, ext)| ext)
	}

	#[must_use]
	pub fn join(&self, segment: impl Into<String>) -> Self {
		let mut segments = self.0.clone();
		segments.push(segment.into());
		Self(segments)
	}

	/// Count of leading segments shared with `other`.
	#[must_use]
	pub fn matching_first_segments(&self, other: &Self) -> usize {
		self.0
			.iter()
			.zip(other.0.iter())
			.take_while(|(a, b)| a == b)
			.count()
	}

	/// Whether every segment of `self` is a leading segment of `other`.
	/// A path is a prefix of itself.
	#[must_use]
	pub fn is_prefix_of(&self, other: &Self) -> bool {
		self.matching_first_segments(other) == self.depth()
	}
}

impl From<&str> for ProjectPath {
	fn from(value: &str) -> Self {
		Self(
			value
				.split('/')
				.filter(|segment| !segment.is_empty())
				.map(str::to_string)
				.collect(),
		)
	}
}

impl FromIterator<String> for ProjectPath {
	fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl fmt::Display for ProjectPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.join("/"))
	}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;

	#[test]
	fn parses_and_displays_slash_separated_paths() {
		let path = ProjectPath::from("res/layout/main.xml");
		assert_eq!(path.depth(), 3);
		assert_eq!(path.segment(0), Some("res"));
		assert_eq!(path.name(), Some("main.xml"));
		assert_eq!(path.to_string(), "res/layout/main.xml");

		// Leading/trailing separators collapse away.
		assert_eq!(ProjectPath::from("/src/"), ProjectPath::from("src"));
	}

	#[test]
	fn root_has_no_name_and_depth_zero() {
		let root = ProjectPath::root();
		assert!(root.is_root());
		assert_eq!(root.depth(), 0);
		assert_eq!(root.name(), None);
		assert_eq!(root.extension(), None);
	}

	#[test]
	fn extension_comes_from_last_segment_only() {
		assert_eq!(ProjectPath::from("gen/com/app/R.java").extension(), Some("java"));
		assert_eq!(ProjectPath::from("res.d/icon").extension(), None);
		assert_eq!(ProjectPath::from("a/b.tar.gz").extension(), Some("gz"));
	}

	#[test]
	fn matching_first_segments_counts_the_common_run() {
		let a = ProjectPath::from("a/b/src");
		let b = ProjectPath::from("a/b/other/src");
		assert_eq!(a.matching_first_segments(&b), 2);
		assert_eq!(b.matching_first_segments(&a), 2);
		assert_eq!(a.matching_first_segments(&a), 3);
		assert_eq!(ProjectPath::root().matching_first_segments(&a), 0);
	}

	#[test]
	fn prefix_relation() {
		let folder = ProjectPath::from("a/b");
		let source = ProjectPath::from("a/b/src");
		assert!(folder.is_prefix_of(&source));
		assert!(!source.is_prefix_of(&folder));
		assert!(source.is_prefix_of(&source));
		assert!(ProjectPath::root().is_prefix_of(&source));
	}

	#[test]
	fn serde_round_trip_is_transparent() {
		let path = ProjectPath::from("res/values/strings.xml");
		let json = serde_json::to_string(&path).unwrap();
		assert_eq!(json, r#"["res","values","strings.xml"]"#);
		assert_eq!(serde_json::from_str::<ProjectPath>(&json).unwrap(), path);
	}
}
