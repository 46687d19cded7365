//! Build-console message texts.
//!
//! Kept in one place so wording stays consistent between the rules that emit
//! them and the tests that assert on them.

pub(crate) fn removed_recreating(file_name: &str) -> String {
	format!("{file_name} was removed. {file_name} will be recreated.")
}

pub(crate) fn modified_manually_recreating(file_name: &str) -> String {
	format!("{file_name} was modified manually. {file_name} will be recreated.")
}

pub(crate) fn resource_changed(path: &str, symbols_file: &str) -> String {
	format!("{path} modified. Recreating {symbols_file}.")
}

pub(crate) fn resource_added(path: &str, symbols_file: &str) -> String {
	format!("Added {path}. {symbols_file} needs updating.")
}

pub(crate) fn resource_removed(path: &str, symbols_file: &str) -> String {
	format!("{path} removed. {symbols_file} needs updating.")
}
