use std::fs;
use std::path::{Path, PathBuf};
use std::{env, io};

use log::{info, warn};

use crate::error::{CompletionError, CompletionResult};

/// Extension of the files picked up when the corpus is a directory.
pub const CORPUS_EXTENSION: &str = "txt";

/// Reads a whole text file into a `String`.
pub fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	fs::read_to_string(filename)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension in a directory, sorted by name.
///
/// Returns file names only (no paths). Subdirectories are ignored.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

/// Loads a training corpus as a single text blob.
///
/// - A file is read whole.
/// - A directory contributes every `.txt` file it directly contains,
///   concatenated in sorted filename order.
///
/// # Errors
/// - `Corpus` if the path does not exist or the directory holds no `.txt` file.
/// - `Io` if any file fails to read; nothing is returned in that case.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> CompletionResult<String> {
	let path = normalize_folder(path.as_ref());

	if path.is_file() {
		info!("Loading corpus file {}", path.display());
		return Ok(read_file(&path)?);
	}

	if !path.is_dir() {
		return Err(CompletionError::Corpus(format!("No such file or directory: {}", path.display())));
	}

	let files = list_files(&path, CORPUS_EXTENSION)?;
	if files.is_empty() {
		return Err(CompletionError::Corpus(format!("No .{CORPUS_EXTENSION} files in {}", path.display())));
	}

	let mut corpus = String::new();
	for file in &files {
		corpus.push_str(&read_file(path.join(file))?);
	}
	info!("Loaded {} corpus files from {}", files.len(), path.display());

	Ok(corpus)
}

/// Loads an optional reference passage.
///
/// A path that is not a regular file yields empty content with a warning,
/// so the interactive session can still start.
pub fn load_text_content<P: AsRef<Path>>(path: P) -> CompletionResult<String> {
	let path = path.as_ref();
	if !path.is_file() {
		warn!("'{}' is not a file, text content will be empty", path.display());
		return Ok(String::new());
	}
	Ok(read_file(path)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn list_files_filters_and_sorts() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "b").unwrap();
		fs::write(dir.path().join("a.txt"), "a").unwrap();
		fs::write(dir.path().join("c.md"), "c").unwrap();
		fs::create_dir(dir.path().join("d.txt")).unwrap();

		let files = list_files(dir.path(), "txt").unwrap();
		assert_eq!(files, vec!["a.txt".to_owned(), "b.txt".to_owned()]);
	}

	#[test]
	fn missing_text_content_is_empty() {
		let dir = tempfile::tempdir().unwrap();
		let content = load_text_content(dir.path().join("nope.txt")).unwrap();
		assert!(content.is_empty());
	}
}
