// Input discovery and reading.
//
// A path argument is either a single file or a directory whose regular files
// (not subdirectories) are all processed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve the files to summarize from a file or directory path.
///
/// Directory entries are sorted so that output is stable across runs.
pub fn collect_document_paths(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let entries = std::fs::read_dir(path)
        .with_context(|| format!("Failed to list directory {}", path.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", path.display()))?;
        let candidate = entry.path();
        if candidate.is_file() {
            files.push(candidate);
        }
    }
    files.sort();
    Ok(files)
}

/// Read a whole document into memory.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// The identifier a document is tracked under in frequency maps.
pub fn document_id(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Short display label for a document: its file name without extension.
pub fn document_label(document: &str) -> String {
    Path::new(document)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| document.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_strips_directory_and_extension() {
        assert_eq!(document_label("/test/cats_and_mats.txt"), "cats_and_mats");
        assert_eq!(document_label("doc"), "doc");
    }

    #[test]
    fn single_file_is_returned_as_is() {
        let path = Path::new("/this/cannot/exist/file.txt");
        assert_eq!(collect_document_paths(path).unwrap(), vec![path.to_path_buf()]);
    }

    #[test]
    fn reading_missing_file_fails_with_path() {
        let err = read_document(Path::new("/this/cannot/exist/at/all.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/this/cannot/exist/at/all.txt"));
    }

    #[test]
    fn directory_lists_only_files_sorted() {
        let dir = std::env::temp_dir().join("fiw_documents_listing");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("b.txt"), "b").unwrap();
        std::fs::write(dir.join("a.txt"), "a").unwrap();
        std::fs::write(dir.join("nested").join("c.txt"), "c").unwrap();

        let paths = collect_document_paths(&dir).unwrap();
        assert_eq!(paths, vec![dir.join("a.txt"), dir.join("b.txt")]);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
