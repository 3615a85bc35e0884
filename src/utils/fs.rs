use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{BoxResult, MdtocError};

/// Check if a path exists and is a directory
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    fs::read_to_string(path.as_ref()).map_err(|e| {
        MdtocError::Document(format!("Failed to read {}: {}", path.as_ref().display(), e)).into()
    })
}

/// Write a string to a file, replacing its contents
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    let mut file = fs::File::create(path.as_ref()).map_err(MdtocError::Io)?;
    file.write_all(contents.as_bytes()).map_err(MdtocError::Io)?;
    Ok(())
}

/// Check whether a path has one of the given extensions (case-insensitive)
pub fn has_extension<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
    match path.as_ref().extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
        }
        None => false,
    }
}

/// Expand files and directories into the list of markdown files they contain.
///
/// Files are returned as given, whatever their extension; directories are walked
/// recursively and only files with a markdown extension are kept.
pub fn collect_markdown_files(paths: &[PathBuf], extensions: &[String]) -> BoxResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if is_directory(path) {
            for entry in WalkDir::new(path).follow_links(false) {
                let entry = entry?;
                if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else if path.exists() {
            files.push(path.clone());
        } else {
            return Err(MdtocError::Document(format!("No such file or directory: {}", path.display())).into());
        }
    }

    files.sort();
    files.dedup();
    debug!("Collected {} markdown file(s)", files.len());
    Ok(files)
}
