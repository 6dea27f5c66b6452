use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::utils::error::BoxResult;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Check if a path has a `.md` extension
pub fn is_markdown<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map_or(false, |ext| ext == "md")
}

/// List the `.md` files directly inside `dir`, sorted by path.
/// A missing directory yields an empty list.
pub fn list_markdown_files<P: AsRef<Path>>(dir: P) -> BoxResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    if !dir.as_ref().is_dir() {
        return Ok(files);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_markdown(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// List all `.md` files under `dir` recursively, sorted by path
pub fn list_markdown_files_recursive<P: AsRef<Path>>(dir: P) -> BoxResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    if !dir.as_ref().is_dir() {
        return Ok(files);
    }

    for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
