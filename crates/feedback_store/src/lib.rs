// crates/feedback_store/src/lib.rs

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Storage for the reusable feedback comments of one task.
///
/// Implementations persist comments as an ordered sequence of lines. Lines
/// are only ever appended; nothing here truncates, rewrites, or reorders a
/// store, so edits made outside the program are picked up on the next read.
pub trait CommentStore {
    /// Returns every stored comment in order, each exactly as it appears in
    /// the backing file (trailing line terminators included). A store that
    /// does not exist yet reads as empty — absence is a normal state, not an
    /// error.
    fn read(&self, path: &Path) -> Result<Vec<String>>;

    /// Appends `comment` followed by one newline, creating the store if it
    /// does not exist. The backing file is opened and closed within the
    /// call; no handle or cache survives between operations.
    fn append(&mut self, path: &Path, comment: &str) -> Result<()>;
}

/// The real, filesystem-backed store.
pub struct FileStore;

impl CommentStore for FileStore {
    fn read(&self, path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display()))?;
        Ok(split_lines(&contents))
    }

    fn append(&mut self, path: &Path, comment: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Error opening {}", path.display()))?;
        writeln!(file, "{}", comment)
            .with_context(|| format!("Error writing {}", path.display()))?;
        Ok(())
    }
}

/// In-memory store with the same observable behavior as [`FileStore`],
/// for driving the picker in tests without touching the filesystem.
#[derive(Default)]
pub struct MemoryStore {
    files: HashMap<PathBuf, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with pre-existing comments, as if the file had been
    /// written by an earlier session.
    pub fn with_comments(path: impl Into<PathBuf>, comments: &[&str]) -> Self {
        let mut contents = String::new();
        for comment in comments {
            contents.push_str(comment);
            contents.push('\n');
        }
        let mut files = HashMap::new();
        files.insert(path.into(), contents);
        Self { files }
    }

    /// Raw contents of one backing "file", if it exists.
    pub fn contents(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl CommentStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<Vec<String>> {
        match self.files.get(path) {
            Some(contents) => Ok(split_lines(contents)),
            None => Ok(Vec::new()),
        }
    }

    fn append(&mut self, path: &Path, comment: &str) -> Result<()> {
        let contents = self.files.entry(path.to_path_buf()).or_default();
        contents.push_str(comment);
        contents.push('\n');
        Ok(())
    }
}

/// Name of the comment file for a (part, task) pair: both names lower-cased
/// and joined with an underscore. Spaces are preserved literally.
pub fn feedback_file_name(part: &str, task: &str) -> String {
    format!("{}_{}.txt", part.to_lowercase(), task.to_lowercase())
}

fn split_lines(contents: &str) -> Vec<String> {
    contents.split_inclusive('\n').map(str::to_string).collect()
}
