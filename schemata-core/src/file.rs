use std::path::{Path, PathBuf};

use eyre::Result;

/// A generated artifact to be written to disk
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories and replacing any existing file
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ddl").join("7").join("objects.sql");

        OutputFile::new(&path, "CREATE TABLE").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "CREATE TABLE");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("objects.cql");

        fs::write(&path, "old").unwrap();
        let file = OutputFile::new(&path, "new");
        file.write().unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.content(), "new");
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
