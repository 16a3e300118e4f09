//! Artifact output interface.
//!
//! The generator hands finished artifacts to an [`ArtifactSink`]; persistence
//! details stay behind the trait. [`DirectoryWriter`] writes `.ts` files,
//! [`MemorySink`] collects artifacts in memory for inspection and tests.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Persistence collaborator for generated artifacts.
pub trait ArtifactSink {
    /// Writes one artifact keyed by its root type name.
    ///
    /// # Errors
    /// Returns `io::Error` if persisting the artifact fails.
    fn write(&mut self, name: &str, contents: &str) -> io::Result<()>;
}

/// Sink writing each artifact to `{name}.ts` inside a target directory.
#[derive(Debug, Clone)]
pub struct DirectoryWriter {
    dir: PathBuf,
}

impl DirectoryWriter {
    /// Creates a writer targeting the given directory. The directory is
    /// created on first write if it does not exist.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectoryWriter {
    fn write(&mut self, name: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{name}.ts"));
        fs::write(&path, contents)?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// In-memory sink collecting `(name, contents)` pairs.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Written artifacts in write order.
    pub artifacts: Vec<(String, String)>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, name: &str, contents: &str) -> io::Result<()> {
        self.artifacts.push((name.to_string(), contents.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_writer_creates_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("generated");
        let mut writer = DirectoryWriter::new(&target);

        writer.write("Pet", "interface Pet {}\n").unwrap();

        let written = fs::read_to_string(target.join("Pet.ts")).unwrap();
        assert_eq!(written, "interface Pet {}\n");
    }

    #[test]
    fn test_directory_writer_is_idempotent_on_existing_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut writer = DirectoryWriter::new(dir.path());

        writer.write("A", "a").unwrap();
        writer.write("A", "b").unwrap();

        let written = fs::read_to_string(dir.path().join("A.ts")).unwrap();
        assert_eq!(written, "b");
    }

    #[test]
    fn test_memory_sink_preserves_order() {
        let mut sink = MemorySink::new();
        sink.write("B", "1").unwrap();
        sink.write("A", "2").unwrap();

        let names: Vec<&str> = sink.artifacts.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
