//! Step outputs for the Actions runner.
//!
//! The runner passes a file path in `GITHUB_OUTPUT`; each `name=value` line
//! appended to it becomes a step output.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Append one output to the runner's output file.
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened or written.
pub fn set_output(path: &Path, name: &str, value: impl std::fmt::Display) -> Result<()> {
    debug!(path = %path.display(), name, "setting output");

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}={}", name, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "earlier=1\n").unwrap();

        set_output(&path, "secret-existed", true).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "earlier=1\nsecret-existed=true\n");
    }

    #[test]
    fn test_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new");

        set_output(&path, "secret-existed", false).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "secret-existed=false\n"
        );
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("output");

        assert!(set_output(&path, "secret-existed", false).is_err());
    }
}
