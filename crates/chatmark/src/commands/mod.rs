//! CLI command implementations.

pub(crate) mod mood;
pub(crate) mod render;

use std::io::Read;
use std::path::Path;

pub(crate) use mood::MoodArgs;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// Read a message from `path`, or from stdin when absent or `-`.
pub(crate) fn read_message(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_message_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.md");
        std::fs::write(&path, "- a\n- b").unwrap();

        assert_eq!(read_message(Some(&path)).unwrap(), "- a\n- b");
    }

    #[test]
    fn test_read_message_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_message(Some(&dir.path().join("absent.md")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
