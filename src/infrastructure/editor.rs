//! Editor integration for composing entry text

use crate::error::{MoodlogError, Result};
use std::fs;
use std::io::Write;
use std::process::Command;
use tracing::debug;

/// Session for composing text in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open `initial` in the editor, wait for it to exit and return the saved text
    pub fn compose(&self, initial: &str) -> Result<String> {
        let (program, args) = self.parse_command();

        let mut draft = tempfile::Builder::new()
            .prefix("moodlog-")
            .suffix(".txt")
            .tempfile()?;
        draft.write_all(initial.as_bytes())?;
        draft.flush()?;

        let path = draft.path().to_path_buf();
        debug!(program = %program, path = %path.display(), "launching editor");

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&args)
            .arg(&path)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).arg(&path).status();

        let status = status.map_err(|e| {
            MoodlogError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;
        if !status.success() {
            return Err(MoodlogError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(fs::read_to_string(&path)?)
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            let fallback = if cfg!(windows) { "notepad" } else { "nano" };
            return (fallback.to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_simple() {
        let session = EditorSession::new("vim".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "vim");
        assert_eq!(args.len(), 0);
    }

    #[test]
    fn test_parse_command_with_args() {
        let session = EditorSession::new("code -w".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w"]);
    }

    #[test]
    fn test_parse_command_empty() {
        let session = EditorSession::new("   ".to_string());
        let (program, args) = session.parse_command();

        assert!(program == "nano" || program == "notepad");
        assert!(args.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_returns_file_contents() {
        // `true` leaves the draft as written
        let session = EditorSession::new("true".to_string());
        let text = session.compose("unchanged draft").unwrap();
        assert_eq!(text, "unchanged draft");
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_failing_editor() {
        let session = EditorSession::new("false".to_string());
        match session.compose("draft") {
            Err(MoodlogError::Editor(msg)) => assert!(msg.contains("exited")),
            other => panic!("Expected Editor error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_missing_editor() {
        let session = EditorSession::new("moodlog-no-such-editor-binary".to_string());
        match session.compose("draft") {
            Err(MoodlogError::Editor(msg)) => assert!(msg.contains("Failed to launch")),
            other => panic!("Expected Editor error, got {other:?}"),
        }
    }
}
