//! Output delivery: stdout, file, clipboard.

use std::fs;
use std::path::PathBuf;

use crate::RenderError;

/// Where rendered output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File,
    Clipboard,
}

/// Delivery settings for one render run.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Targets to write to, in order.
    pub targets: Vec<OutputTarget>,
    /// Destination for the file target; a timestamped name in the
    /// current directory when unset.
    pub file_path: Option<PathBuf>,
    /// Suppress the stdout copy even when it is a target.
    pub quiet: bool,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            targets: vec![OutputTarget::Stdout],
            file_path: None,
            quiet: false,
        }
    }
}

/// Timestamped fallback filename for the file target.
pub fn default_output_filename() -> String {
    chrono::Local::now()
        .format("numgap_%y.%m.%d_%H-%M.txt")
        .to_string()
}

/// Send `text` to every configured target. Returns human-readable notes
/// about side effects (file written, clipboard status) for the caller to
/// print on stderr. Clipboard failures degrade to a note; file failures
/// are hard errors.
pub fn deliver(text: &str, config: &SinkConfig) -> Result<Vec<String>, RenderError> {
    let mut notes = Vec::new();

    for target in &config.targets {
        match target {
            OutputTarget::Stdout => {
                if !config.quiet {
                    println!("{text}");
                }
            }
            OutputTarget::File => {
                let path = config
                    .file_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(default_output_filename()));
                fs::write(&path, text).map_err(|source| RenderError::Io {
                    path: path.clone(),
                    source,
                })?;
                notes.push(format!("wrote {}", path.display()));
            }
            OutputTarget::Clipboard => match copy_to_clipboard(text) {
                Ok(()) => notes.push("copied to clipboard".to_string()),
                Err(message) => notes.push(format!("clipboard unavailable: {message}")),
            },
        }
    }

    Ok(notes)
}

fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
}
