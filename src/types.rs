/*!
 * Core types for the CodePrompt application
 */

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CodePromptError;

/// Result of scanning a target path
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Scan root: every displayed or matched path is relative to this
    pub root: PathBuf,
    /// Discovered files, absolute paths, in walk order
    pub files: Vec<PathBuf>,
    /// Rendered directory tree; `None` in single-file mode
    pub tree: Option<String>,
}

/// Destination for the rendered Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print to stdout
    Console,
    /// Write to a file
    File(PathBuf),
}

impl FromStr for OutputTarget {
    type Err = CodePromptError;

    /// Parse an output specification of the form `console` or `file=<path>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, path) = match s.split_once('=') {
            Some((kind, path)) => (kind.trim(), Some(path.trim())),
            None => (s.trim(), None),
        };

        match kind {
            "console" => Ok(OutputTarget::Console),
            "file" => match path {
                Some(p) if !p.is_empty() => Ok(OutputTarget::File(PathBuf::from(p))),
                _ => Err(crate::error!(
                    Config,
                    "File output requires a path (e.g., file=output.md)"
                )),
            },
            other => Err(crate::error!(Config, "Unknown output type: {}", other)),
        }
    }
}
