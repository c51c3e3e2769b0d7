/*!
 * Markdown rendering and output dispatch
 */

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::content::read_file_content;
use crate::error::Result;
use crate::scanner::sort_files;
use crate::types::{OutputTarget, ScanResult};
use crate::utils::{language_tag, relative_unix_path};

/// Markdown writer for scan results
pub struct MarkdownWriter {
    /// Writer configuration
    config: Config,
}

impl MarkdownWriter {
    /// Create a new Markdown writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render a scan result as one Markdown document
    pub fn render(&self, scan: &ScanResult) -> String {
        let mut markdown = String::new();

        match &scan.tree {
            Some(tree) => {
                markdown.push_str("# Codebase Contents\n\n");
                markdown.push_str("## Directory Structure\n\n");
                markdown.push_str(&format!("```\n{}```\n\n", tree));
            }
            None => markdown.push_str("# File Summary\n\n"),
        }

        markdown.push_str("## File Contents\n\n");

        // Match the tree view ordering
        let mut files = scan.files.clone();
        sort_files(&mut files, &scan.root);

        for file in &files {
            match relative_unix_path(file, &scan.root) {
                Some(relative) => {
                    markdown.push_str(&format!("### File: `{}`\n\n", relative));
                    markdown.push_str(&render_content(file));
                }
                None => {
                    markdown.push_str(&format!("### File: `{}`\n\n", file.display()));
                    markdown.push_str("*[File path error]*\n\n");
                }
            }
        }

        markdown
    }

    /// Send the rendered document to every configured output target
    pub fn write(&self, markdown: &str) -> Result<()> {
        for output in &self.config.outputs {
            match output {
                OutputTarget::Console => {
                    io::stdout().write_all(markdown.as_bytes())?;
                }
                OutputTarget::File(path) => {
                    // A failed sink is reported but does not stop the others
                    match fs::write(path, markdown) {
                        Ok(()) => eprintln!("Output written to {}", path.display()),
                        Err(e) => {
                            eprintln!("Warning: Error writing to file {}: {}", path.display(), e)
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Render one file's contents section body.
///
/// Markdown files are inlined without fencing; everything else goes into a
/// fenced block tagged by extension. Unreadable files get a placeholder.
fn render_content(file: &Path) -> String {
    let content = match read_file_content(file) {
        Some(content) => content,
        None => return "*[File content could not be read]*\n\n".to_string(),
    };

    let ext = file
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ext == "md" || ext == "markdown" {
        format!("{}\n\n", content)
    } else {
        format!("```{}\n{}\n```\n\n", language_tag(file), content)
    }
}
