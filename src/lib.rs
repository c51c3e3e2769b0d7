/*!
 * CodePrompt - Generate Markdown representation of directory contents for LLM prompts
 *
 * This library renders a directory tree plus the contents of every
 * non-ignored file as a single Markdown document, designed for providing
 * codebase context to Large Language Models (LLMs).
 */

pub mod config;
pub mod content;
pub mod error;
pub mod patterns;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use content::read_file_content;
pub use error::{CodePromptError, Result};
pub use patterns::PatternSet;
pub use scanner::{sort_files, Scanner};
pub use types::{OutputTarget, ScanResult};
pub use utils::{language_tag, DEFAULT_IGNORE};
pub use writer::MarkdownWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
