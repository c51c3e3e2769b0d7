/*!
 * Configuration handling for CodePrompt
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::types::OutputTarget;
use crate::{bail, ensure};

/// Command-line arguments for CodePrompt
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "codeprompt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate Markdown representation of directory contents for LLM prompts",
    long_about = "Renders a directory tree and the contents of every non-ignored file as a single Markdown document, designed for providing codebase context to Large Language Models (LLMs)."
)]
pub struct Args {
    /// Directory or single file to generate the prompt from
    #[clap(default_value = ".")]
    pub path: String,

    /// Output destinations (e.g., console, file=output.md). Multiple allowed.
    #[clap(short = 'o', long = "output")]
    pub output: Vec<String>,

    /// Comma-separated patterns that replace the default ignore list
    /// (e.g., -i='*.log,temp'). Pass with no value to disable all
    /// default ignoring.
    #[clap(short = 'i', long = "ignore", value_delimiter = ',', num_args = 0.., require_equals = true)]
    pub ignore_patterns: Option<Vec<String>>,

    /// Comma-separated patterns ignored in addition to the defaults
    #[clap(short = 'e', long = "extra-ignore", value_delimiter = ',')]
    pub extra_ignore: Vec<String>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory or file to process
    pub target: PathBuf,

    /// Output destinations, dispatched in order
    pub outputs: Vec<OutputTarget>,

    /// Full replacement for the default ignore patterns, if supplied
    pub ignore_patterns: Option<Vec<String>>,

    /// Patterns ignored on top of the defaults
    pub extra_ignore: Vec<String>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let outputs = if args.output.is_empty() {
            vec![OutputTarget::Console]
        } else {
            args.output
                .iter()
                .map(|spec| spec.parse())
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self {
            target: PathBuf::from(args.path),
            outputs,
            ignore_patterns: args.ignore_patterns,
            extra_ignore: args.extra_ignore,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target.exists(),
            Config,
            "Target path not found: {}",
            self.target.display()
        );
        ensure!(
            self.target.is_dir() || self.target.is_file(),
            Config,
            "Target is neither a directory nor a regular file: {}",
            self.target.display()
        );

        // File sinks must point into an existing directory
        for output in &self.outputs {
            if let OutputTarget::File(path) = output {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        bail!(
                            Config,
                            "Output directory not found: {}",
                            parent.display()
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
