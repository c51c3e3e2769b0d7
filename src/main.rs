/*!
 * Command-line interface for CodePrompt
 */

use std::io;
use std::time::Instant;

use clap::{CommandFactory, Parser};

use codeprompt::config::{Args, Config};
use codeprompt::scanner::Scanner;
use codeprompt::writer::MarkdownWriter;

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "codeprompt", &mut io::stdout());
        return Ok(());
    }

    // Create and validate configuration
    let config = Config::from_args(args)?;
    config.validate()?;

    let start_time = Instant::now();

    // Scan the target
    let scanner = Scanner::new(&config)?;
    let scan = scanner.scan()?;

    // Render Markdown and dispatch to the configured outputs
    let writer = MarkdownWriter::new(config);
    let markdown = writer.render(&scan);
    writer.write(&markdown)?;

    eprintln!(
        "Processed {} files in {:.2?}",
        scan.files.len(),
        start_time.elapsed()
    );

    Ok(())
}
