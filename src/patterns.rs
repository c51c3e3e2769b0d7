/*!
 * Ignore-pattern resolution
 *
 * Combines the built-in default patterns (or a caller-supplied replacement),
 * any extra patterns, and the scan root's `.gitignore` into one gitignore
 * matcher, and classifies paths against it.
 */

use std::fs;
use std::path::{Component, Path};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::Match;

use crate::error::Result;
use crate::utils::{relative_unix_path, DEFAULT_IGNORE};

/// Compiled ignore patterns for one run.
///
/// Matching is pure and stateless: the verdict for a path depends only on
/// its scan-root-relative, forward-slash form. Pattern sources layer in
/// fixed precedence (defaults, then extras, then `.gitignore` lines), with
/// gitignore last-match-wins semantics so later patterns, including
/// negations, override earlier ones.
pub struct PatternSet {
    matcher: Gitignore,
}

impl PatternSet {
    /// Build the matcher for a scan root.
    ///
    /// `replacement`, when given, fully replaces the default pattern list;
    /// an explicitly empty replacement disables all default ignoring.
    /// Extras and `root/.gitignore` lines layer on top either way.
    pub fn build(root: &Path, replacement: Option<&[String]>, extras: &[String]) -> Result<Self> {
        let mut lines: Vec<String> = match replacement {
            Some(patterns) => patterns.to_vec(),
            None => DEFAULT_IGNORE.iter().map(|p| p.to_string()).collect(),
        };
        lines.extend(extras.iter().cloned());
        lines.extend(read_gitignore_lines(&root.join(".gitignore")));

        // Empty builder root so matching works on relative paths
        let mut builder = GitignoreBuilder::new("");
        for line in &lines {
            if let Err(e) = builder.add_line(None, line) {
                eprintln!("Warning: invalid ignore pattern {:?}: {}", line, e);
            }
        }

        Ok(Self {
            matcher: builder.build()?,
        })
    }

    /// An empty pattern set that excludes nothing (the `.git` rule in
    /// [`PatternSet::is_excluded`] still applies).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
        }
    }

    /// Decide whether `path` is excluded from the scan rooted at `root`.
    ///
    /// A `.git` path component always excludes, regardless of pattern
    /// configuration. Paths outside the scan root are never excluded.
    pub fn is_excluded(&self, path: &Path, root: &Path) -> bool {
        let rel = match path.strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => return false,
        };
        if rel.as_os_str().is_empty() {
            return false;
        }

        // .git is cut unconditionally, it is never worth prompting with
        if rel
            .components()
            .any(|c| matches!(c, Component::Normal(name) if name == ".git"))
        {
            return true;
        }

        let unix = match relative_unix_path(path, root) {
            Some(unix) => unix,
            None => return false,
        };

        matches!(
            self.matcher
                .matched_path_or_any_parents(Path::new(&unix), path.is_dir()),
            Match::Ignore(_)
        )
    }
}

/// Read `.gitignore` lines, dropping blanks and comments.
///
/// An unreadable or undecodable file contributes nothing; the run continues.
fn read_gitignore_lines(path: &Path) -> Vec<String> {
    if !path.is_file() {
        return Vec::new();
    }

    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect(),
        Err(e) => {
            eprintln!(
                "Warning: Error reading .gitignore file {}: {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}
