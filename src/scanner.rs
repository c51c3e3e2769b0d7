/*!
 * Directory walking, tree rendering and path ordering
 */

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::patterns::PatternSet;
use crate::types::{OutputTarget, ScanResult};

/// Connector glyphs for the rendered tree
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const INDENT: &str = "    ";

/// Scanner for directory contents
///
/// Walks the scan root depth-first, pruning excluded directories as whole
/// subtrees, and produces both the flat file list and the rendered tree in
/// one pass. Single-threaded and synchronous; recoverable filesystem errors
/// degrade to skipped entries.
pub struct Scanner {
    /// Scan root; parent directory of the target in single-file mode
    root: PathBuf,
    /// Single file to dump instead of walking, if the target was a file
    single_file: Option<PathBuf>,
    /// Compiled ignore patterns
    patterns: PatternSet,
    /// File-sink output paths, never included in their own dump
    output_files: Vec<PathBuf>,
}

impl Scanner {
    /// Create a new scanner, resolving the scan root and compiling the
    /// pattern set once for the run.
    pub fn new(config: &Config) -> Result<Self> {
        let target = fs::canonicalize(&config.target)?;

        let (root, single_file) = if target.is_file() {
            let parent = target.parent().unwrap_or(Path::new("/")).to_path_buf();
            (parent, Some(target))
        } else {
            (target, None)
        };

        let patterns = PatternSet::build(
            &root,
            config.ignore_patterns.as_deref(),
            &config.extra_ignore,
        )?;

        let output_files = config
            .outputs
            .iter()
            .filter_map(|o| match o {
                OutputTarget::File(path) => Some(fs::canonicalize(path).unwrap_or_else(|_| path.clone())),
                OutputTarget::Console => None,
            })
            .collect();

        Ok(Self {
            root,
            single_file,
            patterns,
            output_files,
        })
    }

    /// Scan the target and return the file list plus tree rendering.
    ///
    /// In single-file mode the file list is exactly the named file and no
    /// tree is produced.
    pub fn scan(&self) -> Result<ScanResult> {
        if let Some(file) = &self.single_file {
            return Ok(ScanResult {
                root: self.root.clone(),
                files: vec![file.clone()],
                tree: None,
            });
        }

        let root_name = self
            .root
            .file_name()
            .unwrap_or(self.root.as_os_str())
            .to_string_lossy()
            .to_string();

        let mut tree = format!("{}\n", root_name);
        let mut files = Vec::new();
        self.walk_directory(&self.root, "", &mut tree, &mut files);

        Ok(ScanResult {
            root: self.root.clone(),
            files,
            tree: Some(tree),
        })
    }

    /// Walk one directory level, appending tree lines and collecting files.
    fn walk_directory(&self, dir: &Path, prefix: &str, tree: &mut String, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                // Unreadable directory: skip the subtree, keep walking siblings
                eprintln!("Warning: Could not read directory {}: {}", dir.display(), e);
                return;
            }
        };

        let mut children: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    eprintln!("Warning: Could not read entry in {}: {}", dir.display(), e);
                    None
                }
            })
            .collect();

        // Subdirectories before files, each group case-insensitively sorted;
        // the flat list sort key reproduces exactly this order
        children.sort_by_cached_key(|path| (path.is_file(), lowercase_name(path)));

        let visible: Vec<PathBuf> = children
            .into_iter()
            .filter(|path| !self.is_excluded(path))
            .collect();

        for (i, path) in visible.iter().enumerate() {
            let is_last = i + 1 == visible.len();
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            tree.push_str(prefix);
            tree.push_str(connector);
            tree.push_str(&name);
            tree.push('\n');

            if path.is_dir() {
                let child_prefix = format!("{}{}", prefix, if is_last { INDENT } else { PIPE });
                self.walk_directory(path, &child_prefix, tree, files);
            } else if path.is_file() {
                files.push(path.clone());
            }
        }
    }

    /// Check whether a path is excluded from this scan
    pub fn is_excluded(&self, path: &Path) -> bool {
        // Never dump the output file into itself
        if self.output_files.iter().any(|out| path == out) {
            return true;
        }
        self.patterns.is_excluded(path, &self.root)
    }
}

/// Sort files into the order used by the tree rendering.
///
/// The key decomposes each scan-root-relative path into components, pairing
/// every component with whether the path down to that point is a file. The
/// resulting directories-before-files, case-insensitive alphabetical order
/// keeps the file contents section visually aligned with the tree section.
pub fn sort_files(files: &mut [PathBuf], root: &Path) {
    files.sort_by_cached_key(|path| path_sort_key(path, root));
}

fn path_sort_key(path: &Path, root: &Path) -> Vec<(bool, String)> {
    let rel = match path.strip_prefix(root) {
        Ok(rel) => rel,
        // Outside the scan root: fall back to the raw path form
        Err(_) => return vec![(path.is_file(), path.to_string_lossy().to_lowercase())],
    };

    let components: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();

    let mut key = Vec::with_capacity(components.len());
    let mut current = root.to_path_buf();
    for component in components.iter().take(components.len().saturating_sub(1)) {
        current.push(component);
        key.push((current.is_file(), component.to_lowercase()));
    }
    if let Some(last) = components.last() {
        key.push((path.is_file(), last.to_lowercase()));
    }

    key
}

fn lowercase_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_lowercase()
}
