/*!
 * Static tables for CodePrompt
 */

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

/// Default patterns to ignore
///
/// Files that typically should not end up inside an LLM prompt: version
/// control metadata, dependency lockfiles, build artifacts, IDE state and
/// environment files.
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version Control
        ".git",
        ".gitignore",
        ".gitattributes",
        ".hg",
        ".hgignore",
        ".svn",
        // Python
        ".python-version",
        "pyproject.toml",
        "poetry.lock",
        "requirements.txt",
        "Pipfile",
        "Pipfile.lock",
        "uv.lock",
        "ruff.toml",
        "__pycache__",
        "*.pyc",
        "*.pyo",
        "*.pyd",
        ".pytest_cache",
        ".coverage",
        ".tox",
        ".venv",
        "venv",
        // Node.js
        "package.json",
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        "bun.lockb",
        "node_modules",
        ".npmrc",
        ".yarnrc",
        // IDE and Editor
        ".vscode",
        ".idea",
        ".vs",
        "*.swp",
        "*.swo",
        ".DS_Store",
        // Build and Distribution
        "dist",
        "build",
        "*.egg-info",
        "*.whl",
        // Environment and Configuration
        ".env",
        ".env.*",
        "*.cfg",
        ".editorconfig",
        // Documentation
        "LICENSE",
        "LICENSE.*",
        "COPYING",
        "AUTHORS",
    ]
});

/// Extension (lowercase, with dot) to Markdown fence language tag
static LANGUAGE_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (".py", "python"),
        (".js", "javascript"),
        (".ts", "typescript"),
        (".jsx", "jsx"),
        (".tsx", "tsx"),
        (".html", "html"),
        (".css", "css"),
        (".scss", "scss"),
        (".sql", "sql"),
        (".sh", "bash"),
        (".bash", "bash"),
        (".zsh", "bash"),
        (".go", "go"),
        (".rs", "rust"),
        (".java", "java"),
        (".cpp", "cpp"),
        (".c", "c"),
        (".rb", "ruby"),
        (".php", "php"),
        (".md", "markdown"),
        (".yaml", "yaml"),
        (".yml", "yaml"),
        (".json", "json"),
        (".xml", "xml"),
        (".toml", "toml"),
    ])
});

/// Look up the syntax-highlight tag for a file, by extension.
///
/// Unknown extensions (and files without one) map to the empty tag, which
/// renders an untagged fenced block.
pub fn language_tag(path: &Path) -> &'static str {
    let ext = match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => return "",
    };
    LANGUAGE_TAGS.get(ext.as_str()).copied().unwrap_or("")
}

/// Relative, forward-slash form of `path` with respect to `root`.
///
/// Returns `None` when the path is not under the scan root.
pub fn relative_unix_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(rel.to_string_lossy().replace('\\', "/"))
}
