//! Source scanners backing the layering contract.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One offending source line.
pub struct Hit {
    pub file: String,
    pub line: usize,
    pub text: String,
}

impl fmt::Debug for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.text.trim())
    }
}

/// A source file under the crate root, with its path relative to it.
struct Source {
    path: String,
    content: String,
}

impl Source {
    fn hits<'a>(&'a self, matches: impl Fn(&str) -> bool + 'a) -> impl Iterator<Item = Hit> + 'a {
        self.content
            .lines()
            .enumerate()
            .filter(move |(_, line)| matches(line))
            .map(|(idx, line)| Hit {
                file: self.path.clone(),
                line: idx + 1,
                text: line.to_string(),
            })
    }
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries =
        fs::read_dir(dir).unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));
    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
            .path();
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Every `.rs` file under `dir`, sorted by path.
fn sources(dir: &str) -> Vec<Source> {
    let root = crate_root();
    let mut paths = Vec::new();
    walk(&root.join(dir), &mut paths);
    paths.sort();

    paths
        .into_iter()
        .map(|path| Source {
            content: fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display())),
            path: path
                .strip_prefix(&root)
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/"),
        })
        .collect()
}

/// Lines under `dir` mentioning any of `patterns`.
pub fn find_lines_containing(dir: &str, patterns: &[&str]) -> Vec<Hit> {
    find_lines_containing_outside(dir, patterns, &[])
}

/// Like [`find_lines_containing`], skipping files whose path starts with
/// one of `allowed` (relative to the crate root).
///
/// Lets a rule name the few places that may cross a boundary, such as
/// the composition root constructing concrete adapters.
pub fn find_lines_containing_outside(dir: &str, patterns: &[&str], allowed: &[&str]) -> Vec<Hit> {
    sources(dir)
        .iter()
        .filter(|source| !allowed.iter().any(|prefix| source.path.starts_with(prefix)))
        .flat_map(|source| {
            source
                .hits(|line| patterns.iter().any(|p| line.contains(p)))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Lines in `mod.rs` files under `dir` that are not module declarations,
/// attributes gating them, or comments.
pub fn find_non_export_lines_in_mod_files(dir: &str) -> Vec<Hit> {
    sources(dir)
        .iter()
        .filter(|source| source.path.ends_with("/mod.rs"))
        .flat_map(|source| {
            source
                .hits(|raw| {
                    let line = raw.trim();
                    !(line.is_empty()
                        || line.starts_with("//")
                        || line.starts_with("pub mod ")
                        || line.starts_with("mod ")
                        || line.starts_with("#[cfg"))
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
