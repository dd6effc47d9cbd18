//! Template file copying with ordered glob patterns

use crate::error::Result;
use globset::{GlobBuilder, GlobMatcher};
use log::debug;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinSet;
use walkdir::WalkDir;

/// Prefix marking a pattern that removes files from the selection
const NEGATION_MARKER: char = '!';

/// Options for [`copy`]
pub struct CopyOptions<'a> {
    /// Directory the patterns are evaluated against
    pub cwd: PathBuf,
    /// Keep the directory structure relative to `cwd`; otherwise flatten
    pub parents: bool,
    /// Rename applied to the base name of every copied file
    pub rename: Option<&'a (dyn Fn(&str) -> String + Sync)>,
}

impl CopyOptions<'_> {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            parents: true,
            rename: None,
        }
    }
}

struct Pattern {
    matcher: GlobMatcher,
    negated: bool,
}

fn compile_patterns(patterns: &[&str]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            let (negated, glob) = match pattern.strip_prefix(NEGATION_MARKER) {
                Some(rest) => (true, rest),
                None => (false, *pattern),
            };
            // `*` stays within one path segment; only `**` crosses directories
            let glob = GlobBuilder::new(glob).literal_separator(true).build()?;
            Ok(Pattern {
                matcher: glob.compile_matcher(),
                negated,
            })
        })
        .collect()
}

/// Relative paths (with `/` separators) of every file under `cwd`, dotfiles included
fn list_files(cwd: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(cwd).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(cwd) {
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            files.push(relative);
        }
    }
    Ok(files)
}

/// Resolve the ordered pattern list into the selected relative paths.
///
/// Patterns apply in order: a plain pattern adds its matches, a `!` pattern
/// removes them, so later patterns can undo earlier ones.
pub fn select_files(patterns: &[&str], files: &[String]) -> Result<BTreeSet<String>> {
    let compiled = compile_patterns(patterns)?;
    let mut selected = BTreeSet::new();

    for pattern in &compiled {
        for file in files {
            if !pattern.matcher.is_match(file) {
                continue;
            }
            if pattern.negated {
                selected.remove(file);
            } else {
                selected.insert(file.clone());
            }
        }
    }

    Ok(selected)
}

fn destination(relative: &str, target_dir: &Path, options: &CopyOptions<'_>) -> PathBuf {
    let relative = Path::new(relative);
    let base_name = relative
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match options.rename {
        Some(rename) => rename(&base_name),
        None => base_name,
    };

    match (options.parents, relative.parent()) {
        (true, Some(parent)) => target_dir.join(parent).join(name),
        _ => target_dir.join(name),
    }
}

/// Copy the files selected by `patterns` from `options.cwd` into `target_dir`.
///
/// Content is copied byte-for-byte. All copies finish before this returns;
/// the first failure is reported. Returns the written paths.
pub async fn copy(
    patterns: &[&str],
    target_dir: &Path,
    options: &CopyOptions<'_>,
) -> Result<Vec<PathBuf>> {
    let files = list_files(&options.cwd)?;
    let selected = select_files(patterns, &files)?;

    debug!(
        "Copying {} of {} files from {}",
        selected.len(),
        files.len(),
        options.cwd.display()
    );

    let mut copies = JoinSet::new();
    for relative in &selected {
        let source = options.cwd.join(relative);
        let dest = destination(relative, target_dir, options);
        copies.spawn(async move {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::copy(&source, &dest).await?;
            debug!("Copied {} -> {}", source.display(), dest.display());
            Ok::<_, crate::error::ScaffoldError>(dest)
        });
    }

    let mut written = Vec::with_capacity(selected.len());
    let mut failure = None;
    while let Some(joined) = copies.join_next().await {
        match joined {
            Ok(Ok(path)) => written.push(path),
            Ok(Err(e)) => {
                failure.get_or_insert(e);
            }
            Err(e) => {
                failure.get_or_insert(crate::error::ScaffoldError::Io(e.into()));
            }
        }
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(written),
    }
}
