//! Import alias configuration and rewriting

use crate::error::{Result, ScaffoldError};
use crate::options::{ImportAlias, Mode, DEFAULT_IMPORT_ALIAS};
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use walkdir::WalkDir;

/// Upper bound on files rewritten at once
const MAX_CONCURRENT_REWRITES: usize = 8;

/// Compiler configs patched by [`patch_compiler_config`] and left alone by [`rewrite_alias`]
const COMPILER_CONFIGS: [&str; 2] = ["tsconfig.json", "jsconfig.json"];

/// Point the compiler config's path mapping at the chosen alias and source root
pub async fn patch_compiler_config(
    target_dir: &Path,
    mode: Mode,
    src_dir: bool,
    alias: &ImportAlias,
) -> Result<()> {
    let config_path = target_dir.join(mode.compiler_config());
    let content = fs::read_to_string(&config_path).await?;

    let default_mapping = format!("\"{}\": [\"./*\"]", DEFAULT_IMPORT_ALIAS);
    let mapping = if src_dir {
        format!("\"{}\": [\"./src/*\"]", DEFAULT_IMPORT_ALIAS)
    } else {
        default_mapping.clone()
    };

    let patched = content.replacen(&default_mapping, &mapping, 1).replacen(
        &format!("\"{}\":", DEFAULT_IMPORT_ALIAS),
        &format!("\"{}\":", alias),
        1,
    );

    fs::write(&config_path, patched).await?;
    debug!("Patched {}", config_path.display());
    Ok(())
}

/// Regular files under `target_dir` eligible for alias rewriting
fn rewrite_candidates(target_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(target_dir) {
        let entry = entry?;
        // Symlinks and other special entries are not rewritten
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(target_dir).unwrap_or(entry.path());
        if COMPILER_CONFIGS.iter().any(|c| relative == Path::new(c)) {
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

async fn rewrite_file(path: &Path, old_prefix: &str, new_prefix: &str) -> Result<bool> {
    let bytes = fs::read(path).await?;
    let Ok(content) = String::from_utf8(bytes) else {
        debug!("Skipping non-UTF-8 file {}", path.display());
        return Ok(false);
    };
    if !content.contains(old_prefix) {
        return Ok(false);
    }
    fs::write(path, content.replace(old_prefix, new_prefix)).await?;
    Ok(true)
}

/// Replace the `old` import alias prefix with `new` in every generated file.
///
/// Wildcards are stripped from both aliases. The root compiler configs are
/// skipped. Returns the number of rewritten files.
pub async fn rewrite_alias(target_dir: &Path, old: &str, new: &str) -> Result<usize> {
    if old == new {
        return Ok(0);
    }

    let old_prefix: Arc<str> = old.replace('*', "").into();
    let new_prefix: Arc<str> = new.replace('*', "").into();

    let files = rewrite_candidates(target_dir)?;
    if files.is_empty() {
        return Ok(0);
    }

    let semaphore = Arc::new(Semaphore::new(files.len().min(MAX_CONCURRENT_REWRITES)));
    let mut rewrites = JoinSet::new();

    for path in files {
        let semaphore = Arc::clone(&semaphore);
        let old_prefix = Arc::clone(&old_prefix);
        let new_prefix = Arc::clone(&new_prefix);
        rewrites.spawn(async move {
            // Released on drop whatever the outcome
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| ScaffoldError::Io(std::io::Error::other(e)))?;
            rewrite_file(&path, &old_prefix, &new_prefix).await
        });
    }

    let mut rewritten = 0;
    let mut failure = None;
    while let Some(joined) = rewrites.join_next().await {
        match joined {
            Ok(Ok(true)) => rewritten += 1,
            Ok(Ok(false)) => {}
            Ok(Err(e)) => {
                failure.get_or_insert(e);
            }
            Err(e) => {
                failure.get_or_insert(ScaffoldError::Io(e.into()));
            }
        }
    }

    match failure {
        Some(e) => Err(e),
        None => {
            debug!("Rewrote import alias in {} files", rewritten);
            Ok(rewritten)
        }
    }
}
