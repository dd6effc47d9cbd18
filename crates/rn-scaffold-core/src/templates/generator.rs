//! Template materialization: path substitution and content rendering
//!
//! Every file under a template root is written to the target directory after
//! two substitutions:
//! - `__key__` segments in the file path are replaced by the value of `key`
//! - text content is rendered with the substitution table as context
//!
//! Binary files (by extension) are copied byte-for-byte.

use super::renderer::TemplateRenderer;
use crate::error::{Result, ScaffoldError};
use crate::names::ProjectNames;
use log::debug;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinSet;
use walkdir::WalkDir;

/// Extension stripped from template file names
const TEMPLATE_EXTENSION: &str = ".template";

/// File names that gain a leading dot when written
const DOT_PREFIXED_SUFFIX: &str = "xcode.env";

/// Android build wrapper scripts made executable after generation
const GRADLEW_FILES: [&str; 2] = ["gradlew", "gradlew.bat"];

/// Permission bits applied to the gradle wrapper scripts
#[cfg(unix)]
const GRADLEW_MODE: u32 = 0o775;

/// Extensions treated as binary content
const BINARY_EXTENSIONS: &[&str] = &[
    "7z", "a", "aar", "apk", "avi", "bin", "bmp", "class", "dat", "dll", "dylib", "eot", "exe",
    "flac", "gif", "gz", "heic", "ico", "icns", "jar", "jpeg", "jpg", "keystore", "m4a", "mov",
    "mp3", "mp4", "o", "ogg", "otf", "pdf", "png", "so", "tar", "tgz", "tif", "tiff", "ttf", "wav",
    "webm", "webp", "woff", "woff2", "xz", "zip",
];

/// Key/value table driving path and content substitution
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    /// Build the table for a project
    pub fn new(names: &ProjectNames, src_dir: bool) -> Self {
        Self::from_pairs([
            ("className", names.class_name.clone()),
            ("propertyName", names.property_name.clone()),
            ("constantName", names.constant_name.clone()),
            ("fileName", names.file_name.clone()),
            ("displayName", names.class_name.clone()),
            ("lowerCaseName", names.class_name.to_lowercase()),
            (
                "entryApp",
                if src_dir { "./src/App" } else { "./App" }.to_string(),
            ),
        ])
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render context for template content
    pub fn to_context(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        )
    }

    /// Replace every `__key__` token in `path`
    pub fn apply_to_path(&self, path: &str) -> String {
        self.iter().fold(path.to_string(), |acc, (key, value)| {
            acc.replace(&format!("__{}__", key), value)
        })
    }
}

/// Whether a file is copied verbatim instead of rendered
pub fn is_binary_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| BINARY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Compute where a template file lands in the target tree
pub fn compute_path(
    source_dir: &Path,
    target_dir: &Path,
    file_path: &Path,
    substitutions: &Substitutions,
) -> PathBuf {
    let mut relative = file_path
        .strip_prefix(source_dir)
        .unwrap_or(file_path)
        .to_path_buf();

    if let Some(name) = relative.file_name().and_then(|n| n.to_str()) {
        let mut name = name.to_string();
        if let Some(stripped) = name.strip_suffix(TEMPLATE_EXTENSION) {
            if !stripped.is_empty() {
                name = stripped.to_string();
            }
        }
        if name.ends_with(DOT_PREFIXED_SUFFIX) && !name.starts_with('.') {
            name = format!(".{}", name);
        }
        relative.set_file_name(name);
    }

    target_dir.join(substitutions.apply_to_path(&relative.to_string_lossy()))
}

/// Collect every regular file below `parent`
fn all_files_in_dir(parent: &Path) -> Result<Vec<PathBuf>> {
    if !parent.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(parent).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

async fn write_file(path: PathBuf, content: Vec<u8>) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&path, content).await?;
    debug!("Wrote {}", path.display());
    Ok(path)
}

async fn load_content(
    file_path: &Path,
    renderer: &dyn TemplateRenderer,
    context: &serde_json::Value,
) -> Result<Vec<u8>> {
    if is_binary_path(file_path) {
        return Ok(fs::read(file_path).await?);
    }

    let template = fs::read_to_string(file_path).await?;
    let rendered = renderer.render(&file_path.to_string_lossy(), &template, context)?;
    Ok(rendered.into_bytes())
}

/// Materialize every file of `source_dir` into `target_dir`.
///
/// Fails with [`ScaffoldError::EmptySource`] before writing anything when the
/// source has no files. Rendering stops at the first error; writes already
/// started are awaited before the error is returned. Returns the written paths.
pub async fn generate_files(
    source_dir: &Path,
    target_dir: &Path,
    substitutions: &Substitutions,
    renderer: &dyn TemplateRenderer,
) -> Result<Vec<PathBuf>> {
    let files = all_files_in_dir(source_dir)?;
    if files.is_empty() {
        return Err(ScaffoldError::EmptySource {
            source_dir: source_dir.to_path_buf(),
        });
    }

    debug!(
        "Generating {} files from {} into {}",
        files.len(),
        source_dir.display(),
        target_dir.display()
    );

    let context = substitutions.to_context();
    let mut writes = JoinSet::new();
    let mut failure: Option<ScaffoldError> = None;

    for file_path in &files {
        let target_path = compute_path(source_dir, target_dir, file_path, substitutions);
        match load_content(file_path, renderer, &context).await {
            Ok(content) => {
                writes.spawn(write_file(target_path, content));
            }
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    let mut written = Vec::with_capacity(files.len());
    while let Some(joined) = writes.join_next().await {
        match joined {
            Ok(Ok(path)) => written.push(path),
            Ok(Err(e)) => {
                failure.get_or_insert(e);
            }
            Err(e) => {
                failure.get_or_insert(ScaffoldError::Io(e.into()));
            }
        }
    }

    if let Some(e) = failure {
        return Err(e);
    }

    chmod_gradlew_files(&target_dir.join("android")).await?;

    Ok(written)
}

/// Make the gradle wrapper scripts under `android_dir` executable, if present
pub async fn chmod_gradlew_files(android_dir: &Path) -> Result<()> {
    for name in GRADLEW_FILES {
        let path = android_dir.join(name);
        if !fs::try_exists(&path).await.unwrap_or(false) {
            continue;
        }
        set_executable(&path).await.map_err(|e| {
            debug!("chmod {} failed: {}", path.display(), e);
            ScaffoldError::Chmod {
                dir: android_dir.to_path_buf(),
            }
        })?;
    }
    Ok(())
}

#[cfg(unix)]
async fn set_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(GRADLEW_MODE)).await
}

#[cfg(not(unix))]
async fn set_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
