//! Template manifest types and parsing

use crate::error::Result;
use crate::options::Mode;
use crate::templates::relocate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// File name of the manifest at the template root
pub const MANIFEST_FILE: &str = "template.yaml";

/// Template manifest (templates/template.yaml)
///
/// Every field falls back to the built-in rules, so a template without a
/// manifest behaves like the default React Native template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template
    #[serde(default = "default_name")]
    pub name: String,

    /// Description of what the template provides
    #[serde(default)]
    pub description: String,

    /// Semver version for CLI compatibility checking
    #[serde(default)]
    pub version: Option<String>,

    /// Directory holding files rendered through substitution
    #[serde(default = "default_files_dir")]
    pub files_dir: String,

    /// Directory holding the per-language skeletons (`<dir>/ts`, `<dir>/js`)
    #[serde(default = "default_skeleton_dir")]
    pub skeleton_dir: String,

    /// Skeleton files written with a leading dot (`gitignore` -> `.gitignore`)
    #[serde(default = "default_dotfiles")]
    pub dotfiles: Vec<String>,

    /// Explicit skeleton renames
    #[serde(default = "default_renames")]
    pub renames: BTreeMap<String, String>,

    /// Skeleton files only copied when ESLint is enabled
    #[serde(default = "default_lint_files")]
    pub lint_files: Vec<String>,

    /// Entry files moved into `src/` per language mode
    #[serde(default)]
    pub entry_files: EntryFiles,
}

/// Entry-point files relocated for each language mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryFiles {
    #[serde(default = "default_ts_entry_files")]
    pub ts: Vec<String>,
    #[serde(default = "default_js_entry_files")]
    pub js: Vec<String>,
}

impl Default for EntryFiles {
    fn default() -> Self {
        Self {
            ts: default_ts_entry_files(),
            js: default_js_entry_files(),
        }
    }
}

fn default_name() -> String {
    "default".to_string()
}

fn default_files_dir() -> String {
    "files".to_string()
}

fn default_skeleton_dir() -> String {
    "default".to_string()
}

fn default_dotfiles() -> Vec<String> {
    ["gitignore", "eslintrc.json", "prettierrc.json"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_renames() -> BTreeMap<String, String> {
    BTreeMap::from([("README-template.md".to_string(), "README.md".to_string())])
}

fn default_lint_files() -> Vec<String> {
    vec!["eslintrc.json".to_string()]
}

fn to_strings(files: &[&str]) -> Vec<String> {
    files.iter().map(|s| s.to_string()).collect()
}

fn default_ts_entry_files() -> Vec<String> {
    to_strings(relocate::SRC_TS_FILE_NAMES)
}

fn default_js_entry_files() -> Vec<String> {
    to_strings(relocate::SRC_JS_FILE_NAMES)
}

impl Default for TemplateManifest {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: String::new(),
            version: None,
            files_dir: default_files_dir(),
            skeleton_dir: default_skeleton_dir(),
            dotfiles: default_dotfiles(),
            renames: default_renames(),
            lint_files: default_lint_files(),
            entry_files: EntryFiles::default(),
        }
    }
}

impl TemplateManifest {
    /// Read `template.yaml` from a template root, or use the defaults when absent
    pub fn load(template_root: &Path) -> Result<Self> {
        let manifest_path = template_root.join(MANIFEST_FILE);
        match std::fs::read_to_string(&manifest_path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} not found, using built-in rules", manifest_path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Name a skeleton file is written under
    pub fn rename(&self, name: &str) -> String {
        if self.dotfiles.iter().any(|d| d == name) {
            return format!(".{}", name);
        }
        self.renames
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    /// Ordered copy patterns for the skeleton
    pub fn copy_patterns(&self, eslint: bool) -> Vec<String> {
        let mut patterns = vec!["**".to_string()];
        if !eslint {
            patterns.extend(self.lint_files.iter().map(|f| format!("!{}", f)));
        }
        patterns
    }

    /// Entry files moved into `src/` for a language mode
    pub fn entry_files_for(&self, mode: Mode) -> &[String] {
        match mode {
            Mode::TypeScript => &self.entry_files.ts,
            Mode::JavaScript => &self.entry_files.js,
        }
    }
}
