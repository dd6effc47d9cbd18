//! `package.json` assembly for generated projects
//!
//! A manifest starts from a fixed base and is extended by dependency groups.
//! Every mapping is a `BTreeMap`, so keys serialize in alphabetical order and
//! identical inputs always produce identical bytes.

pub mod versions;

use crate::error::Result;
use crate::options::{Mode, PackageManager};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Manifest file name at the project root
pub const PACKAGE_JSON: &str = "package.json";

/// Version of a freshly generated project
const INITIAL_VERSION: &str = "0.0.1";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Optional groups of devDependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevGroup {
    /// Type definitions and the compiler for TypeScript projects
    TypeScript,
    /// Lint tooling
    Eslint,
    /// Platform CLIs pnpm does not resolve transitively
    PnpmPlatformCli,
}

impl DevGroup {
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            DevGroup::TypeScript => &[
                ("typescript", versions::TYPESCRIPT),
                ("@types/react", versions::TYPES_REACT),
                ("@types/react-test-renderer", versions::TYPES_REACT_TEST_RENDERER),
                ("@tsconfig/react-native", versions::TSCONFIG_REACT_NATIVE),
            ],
            DevGroup::Eslint => &[
                ("eslint", versions::ESLINT),
                ("@react-native/eslint-config", versions::REACT_NATIVE_ESLINT_CONFIG),
            ],
            DevGroup::PnpmPlatformCli => &[
                (
                    "@react-native-community/cli-platform-ios",
                    versions::REACT_NATIVE_COMMUNITY_CLI_PLATFORM_IOS,
                ),
                (
                    "@react-native-community/cli-platform-android",
                    versions::REACT_NATIVE_COMMUNITY_CLI_PLATFORM_ANDROID,
                ),
            ],
        }
    }
}

/// Generated project manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, String>,
    pub engines: BTreeMap<String, String>,
}

fn string_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl PackageJson {
    /// Manifest with the scripts and dependencies every project gets
    pub fn base(app_name: &str) -> Self {
        Self {
            name: app_name.to_string(),
            version: INITIAL_VERSION.to_string(),
            private: true,
            scripts: string_map(&[
                ("android", "react-native run-android"),
                ("ios", "react-native run-ios"),
                ("lint", "eslint ."),
                ("start", "react-native start"),
                ("test", "jest"),
            ]),
            dependencies: string_map(&[
                ("react", versions::REACT),
                ("react-native", versions::REACT_NATIVE),
            ]),
            dev_dependencies: string_map(&[
                ("@babel/core", versions::BABEL_CORE),
                ("@babel/preset-env", versions::BABEL_PRESET_ENV),
                ("@babel/runtime", versions::BABEL_RUNTIME),
                ("@react-native/metro-config", versions::REACT_NATIVE_METRO_CONFIG),
                ("babel-jest", versions::BABEL_JEST),
                ("jest", versions::JEST),
                (
                    "metro-react-native-babel-preset",
                    versions::METRO_REACT_NATIVE_BABEL_PRESET,
                ),
                ("prettier", versions::PRETTIER),
                ("react-test-renderer", versions::REACT_TEST_RENDERER),
            ]),
            engines: string_map(&[("node", versions::NODE_ENGINE)]),
        }
    }

    /// Return a copy extended with a devDependency group
    pub fn with_dev_group(mut self, group: DevGroup) -> Self {
        self.dev_dependencies.extend(
            group
                .entries()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        self
    }

    /// Extend with `group` only when `enabled`
    pub fn with_dev_group_if(self, enabled: bool, group: DevGroup) -> Self {
        if enabled {
            self.with_dev_group(group)
        } else {
            self
        }
    }

    /// Pretty JSON with 2-space indentation and a trailing line ending
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push_str(LINE_ENDING);
        Ok(json)
    }
}

/// Build the manifest for a project
pub fn assemble(
    app_name: &str,
    mode: Mode,
    package_manager: PackageManager,
    eslint: bool,
) -> PackageJson {
    PackageJson::base(app_name)
        .with_dev_group_if(
            package_manager == PackageManager::Pnpm,
            DevGroup::PnpmPlatformCli,
        )
        .with_dev_group_if(mode == Mode::TypeScript, DevGroup::TypeScript)
        .with_dev_group_if(eslint, DevGroup::Eslint)
}

/// Write `package.json` at the project root
pub async fn write_package_json(root: &Path, package_json: &PackageJson) -> Result<PathBuf> {
    let path = root.join(PACKAGE_JSON);
    tokio::fs::write(&path, package_json.to_json()?).await?;
    Ok(path)
}
