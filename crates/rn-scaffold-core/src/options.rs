//! Immutable option set for a single scaffolding run

use crate::error::{Result, ScaffoldError};
use std::fmt;
use std::path::PathBuf;

/// Default import alias configured in compiler configs
pub const DEFAULT_IMPORT_ALIAS: &str = "@/*";

/// Language mode of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Mode {
    #[value(name = "ts")]
    TypeScript,
    #[value(name = "js")]
    JavaScript,
}

impl Mode {
    /// Directory name of this mode inside a template
    pub fn dir_name(&self) -> &'static str {
        match self {
            Mode::TypeScript => "ts",
            Mode::JavaScript => "js",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::TypeScript => "TypeScript",
            Mode::JavaScript => "JavaScript",
        }
    }

    /// Compiler config written at the project root
    pub fn compiler_config(&self) -> &'static str {
        match self {
            Mode::TypeScript => "tsconfig.json",
            Mode::JavaScript => "jsconfig.json",
        }
    }

    /// Test file importing the app entry point
    pub fn app_test_file(&self) -> &'static str {
        match self {
            Mode::TypeScript => "App.test.tsx",
            Mode::JavaScript => "App.test.jsx",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    /// Binary name of the package manager
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Detect the package manager from an `npm_config_user_agent` value
    pub fn detect_from_user_agent(user_agent: &str) -> Self {
        if user_agent.starts_with("yarn") {
            PackageManager::Yarn
        } else if user_agent.starts_with("pnpm") {
            PackageManager::Pnpm
        } else if user_agent.starts_with("bun") {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        }
    }

    /// Detect the package manager that launched this process
    pub fn detect() -> Self {
        let user_agent = std::env::var("npm_config_user_agent").unwrap_or_default();
        Self::detect_from_user_agent(&user_agent)
    }

    /// Command used to run a package script, e.g. `npm run android`
    pub fn run_command(&self, script: &str) -> String {
        match self {
            PackageManager::Yarn => format!("yarn {}", script),
            _ => format!("{} run {}", self.command(), script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Module-path alias such as `@/*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAlias(String);

impl ImportAlias {
    /// Validate an alias of the form `<prefix>/*`
    pub fn parse(alias: &str) -> Result<Self> {
        if alias.match_indices("/*").any(|(idx, _)| idx > 0) {
            Ok(Self(alias.to_string()))
        } else {
            Err(ScaffoldError::InvalidImportAlias(alias.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The alias with wildcard markers removed, as written in import paths
    pub fn prefix(&self) -> String {
        self.0.replace('*', "")
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_IMPORT_ALIAS
    }
}

impl Default for ImportAlias {
    fn default() -> Self {
        Self(DEFAULT_IMPORT_ALIAS.to_string())
    }
}

impl fmt::Display for ImportAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every choice for one run, fixed before any component runs
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    /// Absolute path of the project directory
    pub app_path: PathBuf,
    pub mode: Mode,
    pub package_manager: PackageManager,
    pub eslint: bool,
    /// Place entry-point files under `src/`
    pub src_dir: bool,
    pub import_alias: ImportAlias,
    /// Install dependencies after generation
    pub install: bool,
    /// Initialize a git repository after generation
    pub git: bool,
}

impl ProjectOptions {
    /// Project name, taken from the last component of the app path
    pub fn app_name(&self) -> String {
        self.app_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_user_agent() {
        assert_eq!(
            PackageManager::detect_from_user_agent("yarn/1.22.19 npm/? node/v18.0.0"),
            PackageManager::Yarn
        );
        assert_eq!(
            PackageManager::detect_from_user_agent("pnpm/8.6.0 npm/? node/v18.0.0"),
            PackageManager::Pnpm
        );
        assert_eq!(
            PackageManager::detect_from_user_agent("bun/1.0.0"),
            PackageManager::Bun
        );
        assert_eq!(
            PackageManager::detect_from_user_agent("npm/9.0.0 node/v18.0.0"),
            PackageManager::Npm
        );
        assert_eq!(PackageManager::detect_from_user_agent(""), PackageManager::Npm);
    }

    #[test]
    fn test_run_command() {
        assert_eq!(PackageManager::Yarn.run_command("ios"), "yarn ios");
        assert_eq!(PackageManager::Npm.run_command("ios"), "npm run ios");
    }

    #[test]
    fn test_import_alias_validation() {
        assert!(ImportAlias::parse("@/*").is_ok());
        assert!(ImportAlias::parse("~/*").is_ok());
        assert!(ImportAlias::parse("@app/*").is_ok());
        assert!(ImportAlias::parse("/*").is_err());
        assert!(ImportAlias::parse("@").is_err());
        assert!(ImportAlias::parse("").is_err());
    }

    #[test]
    fn test_import_alias_prefix() {
        let alias = ImportAlias::parse("~/*").unwrap();
        assert_eq!(alias.prefix(), "~/");
        assert!(!alias.is_default());
        assert!(ImportAlias::default().is_default());
    }

    #[test]
    fn test_mode_files() {
        assert_eq!(Mode::TypeScript.compiler_config(), "tsconfig.json");
        assert_eq!(Mode::JavaScript.compiler_config(), "jsconfig.json");
        assert_eq!(Mode::JavaScript.app_test_file(), "App.test.jsx");
    }

    #[test]
    fn test_app_name_from_path() {
        let options = ProjectOptions {
            app_path: PathBuf::from("/home/dev/my-app"),
            mode: Mode::TypeScript,
            package_manager: PackageManager::Npm,
            eslint: true,
            src_dir: false,
            import_alias: ImportAlias::default(),
            install: false,
            git: false,
        };
        assert_eq!(options.app_name(), "my-app");
    }
}
