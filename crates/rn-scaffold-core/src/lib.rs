//! RN Scaffold Core - Library behind the `create-rn-app` CLI
//!
//! This library materializes a React Native project from a template tree.
//! The binary only parses flags; everything else lives here so that other
//! front-ends can drive the same pipeline.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name derivation, path/content substitution,
//!   bulk copy, alias rewriting, `src/` relocation and `package.json` assembly
//! - **Layer 2: Workflow Orchestration** - [`project::create_app`] runs the passes
//!   in order, then installs dependencies and initializes git
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use rn_scaffold_core::{project, ImportAlias, Mode, PackageManager, ProjectOptions};
//!
//! let options = ProjectOptions {
//!     app_path: "/tmp/my-app".into(),
//!     mode: Mode::TypeScript,
//!     package_manager: PackageManager::Npm,
//!     eslint: true,
//!     src_dir: false,
//!     import_alias: ImportAlias::default(),
//!     install: false,
//!     git: false,
//! };
//! project::create_app(&options, &rn_scaffold_core::template_root(), "0.1.0").await?;
//! ```

pub mod error;
pub mod names;
pub mod options;
pub mod package;
pub mod project;
pub mod runtime;
pub mod templates;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

use std::path::PathBuf;

// Re-export main types for convenience
pub use error::{Result, ScaffoldError};
pub use names::ProjectNames;
pub use options::{ImportAlias, Mode, PackageManager, ProjectOptions};
pub use package::PackageJson;
pub use project::{create_app, CreatedApp};
pub use templates::{install_template, InstallTemplateArgs, TemplateManifest};

#[cfg(feature = "tui")]
pub use tui::run;

/// Environment variable overriding the template root
pub const TEMPLATE_DIR_ENV: &str = "CREATE_RN_APP_TEMPLATE_DIR";

/// Template root bundled with the workspace
pub const DEFAULT_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates");

/// Template root used when none is given on the command line
pub fn template_root() -> PathBuf {
    std::env::var_os(TEMPLATE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR))
}
