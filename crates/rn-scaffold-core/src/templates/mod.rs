//! Template materialization and post-processing
//!
//! This module provides:
//! - Path/content substitution of the template `files/` tree
//! - Copying of the per-language skeleton with rename rules
//! - Import alias rewriting and `src/` relocation passes
//! - Template manifest parsing and version compatibility checking

pub mod alias;
pub mod copier;
pub mod generator;
pub mod manifest;
pub mod relocate;
pub mod renderer;
pub mod version;

use crate::error::Result;
use crate::names;
use crate::options::{ImportAlias, Mode, PackageManager, DEFAULT_IMPORT_ALIAS};
use crate::package::{self, PackageJson};
use log::debug;
use std::path::{Path, PathBuf};

pub use copier::{copy, CopyOptions};
pub use generator::{generate_files, Substitutions};
pub use manifest::TemplateManifest;
pub use renderer::{MiniJinjaRenderer, TemplateRenderer};
pub use version::check_compatibility;

/// Inputs for [`install_template`]
#[derive(Debug, Clone)]
pub struct InstallTemplateArgs<'a> {
    pub app_name: &'a str,
    /// Project directory files are written to
    pub root: &'a Path,
    /// Template root holding `template.yaml`, `files/` and the skeletons
    pub template_root: &'a Path,
    /// Rules loaded from the template's `template.yaml`
    pub manifest: &'a TemplateManifest,
    pub mode: Mode,
    pub package_manager: PackageManager,
    pub eslint: bool,
    pub src_dir: bool,
    pub import_alias: &'a ImportAlias,
}

/// Result of a template installation
#[derive(Debug, Clone)]
pub struct InstalledTemplate {
    /// Every file written by the substitution engine and the skeleton copy
    pub files: Vec<PathBuf>,
    /// Files whose import alias was rewritten
    pub alias_rewrites: usize,
    pub package_json: PackageJson,
}

/// Materialize a template into `args.root`.
///
/// Runs the passes in order: substitution engine, skeleton copy, compiler
/// config patch, alias rewrite, `src/` relocation and finally `package.json`.
/// Each pass completes before the next starts.
pub async fn install_template(args: &InstallTemplateArgs<'_>) -> Result<InstalledTemplate> {
    let manifest = args.manifest;
    let project_names = names::derive(args.app_name);
    let substitutions = Substitutions::new(&project_names, args.src_dir);
    let renderer = MiniJinjaRenderer::new();

    let files_path = args.template_root.join(&manifest.files_dir);
    let mut files =
        generate_files(&files_path, args.root, &substitutions, &renderer).await?;

    let skeleton_path = args
        .template_root
        .join(&manifest.skeleton_dir)
        .join(args.mode.dir_name());
    let patterns = manifest.copy_patterns(args.eslint);
    let patterns: Vec<&str> = patterns.iter().map(String::as_str).collect();
    let rename = |name: &str| manifest.rename(name);
    let copy_options = CopyOptions {
        cwd: skeleton_path,
        parents: true,
        rename: Some(&rename),
    };
    files.extend(copy(&patterns, args.root, &copy_options).await?);

    alias::patch_compiler_config(args.root, args.mode, args.src_dir, args.import_alias).await?;

    let alias_rewrites = if args.import_alias.is_default() {
        0
    } else {
        alias::rewrite_alias(args.root, DEFAULT_IMPORT_ALIAS, args.import_alias.as_str()).await?
    };

    if args.src_dir {
        relocate::relocate_to_src(args.root, args.mode, manifest.entry_files_for(args.mode))
            .await?;
    }

    let package_json =
        package::assemble(args.app_name, args.mode, args.package_manager, args.eslint);
    let package_path = package::write_package_json(args.root, &package_json).await?;
    debug!("Wrote {}", package_path.display());

    Ok(InstalledTemplate {
        files,
        alias_rewrites,
        package_json,
    })
}
