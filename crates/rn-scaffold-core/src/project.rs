//! Project creation: precondition checks, template installation, install and git

use crate::error::ScaffoldError;
use crate::options::ProjectOptions;
use crate::runtime;
use crate::templates::{self, InstallTemplateArgs, InstalledTemplate, TemplateManifest};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Upgrade command shown in version warnings
pub const UPGRADE_COMMAND: &str = "cargo install create-rn-app --force";

/// Entries that may already exist in a project directory
const VALID_FILES: &[&str] = &[
    ".DS_Store",
    ".git",
    ".gitattributes",
    ".gitignore",
    ".gitlab-ci.yml",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".idea",
    ".npmignore",
    ".travis.yml",
    "LICENSE",
    "Thumbs.db",
    "docs",
    "mkdocs.yml",
    "npm-debug.log",
    "yarn-debug.log",
    "yarn-error.log",
    "yarnrc.yml",
    ".yarn",
];

/// Summary of a created project
#[derive(Debug)]
pub struct CreatedApp {
    pub root: PathBuf,
    pub app_name: String,
    pub template: InstalledTemplate,
    pub dependencies_installed: bool,
    pub git_initialized: bool,
}

/// Entries in `root` that could conflict with generated files
pub fn conflicting_files(root: &Path) -> std::io::Result<Vec<String>> {
    let mut conflicts: Vec<String> = std::fs::read_dir(root)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !VALID_FILES.contains(&name.as_str()))
        // IntelliJ IDEA creates module files before the project is generated
        .filter(|name| !name.ends_with(".iml"))
        .collect();
    conflicts.sort();
    Ok(conflicts)
}

/// Whether new entries can be created in `dir`
pub fn is_writeable(dir: &Path) -> bool {
    std::fs::metadata(dir)
        .map(|m| m.is_dir() && !m.permissions().readonly())
        .unwrap_or(false)
}

/// Check the target before anything is written, creating it when missing
fn prepare_root(root: &Path) -> Result<()> {
    let parent = root.parent().unwrap_or_else(|| Path::new("."));
    if !is_writeable(parent) {
        return Err(ScaffoldError::NotWritable {
            path: parent.to_path_buf(),
        }
        .into());
    }

    std::fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory: {}", root.display()))?;

    let conflicts = conflicting_files(root)
        .with_context(|| format!("Failed to read directory: {}", root.display()))?;
    if !conflicts.is_empty() {
        return Err(ScaffoldError::DirectoryNotEmpty {
            path: root.to_path_buf(),
            conflicts,
        }
        .into());
    }

    Ok(())
}

/// Create a new app at `options.app_path` from the template at `template_root`
pub async fn create_app(
    options: &ProjectOptions,
    template_root: &Path,
    cli_version: &str,
) -> Result<CreatedApp> {
    let root = options.app_path.clone();
    let app_name = options.app_name();

    prepare_root(&root)?;

    let manifest = TemplateManifest::load(template_root)
        .with_context(|| format!("Failed to load template from {}", template_root.display()))?;
    if let Some(template_version) = &manifest.version {
        if let Some(warning) =
            templates::check_compatibility(cli_version, template_version, UPGRADE_COMMAND)
        {
            println!("{} {}", "Warning:".yellow(), warning);
        }
    }

    println!();
    println!(
        "Creating a new React Native app in {}.",
        root.display().to_string().green()
    );
    println!();
    println!("{}", format!("Using {}.", options.package_manager).bold());
    println!();
    println!("Initializing project with template: {}", manifest.name);

    let template = templates::install_template(&InstallTemplateArgs {
        app_name: &app_name,
        root: &root,
        template_root,
        manifest: &manifest,
        mode: options.mode,
        package_manager: options.package_manager,
        eslint: options.eslint,
        src_dir: options.src_dir,
        import_alias: &options.import_alias,
    })
    .await?;

    print_dependencies(&template);

    let dependencies_installed = if options.install {
        let online = options.package_manager != crate::options::PackageManager::Yarn
            || runtime::is_online().await;
        runtime::install(options.package_manager, &root, online).await?;
        true
    } else {
        false
    };

    let git_initialized = options.git && runtime::try_git_init(&root);
    if git_initialized {
        println!("Initialized a git repository.");
        println!();
    }

    println!(
        "{} Created {} at {}",
        "Success!".green(),
        app_name,
        root.display()
    );

    Ok(CreatedApp {
        root,
        app_name,
        template,
        dependencies_installed,
        git_initialized,
    })
}

fn print_dependencies(template: &InstalledTemplate) {
    println!();
    println!("Dependencies:");
    for dependency in template.package_json.dependencies.keys() {
        println!("- {}", dependency.cyan());
    }

    if !template.package_json.dev_dependencies.is_empty() {
        println!();
        println!("devDependencies:");
        for dependency in template.package_json.dev_dependencies.keys() {
            println!("- {}", dependency.cyan());
        }
    }
    println!();
}

/// Instructions printed after a successful run
pub fn next_steps(app: &CreatedApp, options: &ProjectOptions) -> Vec<String> {
    let mut steps = Vec::new();
    let current = std::env::current_dir().ok();

    if current.as_deref() != Some(app.root.as_path()) {
        let cd_path = match &current {
            Some(cwd) if cwd.join(&app.app_name) == app.root => app.app_name.clone(),
            _ => app.root.display().to_string(),
        };
        steps.push(format!("cd {}", cd_path));
    }

    let package_manager = options.package_manager;
    if !app.dependencies_installed {
        steps.push(format!("{} install", package_manager));
    }
    steps.push(format!(
        "{}    Starts the Metro bundler",
        package_manager.run_command("start")
    ));
    steps.push(format!(
        "{}  Runs the app on Android",
        package_manager.run_command("android")
    ));
    steps.push(format!(
        "{}      Runs the app on iOS",
        package_manager.run_command("ios")
    ));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_conflicting_files_ignores_known_entries() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join("LICENSE"), "MIT").unwrap();
        std::fs::write(dir.path().join("app.iml"), "").unwrap();

        assert!(conflicting_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_conflicting_files_reports_sorted() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::create_dir(dir.path().join("android")).unwrap();

        assert_eq!(
            conflicting_files(dir.path()).unwrap(),
            vec!["android".to_string(), "package.json".to_string()]
        );
    }

    #[test]
    fn test_prepare_root_rejects_conflicts() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("my-app");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("App.tsx"), "").unwrap();

        let err = prepare_root(&root).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::DirectoryNotEmpty { .. })
        ));
    }

    #[test]
    fn test_prepare_root_creates_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("fresh-app");

        prepare_root(&root).unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn test_is_writeable() {
        let dir = TempDir::new().unwrap();
        assert!(is_writeable(dir.path()));
        assert!(!is_writeable(&dir.path().join("missing")));
    }
}
