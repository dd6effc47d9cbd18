//! Charm-style CLI prompts using cliclack

use crate::options::{ImportAlias, Mode, PackageManager, ProjectOptions, DEFAULT_IMPORT_ALIAS};
use crate::project::{self, CreatedApp};
use crate::runtime;
use crate::validate::validate_npm_name;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_PROJECT_NAME: &str = "my-app";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to create
    pub project_directory: Option<PathBuf>,

    /// Language mode, prompted when absent
    pub mode: Option<Mode>,

    pub eslint: Option<bool>,

    /// Place entry-point files under `src/`
    pub src_dir: Option<bool>,

    pub import_alias: Option<String>,

    /// Package manager, detected from the invoking tool when absent
    pub package_manager: Option<PackageManager>,

    /// Template root to use instead of the bundled templates
    pub template_dir: Option<PathBuf>,

    pub skip_install: bool,

    pub skip_git: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("create-rn-app")?;

    // Step 1: Resolve every option before anything touches the disk
    let options = resolve_options(&args)?;

    // Step 2: Make sure the package manager can be used
    if options.install {
        check_package_manager(options.package_manager)?;
    }

    let template_root = args
        .template_dir
        .clone()
        .unwrap_or_else(crate::template_root);
    if args.template_dir.is_some() {
        cliclack::log::info(format!(
            "Using local templates from {}",
            template_root.display()
        ))?;
    }

    // Step 3: Create project
    let app = project::create_app(&options, &template_root, cli_version).await?;

    // Step 4: Show next steps
    print_next_steps(&app, &options)?;

    Ok(())
}

fn resolve_options(args: &CreateArgs) -> Result<ProjectOptions> {
    let app_path = select_directory(args)?;

    let mode = match args.mode {
        Some(mode) => mode,
        None if args.yes => Mode::TypeScript,
        None => {
            let typescript: bool =
                cliclack::confirm("Would you like to use TypeScript with this project?")
                    .initial_value(true)
                    .interact()?;
            if typescript {
                Mode::TypeScript
            } else {
                Mode::JavaScript
            }
        }
    };

    let eslint = confirm_flag(
        args.eslint,
        args.yes,
        "Would you like to use ESLint with this project?",
        true,
    )?;

    let src_dir = confirm_flag(
        args.src_dir,
        args.yes,
        "Would you like to use `src/` directory with this project?",
        false,
    )?;

    let import_alias = select_import_alias(args)?;
    let package_manager = select_package_manager(args)?;

    let options = ProjectOptions {
        app_path,
        mode,
        package_manager,
        eslint,
        src_dir,
        import_alias,
        install: !args.skip_install,
        git: !args.skip_git,
    };

    cliclack::log::success(format!(
        "{} project{}{} using {}",
        options.mode.display_name(),
        if options.eslint { ", ESLint" } else { "" },
        if options.src_dir { ", src/ directory" } else { "" },
        options.package_manager
    ))?;

    Ok(options)
}

fn confirm_flag(flag: Option<bool>, yes: bool, prompt: &str, default: bool) -> Result<bool> {
    match flag {
        Some(value) => Ok(value),
        None if yes => Ok(default),
        None => Ok(cliclack::confirm(prompt).initial_value(default).interact()?),
    }
}

/// Resolve a user supplied path against the current directory
fn absolute_path(cwd: &Path, input: &Path) -> PathBuf {
    if input.is_absolute() {
        input.to_path_buf()
    } else {
        cwd.join(input)
    }
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.project_directory {
        Some(dir) => absolute_path(&current_dir, dir),
        None if args.yes => current_dir.join(DEFAULT_PROJECT_NAME),
        None => {
            let input: String = cliclack::input("What is your project named?")
                .placeholder(DEFAULT_PROJECT_NAME)
                .default_input(DEFAULT_PROJECT_NAME)
                .validate(|input: &String| {
                    let name = Path::new(input.trim())
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    validate_npm_name(&name)
                        .map_err(|problems| format!("Invalid project name: {}", problems[0]))
                })
                .interact()?;
            absolute_path(&current_dir, Path::new(input.trim()))
        }
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Err(problems) = validate_npm_name(&name) {
        for problem in &problems {
            cliclack::log::error(format!("* {}", problem))?;
        }
        anyhow::bail!(
            "Could not create a project called \"{}\" because of npm naming restrictions",
            name
        );
    }

    cliclack::log::info(format!("Using directory: {}", path.display()))?;
    Ok(path)
}

fn select_import_alias(args: &CreateArgs) -> Result<ImportAlias> {
    if let Some(alias) = &args.import_alias {
        return Ok(ImportAlias::parse(alias)?);
    }
    if args.yes {
        return Ok(ImportAlias::default());
    }

    let customize: bool = cliclack::confirm(format!(
        "Would you like to customize the default import alias ({})?",
        DEFAULT_IMPORT_ALIAS
    ))
    .initial_value(false)
    .interact()?;
    if !customize {
        return Ok(ImportAlias::default());
    }

    let input: String = cliclack::input("What import alias would you like configured?")
        .placeholder(DEFAULT_IMPORT_ALIAS)
        .default_input(DEFAULT_IMPORT_ALIAS)
        .validate(|input: &String| {
            ImportAlias::parse(input.trim())
                .map(|_| ())
                .map_err(|_| "Import alias must follow the pattern <prefix>/*".to_string())
        })
        .interact()?;

    Ok(ImportAlias::parse(input.trim())?)
}

fn select_package_manager(args: &CreateArgs) -> Result<PackageManager> {
    let detected = PackageManager::detect();
    match args.package_manager {
        Some(package_manager) => Ok(package_manager),
        None if args.yes => Ok(detected),
        None => {
            let mut select = cliclack::select("Which package manager would you like to use?");
            for package_manager in PackageManager::ALL {
                let hint = if package_manager == detected {
                    "detected"
                } else {
                    ""
                };
                select = select.item(package_manager, package_manager.command(), hint);
            }
            Ok(select.initial_value(detected).interact()?)
        }
    }
}

fn check_package_manager(package_manager: PackageManager) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Checking {}...", package_manager));

    match runtime::check_availability(package_manager) {
        Some(version) => {
            spinner.stop(format!("Detected {} ({})", package_manager, version));
            Ok(())
        }
        None => {
            spinner.stop(format!("{} is unavailable", package_manager));
            anyhow::bail!(
                "Could not use {}. Install a supported version or pick another package manager with --package-manager.",
                package_manager
            );
        }
    }
}

fn print_next_steps(app: &CreatedApp, options: &ProjectOptions) -> Result<()> {
    let steps = project::next_steps(app, options);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
