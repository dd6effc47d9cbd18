//! create-rn-app CLI - Project scaffolding for React Native apps

use anyhow::Result;
use clap::Parser;
use rn_scaffold_core::tui::CreateArgs;
use rn_scaffold_core::{Mode, PackageManager};
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "create-rn-app")]
#[command(about = "CLI for scaffolding React Native apps")]
#[command(version)]
pub struct Args {
    /// Project directory to create
    #[arg(value_name = "PROJECT_DIRECTORY")]
    pub project_directory: Option<PathBuf>,

    /// Initialize as a TypeScript project
    #[arg(long, visible_alias = "ts", conflicts_with = "javascript")]
    pub typescript: bool,

    /// Initialize as a JavaScript project
    #[arg(long, visible_alias = "js")]
    pub javascript: bool,

    /// Initialize with ESLint config
    #[arg(long, overrides_with = "no_eslint")]
    pub eslint: bool,

    /// Initialize without ESLint config
    #[arg(long = "no-eslint", overrides_with = "eslint")]
    pub no_eslint: bool,

    /// Initialize inside a `src/` directory
    #[arg(long = "src-dir", overrides_with = "no_src_dir")]
    pub src_dir: bool,

    /// Keep entry-point files at the project root
    #[arg(long = "no-src-dir", overrides_with = "src_dir")]
    pub no_src_dir: bool,

    /// Specify import alias to use (default "@/*")
    #[arg(long = "import-alias", value_name = "ALIAS")]
    pub import_alias: Option<String>,

    /// Package manager used to install dependencies
    #[arg(long = "package-manager", value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Skip installing dependencies
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Skip git repository initialization
    #[arg(long = "skip-git")]
    pub skip_git: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Print diagnostic logs
    #[arg(short, long)]
    pub verbose: bool,
}

/// Collapse a `--flag`/`--no-flag` pair into an optional choice
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        let mode = if args.typescript {
            Some(Mode::TypeScript)
        } else if args.javascript {
            Some(Mode::JavaScript)
        } else {
            None
        };

        CreateArgs {
            project_directory: args.project_directory,
            mode,
            eslint: flag_pair(args.eslint, args.no_eslint),
            src_dir: flag_pair(args.src_dir, args.no_src_dir),
            import_alias: args.import_alias,
            package_manager: args.package_manager,
            template_dir: args.template_dir,
            skip_install: args.skip_install,
            skip_git: args.skip_git,
            yes: args.yes,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("create-rn-app {}", CLI_VERSION);

    let result = rn_scaffold_core::run(args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
