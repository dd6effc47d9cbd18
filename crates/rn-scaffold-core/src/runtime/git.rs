//! Git repository initialization for new projects

use log::{debug, warn};
use std::path::Path;
use std::process::{Command, Stdio};

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from Create RN App";

/// Run a git command quietly in `dir`, returning whether it succeeded
fn git(dir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

pub fn is_git_installed() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

fn is_in_git_repository(dir: &Path) -> bool {
    git(dir, &["rev-parse", "--is-inside-work-tree"])
}

fn is_in_mercurial_repository(dir: &Path) -> bool {
    Command::new("hg")
        .arg("--cwd")
        .arg(dir)
        .arg("root")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Initialize a repository with an initial commit.
///
/// Returns false without failing when git is unavailable, the directory is
/// already under version control, or any step fails; a partially created
/// `.git` directory is removed in that case.
pub fn try_git_init(root: &Path) -> bool {
    if !is_git_installed() {
        debug!("git not installed, skipping repository initialization");
        return false;
    }
    if is_in_git_repository(root) || is_in_mercurial_repository(root) {
        debug!("{} is already under version control", root.display());
        return false;
    }

    if !git(root, &["init"]) {
        return false;
    }

    let steps: [&[&str]; 3] = [
        &["checkout", "-b", "main"],
        &["add", "-A"],
        &["commit", "-m", INITIAL_COMMIT_MESSAGE],
    ];
    if steps.iter().all(|args| git(root, args)) {
        return true;
    }

    if let Err(e) = std::fs::remove_dir_all(root.join(".git")) {
        warn!("Failed to clean up .git in {}: {}", root.display(), e);
    }
    false
}
