//! Package manager availability checks and dependency installation

use crate::options::PackageManager;
use crate::templates::version::parse_version;
use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use semver::Version;
use std::net::ToSocketAddrs;
use std::path::Path;
use std::process::{Command, Stdio};
use tokio::process::Command as TokioCommand;

/// Host resolved to decide whether the registry is reachable
const REGISTRY_HOST: &str = "registry.yarnpkg.com:443";

/// Oldest usable version per package manager
fn minimum_version(package_manager: PackageManager) -> Option<Version> {
    match package_manager {
        // yarn < 0.16 has a 'missing manifest' bug
        PackageManager::Yarn => Some(Version::new(0, 16, 0)),
        PackageManager::Bun => Some(Version::new(1, 0, 0)),
        PackageManager::Npm | PackageManager::Pnpm => None,
    }
}

/// Whether `version` satisfies the package manager's minimum
pub fn is_supported_version(package_manager: PackageManager, version: &Version) -> bool {
    minimum_version(package_manager).map_or(true, |min| *version >= min)
}

/// Get the installed package manager version, if it is usable
pub fn check_availability(package_manager: PackageManager) -> Option<Version> {
    let output = Command::new(package_manager.command())
        .arg("--version")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    let version = match parse_version(&raw) {
        Ok(v) => v,
        Err(e) => {
            debug!("Cannot parse {} version: {}", package_manager, e);
            return None;
        }
    };

    is_supported_version(package_manager, &version).then_some(version)
}

/// Whether the package registry resolves
pub async fn is_online() -> bool {
    tokio::task::spawn_blocking(|| {
        REGISTRY_HOST
            .to_socket_addrs()
            .map(|mut addrs| addrs.next().is_some())
            .unwrap_or(false)
    })
    .await
    .unwrap_or(false)
}

/// Arguments passed to the package manager to install dependencies
pub fn install_args(package_manager: PackageManager, online: bool) -> Vec<&'static str> {
    let mut args = vec!["install"];
    if package_manager == PackageManager::Yarn && !online {
        args.push("--offline");
    }
    args
}

/// Install the dependencies of the project at `root`
pub async fn install(package_manager: PackageManager, root: &Path, online: bool) -> Result<()> {
    let args = install_args(package_manager, online);
    let command = format!("{} {}", package_manager.command(), args.join(" "));

    if package_manager == PackageManager::Yarn && !online {
        println!(
            "{}",
            "You appear to be offline. Falling back to the local cache.".yellow()
        );
    }

    println!("{} {}", "Running:".dimmed(), command.yellow());

    let status = TokioCommand::new(package_manager.command())
        .args(&args)
        .current_dir(root)
        .env("ADBLOCK", "1")
        .env("DISABLE_OPENCOLLECTIVE", "1")
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .with_context(|| format!("Failed to run {}", command))?;

    if !status.success() {
        anyhow::bail!(
            "{} has failed with exit code: {}",
            command,
            status.code().unwrap_or(-1)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_versions() {
        assert!(!is_supported_version(PackageManager::Yarn, &Version::new(0, 15, 2)));
        assert!(is_supported_version(PackageManager::Yarn, &Version::new(1, 22, 19)));
        assert!(!is_supported_version(PackageManager::Bun, &Version::new(0, 8, 1)));
        assert!(is_supported_version(PackageManager::Bun, &Version::new(1, 0, 0)));
        assert!(is_supported_version(PackageManager::Npm, &Version::new(6, 0, 0)));
    }

    #[test]
    fn test_install_args() {
        assert_eq!(install_args(PackageManager::Npm, false), vec!["install"]);
        assert_eq!(install_args(PackageManager::Yarn, true), vec!["install"]);
        assert_eq!(
            install_args(PackageManager::Yarn, false),
            vec!["install", "--offline"]
        );
    }
}
