//! Version comparison for CLI/template compatibility and tool versions

use anyhow::Result;
use semver::Version;

/// Compare the CLI version against the version a template declares.
/// Returns a warning message if the CLI is older than the template expects.
pub fn check_compatibility(
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = parse_version(cli_version).ok()?;
    let template_ver = parse_version(template_version).ok()?;

    if cli_ver < template_ver {
        Some(format!(
            "This template was designed for create-rn-app {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            template_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse a version string, tolerating a leading `v` and surrounding whitespace
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPGRADE: &str = "cargo install create-rn-app --force";

    #[test]
    fn test_cli_older_than_template() {
        let warning = check_compatibility("0.1.0", "0.2.0", UPGRADE);
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("0.2.0"));
    }

    #[test]
    fn test_cli_same_as_template() {
        assert!(check_compatibility("0.1.0", "0.1.0", UPGRADE).is_none());
    }

    #[test]
    fn test_cli_newer_than_template() {
        assert!(check_compatibility("0.2.0", "0.1.0", UPGRADE).is_none());
    }

    #[test]
    fn test_invalid_versions() {
        assert!(check_compatibility("invalid", "0.1.0", UPGRADE).is_none());
    }

    #[test]
    fn test_parse_version_variants() {
        assert_eq!(parse_version("v1.22.19").unwrap(), Version::new(1, 22, 19));
        assert_eq!(parse_version("10.2.4\n").unwrap(), Version::new(10, 2, 4));
        assert!(parse_version("not-a-version").is_err());
    }
}
