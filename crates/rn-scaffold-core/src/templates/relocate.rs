//! Move entry-point files into a nested `src/` directory

use crate::error::Result;
use crate::options::Mode;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Directory holding relocated entry points
pub const SRC_DIR: &str = "src";

/// Entry-point files moved for TypeScript projects
pub const SRC_TS_FILE_NAMES: &[&str] = &["App.tsx"];

/// Entry-point files moved for JavaScript projects
pub const SRC_JS_FILE_NAMES: &[&str] = &["App.jsx"];

/// Default entry-point files for a language mode
pub fn entry_files(mode: Mode) -> &'static [&'static str] {
    match mode {
        Mode::TypeScript => SRC_TS_FILE_NAMES,
        Mode::JavaScript => SRC_JS_FILE_NAMES,
    }
}

/// Move `files` from the root of `target_dir` into `target_dir/src`.
///
/// Files that do not exist are skipped; other move failures are returned.
/// Afterwards the app test's import of `../App` is pointed at `../src/App`;
/// the app test ships with every skeleton, so a missing one is an error.
pub async fn relocate_to_src(target_dir: &Path, mode: Mode, files: &[String]) -> Result<()> {
    let src_dir = target_dir.join(SRC_DIR);
    fs::create_dir_all(&src_dir).await?;

    for file in files {
        let from = target_dir.join(file);
        let to = src_dir.join(file);
        match fs::rename(&from, &to).await {
            Ok(()) => debug!("Moved {} to {}", from.display(), to.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} not present, nothing to move", from.display());
            }
            Err(e) => return Err(e.into()),
        }
    }

    let test_file = target_dir.join("__tests__").join(mode.app_test_file());
    let content = fs::read_to_string(&test_file).await?;
    fs::write(&test_file, content.replacen("../App", "../src/App", 1)).await?;
    debug!("Pointed {} at ../src/App", test_file.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn default_files(mode: Mode) -> Vec<String> {
        entry_files(mode).iter().map(|s| s.to_string()).collect()
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_relocate_moves_entry_and_patches_test() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "App.tsx", "export default function App() {}\n");
        write(dir.path(), "__tests__/App.test.tsx", "import App from '../App';\n");

        relocate_to_src(dir.path(), Mode::TypeScript, &default_files(Mode::TypeScript))
            .await
            .unwrap();

        assert!(!dir.path().join("App.tsx").exists());
        assert!(dir.path().join("src/App.tsx").exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("__tests__/App.test.tsx")).unwrap(),
            "import App from '../src/App';\n"
        );
    }

    #[tokio::test]
    async fn test_relocate_tolerates_missing_entry() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "index.js", "// entry\n");
        write(dir.path(), "__tests__/App.test.jsx", "import App from '../App';\n");

        relocate_to_src(dir.path(), Mode::JavaScript, &default_files(Mode::JavaScript))
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("index.js")).unwrap(),
            "// entry\n"
        );
        assert!(dir.path().join("src").is_dir());
        assert!(!dir.path().join("src/App.jsx").exists());
    }

    #[tokio::test]
    async fn test_relocate_requires_app_test() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "App.tsx", "export default function App() {}\n");

        let err = relocate_to_src(dir.path(), Mode::TypeScript, &default_files(Mode::TypeScript))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            crate::error::ScaffoldError::Io(ref e) if e.kind() == ErrorKind::NotFound
        ));
        assert!(dir.path().join("src/App.tsx").exists());
    }

    #[test]
    fn test_entry_files_by_mode() {
        assert_eq!(entry_files(Mode::TypeScript), &["App.tsx"]);
        assert_eq!(entry_files(Mode::JavaScript), &["App.jsx"]);
    }
}
