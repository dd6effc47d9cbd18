use rn_scaffold_core::templates::{install_template, InstallTemplateArgs, TemplateManifest};
use rn_scaffold_core::{ImportAlias, Mode, PackageManager, PackageJson, ScaffoldError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn bundled_templates() -> PathBuf {
    PathBuf::from(rn_scaffold_core::DEFAULT_TEMPLATE_DIR)
}

fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
}

fn read_package_json(root: &Path) -> PackageJson {
    serde_json::from_str(&read(root, "package.json")).unwrap()
}

#[tokio::test]
async fn test_typescript_project_with_src_dir_and_custom_alias() {
    let out = TempDir::new().unwrap();
    let root = out.path().join("my-cool-app");
    let template_root = bundled_templates();
    let manifest = TemplateManifest::load(&template_root).unwrap();
    let alias = ImportAlias::parse("~/*").unwrap();

    let installed = install_template(&InstallTemplateArgs {
        app_name: "my-cool-app",
        root: &root,
        template_root: &template_root,
        manifest: &manifest,
        mode: Mode::TypeScript,
        package_manager: PackageManager::Npm,
        eslint: false,
        src_dir: true,
        import_alias: &alias,
    })
    .await
    .unwrap();

    assert!(!installed.files.is_empty());

    // Substituted paths and content
    assert!(read(&root, "index.js").contains("import App from './src/App';"));
    assert!(read(&root, "app.json").contains("\"name\": \"MyCoolApp\""));
    assert!(read(&root, "ios/MyCoolApp/AppDelegate.mm").contains("@\"MyCoolApp\""));
    assert!(read(
        &root,
        "android/app/src/main/java/com/mycoolapp/MainActivity.java"
    )
    .starts_with("package com.mycoolapp;"));
    assert!(root.join("android/app/build.gradle").is_file());
    assert!(!root.join("android/app/build.gradle.template").exists());
    assert!(root.join("ios/.xcode.env").is_file());

    // Skeleton renames and lint exclusion
    assert!(root.join(".gitignore").is_file());
    assert!(root.join(".prettierrc.json").is_file());
    assert!(root.join("README.md").is_file());
    assert!(!root.join(".eslintrc.json").exists());
    assert!(!root.join("eslintrc.json").exists());

    // Compiler config and relocation
    let tsconfig = read(&root, "tsconfig.json");
    assert!(tsconfig.contains("\"~/*\": [\"./src/*\"]"));
    assert!(!tsconfig.contains("\"@/*\""));
    assert!(root.join("src/App.tsx").is_file());
    assert!(!root.join("App.tsx").exists());
    assert!(read(&root, "__tests__/App.test.tsx").contains("from '../src/App'"));

    let package_json = read_package_json(&root);
    assert_eq!(package_json, installed.package_json);
    assert_eq!(package_json.name, "my-cool-app");
    assert!(package_json.dev_dependencies.contains_key("typescript"));
    assert!(!package_json.dev_dependencies.contains_key("eslint"));
}

#[tokio::test]
async fn test_javascript_project_with_defaults() {
    let out = TempDir::new().unwrap();
    let root = out.path().join("plain-app");
    let template_root = bundled_templates();
    let manifest = TemplateManifest::load(&template_root).unwrap();
    let alias = ImportAlias::default();

    let installed = install_template(&InstallTemplateArgs {
        app_name: "plain-app",
        root: &root,
        template_root: &template_root,
        manifest: &manifest,
        mode: Mode::JavaScript,
        package_manager: PackageManager::Pnpm,
        eslint: true,
        src_dir: false,
        import_alias: &alias,
    })
    .await
    .unwrap();

    assert_eq!(installed.alias_rewrites, 0);
    assert!(read(&root, "index.js").contains("import App from './App';"));
    assert!(root.join("App.jsx").is_file());
    assert!(!root.join("src").exists());
    assert!(root.join(".eslintrc.json").is_file());
    assert!(read(&root, "jsconfig.json").contains("\"@/*\": [\"./*\"]"));
    assert!(read(&root, "__tests__/App.test.jsx").contains("from '../App'"));

    let package_json = read_package_json(&root);
    assert!(!package_json.dev_dependencies.contains_key("typescript"));
    assert!(package_json.dev_dependencies.contains_key("eslint"));
    assert!(package_json
        .dev_dependencies
        .contains_key("@react-native-community/cli-platform-android"));

    let raw = read(&root, "package.json");
    assert!(raw.ends_with('\n'));
}

#[cfg(unix)]
#[tokio::test]
async fn test_gradlew_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let out = TempDir::new().unwrap();
    let root = out.path().join("exec-app");
    let template_root = bundled_templates();
    let manifest = TemplateManifest::load(&template_root).unwrap();

    install_template(&InstallTemplateArgs {
        app_name: "exec-app",
        root: &root,
        template_root: &template_root,
        manifest: &manifest,
        mode: Mode::TypeScript,
        package_manager: PackageManager::Npm,
        eslint: true,
        src_dir: false,
        import_alias: &ImportAlias::default(),
    })
    .await
    .unwrap();

    for gradlew in ["android/gradlew", "android/gradlew.bat"] {
        let mode = std::fs::metadata(root.join(gradlew))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o775, "{}", gradlew);
    }
}

#[tokio::test]
async fn test_empty_template_fails_before_writing() {
    let template_root = TempDir::new().unwrap();
    std::fs::create_dir_all(template_root.path().join("files")).unwrap();
    let out = TempDir::new().unwrap();
    let root = out.path().join("empty-app");
    let manifest = TemplateManifest::default();

    let err = install_template(&InstallTemplateArgs {
        app_name: "empty-app",
        root: &root,
        template_root: template_root.path(),
        manifest: &manifest,
        mode: Mode::TypeScript,
        package_manager: PackageManager::Npm,
        eslint: true,
        src_dir: false,
        import_alias: &ImportAlias::default(),
    })
    .await
    .unwrap_err();

    assert!(matches!(err, ScaffoldError::EmptySource { .. }));
    assert!(!root.join("package.json").exists());
}
