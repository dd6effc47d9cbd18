//! Project name validation against npm naming rules

/// Java keywords, reserved because they break the generated Android package
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "continue", "for", "new", "switch", "assert", "default", "goto", "package",
    "synchronized", "boolean", "do", "if", "private", "this", "break", "double", "implements",
    "protected", "throw", "byte", "else", "import", "public", "throws", "case", "enum",
    "instanceof", "return", "transient", "catch", "extends", "int", "short", "try", "char",
    "final", "interface", "static", "void", "class", "finally", "long", "strictfp", "volatile",
    "const", "float", "native", "super", "while",
];

/// Names npm refuses outright
const BLACKLISTED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

const MAX_NAME_LENGTH: usize = 214;

fn is_reserved(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower == "react" || lower == "react-native" || JAVA_KEYWORDS.contains(&lower.as_str())
}

/// Characters allowed unescaped in a package name
fn is_url_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

fn check_url_safe(name: &str) -> bool {
    match name.strip_prefix('@').and_then(|scoped| scoped.split_once('/')) {
        Some((scope, package)) => {
            !scope.is_empty()
                && !package.is_empty()
                && scope.chars().all(is_url_safe)
                && package.chars().all(is_url_safe)
        }
        None => name.chars().all(is_url_safe),
    }
}

/// Validate a project name, returning every problem found
pub fn validate_npm_name(name: &str) -> Result<(), Vec<String>> {
    if is_reserved(name) {
        return Err(vec!["Please do not use a reserved word.".to_string()]);
    }

    let mut problems = Vec::new();

    if name.is_empty() {
        problems.push("name length must be greater than zero".to_string());
    }
    if name.starts_with('.') {
        problems.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        problems.push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        problems.push("name cannot contain leading or trailing spaces".to_string());
    }
    if BLACKLISTED_NAMES.contains(&name.to_lowercase().as_str()) {
        problems.push(format!("{} is a blacklisted name", name));
    }
    if name.len() > MAX_NAME_LENGTH {
        problems.push(format!(
            "name can no longer contain more than {} characters",
            MAX_NAME_LENGTH
        ));
    }
    if name.to_lowercase() != name {
        problems.push("name can no longer contain capital letters".to_string());
    }
    if name.chars().any(|c| matches!(c, '~' | '\'' | '!' | '(' | ')' | '*')) {
        problems.push(r#"name can no longer contain special characters ("~'!()*")"#.to_string());
    }
    if !name.is_empty() && !check_url_safe(name) {
        problems.push("name can only contain URL-friendly characters".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
