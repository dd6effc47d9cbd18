//! Identifier variants derived from a project name

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToUpperCamelCase};

/// Case variants of a project name used by template substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNames {
    /// PascalCase, e.g. `MyCoolApp`
    pub class_name: String,
    /// camelCase, e.g. `myCoolApp`
    pub property_name: String,
    /// SCREAMING_SNAKE_CASE, e.g. `MY_COOL_APP`
    pub constant_name: String,
    /// kebab-case, e.g. `my-cool-app`
    pub file_name: String,
}

/// Derive every case variant from a raw project name.
///
/// Words are split on non-alphanumeric characters and on case transitions.
/// Never fails; names without alphanumerics produce empty variants, which
/// name validation rejects before this point.
pub fn derive(raw_name: &str) -> ProjectNames {
    ProjectNames {
        class_name: raw_name.to_upper_camel_case(),
        property_name: raw_name.to_lower_camel_case(),
        constant_name: raw_name.to_shouty_snake_case(),
        file_name: raw_name.to_kebab_case(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_kebab_name() {
        let names = derive("my-cool-app");
        assert_eq!(
            names,
            ProjectNames {
                class_name: "MyCoolApp".to_string(),
                property_name: "myCoolApp".to_string(),
                constant_name: "MY_COOL_APP".to_string(),
                file_name: "my-cool-app".to_string(),
            }
        );
    }

    #[test]
    fn test_derive_splits_case_transitions() {
        let names = derive("myCoolApp");
        assert_eq!(names.class_name, "MyCoolApp");
        assert_eq!(names.constant_name, "MY_COOL_APP");
        assert_eq!(names.file_name, "my-cool-app");
    }

    #[test]
    fn test_derive_mixed_separators() {
        let names = derive("my_cool app");
        assert_eq!(names.class_name, "MyCoolApp");
        assert_eq!(names.property_name, "myCoolApp");
        assert_eq!(names.file_name, "my-cool-app");
    }

    #[test]
    fn test_variants_follow_casing_rules() {
        for raw in ["awesome-project", "hello_world2", "App", "rn-demo-app-2024"] {
            let names = derive(raw);
            assert!(!names.class_name.is_empty());
            assert!(!names.class_name.contains('_'));
            assert!(names.class_name.starts_with(|c: char| c.is_ascii_uppercase()));
            assert!(names.property_name.starts_with(|c: char| c.is_ascii_lowercase()));
            assert!(!names.constant_name.chars().any(|c| c.is_ascii_lowercase()));
            assert!(!names.file_name.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_non_alphanumeric_input_is_total() {
        let names = derive("---");
        assert!(names.class_name.is_empty());
        assert!(names.file_name.is_empty());
    }
}
