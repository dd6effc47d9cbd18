//! Template content rendering

use crate::error::Result;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Renders the text of a template file against a substitution context
pub trait TemplateRenderer: Send + Sync {
    /// Render `template`, using `name` (usually the source path) in error messages
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-backed renderer.
///
/// Undefined variables are errors so a template referencing a key missing from
/// the substitution table fails instead of rendering an empty string.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Template names are file paths; `.json`/`.js`/`.xml` must not be escaped
        env.set_auto_escape_callback(|_| AutoEscape::None);
        // Keep the trailing newline of rendered files
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_named_str(name, template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;

    #[test]
    fn test_render_substitutes_values() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({"className": "MyApp", "entryApp": "./App"});

        let result = renderer
            .render("index.js", "import App from '{{ entryApp }}';\n// {{ className }}\n", &context)
            .unwrap();
        assert_eq!(result, "import App from './App';\n// MyApp\n");
    }

    #[test]
    fn test_render_does_not_escape_by_extension() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({"className": "MyCoolApp", "entryApp": "./App"});

        let json = renderer
            .render("/tpl/app.json", "\"name\": \"{{ className }}\"", &context)
            .unwrap();
        assert_eq!(json, "\"name\": \"MyCoolApp\"");

        let js = renderer
            .render("/tpl/index.js", "import App from '{{ entryApp }}';", &context)
            .unwrap();
        assert_eq!(js, "import App from './App';");

        let xml = renderer
            .render(
                "/tpl/strings.xml",
                "<string name=\"app_name\">{{ className }}</string>",
                &serde_json::json!({"className": "A&B"}),
            )
            .unwrap();
        assert_eq!(xml, "<string name=\"app_name\">A&B</string>");
    }

    #[test]
    fn test_undefined_variable_is_error() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({"className": "MyApp"});

        let result = renderer.render("app.json", "{{ missing }}", &context);
        assert!(matches!(result, Err(ScaffoldError::Render(_))));
    }

    #[test]
    fn test_malformed_expression_is_error() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({});

        let result = renderer.render("broken.txt", "{{ className ", &context);
        assert!(matches!(result, Err(ScaffoldError::Render(_))));
    }
}
