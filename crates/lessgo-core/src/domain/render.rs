//! Name substitution.
//!
//! Templates carry `{{VARIABLE}}` placeholders. Rendering is a literal
//! find-and-replace over a small variable map: there are no conditionals,
//! loops, filters or escaping rules.
//!
//! ## Built-in Variables
//!
//! | Variable       | Example  | Source                    |
//! |----------------|----------|---------------------------|
//! | `PROJECT_NAME` | "demo"   | User input                |
//! | (blueprint)    | "app"    | `Blueprint::variables()`  |

use std::collections::HashMap;

use crate::domain::{DomainError, ProjectContext};

/// Variable name bound to the project name in every render.
pub const PROJECT_NAME: &str = "PROJECT_NAME";

/// Context for template rendering.
///
/// Immutable after creation; `with_variable` consumes and returns a new value.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Context binding `PROJECT_NAME` to the project's name.
    pub fn new(project: &ProjectContext) -> Self {
        let mut variables = HashMap::new();
        variables.insert(PROJECT_NAME.to_string(), project.name().to_string());
        Self { variables }
    }

    /// Add a variable, consuming self.
    ///
    /// Later bindings override earlier ones with the same key.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing every `{{VARIABLE}}` occurrence.
    ///
    /// Fails if a placeholder-shaped token survives substitution, so no
    /// placeholder syntax can leak into generated files.
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut rendered = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            if rendered.contains(&placeholder) {
                rendered = rendered.replace(&placeholder, value);
            }
        }

        match find_placeholder(&rendered) {
            Some(placeholder) => Err(DomainError::UnresolvedPlaceholder {
                placeholder: placeholder.to_string(),
            }),
            None => Ok(rendered),
        }
    }
}

/// Number of `{{key}}` substitution points in `template`.
pub fn placeholder_count(template: &str, key: &str) -> usize {
    template.matches(&format!("{{{{{key}}}}}")).count()
}

/// First `{{IDENT}}` token in `text`, where IDENT is `[A-Z0-9_]+`.
fn find_placeholder(text: &str) -> Option<&str> {
    let mut offset = 0;
    while let Some(start) = text[offset..].find("{{") {
        let open = offset + start;
        let inner_start = open + 2;
        let Some(len) = text[inner_start..].find("}}") else {
            return None;
        };
        let inner = &text[inner_start..inner_start + len];
        let is_ident = !inner.is_empty()
            && inner
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        if is_ident {
            return Some(&text[open..inner_start + len + 2]);
        }
        offset = inner_start;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectName;

    fn ctx(name: &str) -> RenderContext {
        let project = ProjectContext::in_current_dir(ProjectName::parse(name).unwrap());
        RenderContext::new(&project)
    }

    #[test]
    fn binds_project_name() {
        assert_eq!(ctx("demo").get(PROJECT_NAME), Some("demo"));
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = ctx("demo")
            .render("{{PROJECT_NAME}} \"{{PROJECT_NAME}}/app/src\" // {{PROJECT_NAME}}")
            .unwrap();
        assert_eq!(out, "demo \"demo/app/src\" // demo");
    }

    #[test]
    fn custom_variables_are_substituted() {
        let out = ctx("demo")
            .with_variable("APP_DIR", "app")
            .render("./{{APP_DIR}}/cmd")
            .unwrap();
        assert_eq!(out, "./app/cmd");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let text = "ARG PORT=8080\nRUN go build -o ${OUTPUT_BINARY} .\n";
        assert_eq!(ctx("demo").render(text).unwrap(), text);
    }

    #[test]
    fn unbound_placeholder_is_an_error() {
        let err = ctx("demo").render("cmd = ./{{root_dir}} {{ROOT_DIR}}").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnresolvedPlaceholder {
                placeholder: "{{ROOT_DIR}}".into()
            }
        );
    }

    #[test]
    fn non_identifier_braces_are_left_alone() {
        let text = "{{ }} {{lower}} {{";
        assert_eq!(ctx("demo").render(text).unwrap(), text);
    }

    #[test]
    fn counts_substitution_points() {
        assert_eq!(placeholder_count("{{A}}x{{A}}{{B}}", "A"), 2);
        assert_eq!(placeholder_count("nothing", "A"), 0);
    }
}
