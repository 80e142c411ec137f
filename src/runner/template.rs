//! Template rendering for task parameters and arguments
//!
//! Templates use the `${key}` syntax. Rendering is a pure function of the
//! template and the scope: keys resolve from the scope only, unresolved keys
//! render as the empty string, and templates are expanded exactly once (no
//! nested re-expansion).

use crate::error::{TemplateError, TemplateResult};
use crate::runner::Scope;
use regex::Regex;

/// Render a template against a parameter scope
pub fn render(template: &str, scope: &Scope) -> TemplateResult<String> {
    // Regex to match ${key} patterns
    let re = Regex::new(r"\$\{([^}]*)\}").unwrap();

    // An opening ${ with no closing brace is malformed, not a literal
    let mut rest = template;
    while let Some(pos) = rest.find("${") {
        let after = &rest[pos + 2..];
        match after.find('}') {
            Some(end) => rest = &after[end + 1..],
            None => {
                return Err(TemplateError::UnterminatedPlaceholder(
                    template.to_string(),
                ))
            }
        }
    }

    let rendered = re.replace_all(template, |caps: &regex::Captures| {
        scope.get(&caps[1]).cloned().unwrap_or_default()
    });

    Ok(rendered.into_owned())
}

/// Render every value in a parameter map, producing a new map
pub fn render_map(map: &Scope, scope: &Scope) -> TemplateResult<Scope> {
    let mut result = Scope::new();

    for (key, value) in map {
        result.insert(key.clone(), render(value, scope)?);
    }

    Ok(result)
}

/// Render every element of an argument list, producing a new list
pub fn render_list(list: &[String], scope: &Scope) -> TemplateResult<Vec<String>> {
    list.iter()
        .map(|s| render(s, scope))
        .collect::<TemplateResult<Vec<String>>>()
}
