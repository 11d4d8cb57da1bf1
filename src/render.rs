//! Template rendering
//!
//! The template is plain text (an SVG) with literal placeholder tokens. Tokens
//! are replaced verbatim, then English weekday names are translated.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::report::Placeholders;

/// English weekday name to the name printed on the stand
pub const DAY_TRANSLATIONS: [(&str, &str); 7] = [
    ("Monday", "Понеділок"),
    ("Tuesday", "Вівторок"),
    ("Wednesday", "Середа"),
    ("Thursday", "Четвер"),
    ("Friday", "П'ятниця"),
    ("Saturday", "Субота"),
    ("Sunday", "Неділя"),
];

/// Errors that can occur while reading the template or writing the output
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to read template {}: {source}", .path.display())]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Substitutes every placeholder, then every weekday translation.
///
/// Replacement is literal and case-sensitive; every occurrence is replaced.
/// Placeholders are applied in map order.
///
/// # Example
///
/// ```
/// use weather_stand::render::{render, DAY_TRANSLATIONS};
/// use weather_stand::report::Placeholders;
///
/// let mut values = Placeholders::new();
/// values.insert("VAR_DAILY_1_DAY".to_string(), "Sunday".to_string());
///
/// let output = render("<text>VAR_DAILY_1_DAY</text>", &values, &DAY_TRANSLATIONS);
/// assert_eq!(output, "<text>Неділя</text>");
/// ```
pub fn render(template: &str, values: &Placeholders, translations: &[(&str, &str)]) -> String {
    let substituted = values
        .iter()
        .fold(template.to_string(), |output, (token, value)| {
            output.replace(token.as_str(), value)
        });

    translations
        .iter()
        .fold(substituted, |output, &(english, local)| {
            output.replace(english, local)
        })
}

/// Reads `template`, renders it and overwrites `output` with the result
pub fn render_file(
    template: &Path,
    output: &Path,
    values: &Placeholders,
) -> Result<(), RenderError> {
    let source = fs::read_to_string(template).map_err(|source| RenderError::ReadTemplate {
        path: template.to_path_buf(),
        source,
    })?;

    let rendered = render(&source, values, &DAY_TRANSLATIONS);

    fs::write(output, rendered).map_err(|source| RenderError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> Placeholders {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let values = values(&[("VAR_NOW_TEMP", "21"), ("VAR_TEMP_UNIT", "C")]);
        let output = render(
            "VAR_NOW_TEMP°VAR_TEMP_UNIT / VAR_NOW_TEMP°VAR_TEMP_UNIT",
            &values,
            &[],
        );
        assert_eq!(output, "21°C / 21°C");
    }

    #[test]
    fn test_render_is_case_sensitive() {
        let values = values(&[("VAR_NOW_TEMP", "21")]);
        assert_eq!(render("var_now_temp", &values, &[]), "var_now_temp");
    }

    #[test]
    fn test_render_translates_after_placeholders() {
        let values = values(&[("VAR_DAILY_2_DAY", "Friday")]);
        let output = render("VAR_DAILY_2_DAY, Monday", &values, &DAY_TRANSLATIONS);
        assert_eq!(output, "П'ятниця, Понеділок");
    }

    #[test]
    fn test_render_leaves_unknown_tokens() {
        let output = render("VAR_UNKNOWN", &Placeholders::new(), &DAY_TRANSLATIONS);
        assert_eq!(output, "VAR_UNKNOWN");
    }

    #[test]
    fn test_render_file_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let result = render_file(
            &dir.path().join("missing.svg"),
            &dir.path().join("out.svg"),
            &Placeholders::new(),
        );
        assert!(matches!(result, Err(RenderError::ReadTemplate { .. })));
    }

    #[test]
    fn test_render_file_overwrites_output() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.svg");
        let output = dir.path().join("out.svg");
        fs::write(&template, "<svg>VAR_LOCATION</svg>").unwrap();
        fs::write(&output, "stale content that is much longer than the result").unwrap();

        let values = values(&[("VAR_LOCATION", "Lviv, UA")]);
        render_file(&template, &output, &values).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "<svg>Lviv, UA</svg>");
    }
}
