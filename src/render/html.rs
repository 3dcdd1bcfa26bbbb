//! HTML renderer — attribute table with the label column colored.
//!
//! Values are inserted verbatim, without HTML escaping, so the output only
//! suits trusted data.

use crate::model::Person;
use crate::render::{ColorCode, Renderer};
use crate::title::title_from_attr_name;
use regex::Regex;
use std::sync::LazyLock;

/// Inline styles for the eight standard ANSI foreground colors.
const AVAILABLE_STYLES: [(ColorCode, &str); 8] = [
    (30, r#"style="color: black""#),
    (31, r#"style="color: red""#),
    (32, r#"style="color: green""#),
    (33, r#"style="color: yellow""#),
    (34, r#"style="color: blue""#),
    (35, r#"style="color: magenta""#),
    (36, r#"style="color: cyan""#),
    (37, r#"style="color: white""#),
];

/// Three or more ASCII whitespace characters in a row.
static RE_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\r\x0B\x0C]{3,}").unwrap());

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, person: &Person, color: ColorCode) -> String {
        let style = style_from_color_code(color);
        let html = create_html_with_style(person, style);
        sanitize_html(&html)
    }

    fn name(&self) -> &str {
        "html"
    }
}

/// Inline style attribute for a color code, if the code has one.
pub fn style_from_color_code(color: ColorCode) -> Option<&'static str> {
    AVAILABLE_STYLES
        .iter()
        .find(|(code, _)| *code == color)
        .map(|(_, style)| *style)
}

fn create_html_with_style(person: &Person, style: Option<&str>) -> String {
    format!(
        "\n      <table>\n        <th>{}Attribute</td><td>Value</td></th>\n        {}\n      </table>\n    ",
        label_cell(style),
        table_body(person, style)
    )
}

fn table_body(person: &Person, style: Option<&str>) -> String {
    person
        .attributes()
        .iter()
        .map(|(key, value)| {
            format!(
                "<tr>{}{}</td><td>{}</td></tr>",
                label_cell(style),
                title_from_attr_name(key),
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Opening tag of a first-column cell; no attribute at all without a style.
fn label_cell(style: Option<&str>) -> String {
    match style {
        Some(style) => format!("<td {}>", style),
        None => "<td>".to_string(),
    }
}

/// Collapse runs of whitespace left over from the template into single newlines.
fn sanitize_html(html: &str) -> String {
    RE_WHITESPACE_RUN.replace_all(html, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Person {
        Person::new([("first_name", "John"), ("last_name", "Deer")])
    }

    #[test]
    fn exact_markup() {
        assert_eq!(
            HtmlRenderer.render(&person(), 32),
            "\n<table>\n\
             <th><td style=\"color: green\">Attribute</td><td>Value</td></th>\n\
             <tr><td style=\"color: green\">First name</td><td>John</td></tr>\n\
             <tr><td style=\"color: green\">Last name</td><td>Deer</td></tr>\n\
             </table>\n"
        );
    }

    #[test]
    fn every_known_code_styles_every_label_cell() {
        let names = [
            "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
        ];
        for (code, name) in (30..=37).zip(names) {
            let out = HtmlRenderer.render(&person(), code);
            let style = format!("style=\"color: {}\"", name);
            assert_eq!(out.matches(&style).count(), 3, "code {code}");
            assert_eq!(out.matches("style=").count(), 3, "code {code}");
        }
    }

    #[test]
    fn unknown_code_has_no_style_attribute() {
        for code in [-1, 0, 29, 38, 90, 255, 300] {
            let out = HtmlRenderer.render(&person(), code);
            assert!(!out.contains("style="), "code {code}: {out}");
            assert!(out.contains("<th><td>Attribute</td><td>Value</td></th>"));
            assert!(out.contains("<tr><td>First name</td><td>John</td></tr>"));
        }
    }

    #[test]
    fn value_cells_are_never_styled() {
        let out = HtmlRenderer.render(&person(), 36);
        assert!(out.contains("</td><td>Value</td>"));
        assert!(out.contains("</td><td>John</td>"));
    }

    #[test]
    fn values_are_not_escaped() {
        let person = Person::new([("note", "<b>&</b>")]);
        assert!(HtmlRenderer.render(&person, 32).contains("<td><b>&</b></td>"));
    }

    #[test]
    fn whitespace_runs_inside_values_collapse_too() {
        let person = Person::new([("street", "Baker   street"), ("town", "a  b")]);
        let out = HtmlRenderer.render(&person, 32);
        assert!(out.contains("<td>Baker\nstreet</td>"));
        assert!(out.contains("<td>a  b</td>"));
    }

    #[test]
    fn empty_person_renders_header_only() {
        assert_eq!(
            HtmlRenderer.render(&Person::default(), 34),
            "\n<table>\n<th><td style=\"color: blue\">Attribute</td><td>Value</td></th>\n</table>\n"
        );
    }

    #[test]
    fn style_lookup() {
        assert_eq!(style_from_color_code(31), Some("style=\"color: red\""));
        assert_eq!(style_from_color_code(38), None);
    }
}
