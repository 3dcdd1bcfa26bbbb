//! Renderer module — trait-based format dispatch.

pub mod debug;
pub mod html;
pub mod json;
pub mod text;

use crate::model::Person;

/// ANSI foreground color code (30–37 are the conventional ones).
///
/// Any integer is accepted; codes without an HTML style render unstyled.
pub type ColorCode = i32;

/// Trait for rendering a Person into a specific output format.
///
/// The returned string is exactly what ends up on stdout, trailing newline
/// included.
pub trait Renderer {
    fn render(&self, person: &Person, color: ColorCode) -> String;
    fn name(&self) -> &str;
}

/// Create a renderer for the given format name.
///
/// Never fails: `default` and every name that is not `text`, `json` or `html`
/// get the debug renderer.
pub fn create_renderer(format: &str) -> Box<dyn Renderer> {
    match format {
        "text" => Box::new(text::TextRenderer),
        "json" => Box::new(json::JsonRenderer),
        "html" => Box::new(html::HtmlRenderer),
        _ => Box::new(debug::DefaultRenderer),
    }
}
