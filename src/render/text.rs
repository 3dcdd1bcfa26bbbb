//! Text renderer — bordered block with ANSI-colored labels.

use crate::model::Person;
use crate::render::{ColorCode, Renderer};
use crate::title::title_from_attr_name;

/// Terminal tab width; the border leaves room for two of them.
const TAB_SIZE: usize = 8;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, person: &Person, color: ColorCode) -> String {
        let border = text_border(person);
        let mut out = String::new();

        out.push_str(&border);
        out.push('\n');
        for (key, value) in person.attributes().iter() {
            out.push_str(&format!(
                "\x1b[{}m{}:\x1b[0m\t{}\n",
                color,
                title_from_attr_name(key),
                value
            ));
        }
        out.push_str(&border);
        out.push('\n');
        out
    }

    fn name(&self) -> &str {
        "text"
    }
}

fn text_border(person: &Person) -> String {
    "=".repeat(longest_value_len(person) + TAB_SIZE * 2)
}

/// Length in characters of the longest attribute value, 0 for an empty person.
fn longest_value_len(person: &Person) -> usize {
    person
        .attributes()
        .values()
        .map(|value| value.chars().count())
        .max()
        .unwrap_or(0)
}
