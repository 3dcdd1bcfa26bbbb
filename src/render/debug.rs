//! Default renderer — debug dump, also the fallback for unknown formats.

use crate::model::Person;
use crate::render::{ColorCode, Renderer};

pub struct DefaultRenderer;

impl Renderer for DefaultRenderer {
    fn render(&self, person: &Person, _color: ColorCode) -> String {
        format!("{:?}\n", person)
    }

    fn name(&self) -> &str {
        "default"
    }
}
