//! JSON renderer — one compact object per person.
//!
//! Keys follow the person's attribute order. The color code is presentation
//! only and never part of the exported data.

use crate::model::Person;
use crate::render::{ColorCode, Renderer};
use serde_json::Value;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, person: &Person, _color: ColorCode) -> String {
        let fields: Vec<String> = person
            .attributes()
            .iter()
            .map(|(key, value)| format!("{}:{}", Value::from(key), Value::from(value)))
            .collect();
        format!("{{{}}}\n", fields.join(","))
    }

    fn name(&self) -> &str {
        "json"
    }
}
