//! Data model for a person record — format-agnostic.
//!
//! A person is nothing more than an ordered list of named string attributes.
//! Renderers read it; nothing writes to it after construction.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A person record with attributes kept in insertion order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Person {
    attributes: Vec<(String, String)>,
}

impl Person {
    /// Build a person from `(name, value)` pairs.
    ///
    /// A repeated name keeps the position of its first occurrence and the
    /// value of its last one.
    pub fn new<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (key, value) in attributes {
            push_or_replace(&mut pairs, key.into(), value.into());
        }
        Person { attributes: pairs }
    }

    /// Look up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes, in insertion order.
    pub fn attributes(&self) -> Attributes<'_> {
        Attributes(&self.attributes)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

fn push_or_replace(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(existing, _)| *existing == key) {
        Some(slot) => slot.1 = value,
        None => pairs.push((key, value)),
    }
}

/// Borrowed view over a person's attributes.
///
/// Its `Debug` output is a plain map (`{"title": "Mr", ...}`), which is what
/// the demo prints after rendering.
#[derive(Clone, Copy)]
pub struct Attributes<'a>(&'a [(String, String)]);

impl<'a> Attributes<'a> {
    pub fn iter(self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn values(self) -> impl Iterator<Item = &'a str> + 'a {
        self.0.iter().map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for Attributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Person");
        for (key, value) in self.attributes().iter() {
            out.field(key, &value);
        }
        out.finish()
    }
}

// Read from a flat JSON object in document order, which a plain
// `serde_json::Map` (BTreeMap-backed) would not preserve. Writing JSON is the
// job of `render::json`.
impl<'de> Deserialize<'de> for Person {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PersonVisitor)
    }
}

struct PersonVisitor;

impl<'de> Visitor<'de> for PersonVisitor {
    type Value = Person;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping attribute names to strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Person, A::Error> {
        let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            push_or_replace(&mut pairs, key, value);
        }
        Ok(Person { attributes: pairs })
    }
}
