//! Multi-printer: several renderers applied to one person, in order.

use crate::model::Person;
use crate::render::{create_renderer, ColorCode, Renderer};
use std::io::{self, Write};

/// An ordered list of renderers sharing one person.
pub struct PersonPrinter<'a> {
    person: &'a Person,
    renderers: Vec<Box<dyn Renderer>>,
}

impl<'a> PersonPrinter<'a> {
    /// One renderer per requested format, in request order. Unknown names get
    /// the default renderer.
    pub fn create<S: AsRef<str>>(person: &'a Person, formats: &[S]) -> Self {
        let renderers = formats
            .iter()
            .map(|format| create_renderer(format.as_ref()))
            .collect();
        PersonPrinter::new(person, renderers)
    }

    pub fn new(person: &'a Person, renderers: Vec<Box<dyn Renderer>>) -> Self {
        PersonPrinter { person, renderers }
    }

    /// Names of the renderers that will run, in order.
    pub fn formats(&self) -> Vec<&str> {
        self.renderers.iter().map(|r| r.name()).collect()
    }

    /// Output of every renderer, concatenated in order.
    pub fn render(&self, color: ColorCode) -> String {
        self.renderers
            .iter()
            .map(|renderer| renderer.render(self.person, color))
            .collect()
    }

    /// Write every renderer's output to `out`, in order.
    pub fn print<W: Write>(&self, color: ColorCode, out: &mut W) -> io::Result<()> {
        for renderer in &self.renderers {
            out.write_all(renderer.render(self.person, color).as_bytes())?;
        }
        out.flush()
    }
}
