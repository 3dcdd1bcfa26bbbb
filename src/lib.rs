//! Render a person record as colored text, JSON, HTML or a debug dump.
//!
//! Each output format is a [`render::Renderer`]; a [`printer::PersonPrinter`]
//! chains several of them over the same person:
//!
//! ```
//! use person_printer::model::Person;
//! use person_printer::printer::PersonPrinter;
//!
//! let john = Person::new([("first_name", "John"), ("last_name", "Deer")]);
//! let out = PersonPrinter::create(&john, &["json", "xml"]).render(32);
//! assert_eq!(
//!     out,
//!     "{\"first_name\":\"John\",\"last_name\":\"Deer\"}\n\
//!      Person { first_name: \"John\", last_name: \"Deer\" }\n"
//! );
//! ```

pub mod model;
pub mod printer;
pub mod render;
pub mod title;
