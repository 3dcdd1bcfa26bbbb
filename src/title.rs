//! Human-readable labels for attribute names.

/// Turn an attribute name like `house_number` into a label like `House number`.
///
/// Underscores become spaces and only the very first character is uppercased;
/// this is deliberately not title case (`last_name` → `Last name`).
pub fn title_from_attr_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
