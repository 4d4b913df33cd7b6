//! Component naming.

use convert_case::{Case, Casing};

/// Derive a PascalCase component identifier from a node's name.
///
/// Anything other than an ASCII letter or digit separates words. A name with
/// no usable characters falls back to `Component<id>` with the id's `:` and
/// `-` removed, and a name starting with a digit gets the same prefix.
pub fn component_name(node_name: &str, node_id: &str) -> String {
    let words: String = node_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let name = words.trim().to_case(Case::Pascal);

    if name.is_empty() {
        let id: String = node_id.chars().filter(|c| *c != ':' && *c != '-').collect();
        return format!("Component{}", id);
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("Component{}", name);
    }
    name
}
