//! Naming helpers for signals and field expressions
//!
//! Signal names must be valid Vega expression identifiers, and field names
//! are either escaped for `field` references or wrapped in a `datum[...]`
//! accessor for use inside expressions.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").unwrap());

/// Replace every non-word character with `_`.
pub fn var_name(s: &str) -> String {
    NON_WORD.replace_all(s, "_").into_owned()
}

/// Escape a field name for use as a Vega `field` string.
///
/// Dots are treated as nested access by Vega, so flattened names escape them.
pub fn replace_path_in_field(field: &str) -> String {
    field.replace('.', "\\.")
}

/// Build an expression accessor for a flattened field, e.g. `datum["a.b"]`.
pub fn flat_access_with_datum(field: &str, datum: &str) -> String {
    format!("{}[{}]", datum, quote(field))
}

fn quote(s: &str) -> String {
    // serde_json produces a valid JS double-quoted literal.
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

/// Signal rename table.
///
/// Renaming never rewrites the renamed owner; it records that `old` now
/// resolves to `new`. Lookups follow the chain until a name has no rename.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameMap {
    names: HashMap<String, String>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(&mut self, old_name: &str, new_name: &str) {
        self.names.insert(old_name.to_string(), new_name.to_string());
    }

    pub fn has(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Resolve a name through all recorded renames.
    pub fn get(&self, name: &str) -> String {
        let mut current = name;
        // Guard against cycles introduced by inconsistent renames.
        for _ in 0..=self.names.len() {
            match self.names.get(current) {
                Some(next) if next != current => current = next,
                _ => break,
            }
        }
        current.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_name() {
        assert_eq!(var_name("child_width"), "child_width");
        assert_eq!(var_name("concat 0-width"), "concat_0_width");
    }

    #[test]
    fn test_field_escaping() {
        assert_eq!(replace_path_in_field("a.b"), "a\\.b");
        assert_eq!(flat_access_with_datum("a.b", "datum"), "datum[\"a.b\"]");
        assert_eq!(
            flat_access_with_datum("say \"hi\"", "datum"),
            "datum[\"say \\\"hi\\\"\"]"
        );
    }

    #[test]
    fn test_name_map_follows_chain() {
        let mut names = NameMap::new();
        names.rename("child_a_width", "concat_0_child_width");
        names.rename("concat_0_child_width", "outer_child_width");

        assert!(names.has("child_a_width"));
        assert_eq!(names.get("child_a_width"), "outer_child_width");
        assert_eq!(names.get("unrelated"), "unrelated");
    }

    #[test]
    fn test_name_map_tolerates_cycles() {
        let mut names = NameMap::new();
        names.rename("a", "b");
        names.rename("b", "a");
        let resolved = names.get("a");
        assert!(resolved == "a" || resolved == "b");
    }
}
