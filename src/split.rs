//! Explicit/implicit property values
//!
//! Compiler components record, next to each value, whether the user authored
//! it (`explicit`) or the compiler inferred it. Merging two candidates always
//! prefers the authored one; two authored values that disagree keep the first
//! and log a warning.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::message;

/// A value tagged with whether it was explicitly specified
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explicit<T> {
    pub explicit: bool,
    pub value: T,
}

impl<T> Explicit<T> {
    pub fn new(value: T, explicit: bool) -> Self {
        Self { explicit, value }
    }

    /// A user-authored value
    pub fn explicit(value: T) -> Self {
        Self::new(value, true)
    }

    /// A compiler-inferred value
    pub fn implicit(value: T) -> Self {
        Self::new(value, false)
    }
}

/// Default tie breaker: keep the first value, warn if both were authored.
pub fn default_tie_breaker<T: Debug>(
    v1: Explicit<T>,
    v2: Explicit<T>,
    property: &str,
    property_of: &str,
) -> Explicit<T> {
    if v1.explicit && v2.explicit {
        tracing::warn!(
            "{}",
            message::merge_conflicting_property(property, property_of, &v1.value, &v2.value)
        );
    }
    v1
}

/// Merge two candidate values.
///
/// An explicit value outranks an implicit one. Equal values keep `v1`.
/// Anything else is decided by `tie_breaker`.
pub fn merge_values_with_explicit<T, F>(
    v1: Explicit<T>,
    v2: Explicit<T>,
    property: &str,
    property_of: &str,
    tie_breaker: F,
) -> Explicit<T>
where
    T: PartialEq,
    F: FnOnce(Explicit<T>, Explicit<T>, &str, &str) -> Explicit<T>,
{
    if v1.explicit && !v2.explicit {
        v1
    } else if v2.explicit && !v1.explicit {
        v2
    } else if v1.value == v2.value {
        v1
    } else {
        tie_breaker(v1, v2, property, property_of)
    }
}

/// [`merge_values_with_explicit`] with the first-wins tie breaker.
pub fn merge<T: PartialEq + Debug>(
    v1: Explicit<T>,
    v2: Explicit<T>,
    property: &str,
    property_of: &str,
) -> Explicit<T> {
    merge_values_with_explicit(v1, v2, property, property_of, default_tie_breaker)
}

/// Keyed table of explicit/implicit values.
///
/// Missing keys read back as `Explicit { explicit: false, value: None }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Split<K: Ord, V> {
    entries: BTreeMap<K, Explicit<Option<V>>>,
}

impl<K: Ord, V> Default for Split<K, V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy, V: Clone> Split<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: K, value: V, explicit: bool) {
        self.entries.insert(key, Explicit::new(Some(value), explicit));
    }

    pub fn set_with_explicit(&mut self, key: K, value: Explicit<Option<V>>) {
        self.entries.insert(key, value);
    }

    pub fn get_with_explicit(&self, key: K) -> Explicit<Option<V>> {
        self.entries
            .get(&key)
            .cloned()
            .unwrap_or(Explicit::implicit(None))
    }

    pub fn get(&self, key: K) -> Option<&V> {
        self.entries.get(&key).and_then(|e| e.value.as_ref())
    }

    pub fn is_explicit(&self, key: K) -> bool {
        self.entries.get(&key).is_some_and(|e| e.explicit)
    }

    pub fn contains_key(&self, key: K) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &Explicit<Option<V>>)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_explicit_beats_implicit() {
        let a = Explicit::explicit(10);
        let b = Explicit::implicit(20);
        assert_eq!(merge(a, b, "width", "view"), a);
        assert_eq!(merge(b, a, "width", "view"), a);
    }

    #[test]
    fn test_conflicting_explicit_keeps_first() {
        let a = Explicit::explicit("x");
        let b = Explicit::explicit("y");
        assert_eq!(merge(a, b, "title", "axis"), a);
        assert_eq!(merge(b, a, "title", "axis"), b);
    }

    #[test]
    fn test_neither_explicit_first_wins() {
        let a = Explicit::implicit(1);
        let b = Explicit::implicit(2);
        assert_eq!(merge(a, b, "p", ""), a);
    }

    #[test]
    fn test_custom_tie_breaker_can_combine() {
        let a = Explicit::implicit(3);
        let b = Explicit::implicit(5);
        let merged = merge_values_with_explicit(a, b, "p", "", |v1, v2, _, _| {
            Explicit::implicit(v1.value.max(v2.value))
        });
        assert_eq!(merged, Explicit::implicit(5));
    }

    #[test]
    fn test_split_defaults_to_implicit_none() {
        let split: Split<&str, f64> = Split::new();
        assert_eq!(split.get_with_explicit("width"), Explicit::implicit(None));
        assert_eq!(split.get("width"), None);
        assert!(!split.is_explicit("width"));
    }

    #[test]
    fn test_split_set_and_overwrite() {
        let mut split = Split::new();
        split.set("width", 200.0, true);
        assert!(split.is_explicit("width"));
        assert_eq!(split.get("width"), Some(&200.0));

        split.set_with_explicit("width", Explicit::implicit(None));
        assert!(split.contains_key("width"));
        assert_eq!(split.get("width"), None);
        assert!(!split.is_explicit("width"));
    }

    proptest! {
        #[test]
        fn prop_fold_of_equal_explicit_values_is_order_free(
            value in 1u32..2000,
            flags in proptest::collection::vec(any::<bool>(), 1..8),
        ) {
            // At least one explicit entry.
            let mut entries: Vec<Explicit<u32>> =
                flags.iter().map(|&e| Explicit::new(value, e)).collect();
            entries.push(Explicit::explicit(value));

            let forward = entries
                .iter()
                .copied()
                .reduce(|a, b| merge(a, b, "width", ""))
                .unwrap();
            let backward = entries
                .iter()
                .rev()
                .copied()
                .reduce(|a, b| merge(a, b, "width", ""))
                .unwrap();

            prop_assert_eq!(forward, Explicit::explicit(value));
            prop_assert_eq!(backward, Explicit::explicit(value));
        }
    }
}
