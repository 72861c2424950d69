//! Passenger name registry.

use log::trace;

use crate::trie::PrefixTrie;

/// Normalize a passenger name for display.
///
/// Trims surrounding whitespace, lowercases everything, then uppercases the
/// first character only (`"  mARY ann "` → `"Mary ann"`).  Returns `None`
/// for names that are empty after trimming.
///
/// The first character is only replaced when its uppercase form is a single
/// character; `"ßen"` stays `"ßen"` rather than becoming `"SSen"`.
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    let lower = trimmed.to_lowercase();
    let mut chars = lower.chars();
    let first = chars.next()?;
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => first,
    };
    Some(std::iter::once(head).chain(chars).collect())
}

/// Append-only, case-insensitive registry of passenger names.
#[derive(Debug, Clone, Default)]
pub struct PassengerRegistry {
    trie: PrefixTrie<char, String>,
}

impl PassengerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one passenger.
    ///
    /// Blank names are ignored.  Returns `true` if the normalized name was
    /// not registered before.
    pub fn add_passenger(&mut self, name: &str) -> bool {
        let Some(normalized) = normalize_name(name) else {
            trace!("ignoring blank passenger name {name:?}");
            return false;
        };
        let key: Vec<char> = normalized.to_lowercase().chars().collect();
        self.trie.insert(key, normalized)
    }

    /// Register every name in order.
    pub fn add_passengers<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_passenger(name.as_ref());
        }
    }

    /// All registered names whose lowercase form starts with the lowercase
    /// `prefix`, sorted ascending.  An empty prefix lists everyone.
    pub fn search_for_passengers(&self, prefix: &str) -> Vec<String> {
        let matches: Vec<String> = self
            .trie
            .collect_prefix(prefix.to_lowercase().chars())
            .into_iter()
            .cloned()
            .collect();
        trace!("search {prefix:?}: {} match(es)", matches.len());
        matches
    }

    /// [`search_for_passengers`](Self::search_for_passengers) for callers
    /// whose prefix may be absent; `None` matches nobody.
    pub fn search_opt(&self, prefix: Option<&str>) -> Vec<String> {
        prefix.map(|p| self.search_for_passengers(p)).unwrap_or_default()
    }

    /// `true` if `name` normalizes to a registered name.
    pub fn contains(&self, name: &str) -> bool {
        let Some(normalized) = normalize_name(name) else {
            return false;
        };
        self.trie
            .get(normalized.to_lowercase().chars())
            .is_some_and(|names| names.contains(&normalized))
    }

    /// Number of distinct registered names.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
