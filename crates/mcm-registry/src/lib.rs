//! `mcm-registry` — prefix trie and passenger name registry.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`trie`]      | `PrefixTrie<K, V>`, `TrieNode<K, V>`                      |
//! | [`registry`]  | `PassengerRegistry`, `normalize_name`                     |
//!
//! The registry is append-only: names are normalized ("aLEX" → "Alex"),
//! keyed by their lowercase form, and never removed.  Searches are
//! case-insensitive on the prefix and return normalized names sorted
//! ascending.

pub mod registry;
pub mod trie;

#[cfg(test)]
mod tests;

pub use registry::{normalize_name, PassengerRegistry};
pub use trie::{PrefixTrie, TrieNode};
