//! Unit tests for mcm-registry.

// ── Name normalization ────────────────────────────────────────────────────────

#[cfg(test)]
mod normalize {
    use crate::normalize_name;

    #[test]
    fn title_cases_first_letter_only() {
        assert_eq!(normalize_name("aLEX").as_deref(), Some("Alex"));
        assert_eq!(normalize_name("mary ANN").as_deref(), Some("Mary ann"));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize_name("  bob\t").as_deref(), Some("Bob"));
    }

    #[test]
    fn blank_is_none() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name("   \n"), None);
    }

    #[test]
    fn non_ascii() {
        assert_eq!(normalize_name("éLODIE").as_deref(), Some("Élodie"));
    }

    #[test]
    fn multi_char_uppercase_left_alone() {
        assert_eq!(normalize_name("ßen").as_deref(), Some("ßen"));
        assert_eq!(normalize_name("ŉoa").as_deref(), Some("ŉoa"));
    }
}

// ── PrefixTrie ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trie {
    use crate::PrefixTrie;

    #[test]
    fn empty_trie() {
        let t: PrefixTrie<u8, u32> = PrefixTrie::new();
        assert!(t.is_empty());
        assert!(t.collect_prefix(std::iter::empty()).is_empty());
        assert!(t.get([1u8]).is_none());
    }

    #[test]
    fn insert_and_get() {
        let mut t = PrefixTrie::new();
        assert!(t.insert("car".chars(), 1));
        assert!(t.insert("cart".chars(), 2));
        assert_eq!(t.len(), 2);
        assert!(t.get("car".chars()).unwrap().contains(&1));
        // "ca" is an interior node, not a key.
        assert!(t.get("ca".chars()).is_none());
        assert!(t.node("ca".chars()).is_some_and(|n| !n.is_end() && n.child_count() == 1));
    }

    #[test]
    fn duplicate_values_not_counted() {
        let mut t = PrefixTrie::new();
        assert!(t.insert([1u8, 2], "x"));
        assert!(!t.insert([1u8, 2], "x"));
        assert!(t.insert([1u8, 2], "y"));
        assert_eq!(t.len(), 2);
        assert_eq!(t.get([1u8, 2]).unwrap().len(), 2);
    }

    #[test]
    fn collect_prefix_sorted_and_complete() {
        let mut t = PrefixTrie::new();
        for (k, v) in [("ab", 5), ("a", 9), ("abc", 1), ("b", 3)] {
            t.insert(k.chars(), v);
        }
        assert_eq!(t.collect_prefix("a".chars()), vec![&1, &5, &9]);
        assert_eq!(t.collect_prefix("".chars()), vec![&1, &3, &5, &9]);
        assert!(t.collect_prefix("z".chars()).is_empty());
    }

    #[test]
    fn long_key_collected_from_root() {
        let mut t = PrefixTrie::new();
        let key: Vec<u8> = vec![7; 1_000];
        t.insert(key.iter().copied(), 1u8);
        assert_eq!(t.collect_prefix([7u8]), vec![&1]);
    }
}

// ── PassengerRegistry ─────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{normalize_name, PassengerRegistry};

    fn registry(names: &[&str]) -> PassengerRegistry {
        let mut r = PassengerRegistry::new();
        r.add_passengers(names);
        r
    }

    #[test]
    fn prefix_search() {
        let r = registry(&["Alex", "Bob", "Ally"]);
        assert_eq!(r.search_for_passengers("Al"), vec!["Alex", "Ally"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let r = registry(&["alex", "ALLY", "Bob"]);
        assert_eq!(r.search_for_passengers("aL"), vec!["Alex", "Ally"]);
        assert_eq!(r.search_for_passengers("B"), vec!["Bob"]);
    }

    #[test]
    fn case_variants_collapse() {
        let mut r = registry(&["alex", "ALEX", "Alex", " aLeX "]);
        assert_eq!(r.len(), 1);
        assert!(!r.add_passenger("alex"));
        assert_eq!(r.search_for_passengers("a"), vec!["Alex"]);
    }

    #[test]
    fn found_by_own_first_letter() {
        let r = registry(&["ßen", "Sam"]);
        assert_eq!(r.search_for_passengers("ß"), vec!["ßen"]);
        assert_eq!(r.search_for_passengers("s"), vec!["Sam"]);
    }

    #[test]
    fn blank_names_ignored() {
        let r = registry(&["", "   ", "\t"]);
        assert!(r.is_empty());
        assert!(r.search_for_passengers("").is_empty());
    }

    #[test]
    fn missing_prefix_is_empty() {
        let r = registry(&["Alex"]);
        assert!(r.search_for_passengers("Alexa").is_empty());
        assert!(r.search_for_passengers("x").is_empty());
    }

    #[test]
    fn empty_prefix_lists_everyone() {
        let r = registry(&["Zoe", "Alex", "Mia"]);
        assert_eq!(r.search_for_passengers(""), vec!["Alex", "Mia", "Zoe"]);
    }

    #[test]
    fn absent_prefix_matches_nobody() {
        let r = registry(&["Alex"]);
        assert!(r.search_opt(None).is_empty());
        assert_eq!(r.search_opt(Some("a")), vec!["Alex"]);
    }

    #[test]
    fn contains_uses_normalized_form() {
        let r = registry(&["mary ann"]);
        assert!(r.contains("MARY ANN"));
        assert!(!r.contains("Mary"));
        assert!(!r.contains(""));
    }

    #[test]
    fn whole_name_is_its_own_prefix() {
        let r = registry(&["Al", "Alan"]);
        assert_eq!(r.search_for_passengers("al"), vec!["Al", "Alan"]);
        assert_eq!(r.search_for_passengers("ala"), vec!["Alan"]);
    }

    #[test]
    fn matches_linear_scan() {
        let mut rng = SmallRng::seed_from_u64(5);
        let alphabet = ['a', 'b', 'C', 'd'];
        let mut names = Vec::new();
        for _ in 0..200 {
            let len = rng.gen_range(1..6);
            let name: String = (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect();
            names.push(name);
        }
        let r = registry(&names.iter().map(String::as_str).collect::<Vec<_>>());

        let mut normalized: Vec<String> = names.iter().filter_map(|n| normalize_name(n)).collect();
        normalized.sort();
        normalized.dedup();

        for prefix in ["", "a", "B", "cd", "ab", "DDD", "x"] {
            let lower = prefix.to_lowercase();
            let expected: Vec<String> = normalized
                .iter()
                .filter(|n| n.to_lowercase().starts_with(&lower))
                .cloned()
                .collect();
            assert_eq!(r.search_for_passengers(prefix), expected, "prefix {prefix:?}");
        }
    }
}
