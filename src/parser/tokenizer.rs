//! Splits raw argument text into prefixed values.
//!
//! A prefix is recognised where it starts the input or follows whitespace,
//! so `t/` inside `http://x.t/y` is part of a value. Text before the first
//! recognised prefix is the preamble.

use super::prefix::Prefix;
use crate::error::{ParseError, ParseResult};
use std::collections::HashMap;

/// Tokenizer output: every value seen for each prefix, plus the preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    values: HashMap<Prefix, Vec<String>>,
    preamble: String,
}

impl ArgumentMultimap {
    /// The last value given for `prefix`, if any.
    pub fn value(&self, prefix: &Prefix) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: &Prefix) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: &Prefix) -> bool {
        self.values.contains_key(prefix)
    }

    /// Text preceding the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Fail if any of `prefixes` was given more than once.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::DuplicatePrefix` listing the repeated markers.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[&Prefix]) -> ParseResult<()> {
        let repeated: Vec<String> = prefixes
            .iter()
            .filter(|prefix| self.all_values(prefix).len() > 1)
            .map(|prefix| prefix.to_string())
            .collect();

        if repeated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefix(repeated))
        }
    }

    fn put(&mut self, prefix: Prefix, value: String) {
        self.values.entry(prefix).or_default().push(value);
    }
}

/// Tokenizes argument strings.
pub struct ArgumentTokenizer;

impl ArgumentTokenizer {
    /// Split `args` into values keyed by the given prefixes.
    ///
    /// Values are trimmed. A prefix appearing several times yields several
    /// values; a prefix that never appears has none.
    pub fn tokenize(args: &str, prefixes: &[&Prefix]) -> ArgumentMultimap {
        let positions = Self::find_prefix_positions(args, prefixes);

        let mut multimap = ArgumentMultimap::default();
        let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
        multimap.preamble = args[..preamble_end].trim().to_string();

        for (index, (start, prefix)) in positions.iter().enumerate() {
            let value_start = start + prefix.marker().len();
            let value_end = positions
                .get(index + 1)
                .map_or(args.len(), |(next, _)| *next);
            let value = args[value_start..value_end].trim().to_string();
            multimap.put(Prefix::clone(prefix), value);
        }

        tracing::trace!(
            prefixes_found = positions.len(),
            preamble = %multimap.preamble,
            "Tokenized arguments"
        );

        multimap
    }

    /// Byte offsets of every recognised prefix occurrence, in input order.
    fn find_prefix_positions<'p>(args: &str, prefixes: &[&'p Prefix]) -> Vec<(usize, &'p Prefix)> {
        let mut found: Vec<(usize, &'p Prefix)> = Vec::new();

        for prefix in prefixes {
            let marker = prefix.marker();
            if marker.is_empty() {
                continue;
            }
            for (start, _) in args.match_indices(marker) {
                let at_boundary = args[..start]
                    .chars()
                    .next_back()
                    .map_or(true, char::is_whitespace);
                if at_boundary {
                    found.push((start, *prefix));
                }
            }
        }

        // Longest marker wins when two start at the same offset.
        found.sort_by(|(a_start, a), (b_start, b)| {
            a_start
                .cmp(b_start)
                .then_with(|| b.marker().len().cmp(&a.marker().len()))
        });

        let mut positions: Vec<(usize, &'p Prefix)> = Vec::with_capacity(found.len());
        let mut consumed_to = 0;
        for (start, prefix) in found {
            if start < consumed_to {
                continue;
            }
            consumed_to = start + prefix.marker().len();
            positions.push((start, prefix));
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes() -> (Prefix, Prefix, Prefix) {
        (Prefix::new("p/"), Prefix::new("t/"), Prefix::new("sp/"))
    }

    #[test]
    fn test_tokenize_empty_args() {
        let (p, t, _) = prefixes();
        let map = ArgumentTokenizer::tokenize("  ", &[&p, &t]);
        assert_eq!(map.preamble(), "");
        assert!(!map.contains(&p));
        assert!(map.all_values(&t).is_empty());
    }

    #[test]
    fn test_tokenize_no_prefixes_is_all_preamble() {
        let (p, _, _) = prefixes();
        let map = ArgumentTokenizer::tokenize("  some random string /t tag ", &[&p]);
        assert_eq!(map.preamble(), "some random string /t tag");
        assert_eq!(map.value(&p), None);
    }

    #[test]
    fn test_tokenize_multiple_values_keep_order() {
        let (p, t, _) = prefixes();
        let map = ArgumentTokenizer::tokenize("Alice p/123 t/friend t/colleague p/456", &[&p, &t]);
        assert_eq!(map.preamble(), "Alice");
        assert_eq!(map.value(&p), Some("456"));
        assert_eq!(map.all_values(&p), &["123".to_string(), "456".to_string()]);
        assert_eq!(
            map.all_values(&t),
            &["friend".to_string(), "colleague".to_string()]
        );
    }

    #[test]
    fn test_tokenize_prefix_must_follow_whitespace() {
        let (p, t, sp) = prefixes();
        let map = ArgumentTokenizer::tokenize("p/abct/def sp/999", &[&p, &t, &sp]);
        assert_eq!(map.value(&p), Some("abct/def"));
        assert_eq!(map.value(&t), None);
        assert_eq!(map.value(&sp), Some("999"));
    }

    #[test]
    fn test_tokenize_empty_value() {
        let (_, t, _) = prefixes();
        let map = ArgumentTokenizer::tokenize("t/", &[&t]);
        assert_eq!(map.value(&t), Some(""));
    }

    #[test]
    fn test_longest_marker_wins_at_same_offset() {
        let short = Prefix::new("t/");
        let long = Prefix::new("t/x/");
        let map = ArgumentTokenizer::tokenize("t/x/value", &[&short, &long]);
        assert_eq!(map.value(&long), Some("value"));
        assert!(!map.contains(&short));
    }

    #[test]
    fn test_verify_no_duplicate_prefixes() {
        let (p, t, _) = prefixes();
        let map = ArgumentTokenizer::tokenize("p/1 p/2 t/a t/b", &[&p, &t]);
        assert!(map.verify_no_duplicate_prefixes_for(&[&t]).is_err());
        match map.verify_no_duplicate_prefixes_for(&[&p]) {
            Err(ParseError::DuplicatePrefix(markers)) => assert_eq!(markers, vec!["p/"]),
            other => panic!("Expected DuplicatePrefix, got: {:?}", other),
        }

        let map = ArgumentTokenizer::tokenize("p/1 t/a t/b", &[&p, &t]);
        assert!(map.verify_no_duplicate_prefixes_for(&[&p]).is_ok());
    }
}
