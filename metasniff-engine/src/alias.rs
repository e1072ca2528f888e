//! Charset label resolution with memoization
//!
//! Labels found in documents are normalized (ASCII whitespace trimmed,
//! lowercased) and looked up in the WHATWG label table that `encoding_rs`
//! carries. Answers for labels in that table are cached for the life of the
//! resolver. Labels outside the table are answered without being cached, so
//! the cache can never hold more entries than the table has labels.

use crate::charset::Charset;
use encoding_rs::Encoding;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Resolves raw charset labels to [`Charset`]s.
///
/// Safe to share between threads. Concurrent first lookups of the same label
/// compute the same value; insertion keeps whichever lands first.
#[derive(Debug, Default)]
pub struct AliasResolver {
    cache: RwLock<HashMap<String, Option<Charset>>>,
}

impl AliasResolver {
    /// Create a resolver with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide resolver used by the convenience entry points
    pub fn shared() -> Arc<AliasResolver> {
        static SHARED: OnceLock<Arc<AliasResolver>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(AliasResolver::new())))
    }

    /// Resolve a label.
    ///
    /// Returns `None` when the label is unknown or names an encoding that is
    /// not supported for decoding (`replacement`). Never fails.
    pub fn resolve(&self, label: &[u8]) -> Option<Charset> {
        let key = normalize(label)?;

        if let Some(&hit) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return hit;
        }

        // Unknown labels are not cached
        let encoding = Encoding::for_label(key.as_bytes())?;
        let resolved = Charset::from_encoding(encoding);
        log::trace!("alias cache miss: {key:?} -> {resolved:?}");

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        *cache.entry(key).or_insert(resolved)
    }

    /// Resolve a label given as a string
    pub fn resolve_str(&self, label: &str) -> Option<Charset> {
        self.resolve(label.as_bytes())
    }

    /// Number of cached labels
    pub fn cached_len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Drop every cached answer
    pub fn clear(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Trim ASCII whitespace and lowercase. Labels are ASCII, so anything that
/// is not valid UTF-8 cannot match and yields `None`.
fn normalize(label: &[u8]) -> Option<String> {
    let trimmed = label.trim_ascii();
    if trimmed.is_empty() {
        return None;
    }
    std::str::from_utf8(trimmed)
        .ok()
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelling_variants_resolve_identically() {
        let resolver = AliasResolver::new();
        for label in ["UTF-8", " utf-8 ", "utf8", "\tUnicode-1-1-UTF-8\n"] {
            assert_eq!(resolver.resolve_str(label), Some(Charset::Utf8), "{label:?}");
        }
    }

    #[test]
    fn test_latin1_aliases_map_to_windows_1252() {
        let resolver = AliasResolver::new();
        for label in ["iso-8859-1", "latin1", "ISO_8859-1:1987", "us-ascii", "cp1252"] {
            assert_eq!(
                resolver.resolve_str(label),
                Some(Charset::Windows1252),
                "{label:?}"
            );
        }
    }

    #[test]
    fn test_unsupported_and_unknown() {
        let resolver = AliasResolver::new();
        assert_eq!(resolver.resolve_str("replacement"), None);
        assert_eq!(resolver.resolve_str("iso-2022-kr"), None);
        assert_eq!(resolver.resolve_str("no-such-charset"), None);
        assert_eq!(resolver.resolve_str(""), None);
        assert_eq!(resolver.resolve_str("   "), None);
        assert_eq!(resolver.resolve(b"\xFFutf-8"), None);
    }

    #[test]
    fn test_cache_holds_only_dictionary_labels() {
        let resolver = AliasResolver::new();
        resolver.resolve_str("utf8");
        resolver.resolve_str("UTF8");
        resolver.resolve_str("iso-2022-kr");
        resolver.resolve_str("no-such-charset");
        resolver.resolve_str("another-bogus-label");

        // "utf8" and "UTF8" share a key; unknown labels are not stored
        assert_eq!(resolver.cached_len(), 2);

        resolver.clear();
        assert_eq!(resolver.cached_len(), 0);
        assert_eq!(resolver.resolve_str("utf8"), Some(Charset::Utf8));
    }

    #[test]
    fn test_cached_answer_is_stable() {
        let resolver = AliasResolver::new();
        let first = resolver.resolve_str("koi8-r");
        let second = resolver.resolve_str("KOI8-R");
        assert_eq!(first, Some(Charset::Koi8R));
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_first_lookups() {
        let resolver = Arc::new(AliasResolver::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                std::thread::spawn(move || {
                    ["shift_jis", "latin2", "gb2312", "replacement"]
                        .iter()
                        .map(|label| resolver.resolve_str(label))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                vec![
                    Some(Charset::ShiftJis),
                    Some(Charset::Iso8859_2),
                    Some(Charset::Gbk),
                    None
                ]
            );
        }
        assert_eq!(resolver.cached_len(), 4);
    }

    #[test]
    fn test_shared_resolver_is_shared() {
        let a = AliasResolver::shared();
        let b = AliasResolver::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
