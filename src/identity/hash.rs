//! Identity hashing: identity key → palette index.
//!
//! MD5 is only a string normalizer here. Keys that already look like a
//! canonical 32-digit hex identifier skip the digest entirely.

use md5::{Digest, Md5};

use crate::types::{Colour, Palette, PALETTE_SIZE};

/// Hex digits in a canonical identifier.
const CANONICAL_DIGITS: usize = 32;

/// Digits per dash-separated run in a canonical identifier.
const GROUP_LEN: usize = 4;

/// Check whether `key` is shaped like a canonical hex identifier:
/// eight runs of four lowercase hex digits, each optionally followed by
/// a dash.
pub fn is_canonical_hex(key: &str) -> bool {
    let bytes = key.as_bytes();
    let mut pos = 0;

    for _ in 0..CANONICAL_DIGITS / GROUP_LEN {
        let Some(run) = bytes.get(pos..pos + GROUP_LEN) else {
            return false;
        };
        if !run.iter().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return false;
        }
        pos += GROUP_LEN;
        if bytes.get(pos) == Some(&b'-') {
            pos += 1;
        }
    }

    pos == bytes.len()
}

/// Normalize an identity key into its 32-digit lowercase hex form.
///
/// The key is lowercased; canonical hex keys are kept (minus dashes),
/// anything else is replaced by its MD5 digest.
///
/// Lowercasing is full Unicode (`str::to_lowercase`), not ASCII-only, so
/// "ÉMILE" and "émile" share a colour. Keys with non-ASCII capitals hash
/// differently from systems that fold ASCII letters only.
pub fn normalize_identity(identity_key: &str) -> String {
    let key = identity_key.to_lowercase();
    let hash = if is_canonical_hex(&key) {
        key
    } else {
        format!("{:x}", Md5::digest(key.as_bytes()))
    };

    hash.chars().filter(char::is_ascii_hexdigit).collect()
}

/// Map an identity key to a palette index in `0..PALETTE_SIZE`.
pub fn hash_to_index(identity_key: &str) -> usize {
    hash_to_int(&normalize_identity(identity_key), PALETTE_SIZE)
}

/// Pick the background colour for an identity key.
pub fn background_colour(identity_key: &str) -> Colour {
    let palette = Palette::shared();
    let index = hash_to_index(identity_key);
    // The palette always holds PALETTE_SIZE entries.
    palette.get(index).unwrap_or(crate::types::RED)
}

/// Sum the hex digit values of `hash` and reduce modulo `maximum`.
fn hash_to_int(hash: &str, maximum: usize) -> usize {
    if maximum == 0 {
        return 0;
    }

    let total: usize = hash
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| (d % 16) as usize)
        .sum();

    total % maximum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_hex_with_dashes() {
        assert!(is_canonical_hex("1234abcd-5678-ef01-2345-6789abcdef01"));
        assert!(is_canonical_hex("1234-abcd-5678-ef01-2345-6789-abcd-ef01-"));
    }

    #[test]
    fn test_canonical_hex_plain_digest() {
        assert!(is_canonical_hex("6384e2b2184bcbf58eccf10ca7a6563c"));
    }

    #[test]
    fn test_not_canonical_hex() {
        // Same length, one non-hex digit
        assert!(!is_canonical_hex("1234abcd-5678-ef01-2345-6789abcdeg01"));
        // Dash inside a run of four
        assert!(!is_canonical_hex("12-34abcd5678ef0123456789abcdef01"));
        // Too short / too long
        assert!(!is_canonical_hex("6384e2b2184bcbf58eccf10ca7a6563"));
        assert!(!is_canonical_hex("6384e2b2184bcbf58eccf10ca7a6563c0"));
        // Uppercase is only accepted after normalization
        assert!(!is_canonical_hex("6384E2B2184BCBF58ECCF10CA7A6563C"));
        assert!(!is_canonical_hex(""));
    }

    #[test]
    fn test_normalize_digests_plain_names() {
        assert_eq!(normalize_identity("alice"), "6384e2b2184bcbf58eccf10ca7a6563c");
        assert_eq!(normalize_identity(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_normalize_keeps_canonical_keys() {
        assert_eq!(
            normalize_identity("1234ABCD-5678-EF01-2345-6789ABCDEF01"),
            "1234abcd5678ef0123456789abcdef01"
        );
    }

    #[test]
    fn test_hash_to_index_known_values() {
        assert_eq!(hash_to_index("alice"), 16);
        assert_eq!(hash_to_index("bob"), 8);
        assert_eq!(hash_to_index("admin"), 4);
        assert_eq!(hash_to_index("Zoë"), 1);
    }

    #[test]
    fn test_hash_is_case_insensitive() {
        assert_eq!(hash_to_index("Alice"), hash_to_index("alice"));
        assert_eq!(hash_to_index("ALICE"), hash_to_index("alice"));
    }

    #[test]
    fn test_canonical_key_bypasses_digest() {
        // Digit sum of 1234abcd5678ef0123456789abcdef01 is 232
        assert_eq!(hash_to_index("1234abcd-5678-ef01-2345-6789abcdef01"), 232 % 18);
    }

    #[test]
    fn test_regrouped_dashes_keep_index() {
        let grouped = hash_to_index("1234abcd-5678-ef01-2345-6789abcdef01");
        assert_eq!(hash_to_index("1234-abcd-5678-ef01-2345-6789-abcd-ef01"), grouped);
        assert_eq!(hash_to_index("1234abcd5678ef0123456789abcdef01"), grouped);
    }

    #[test]
    fn test_near_canonical_key_is_digested() {
        let key = "1234abcd-5678-ef01-2345-6789abcdeg01";
        assert_eq!(normalize_identity(key), format!("{:x}", Md5::digest(key.as_bytes())));
    }

    #[test]
    fn test_non_ascii_capitals_are_folded() {
        assert_eq!(normalize_identity("ÉMILE"), normalize_identity("émile"));
    }

    #[test]
    fn test_hash_is_order_sensitive_through_digest() {
        // Same characters, different order, different digest
        assert_ne!(normalize_identity("ab"), normalize_identity("ba"));
    }

    #[test]
    fn test_index_always_in_range() {
        let long = "x".repeat(1000);
        for key in ["", " ", "a", "group:admins", "日本語", long.as_str()] {
            assert!(hash_to_index(key) < PALETTE_SIZE);
        }
    }

    #[test]
    fn test_background_colour_for_alice() {
        assert_eq!(background_colour("alice"), Colour::rgb(121, 90, 171));
    }

    #[test]
    fn test_hash_to_int_zero_maximum() {
        assert_eq!(hash_to_int("ff", 0), 0);
    }
}
