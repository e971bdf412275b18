//! Glyph extraction from display names.

/// Glyph shown when a display name has nothing usable in it.
pub const PLACEHOLDER: &str = "?";

/// Derive the 1–2 letter label for a display name.
///
/// The name is split on its first space; the first character of each part
/// is uppercased with full Unicode case mapping. Empty and
/// whitespace-only names yield [`PLACEHOLDER`].
pub fn extract_glyph(display_name: &str) -> String {
    if display_name.trim().is_empty() {
        return PLACEHOLDER.to_string();
    }

    display_name
        .splitn(2, ' ')
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_placeholder() {
        assert_eq!(extract_glyph(""), "?");
        assert_eq!(extract_glyph("   "), "?");
        assert_eq!(extract_glyph("\t\n"), "?");
    }

    #[test]
    fn test_first_and_last_initials() {
        assert_eq!(extract_glyph("Ada Lovelace"), "AL");
        assert_eq!(extract_glyph("grace hopper"), "GH");
    }

    #[test]
    fn test_single_word_name() {
        assert_eq!(extract_glyph("Zoë"), "Z");
        assert_eq!(extract_glyph("admin"), "A");
    }

    #[test]
    fn test_only_first_space_splits() {
        assert_eq!(extract_glyph("Johann Sebastian Bach"), "JS");
    }

    #[test]
    fn test_leading_space_drops_empty_part() {
        assert_eq!(extract_glyph(" ada"), "A");
    }

    #[test]
    fn test_unicode_uppercasing() {
        assert_eq!(extract_glyph("émile zola"), "ÉZ");
        assert_eq!(extract_glyph("ørjan"), "Ø");
        assert_eq!(extract_glyph("ßtraße"), "SS");
        assert_eq!(extract_glyph("山田 太郎"), "山太");
    }
}
