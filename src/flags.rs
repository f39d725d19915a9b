//! Static nationality → flag glyph lookup.
//!
//! Matching is case-insensitive on the trimmed nationality string. A miss is
//! not an error; the page simply renders the nationality without a glyph.

/// Display names (uppercase) paired with their flag emoji.
const FLAGS: &[(&str, &str)] = &[
    ("AUSTRALIA", "\u{1F1E6}\u{1F1FA}"),
    ("AUSTRIA", "\u{1F1E6}\u{1F1F9}"),
    ("BELGIUM", "\u{1F1E7}\u{1F1EA}"),
    ("BRAZIL", "\u{1F1E7}\u{1F1F7}"),
    ("CANADA", "\u{1F1E8}\u{1F1E6}"),
    ("CHINA", "\u{1F1E8}\u{1F1F3}"),
    ("DENMARK", "\u{1F1E9}\u{1F1F0}"),
    ("EGYPT", "\u{1F1EA}\u{1F1EC}"),
    ("FINLAND", "\u{1F1EB}\u{1F1EE}"),
    ("FRANCE", "\u{1F1EB}\u{1F1F7}"),
    ("GERMANY", "\u{1F1E9}\u{1F1EA}"),
    ("GREECE", "\u{1F1EC}\u{1F1F7}"),
    ("INDIA", "\u{1F1EE}\u{1F1F3}"),
    ("INDONESIA", "\u{1F1EE}\u{1F1E9}"),
    ("IRELAND", "\u{1F1EE}\u{1F1EA}"),
    ("ITALY", "\u{1F1EE}\u{1F1F9}"),
    ("JAPAN", "\u{1F1EF}\u{1F1F5}"),
    ("KENYA", "\u{1F1F0}\u{1F1EA}"),
    ("MEXICO", "\u{1F1F2}\u{1F1FD}"),
    ("NETHERLANDS", "\u{1F1F3}\u{1F1F1}"),
    ("NEW ZEALAND", "\u{1F1F3}\u{1F1FF}"),
    ("NIGERIA", "\u{1F1F3}\u{1F1EC}"),
    ("NORWAY", "\u{1F1F3}\u{1F1F4}"),
    ("PHILIPPINES", "\u{1F1F5}\u{1F1ED}"),
    ("POLAND", "\u{1F1F5}\u{1F1F1}"),
    ("PORTUGAL", "\u{1F1F5}\u{1F1F9}"),
    ("SINGAPORE", "\u{1F1F8}\u{1F1EC}"),
    ("SOUTH AFRICA", "\u{1F1FF}\u{1F1E6}"),
    ("SOUTH KOREA", "\u{1F1F0}\u{1F1F7}"),
    ("SPAIN", "\u{1F1EA}\u{1F1F8}"),
    ("SWEDEN", "\u{1F1F8}\u{1F1EA}"),
    ("SWITZERLAND", "\u{1F1E8}\u{1F1ED}"),
    ("THAILAND", "\u{1F1F9}\u{1F1ED}"),
    ("TURKEY", "\u{1F1F9}\u{1F1F7}"),
    ("UNITED KINGDOM", "\u{1F1EC}\u{1F1E7}"),
    ("UNITED STATES", "\u{1F1FA}\u{1F1F8}"),
    ("VIETNAM", "\u{1F1FB}\u{1F1F3}"),
];

/// Looks up the flag glyph for a nationality, if the table knows it.
pub fn flag_for(nationality: &str) -> Option<&'static str> {
    let wanted = nationality.trim().to_uppercase();
    FLAGS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, glyph)| *glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_nationality_has_flag() {
        assert_eq!(flag_for("FRANCE"), Some("\u{1F1EB}\u{1F1F7}"));
        assert_eq!(flag_for("Japan"), Some("\u{1F1EF}\u{1F1F5}"));
        assert_eq!(flag_for("  united kingdom  "), Some("\u{1F1EC}\u{1F1E7}"));
    }

    #[test]
    fn test_unknown_nationality_is_not_an_error() {
        assert_eq!(flag_for("ATLANTIS"), None);
        assert_eq!(flag_for(""), None);
    }
}
