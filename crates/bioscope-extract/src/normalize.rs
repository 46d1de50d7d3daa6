//! Field text normalization.

/// Strip boilerplate from a raw publication field.
///
/// Removes one case-insensitive leading `Abstract` or `Introduction`
/// label, one leading and one trailing straight quote (double or single),
/// then trims whitespace. `None` becomes the empty string. Total over its
/// input domain; never panics.
pub fn normalize(raw: Option<&str>) -> String {
    let mut text = match raw {
        Some(t) => t,
        None => return String::new(),
    };

    for label in ["abstract", "introduction"] {
        let bytes = text.as_bytes();
        // ASCII-prefix comparison keeps the slice on a char boundary.
        if bytes.len() >= label.len() && bytes[..label.len()].eq_ignore_ascii_case(label.as_bytes())
        {
            text = text[label.len()..].trim_start();
            break;
        }
    }

    if let Some(rest) = text.strip_prefix(['"', '\'']) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(['"', '\'']) {
        text = rest;
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        assert_eq!(normalize(None), "");
    }

    #[test]
    fn test_empty_is_empty() {
        assert_eq!(normalize(Some("")), "");
    }

    #[test]
    fn test_strips_abstract_label() {
        assert_eq!(normalize(Some("Abstract Bone loss in mice")), "Bone loss in mice");
        assert_eq!(normalize(Some("ABSTRACT bone loss")), "bone loss");
    }

    #[test]
    fn test_strips_introduction_label() {
        assert_eq!(normalize(Some("Introduction Spaceflight alters")), "Spaceflight alters");
    }

    #[test]
    fn test_strips_fused_label() {
        // The label is stripped even without a following space.
        assert_eq!(normalize(Some("AbstractMicrogravity study")), "Microgravity study");
    }

    #[test]
    fn test_strips_quotes() {
        assert_eq!(normalize(Some("\"Quoted title\"")), "Quoted title");
        assert_eq!(normalize(Some("'Quoted title'")), "Quoted title");
        assert_eq!(normalize(Some("\"Mismatched'")), "Mismatched");
    }

    #[test]
    fn test_strips_label_then_quotes() {
        assert_eq!(normalize(Some("Abstract \"bone density\"")), "bone density");
    }

    #[test]
    fn test_inner_quotes_preserved() {
        assert_eq!(
            normalize(Some("The \"weightless\" condition")),
            "The \"weightless\" condition"
        );
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize(Some("  padded  ")), "padded");
    }

    #[test]
    fn test_label_in_middle_untouched() {
        assert_eq!(
            normalize(Some("An Abstract Notion of Space")),
            "An Abstract Notion of Space"
        );
    }

    #[test]
    fn test_non_ascii_is_safe() {
        assert_eq!(normalize(Some("Étude en microgravité")), "Étude en microgravité");
    }
}
