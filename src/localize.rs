//! Localized label lookup.
//!
//! The widget never hard-codes user-facing text. Every label goes through a
//! [`Translator`], so hosts with their own translation pipeline can plug it
//! in at the seam. The bundled [`StaticTranslator`] ships English terms and
//! resolves its language once, at construction.

/// Message key for the previous-page arrow label.
pub const KEY_PREVIOUS_PAGE: &str = "pagination_previous_page";
/// Message key for the next-page arrow label.
pub const KEY_NEXT_PAGE: &str = "pagination_next_page";
/// Message key for the page-number input field label.
pub const KEY_PAGE_NUMBER_LABEL: &str = "pagination_page_number_label";
/// Message key for the "out of N pages" indicator. Takes a `max` argument.
pub const KEY_PAGE_MAX_INDICATOR: &str = "pagination_page_max_indicator";
/// Message key for one items-per-page option. Takes a `count` argument.
pub const KEY_ITEMS_PER_PAGE_OPTION: &str = "pagination_items_per_page_option";

/// Resolves a message key plus named arguments to display text.
///
/// Implementations must fall back to returning the key itself for terms
/// they do not know, so a missing translation degrades to something
/// greppable instead of a panic or an empty label.
pub trait Translator: Send + Sync {
    fn localize(&self, key: &str, args: &[(&str, String)]) -> String;
}

const EN_MESSAGES: &[(&str, &str)] = &[
    (KEY_PREVIOUS_PAGE, "To previous page"),
    (KEY_NEXT_PAGE, "To next page"),
    (KEY_PAGE_NUMBER_LABEL, "Page number"),
    // U+2215 division slash, matching the glyph used by the web control.
    (KEY_PAGE_MAX_INDICATOR, "\u{2215} {max}"),
    (KEY_ITEMS_PER_PAGE_OPTION, "{count} per page"),
];

fn bundle_for(tag: &str) -> Option<&'static [(&'static str, &'static str)]> {
    let primary = tag.split(['-', '_']).next().unwrap_or(tag);
    match primary.to_ascii_lowercase().as_str() {
        "en" => Some(EN_MESSAGES),
        _ => None,
    }
}

fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut text = template.to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{}}}", name), value);
    }
    text
}

/// Table-backed translator with compiled-in message bundles.
#[derive(Debug, Clone)]
pub struct StaticTranslator {
    messages: &'static [(&'static str, &'static str)],
}

impl StaticTranslator {
    /// English-language translator.
    pub fn new() -> Self {
        Self {
            messages: EN_MESSAGES,
        }
    }

    /// Picks the first locale in `preferred` with a bundled language,
    /// falling back to English. Matching is on the primary subtag, so
    /// "en-GB" and "en_US" both resolve to the English bundle.
    pub fn for_locales<'a>(preferred: impl IntoIterator<Item = &'a str>) -> Self {
        for tag in preferred {
            if let Some(messages) = bundle_for(tag) {
                return Self { messages };
            }
        }
        Self::new()
    }
}

impl Default for StaticTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for StaticTranslator {
    fn localize(&self, key: &str, args: &[(&str, String)]) -> String {
        match self.messages.iter().find(|(k, _)| *k == key) {
            Some((_, template)) => interpolate(template, args),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localizes_plain_terms() {
        let translator = StaticTranslator::new();
        assert_eq!(translator.localize(KEY_PREVIOUS_PAGE, &[]), "To previous page");
        assert_eq!(translator.localize(KEY_NEXT_PAGE, &[]), "To next page");
        assert_eq!(translator.localize(KEY_PAGE_NUMBER_LABEL, &[]), "Page number");
    }

    #[test]
    fn test_interpolates_named_arguments() {
        let translator = StaticTranslator::new();
        assert_eq!(
            translator.localize(KEY_PAGE_MAX_INDICATOR, &[("max", "5".to_string())]),
            "\u{2215} 5"
        );
        assert_eq!(
            translator.localize(KEY_ITEMS_PER_PAGE_OPTION, &[("count", "20".to_string())]),
            "20 per page"
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let translator = StaticTranslator::new();
        assert_eq!(translator.localize("pagination_bogus", &[]), "pagination_bogus");
    }

    #[test]
    fn test_locale_resolution() {
        let translator = StaticTranslator::for_locales(["fr-CA", "en-GB"]);
        assert_eq!(translator.localize(KEY_NEXT_PAGE, &[]), "To next page");

        // No bundle for the requested language falls back to English.
        let translator = StaticTranslator::for_locales(["fr-CA"]);
        assert_eq!(translator.localize(KEY_NEXT_PAGE, &[]), "To next page");

        let translator = StaticTranslator::for_locales(["en_US"]);
        assert_eq!(translator.localize(KEY_PREVIOUS_PAGE, &[]), "To previous page");
    }

    #[test]
    fn test_unmatched_arguments_are_ignored() {
        let translator = StaticTranslator::new();
        assert_eq!(
            translator.localize(
                KEY_ITEMS_PER_PAGE_OPTION,
                &[("count", "10".to_string()), ("unused", "x".to_string())]
            ),
            "10 per page"
        );
    }
}
