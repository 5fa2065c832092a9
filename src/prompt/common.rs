// Text shared by more than one template.
pub const CHANNEL_NAME: &str = "Insurance Decoded";

pub const TITLE_SUFFIX: &str = " - Explained in 5 Minutes";

/// Accent color used when a thumbnail variant names only one color.
pub const FALLBACK_ACCENT: &str = "white";

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns a keyword phrase into a hashtag body by dropping spaces.
///
/// Only the space character is removed; other whitespace and punctuation are
/// kept.
pub fn hashtag_slug(keyword: &str) -> String {
    keyword.replace(' ', "")
}
