use rand::Rng;

use crate::catalogue::{ThumbnailVariant, TopicRecord, THUMBNAIL_VARIANTS};
use crate::prompt::common::{CHANNEL_NAME, FALLBACK_ACCENT};
use crate::selector::select_variant;

/// Splits a variant's color description into its primary and accent parts.
///
/// The primary is everything before the first comma. The accent is the next
/// comma-separated segment, kept verbatim including its leading space, or
/// `FALLBACK_ACCENT` when there is no such segment or it is empty.
pub fn color_split(colors: &str) -> (&str, &str) {
    let mut parts = colors.split(',');
    let primary = parts.next().unwrap_or_default();
    let accent = parts
        .next()
        .filter(|accent| !accent.is_empty())
        .unwrap_or(FALLBACK_ACCENT);
    (primary, accent)
}

/// Generate a thumbnail brief for an AI image tool using the given variant.
pub fn thumbnail_prompt(topic: &TopicRecord, variant: &ThumbnailVariant) -> String {
    let (primary_color, accent_color) = color_split(variant.colors);

    format!(
        r#"HIGH-CTR YOUTUBE THUMBNAIL for "{keyword}":

TEXT ON THUMBNAIL (2-4 words max):
"{text}"

VISUAL ELEMENTS:
- {emotion}
- {colors}
- {style}

LAYOUT:
- Text: 40% of thumbnail (top or side)
- Face/Person: 40% of thumbnail (if applicable)
- Icon/Symbol: 20% of thumbnail

DESIGN REQUIREMENTS:
- BOLD fonts (readable on mobile)
- High contrast (passes visibility test)
- No clutter - clean and focused
- Emotion: curiosity/urgency/value
- American context (diverse representation)

STYLE:
- Professional but attention-grabbing
- Not clickbait - trustworthy feel
- Consistent with "{channel}" branding

COLOR PSYCHOLOGY:
- Primary: {primary_color} (attention)
- Accent: {accent_color} (contrast)

MOBILE TEST: Text must be readable at 320px width

INSPIRATION: Educational finance channels (Graham Stephan, Andrei Jikh style but insurance-focused)"#,
        keyword = topic.primary,
        text = variant.text,
        emotion = variant.emotion,
        colors = variant.colors,
        style = variant.style,
        channel = CHANNEL_NAME,
        primary_color = primary_color,
        accent_color = accent_color,
    )
}

/// Generate a thumbnail brief with a randomly drawn built-in variant.
///
/// Returns the variant alongside the prompt so callers can record which one
/// was used.
pub fn random_thumbnail_prompt<R: Rng + ?Sized>(
    topic: &TopicRecord,
    rng: &mut R,
) -> (&'static ThumbnailVariant, String) {
    // THUMBNAIL_VARIANTS is a non-empty const.
    let variant = select_variant(THUMBNAIL_VARIANTS, rng).unwrap_or(&THUMBNAIL_VARIANTS[0]);
    (variant, thumbnail_prompt(topic, variant))
}
