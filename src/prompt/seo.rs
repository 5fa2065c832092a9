use serde::Serialize;

use crate::catalogue::TopicRecord;
use crate::prompt::common::{capitalize_first, hashtag_slug, CHANNEL_NAME, TITLE_SUFFIX};

// Appended to every tag list after the topic's own keywords.
const GENERIC_TAGS: &[&str] = &[
    "insurance explained",
    "insurance USA",
    "insurance for beginners",
    "save money insurance",
    "insurance tips",
    "insurance decoded",
    "affordable insurance",
    "insurance guide",
    "insurance 101",
];

const GENERIC_HASHTAGS: &[&str] = &[
    "#insurance",
    "#moneytips",
    "#savemoney",
    "#financetips",
    "#insurancetips",
    "#USAinsurance",
];

/// Video chapters as (timestamp, label). `{keyword}` is replaced by the topic.
const CHAPTERS: &[(&str, &str)] = &[
    ("0:00", "Hook"),
    ("0:03", "Introduction"),
    ("0:20", "What is {keyword}?"),
    ("1:30", "Why it matters"),
    ("2:45", "How it works"),
    ("4:30", "Pro tips"),
    ("5:30", "Recap & CTA"),
];

/// Search metadata for the video upload form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub hashtags: Vec<String>,
    pub chapters: Vec<String>,
}

/// Generate the title, description, tags, hashtags and chapters for a topic.
pub fn seo_metadata(topic: &TopicRecord) -> SeoMetadata {
    SeoMetadata {
        title: format!("{}{}", capitalize_first(&topic.primary), TITLE_SUFFIX),
        description: description(topic),
        tags: tags(topic),
        hashtags: hashtags(topic),
        chapters: chapters(topic),
    }
}

fn description(topic: &TopicRecord) -> String {
    // Topics with a single secondary phrase list just that one.
    let related = topic
        .secondary
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"{problem} Learn about {keyword} with this simple guide. {related} and more explained in plain English. Perfect for beginners!

⏱️ Timestamps:
0:00 - Hook
0:03 - Why {keyword} matters
0:20 - The basics explained
1:30 - How it works
4:30 - Pro tips to save money
5:30 - Recap

💰 Get the best {keyword} deals and save hundreds every year. This video covers everything you need to know about {keyword} in the USA.

Subscribe to {channel} for more simple insurance guides!

#{slug} #insurance #moneysavingtips"#,
        problem = topic.problem,
        keyword = topic.primary,
        related = related,
        channel = CHANNEL_NAME,
        slug = hashtag_slug(&topic.primary),
    )
}

fn tags(topic: &TopicRecord) -> Vec<String> {
    std::iter::once(topic.primary.clone())
        .chain(topic.secondary.iter().cloned())
        .chain(GENERIC_TAGS.iter().map(|tag| tag.to_string()))
        .collect()
}

fn hashtags(topic: &TopicRecord) -> Vec<String> {
    std::iter::once(format!("#{}", hashtag_slug(&topic.primary)))
        .chain(GENERIC_HASHTAGS.iter().map(|tag| tag.to_string()))
        .collect()
}

fn chapters(topic: &TopicRecord) -> Vec<String> {
    CHAPTERS
        .iter()
        .map(|(timestamp, label)| {
            format!("{} - {}", timestamp, label.replace("{keyword}", &topic.primary))
        })
        .collect()
}
