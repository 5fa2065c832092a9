use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::CatalogueError;

/// One content subject: the search keyword plus the copy used to frame it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub primary: String,
    pub secondary: Vec<String>,
    pub hook: String,
    pub problem: String,
}

impl TopicRecord {
    pub fn new(primary: &str, secondary: &[&str], hook: &str, problem: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.iter().map(|s| s.to_string()).collect(),
            hook: hook.to_string(),
            problem: problem.to_string(),
        }
    }

    /// Checks that every field is populated.
    ///
    /// # Returns
    /// - `Err(field)` naming the first empty field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.primary.trim().is_empty() {
            return Err("primary");
        }
        if self.secondary.is_empty() || self.secondary.iter().any(|s| s.trim().is_empty()) {
            return Err("secondary");
        }
        if self.hook.trim().is_empty() {
            return Err("hook");
        }
        if self.problem.trim().is_empty() {
            return Err("problem");
        }
        Ok(())
    }
}

/// One visual styling option for the thumbnail prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThumbnailVariant {
    pub text: &'static str,
    pub emotion: &'static str,
    pub colors: &'static str,
    pub style: &'static str,
}

pub const THUMBNAIL_VARIANTS: &[ThumbnailVariant] = &[
    ThumbnailVariant {
        text: "SAVE $$$",
        emotion: "excited person pointing",
        colors: "bright yellow background, green accents",
        style: "Bold white text with black outline, money symbols",
    },
    ThumbnailVariant {
        text: "TOO EASY",
        emotion: "person with satisfied smile",
        colors: "blue gradient background",
        style: "Large bold text, checkmark icon",
    },
    ThumbnailVariant {
        text: "STOP PAYING",
        emotion: "shocked face",
        colors: "red and white contrast",
        style: "Warning style, hand gesture",
    },
    ThumbnailVariant {
        text: "WATCH THIS",
        emotion: "person making eye contact",
        colors: "orange and dark blue",
        style: "Arrow pointing to text",
    },
];

// Insurance keywords for a USA audience.
static BUILTIN: Lazy<Catalogue> = Lazy::new(|| Catalogue {
    topics: vec![
        TopicRecord::new(
            "cheapest car insurance",
            &[
                "affordable auto insurance",
                "low cost car insurance",
                "budget car insurance",
                "save money car insurance",
                "car insurance deals USA",
            ],
            "Still paying $200+ for car insurance? You're getting ripped off.",
            "Most Americans overpay for car insurance because they do not know these simple tricks.",
        ),
        TopicRecord::new(
            "how does health insurance work",
            &[
                "health insurance explained",
                "understanding health insurance",
                "health insurance basics",
                "beginner health insurance",
                "health insurance USA",
            ],
            "Health insurance confusing? This 5-minute guide makes it crystal clear.",
            "Health insurance feels like a maze of deductibles, copays, and premiums that nobody explains.",
        ),
        TopicRecord::new(
            "life insurance for beginners",
            &[
                "life insurance explained",
                "do I need life insurance",
                "life insurance basics",
                "life insurance USA",
                "term vs whole life",
            ],
            "Life insurance sounds scary. But it is actually super simple.",
            "Most people avoid life insurance because they think it is complicated or expensive.",
        ),
        TopicRecord::new(
            "insurance for low income families",
            &[
                "affordable insurance",
                "low income health insurance",
                "medicaid explained",
                "government insurance help",
                "free insurance USA",
            ],
            "Low income? Here is how to get insurance for almost free.",
            "Many families do not know about affordable insurance programs designed specifically for them.",
        ),
        TopicRecord::new(
            "what is a deductible in insurance",
            &[
                "insurance deductible explained",
                "how deductibles work",
                "understanding deductibles",
                "insurance terms explained",
                "deductible vs premium",
            ],
            "Deductibles explained in 60 seconds. No confusing jargon.",
            "Most people sign up for insurance without understanding what a deductible is or how it affects their bills.",
        ),
    ],
});

/// An immutable, validated list of topics to draw from.
#[derive(Debug, Clone)]
pub struct Catalogue {
    topics: Vec<TopicRecord>,
}

impl Catalogue {
    /// Builds a catalogue, rejecting an empty list or any incomplete record.
    pub fn new(topics: Vec<TopicRecord>) -> Result<Self, CatalogueError> {
        if topics.is_empty() {
            return Err(CatalogueError::Empty);
        }
        for (index, topic) in topics.iter().enumerate() {
            topic
                .validate()
                .map_err(|field| CatalogueError::InvalidTopic { index, field })?;
        }
        Ok(Self { topics })
    }

    /// Skips validation so tests can reach the runtime checks in generation.
    #[cfg(test)]
    pub(crate) fn unchecked(topics: Vec<TopicRecord>) -> Self {
        Self { topics }
    }

    /// The catalogue compiled into the binary, built once per process.
    pub fn builtin() -> &'static Catalogue {
        &BUILTIN
    }

    /// Loads a JSON array of topic records from disk.
    ///
    /// # Arguments
    /// - `path`: location of the JSON file.
    ///
    /// # Returns
    /// - A validated catalogue, or the reason the file could not be used.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let topics: Vec<TopicRecord> =
            serde_json::from_str(&data).map_err(|source| CatalogueError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalogue = Self::new(topics)?;
        info!(
            "Loaded {} topics from {}",
            catalogue.len(),
            path.display()
        );
        Ok(catalogue)
    }

    pub fn topics(&self) -> &[TopicRecord] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
