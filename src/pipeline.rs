use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::catalogue::{Catalogue, ThumbnailVariant, TopicRecord};
use crate::error::GenerationFailure;
use crate::prompt::{
    random_thumbnail_prompt, script_prompt, seo_metadata, thumbnail_prompt, video_prompt,
};
use crate::selector::select_topic;
use crate::TARGET_GENERATION;

/// Everything produced for one video, serialized in the shape the web client
/// reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResult {
    pub primary_keyword: String,
    pub secondary_keywords: Vec<String>,
    pub script: String,
    pub video_prompt: String,
    pub thumbnail_prompt: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub hashtags: Vec<String>,
    pub chapters: Vec<String>,
}

/// Runs every renderer for a fixed topic and thumbnail variant.
pub fn assemble(topic: &TopicRecord, variant: &ThumbnailVariant) -> RenderResult {
    render(topic, thumbnail_prompt(topic, variant))
}

fn render(topic: &TopicRecord, thumbnail: String) -> RenderResult {
    let seo = seo_metadata(topic);

    RenderResult {
        primary_keyword: topic.primary.clone(),
        secondary_keywords: topic.secondary.clone(),
        script: script_prompt(topic),
        video_prompt: video_prompt(topic),
        thumbnail_prompt: thumbnail,
        title: seo.title,
        description: seo.description,
        tags: seo.tags,
        hashtags: seo.hashtags,
        chapters: seo.chapters,
    }
}

impl Catalogue {
    /// Draws a topic and a thumbnail variant from `rng` and renders them.
    ///
    /// A catalogue is validated when built, but the drawn topic is checked
    /// again so a bad record fails the request instead of rendering blanks.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<RenderResult, GenerationFailure> {
        let topic = select_topic(self.topics(), rng)
            .ok_or_else(|| GenerationFailure::new("topic catalogue is empty"))?;
        topic.validate().map_err(|field| {
            GenerationFailure::new(format!(
                "topic {:?} has an empty `{}` field",
                topic.primary, field
            ))
        })?;

        let (variant, thumbnail) = random_thumbnail_prompt(topic, rng);
        debug!(
            target: TARGET_GENERATION,
            "Rendering topic {:?} with thumbnail variant {:?}", topic.primary, variant.text
        );

        Ok(render(topic, thumbnail))
    }

    /// Draws from this catalogue using thread-local randomness.
    pub fn generate(&self) -> Result<RenderResult, GenerationFailure> {
        self.generate_with(&mut rand::rng())
    }
}

/// Renders one random topic from the built-in catalogue.
pub fn generate() -> Result<RenderResult, GenerationFailure> {
    Catalogue::builtin().generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::THUMBNAIL_VARIANTS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_assemble_copies_renderer_output() {
        let catalogue = Catalogue::builtin();
        let topic = &catalogue.topics()[4];
        let variant = &THUMBNAIL_VARIANTS[2];
        let result = assemble(topic, variant);
        let seo = seo_metadata(topic);

        assert_eq!(result.primary_keyword, "what is a deductible in insurance");
        assert_eq!(result.secondary_keywords, topic.secondary);
        assert_eq!(result.script, script_prompt(topic));
        assert_eq!(result.video_prompt, video_prompt(topic));
        assert_eq!(result.thumbnail_prompt, thumbnail_prompt(topic, variant));
        assert_eq!(result.title, "What is a deductible in insurance - Explained in 5 Minutes");
        assert_eq!(result.description, seo.description);
        assert_eq!(result.tags, seo.tags);
        assert_eq!(result.hashtags, seo.hashtags);
        assert_eq!(result.chapters, seo.chapters);
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let catalogue = Catalogue::builtin();
        for topic in catalogue.topics() {
            for variant in THUMBNAIL_VARIANTS {
                assert_eq!(assemble(topic, variant), assemble(topic, variant));
            }
        }
    }

    #[test]
    fn test_generate_with_same_seed_is_identical() {
        let catalogue = Catalogue::builtin();
        let first = catalogue.generate_with(&mut StdRng::seed_from_u64(2024)).unwrap();
        let second = catalogue.generate_with(&mut StdRng::seed_from_u64(2024)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_with_single_topic() {
        let topic = TopicRecord::new(
            "what is a deductible in insurance",
            &["insurance deductible explained", "how deductibles work"],
            "Deductibles explained in 60 seconds. No confusing jargon.",
            "Most people sign up for insurance without understanding what a deductible is or how it affects their bills.",
        );
        let catalogue = Catalogue::new(vec![topic]).unwrap();
        let result = catalogue.generate_with(&mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(result.title, "What is a deductible in insurance - Explained in 5 Minutes");
        assert_eq!(
            &result.tags[..4],
            &[
                "what is a deductible in insurance",
                "insurance deductible explained",
                "how deductibles work",
                "insurance explained",
            ]
        );
    }

    #[test]
    fn test_generate_from_builtin() {
        let result = generate().unwrap();
        let catalogue = Catalogue::builtin();
        assert!(catalogue
            .topics()
            .iter()
            .any(|topic| topic.primary == result.primary_keyword));
        assert!(result.script.contains(&result.primary_keyword));
    }

    #[test]
    fn test_generate_with_empty_catalogue_fails() {
        let catalogue = Catalogue::unchecked(Vec::new());
        let err = catalogue
            .generate_with(&mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert_eq!(err, GenerationFailure::new("topic catalogue is empty"));
    }

    #[test]
    fn test_generate_with_malformed_topic_fails() {
        let mut topic = Catalogue::builtin().topics()[1].clone();
        topic.problem.clear();
        let catalogue = Catalogue::unchecked(vec![topic]);

        let err = catalogue
            .generate_with(&mut StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(err.reason.contains("how does health insurance work"));
        assert!(err.reason.contains("`problem`"));
    }

    #[test]
    fn test_render_result_json_keys() {
        let catalogue = Catalogue::builtin();
        let result = assemble(&catalogue.topics()[0], &THUMBNAIL_VARIANTS[0]);
        let json = serde_json::to_value(&result).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "chapters",
                "description",
                "hashtags",
                "primaryKeyword",
                "script",
                "secondaryKeywords",
                "tags",
                "thumbnailPrompt",
                "title",
                "videoPrompt",
            ]
        );
        assert_eq!(json["primaryKeyword"], "cheapest car insurance");
    }
}
