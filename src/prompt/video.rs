use crate::catalogue::TopicRecord;
use crate::prompt::common::CHANNEL_NAME;

/// Generate the production brief handed to an AI video tool.
pub fn video_prompt(topic: &TopicRecord) -> String {
    format!(
        r#"Create a professional, engaging YouTube video for "{channel}" channel:

VIDEO STYLE:
- Clean, modern motion graphics style
- Warm, trustworthy color palette (blues, whites, orange accents)
- Fast-paced editing with smooth transitions
- Text animations for key points
- Stock footage of diverse Americans (families, workers, young adults)

SCENES:
1. Hook (0-3s): Bold text animation + attention-grabbing visual
2. Intro: Host avatar or voiceover with channel branding
3. Main Content: Mix of:
   - Animated infographics explaining concepts
   - Split screens comparing options
   - On-screen text highlighting key terms
   - Real-life scenario animations (car, hospital, family scenes)
4. Tips Section: Numbered list animations (1, 2, 3)
5. Outro: Call-to-action graphics (subscribe button, like animation)

ON-SCREEN TEXT:
- Display keyword "{keyword}" prominently
- Highlight dollar amounts in bold
- Show key terms in simple language
- Use American spelling throughout

VOICEOVER:
- Male or female American English accent
- Friendly, conversational tone
- Speak at moderate pace (clear for ESL learners)
- Emphasize money-saving tips
- Sound trustworthy, not salesy

BACKGROUND MUSIC:
- Upbeat but not overwhelming
- Corporate/inspirational style
- Medium energy
- Fade during voiceover

END SCREEN:
- Subscribe button animation (left)
- 2 related video thumbnails (right)
- Social media links (bottom)

DURATION: 5:30 - 6:30 minutes
ASPECT RATIO: 16:9 (YouTube standard)
RESOLUTION: 1080p minimum"#,
        channel = CHANNEL_NAME,
        keyword = topic.primary,
    )
}
