use crate::catalogue::TopicRecord;
use crate::prompt::common::CHANNEL_NAME;

/// Generate the narration script for a six-minute explainer video.
///
/// Bracketed lines without a timestamp are slots left for the presenter to
/// fill in by hand and are emitted unchanged for every topic.
pub fn script_prompt(topic: &TopicRecord) -> String {
    format!(
        r#"[HOOK - 0:00-0:03]
{hook}

[INTRO - 0:03-0:20]
Hey, it is {channel}. {problem} But today, I am breaking down {keyword} in the simplest way possible—no jargon, no confusion. By the end of this video, you will know exactly what to do. Let us go.

[SECTION 1: THE BASICS - 0:20-1:30]
So, what is {keyword}? Let me explain.

[Simple definition in 2-3 sentences - use American examples like dollar amounts, state references]

For example, in states like Texas or Florida, {keyword} can look very different from California or New York. It all depends on a few key factors.

[SECTION 2: WHY IT MATTERS - 1:30-2:45]
Now, why should you care about {keyword}?

Because understanding {keyword} can save you hundreds—even thousands—of dollars every year. A lot of people skip this step and end up paying way more than they should.

[Give 2-3 practical reasons why this matters to everyday Americans]

[SECTION 3: HOW IT WORKS - 2:45-4:30]
Let me walk you through how {keyword} actually works.

[Step-by-step breakdown in plain English]
[Use real-world USA scenarios: families, workers, students, immigrants]
[Mention typical costs in dollars, timelines, application processes]

This is the part that trips people up, but once you get it, it is super straightforward.

[SECTION 4: PRO TIPS - 4:30-5:30]
Here are my top 3 tips for {keyword}:

Tip #1: [Practical action they can take today]
Tip #2: [Common mistake to avoid]
Tip #3: [Money-saving hack specific to USA]

These tips alone can save you serious money.

[OUTRO - 5:30-6:00]
And that is {keyword} explained. Super simple, right?

If this helped you, hit that subscribe button—we post new insurance tips every week to help you save money and avoid getting ripped off.

Drop a comment if you have questions, and I will answer them personally.

See you in the next one. Peace.

[END SCREEN: Subscribe button + 2 recommended videos]"#,
        hook = topic.hook,
        channel = CHANNEL_NAME,
        problem = topic.problem,
        keyword = topic.primary,
    )
}
