//! The three post formatters. Pure string transformations over the
//! extracted article text; no formatter touches the network or any state.

use crate::keywords::{DEFAULT_HASHTAG_COUNT, hashtag_line};
use crate::models::{InstagramPost, RepurposedContent};

/// Word cap for the LinkedIn summary.
const SUMMARY_WORDS: usize = 150;
/// Word cap for the thread hook.
const HOOK_WORDS: usize = 20;
/// Hard character cap for the thread hook. Truncation may land mid-word.
const HOOK_MAX_CHARS: usize = 140;
/// Word cap for the Instagram caption.
const CAPTION_WORDS: usize = 20;

/// The reel suggestion is the same for every article.
// TODO: derive the reel idea from a statistic found in the article text.
pub const REEL_IDEA: &str =
    "Text overlay on a split screen graphic showing a key statistic vs. its impact.";

/// Derive all three post variants from the extracted article text.
pub fn repurpose_text(text: &str, url: &str) -> RepurposedContent {
    RepurposedContent {
        linkedin: linkedin_post(text),
        twitter: twitter_thread(text, url),
        instagram: instagram_post(text),
    }
}

/// Long-form post: a word-capped summary wrapped in a fixed template with
/// a heading, a call to discussion, and the hashtag line.
pub fn linkedin_post(text: &str) -> String {
    let summary = truncate_words(text, SUMMARY_WORDS);
    let hashtags = hashtag_line(text, DEFAULT_HASHTAG_COUNT);

    format!(
        "**A Thought-Provoking Insight**\n\n{summary}\n\nWhat are your thoughts on this? Let's discuss in the comments!\n\n{hashtags}"
    )
}

/// Short-form thread: hook, then two fixed word-range takeaways, with the
/// source link closing the last element.
///
/// The hook comes from the first sentence containing a numeric character,
/// falling back to the very first sentence.
pub fn twitter_thread(text: &str, url: &str) -> [String; 3] {
    let sentences: Vec<&str> = text.split('.').collect();
    let hook_sentence = sentences
        .iter()
        .find(|sentence| sentence.chars().any(char::is_numeric))
        .or_else(|| sentences.first())
        .copied()
        .unwrap_or("");

    let mut hook = truncate_words(hook_sentence, HOOK_WORDS);
    if hook.chars().count() > HOOK_MAX_CHARS {
        hook = hook.chars().take(HOOK_MAX_CHARS).collect();
    }

    let takeaway_1 = word_slice(text, 15, 45);
    let takeaway_2 = word_slice(text, 45, 75);

    [
        format!("🔥 {hook}"),
        format!("Key takeaway: {takeaway_1}"),
        format!("Another point: {takeaway_2}\n\nRead the full analysis here: {url}"),
    ]
}

/// Image-caption post: a short caption plus the hashtag line, and the
/// fixed reel suggestion.
pub fn instagram_post(text: &str) -> InstagramPost {
    let caption = truncate_words(text, CAPTION_WORDS);
    let hashtags = hashtag_line(text, DEFAULT_HASHTAG_COUNT);

    InstagramPost {
        caption: format!("{caption}\n\n{hashtags}"),
        reel_idea: REEL_IDEA.to_string(),
    }
}

/// First `limit` whitespace-delimited words, always ellipsis-terminated.
fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().take(limit).collect();
    format!("{}...", words.join(" "))
}

/// Words `[start, end)` of the text, always ellipsis-terminated. Short
/// documents yield partial or empty slices.
fn word_slice(text: &str, start: usize, end: usize) -> String {
    let words: Vec<&str> = text
        .split_whitespace()
        .skip(start)
        .take(end - start)
        .collect();
    format!("{}...", words.join(" "))
}
