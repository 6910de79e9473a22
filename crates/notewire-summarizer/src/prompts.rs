//! Prompt templates for the model backends.
//!
//! These are the only state shared between concurrent calls; everything here
//! is immutable.

pub(crate) fn thread_prompt(url: &str, content: &str) -> String {
    format!(
        r#"Analyze this X/Twitter thread and provide:
1. A concise title using the poster's own words (max 10 words) - do NOT paraphrase
2. A 2-3 sentence summary
3. 3-5 key points as bullet points, inlining any links the thread references as [text](url)

Thread URL: {url}

Thread content:
{content}

Respond in this exact JSON format:
{{
    "title": "...",
    "summary": "...",
    "key_points": ["...", "...", "..."],
    "author": "@handle",
    "thread_date": "YYYY-MM-DD if known"
}}"#
    )
}

/// Degraded variant for when the thread content could not be fetched.
pub(crate) fn thread_prompt_url_only(url: &str) -> String {
    format!(
        r#"Analyze this X/Twitter thread from its URL alone and provide:
1. A concise title using the poster's own words if you know them (max 10 words) - do NOT paraphrase
2. A 2-3 sentence summary
3. 3-5 key points as bullet points

Thread URL: {url}

Respond in this exact JSON format:
{{
    "title": "...",
    "summary": "...",
    "key_points": ["...", "...", "..."],
    "author": "@handle",
    "thread_date": "YYYY-MM-DD if known"
}}"#
    )
}

/// Merge-flow variant: only the poster's framing, the embedded video is
/// summarized separately.
pub(crate) fn thread_context_prompt(url: &str, content: &str) -> String {
    format!(
        r#"This X/Twitter post shares a video. Describe only the poster's framing:
1. A short title using the poster's own words - do NOT paraphrase
2. Why they are sharing the video (1-2 sentences)

Post URL: {url}

Post content:
{content}

Respond in this exact JSON format:
{{
    "title": "...",
    "poster_context": "...",
    "author": "@handle",
    "thread_date": "YYYY-MM-DD if known"
}}"#
    )
}

pub(crate) fn video_prompt(url: &str) -> String {
    format!(
        r#"Analyze this YouTube video and provide:
1. The exact video title - never "Not mentioned" or a similar placeholder
2. The channel name
3. A 2-3 sentence summary of the content
4. 3-5 key points as bullet points, each starting with a [MM:SS] or [H:MM:SS] timestamp

Video URL: {url}

Respond in this exact JSON format:
{{
    "title": "...",
    "channel": "...",
    "summary": "...",
    "key_points": ["[00:00] ...", "[01:30] ...", "[05:00] ..."],
    "duration": "if known"
}}"#
    )
}

pub(crate) fn article_prompt(url: &str, content: &str) -> String {
    format!(
        r#"Analyze this article and provide:
1. A concise title (max 10 words)
2. A 2-3 sentence summary
3. 3-5 key points as bullet points, inlining links to cited sources as [text](url)

URL: {url}

Article content:
{content}

Respond in this exact JSON format:
{{
    "title": "...",
    "summary": "...",
    "key_points": ["...", "...", "..."],
    "author": "if known",
    "publication": "if known"
}}"#
    )
}

/// Degraded variant for when the article content could not be fetched.
pub(crate) fn article_prompt_url_only(url: &str) -> String {
    format!(
        r#"Analyze this article/webpage and provide:
1. A concise title (max 10 words)
2. A 2-3 sentence summary
3. 3-5 key points as bullet points, inlining links to cited sources as [text](url)

URL: {url}

Respond in this exact JSON format:
{{
    "title": "...",
    "summary": "...",
    "key_points": ["...", "...", "..."],
    "author": "if known",
    "publication": "if known"
}}"#
    )
}

pub(crate) fn research_prompt(topic: &str, context: &str) -> String {
    format!(
        r#"Research this topic and provide a helpful starter note:

Topic: {topic}
Context: {context}

Provide:
1. A brief overview (2-3 sentences)
2. 3-5 key facts or points worth knowing
3. 3-5 suggested areas to explore or questions to research
4. 3-5 real, working links to authoritative sources - find actual URLs, do not describe where to search

Respond in this exact JSON format:
{{
    "summary": "...",
    "key_points": ["...", "...", "..."],
    "suggestions": ["...", "...", "..."],
    "links": [{{"label": "...", "url": "https://..."}}]
}}"#
    )
}
