//! Prompt construction for the authenticity check

use veracity_core::Article;

/// Content beyond this many characters is dropped from the prompt to keep
/// inference fast on small local models.
pub const MAX_CONTENT_CHARS: usize = 1500;

/// Build the classification instruction for one article.
///
/// The model is directed to answer with an explicit `VERDICT:` line and a
/// `CONFIDENCE:` percentage so the reply parser has stable anchors, but the
/// parser tolerates free-form replies too.
pub fn build_prompt(article: &Article) -> String {
    let content = truncate_chars(&article.content, MAX_CONTENT_CHARS);

    format!(
        "You are a fake news detection expert. Analyze this news article and \
         determine if it's FAKE or REAL.\n\n\
         TITLE: {title}\n\n\
         CONTENT: {content}\n\n\
         Analyze for:\n\
         1. Sensationalist language (shocking, unbelievable, miracle)\n\
         2. Lack of credible sources\n\
         3. Emotional manipulation\n\
         4. Logical inconsistencies\n\
         5. Implausible claims\n\n\
         Respond with:\n\
         - VERDICT: FAKE or REAL\n\
         - CONFIDENCE: percentage (e.g. 85%)\n\
         - REASON: one sentence explanation\n\n\
         Keep your response brief and focused.",
        title = article.title,
        content = content,
    )
}

/// Truncate to at most `max` characters without splitting a code point
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
