// Prompt templates and generation settings for content transformation.

use crate::llm_client::GenerationParams;
use crate::models::transform::{ContentMode, TransformRequest};

const CONTENT_PLACEHOLDER: &str = "{originalContent}";
const BACKGROUND_PLACEHOLDER: &str = "{professionalBackground}";

/// Summary template. Replace `{originalContent}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Condense this lesson to 30-50% length. Keep:
- Learning objectives (exact)
- Key concepts (simplified)
- 1 code example per concept
- ALL "Try With AI" sections
- Critical warnings

Remove: long explanations, redundant examples, background context.

Style: Concise, technical, bullet-points. Active voice.

LESSON:
{originalContent}

Output: Markdown with same headings, condensed text."#;

/// Personalized template.
/// Replace: {professionalBackground} (every occurrence), {originalContent} (once)
pub const PERSONALIZED_PROMPT_TEMPLATE: &str = r#"Adapt this lesson for {professionalBackground} professional.

Replace jargon with domain analogies:
- Variables → domain data
- Functions → domain processes
- Loops → repetitive tasks

Use domain examples in code and "Try With AI" prompts.

Tone: Warm, supportive. "Your domain expertise helps you understand this."

Keep: "Try With AI" sections (adapt to domain), code (add domain-context comments), objectives.

LESSON:
{originalContent}

Output: Markdown, domain-adapted."#;

pub fn template_for(mode: ContentMode) -> &'static str {
    match mode {
        ContentMode::Summary => SUMMARY_PROMPT_TEMPLATE,
        ContentMode::Personalized => PERSONALIZED_PROMPT_TEMPLATE,
    }
}

/// Summary runs cool and short; personalized gets more room and variety.
pub fn generation_params(mode: ContentMode) -> GenerationParams {
    match mode {
        ContentMode::Summary => GenerationParams {
            temperature: 0.5,
            top_k: Some(20),
            top_p: 0.9,
            max_output_tokens: 1500,
        },
        ContentMode::Personalized => GenerationParams {
            temperature: 0.7,
            top_k: Some(40),
            top_p: 0.95,
            max_output_tokens: 2500,
        },
    }
}

/// Fills the template for the request's mode.
///
/// The template is split at `{originalContent}` before any substitution, so
/// placeholder-like text inside the lesson or the background is never
/// re-expanded.
pub fn build_prompt(request: &TransformRequest) -> String {
    let template = template_for(request.mode);
    let (head, tail) = template
        .split_once(CONTENT_PLACEHOLDER)
        .unwrap_or((template, ""));

    let fill = |part: &str| match request.mode {
        ContentMode::Personalized => {
            part.replace(BACKGROUND_PLACEHOLDER, &request.professional_background)
        }
        ContentMode::Summary => part.to_string(),
    };

    let mut prompt = fill(head);
    prompt.push_str(&request.original_content);
    prompt.push_str(&fill(tail));
    prompt
}
