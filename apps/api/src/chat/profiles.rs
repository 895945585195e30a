//! Chat widget profiles: which provider, which settings, how the prompt is laid out.

use crate::chat::prompts::{
    COACH_SYSTEM, GENERAL_SYSTEM, IMAGE_SYSTEM, MIND_MAPPER_SYSTEM, PERSONALIZED_SYSTEM,
    QWEN_SYSTEM, STORYTELLER_SYSTEM, SUMMARY_SYSTEM,
};
use crate::llm_client::GenerationParams;
use crate::providers::Provider;

/// How page context, history and the question reach the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptLayout {
    /// Everything folded into one user turn, closed with `answer_label`.
    SinglePrompt { answer_label: &'static str },
    /// System message (with page context), recent history, then the question.
    Messages,
    /// One user turn written as a transcript: persona, page context, a fenced
    /// history block, then `User: ...` and an open `Agent:` line.
    Transcript,
}

#[derive(Debug)]
pub struct ChatProfile {
    pub mode: &'static str,
    /// Used in setup instructions ("To use {feature}, ...").
    pub feature: &'static str,
    pub system_prompt: &'static str,
    /// Tried in order; the first with a key is used.
    pub providers: &'static [Provider],
    /// Overrides the provider's default model.
    pub model: Option<&'static str>,
    pub params: GenerationParams,
    pub history_window: usize,
    pub max_message_chars: Option<usize>,
    pub layout: PromptLayout,
}

pub const GENERAL: ChatProfile = ChatProfile {
    mode: "general",
    feature: "the chat assistant",
    system_prompt: GENERAL_SYSTEM,
    providers: &[Provider::Gemini],
    model: None,
    params: GenerationParams {
        temperature: 0.7,
        top_k: Some(40),
        top_p: 0.95,
        max_output_tokens: 1000,
    },
    history_window: 5,
    max_message_chars: Some(1000),
    layout: PromptLayout::SinglePrompt {
        answer_label: "**YOUR RESPONSE:**",
    },
};

pub const SUMMARY: ChatProfile = ChatProfile {
    mode: "summary",
    feature: "Summary chat",
    system_prompt: SUMMARY_SYSTEM,
    providers: &[Provider::Groq],
    model: None,
    params: GenerationParams {
        temperature: 0.4,
        top_k: None,
        top_p: 0.9,
        max_output_tokens: 300,
    },
    history_window: 3,
    max_message_chars: None,
    layout: PromptLayout::Messages,
};

pub const PERSONALIZED: ChatProfile = ChatProfile {
    mode: "personalized",
    feature: "Personalized chat",
    system_prompt: PERSONALIZED_SYSTEM,
    providers: &[Provider::Gemini],
    model: None,
    params: GenerationParams {
        temperature: 0.7,
        top_k: Some(40),
        top_p: 0.95,
        max_output_tokens: 600,
    },
    history_window: 3,
    max_message_chars: None,
    layout: PromptLayout::SinglePrompt {
        answer_label: "**YOUR PERSONALIZED RESPONSE:**",
    },
};

pub const QWEN: ChatProfile = ChatProfile {
    mode: "qwen",
    feature: "Qwen chat",
    system_prompt: QWEN_SYSTEM,
    providers: &[Provider::Together, Provider::SiliconFlow],
    model: None,
    params: GenerationParams {
        temperature: 0.5,
        top_k: None,
        top_p: 0.9,
        max_output_tokens: 400,
    },
    history_window: 3,
    max_message_chars: None,
    layout: PromptLayout::Messages,
};

const GEMINI_ONLY: &[Provider] = &[Provider::Gemini];

const AGENT_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.9,
    top_k: Some(40),
    top_p: 0.95,
    max_output_tokens: 4096,
};

const fn agent(mode: &'static str, system_prompt: &'static str) -> ChatProfile {
    ChatProfile {
        mode,
        feature: "Agent Studio",
        system_prompt,
        providers: GEMINI_ONLY,
        model: Some("gemini-2.5-flash-lite"),
        params: AGENT_PARAMS,
        history_window: 4,
        max_message_chars: None,
        layout: PromptLayout::Transcript,
    }
}

pub const STORYTELLER: ChatProfile = agent("storytelling", STORYTELLER_SYSTEM);
pub const COACH: ChatProfile = agent("coach", COACH_SYSTEM);
pub const IMAGE: ChatProfile = agent("image", IMAGE_SYSTEM);
pub const MIND_MAPPER: ChatProfile = agent("mindmap", MIND_MAPPER_SYSTEM);

/// Agent Studio personas, looked up by the request's `agentType`.
pub const AGENTS: [&ChatProfile; 4] = [&STORYTELLER, &COACH, &IMAGE, &MIND_MAPPER];

pub fn agent_profile(agent_type: &str) -> Option<&'static ChatProfile> {
    AGENTS.into_iter().find(|profile| profile.mode == agent_type)
}
