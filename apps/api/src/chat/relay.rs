//! Chat relay: validate the question, lay out the prompt for the profile, make
//! one provider call, and report every outcome as a `ChatReply`.

use chrono::Utc;
use tracing::{info, warn};

use crate::chat::profiles::{agent_profile, ChatProfile, PromptLayout};
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{ChatTurn, GenerationRequest, LlmError, Role, TextGenerator};
use crate::models::chat::{AgentRequest, ChatReply, ChatRequest};
use crate::providers::credentials::CredentialResolver;
use crate::providers::failure::{classify, failure_message, missing_key_message, ErrorCode};

const NO_RESPONSE: &str = "No response generated";

/// A question that passed validation, with blank page context dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidChat {
    pub message: String,
    pub page_context: Option<String>,
    pub history: Vec<ChatTurn>,
}

pub fn validate_chat(profile: &ChatProfile, request: ChatRequest) -> Result<ValidChat, AppError> {
    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Message is required".to_string()))?;

    if let Some(limit) = profile.max_message_chars {
        if message.chars().count() > limit {
            return Err(AppError::Validation(format!(
                "Message too long (max {limit} characters)"
            )));
        }
    }

    Ok(ValidChat {
        message,
        page_context: request.page_context.filter(|c| !c.trim().is_empty()),
        history: request.conversation_history,
    })
}

/// Picks the persona and checks the question. Both fields are required before
/// the persona name is looked at.
pub fn validate_agent(
    request: AgentRequest,
) -> Result<(&'static ChatProfile, ValidChat), AppError> {
    let agent_type = request.agent_type.filter(|a| !a.is_empty());
    let message = request.user_message.filter(|m| !m.trim().is_empty());

    let (Some(agent_type), Some(message)) = (agent_type, message) else {
        return Err(AppError::MissingFields(
            "Missing required fields: agentType, userMessage".to_string(),
        ));
    };

    let profile = agent_profile(&agent_type).ok_or_else(|| {
        AppError::Validation(
            "Invalid agentType. Must be one of: storytelling, coach, image, mindmap".to_string(),
        )
    })?;

    Ok((
        profile,
        ValidChat {
            message,
            page_context: request.page_context.filter(|c| !c.trim().is_empty()),
            history: request.conversation_history,
        },
    ))
}

/// Returns the system instruction (if the layout uses one) and the turns to send.
pub fn build_turns(profile: &ChatProfile, chat: &ValidChat) -> (Option<String>, Vec<ChatTurn>) {
    let skip = chat.history.len().saturating_sub(profile.history_window);
    let recent = &chat.history[skip..];

    match profile.layout {
        PromptLayout::SinglePrompt { answer_label } => {
            let mut prompt = profile.system_prompt.to_string();
            if let Some(context) = &chat.page_context {
                prompt.push_str(&format!("\n\n**CURRENT PAGE CONTEXT:**\n{context}\n"));
            }
            if !recent.is_empty() {
                prompt.push_str("\n\n**CONVERSATION HISTORY:**\n");
                for turn in recent {
                    let who = match turn.role {
                        Role::User => "User",
                        Role::Assistant => "Assistant",
                    };
                    prompt.push_str(&format!("{who}: {}\n", turn.content));
                }
            }
            prompt.push_str(&format!(
                "\n\n**USER QUESTION:**\n{}\n\n{answer_label}",
                chat.message
            ));
            (None, vec![ChatTurn::user(prompt)])
        }
        PromptLayout::Messages => {
            let mut system = profile.system_prompt.to_string();
            if let Some(context) = &chat.page_context {
                system.push_str(&format!("\n\n**CURRENT CONTEXT:**\n{context}"));
            }
            let mut turns = recent.to_vec();
            turns.push(ChatTurn::user(chat.message.clone()));
            (Some(system), turns)
        }
        PromptLayout::Transcript => {
            let mut prompt = profile.system_prompt.to_string();
            if let Some(context) = &chat.page_context {
                prompt.push_str(&format!("\n\nCurrent page context:\n{context}\n\n"));
            }
            if !recent.is_empty() {
                prompt.push_str("\n\n=== CONVERSATION HISTORY ===\n");
                for turn in recent {
                    let who = match turn.role {
                        Role::User => "User",
                        Role::Assistant => "Agent",
                    };
                    prompt.push_str(&format!("{who}: {}\n", turn.content));
                }
                prompt.push_str("=== END HISTORY ===\n");
            }
            prompt.push_str(&format!("\n\nUser: {}\n\nAgent:", chat.message));
            (None, vec![ChatTurn::user(prompt)])
        }
    }
}

pub async fn run_chat(
    profile: &ChatProfile,
    chat: ValidChat,
    llm: &dyn TextGenerator,
    credentials: &CredentialResolver,
    config: &Config,
) -> ChatReply {
    let Some(key) = credentials.resolve_first(profile.providers) else {
        info!("No key configured for {} chat", profile.mode);
        return failure_reply(
            profile,
            missing_key_message(profile.feature, profile.providers),
            ErrorCode::ApiKeyNotConfigured,
        );
    };

    let (system, turns) = build_turns(profile, &chat);
    let request = GenerationRequest {
        provider: key.provider,
        base_url: config.base_url(key.provider).to_string(),
        model: profile
            .model
            .unwrap_or_else(|| key.provider.default_model())
            .to_string(),
        api_key: key.value,
        system,
        turns,
        params: profile.params,
    };

    let (text, generation) = match llm.generate(&request).await {
        Ok(generation) if generation.text.trim().is_empty() => {
            (NO_RESPONSE.to_string(), Some(generation))
        }
        Ok(generation) => (generation.text.clone(), Some(generation)),
        Err(LlmError::EmptyContent) => (NO_RESPONSE.to_string(), None),
        Err(err) => {
            let kind = classify(&err);
            warn!("{} chat failed ({kind:?}): {err}", profile.mode);
            return failure_reply(
                profile,
                failure_message(kind, &err, key.provider, ""),
                ErrorCode::GenerationFailed,
            );
        }
    };

    if let Some(generation) = &generation {
        info!(
            "{} chat answered by {} ({}) in {}ms",
            profile.mode,
            key.provider.display_name(),
            generation.model,
            generation.elapsed.as_millis()
        );
    }

    ChatReply {
        response: text,
        timestamp: Utc::now(),
        mode: profile.mode,
        response_time_ms: generation
            .as_ref()
            .map(|g| u64::try_from(g.elapsed.as_millis()).unwrap_or(u64::MAX)),
        model: Some(request.model),
        provider: Some(key.provider.display_name()),
        error: None,
    }
}

fn failure_reply(profile: &ChatProfile, response: String, error: ErrorCode) -> ChatReply {
    ChatReply {
        response,
        timestamp: Utc::now(),
        mode: profile.mode,
        response_time_ms: None,
        model: None,
        provider: None,
        error: Some(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::profiles::{GENERAL, MIND_MAPPER, PERSONALIZED, QWEN, STORYTELLER, SUMMARY};
    use crate::providers::Provider;
    use crate::testing::FakeGenerator;

    fn history(n: usize) -> Vec<ChatTurn> {
        (0..n)
            .map(|i| ChatTurn {
                role: if i % 2 == 0 { Role::User } else { Role::Assistant },
                content: format!("turn {i}"),
            })
            .collect()
    }

    fn chat(message: &str, context: Option<&str>, turns: usize) -> ValidChat {
        ValidChat {
            message: message.to_string(),
            page_context: context.map(str::to_string),
            history: history(turns),
        }
    }

    #[test]
    fn test_blank_message_rejected() {
        let request = ChatRequest {
            message: Some("   ".to_string()),
            ..ChatRequest::default()
        };
        let err = validate_chat(&SUMMARY, request).unwrap_err();
        assert_eq!(err.to_string(), "Message is required");
    }

    #[test]
    fn test_general_chat_limits_message_length() {
        let request = ChatRequest {
            message: Some("x".repeat(1001)),
            ..ChatRequest::default()
        };
        let err = validate_chat(&GENERAL, request).unwrap_err();
        assert!(err.to_string().contains("max 1000"));

        let request = ChatRequest {
            message: Some("x".repeat(1001)),
            ..ChatRequest::default()
        };
        assert!(validate_chat(&SUMMARY, request).is_ok());
    }

    #[test]
    fn test_blank_page_context_dropped() {
        let request = ChatRequest {
            message: Some("What is a spec?".to_string()),
            page_context: Some("\n".to_string()),
            conversation_history: vec![],
        };
        assert_eq!(validate_chat(&GENERAL, request).unwrap().page_context, None);
    }

    #[test]
    fn test_single_prompt_layout_keeps_last_five_turns() {
        let (system, turns) = build_turns(&GENERAL, &chat("Explain loops", Some("Lesson 3"), 7));
        assert!(system.is_none());
        assert_eq!(turns.len(), 1);

        let prompt = &turns[0].content;
        assert!(prompt.starts_with("You are an AI Learning Assistant"));
        assert!(prompt.contains("**CURRENT PAGE CONTEXT:**\nLesson 3"));
        assert!(!prompt.contains("turn 1\n"));
        assert!(prompt.contains("User: turn 2\n"));
        assert!(prompt.contains("Assistant: turn 5\n"));
        assert!(prompt.ends_with("**USER QUESTION:**\nExplain loops\n\n**YOUR RESPONSE:**"));
    }

    #[test]
    fn test_personalized_uses_its_own_answer_label() {
        let (_, turns) = build_turns(&PERSONALIZED, &chat("Why?", None, 0));
        assert!(turns[0].content.ends_with("**YOUR PERSONALIZED RESPONSE:**"));
        assert!(!turns[0].content.contains("CONVERSATION HISTORY"));
    }

    #[test]
    fn test_messages_layout_keeps_last_three_turns() {
        let (system, turns) = build_turns(&SUMMARY, &chat("Summarize", Some("Part 2"), 6));
        let system = system.unwrap();
        assert!(system.ends_with("**CURRENT CONTEXT:**\nPart 2"));
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[0].content, "turn 3");
        assert_eq!(turns[3], ChatTurn::user("Summarize"));
    }

    fn agent_request(agent_type: Option<&str>, message: Option<&str>) -> AgentRequest {
        AgentRequest {
            agent_type: agent_type.map(str::to_string),
            user_message: message.map(str::to_string),
            ..AgentRequest::default()
        }
    }

    #[test]
    fn test_agent_requires_type_and_message() {
        for request in [
            agent_request(None, Some("Tell me a story")),
            agent_request(Some("coach"), None),
            agent_request(Some(""), Some("   ")),
        ] {
            let err = validate_agent(request).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Missing required fields: agentType, userMessage"
            );
        }
    }

    #[test]
    fn test_unknown_agent_rejected() {
        let err = validate_agent(agent_request(Some("poet"), Some("Hi"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("storytelling, coach, image, mindmap"));
    }

    #[test]
    fn test_transcript_layout_keeps_last_four_turns() {
        let (system, turns) =
            build_turns(&STORYTELLER, &chat("What is a spec?", Some("Lesson 2"), 6));
        assert!(system.is_none());
        assert_eq!(turns.len(), 1);

        let prompt = &turns[0].content;
        assert!(prompt.starts_with("You are the Storyteller"));
        assert!(prompt.contains("\n\nCurrent page context:\nLesson 2\n\n"));
        assert!(!prompt.contains("turn 1\n"));
        assert!(prompt.contains("=== CONVERSATION HISTORY ===\nUser: turn 2\nAgent: turn 3\n"));
        assert!(prompt.contains("Agent: turn 5\n=== END HISTORY ===\n"));
        assert!(prompt.ends_with("\n\nUser: What is a spec?\n\nAgent:"));
    }

    #[tokio::test]
    async fn test_agent_uses_its_own_model_and_settings() {
        let llm = FakeGenerator::replying("```mermaid\ngraph TD\n```");
        let credentials = CredentialResolver::from_pairs([("GEMINI_API_KEY", "AIza-key")]);
        let reply = run_chat(
            &MIND_MAPPER,
            chat("Map part 1", None, 0),
            &llm,
            &credentials,
            &Config::default(),
        )
        .await;

        let sent = llm.last_request().unwrap();
        assert_eq!(sent.provider, Provider::Gemini);
        assert_eq!(sent.model, "gemini-2.5-flash-lite");
        assert_eq!(sent.params.temperature, 0.9);
        assert_eq!(sent.params.max_output_tokens, 4096);
        assert_eq!(reply.mode, "mindmap");
        assert_eq!(reply.model.as_deref(), Some("gemini-2.5-flash-lite"));
        assert!(reply.response.starts_with("```mermaid"));
    }

    #[tokio::test]
    async fn test_agent_missing_key_mentions_agent_studio() {
        let llm = FakeGenerator::replying("unused");
        let reply = run_chat(
            &STORYTELLER,
            chat("Hi", None, 0),
            &llm,
            &CredentialResolver::from_pairs([]),
            &Config::default(),
        )
        .await;

        assert_eq!(reply.error, Some(ErrorCode::ApiKeyNotConfigured));
        assert!(reply.response.contains("To use Agent Studio"));
        assert!(reply.response.contains("GEMINI_API_KEY"));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_qwen_falls_back_to_siliconflow() {
        let llm = FakeGenerator::replying("fast answer");
        let credentials = CredentialResolver::from_pairs([("SILICONFLOW_API_KEY", "sf-key")]);
        let reply = run_chat(
            &QWEN,
            chat("Hi", None, 0),
            &llm,
            &credentials,
            &Config::default(),
        )
        .await;

        let sent = llm.last_request().unwrap();
        assert_eq!(sent.provider, Provider::SiliconFlow);
        assert_eq!(sent.model, "Qwen/Qwen2.5-7B-Instruct");
        assert_eq!(reply.response, "fast answer");
        assert_eq!(reply.provider, Some("SiliconFlow"));
        assert_eq!(reply.error, None);
        assert!(reply.response_time_ms.is_some());
    }

    #[tokio::test]
    async fn test_missing_key_lists_whole_chain() {
        let llm = FakeGenerator::replying("unused");
        let reply = run_chat(
            &QWEN,
            chat("Hi", None, 0),
            &llm,
            &CredentialResolver::from_pairs([]),
            &Config::default(),
        )
        .await;

        assert_eq!(reply.error, Some(ErrorCode::ApiKeyNotConfigured));
        assert!(reply.response.contains("TOGETHER_API_KEY"));
        assert!(reply.response.contains("SILICONFLOW_API_KEY"));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_completion_becomes_placeholder_text() {
        let llm = FakeGenerator::failing(|| LlmError::EmptyContent);
        let credentials = CredentialResolver::from_pairs([("GROQ_API_KEY", "gsk")]);
        let reply = run_chat(
            &SUMMARY,
            chat("Hi", None, 0),
            &llm,
            &credentials,
            &Config::default(),
        )
        .await;

        assert_eq!(reply.response, "No response generated");
        assert_eq!(reply.error, None);
    }

    #[tokio::test]
    async fn test_blank_completion_becomes_placeholder_text() {
        let llm = FakeGenerator::replying("  \n");
        let credentials = CredentialResolver::from_pairs([("GROQ_API_KEY", "gsk")]);
        let reply = run_chat(
            &SUMMARY,
            chat("Hi", None, 0),
            &llm,
            &credentials,
            &Config::default(),
        )
        .await;

        assert_eq!(reply.response, "No response generated");
        assert_eq!(reply.error, None);
    }

    #[tokio::test]
    async fn test_rate_limit_reported_in_band() {
        let llm = FakeGenerator::failing(|| LlmError::Api {
            status: 429,
            provider_status: None,
            message: "Rate limit reached for model".to_string(),
        });
        let credentials = CredentialResolver::from_pairs([("GROQ_API_KEY", "gsk")]);
        let reply = run_chat(
            &SUMMARY,
            chat("Hi", None, 0),
            &llm,
            &credentials,
            &Config::default(),
        )
        .await;

        assert_eq!(reply.error, Some(ErrorCode::GenerationFailed));
        assert!(reply.response.contains("Rate Limit Reached"));
        assert!(reply.response.contains("14,400 requests/day"));
    }
}
