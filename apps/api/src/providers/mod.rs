//! Provider catalogue — the hosted generative-AI services the relay can talk to.
//!
//! Everything provider-specific that is not wire format lives here: which
//! environment variables carry the key, which model is used, where the user
//! goes to get a key. Base URLs are owned by `Config` so they can be redirected.

pub mod credentials;
pub mod failure;

/// How a provider expects its request body to look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// Google `generateContent`.
    Gemini,
    /// OpenAI-compatible `/chat/completions`.
    OpenAiChat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Gemini,
    Groq,
    Together,
    SiliconFlow,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::Gemini,
        Provider::Groq,
        Provider::Together,
        Provider::SiliconFlow,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Gemini => "Google Gemini",
            Provider::Groq => "Groq",
            Provider::Together => "Together AI",
            Provider::SiliconFlow => "SiliconFlow",
        }
    }

    pub fn wire_format(self) -> WireFormat {
        match self {
            Provider::Gemini => WireFormat::Gemini,
            Provider::Groq | Provider::Together | Provider::SiliconFlow => WireFormat::OpenAiChat,
        }
    }

    /// Environment variables holding the API key, highest priority first.
    pub fn key_vars(self) -> &'static [&'static str] {
        match self {
            Provider::Gemini => &["GEMINI_API_KEY", "DOCUSAURUS_GEMINI_API_KEY"],
            Provider::Groq => &["GROQ_API_KEY"],
            Provider::Together => &["TOGETHER_API_KEY"],
            Provider::SiliconFlow => &["SILICONFLOW_API_KEY"],
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-2.0-flash-exp",
            Provider::Groq => "llama-3.3-70b-versatile",
            Provider::Together => "Qwen/Qwen2.5-72B-Instruct-Turbo",
            Provider::SiliconFlow => "Qwen/Qwen2.5-7B-Instruct",
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Provider::Gemini => "https://generativelanguage.googleapis.com",
            Provider::Groq => "https://api.groq.com/openai/v1",
            Provider::Together => "https://api.together.xyz/v1",
            Provider::SiliconFlow => "https://api.siliconflow.cn/v1",
        }
    }

    /// Where a user obtains a key. Shown in remediation text.
    pub fn key_console_url(self) -> &'static str {
        match self {
            Provider::Gemini => "https://aistudio.google.com/app/apikey",
            Provider::Groq => "https://console.groq.com",
            Provider::Together => "https://api.together.xyz",
            Provider::SiliconFlow => "https://siliconflow.cn",
        }
    }

    pub fn free_tier(self) -> Option<&'static str> {
        match self {
            Provider::Gemini => Some("1,500 requests/day - no credit card needed!"),
            Provider::Groq => Some("14,400 requests/day"),
            Provider::Together => Some("$25 free credit"),
            Provider::SiliconFlow => None,
        }
    }

    /// Shorter form of `free_tier` used in rate-limit messages.
    pub fn daily_limit(self) -> Option<&'static str> {
        match self {
            Provider::Gemini => Some("1,500 requests/day"),
            Provider::Groq => Some("14,400 requests/day"),
            Provider::Together | Provider::SiliconFlow => None,
        }
    }
}
