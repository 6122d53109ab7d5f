use serde::{Deserialize, Serialize};

/// Which chat service a pane is showing.
///
/// Resolved once from the pane URL when the pane is created and cached on
/// the pane, so commands like "close claude" don't rescan every URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    ChatGpt,
    Claude,
    Gemini,
    Copilot,
    Perplexity,
    Grok,
    DeepSeek,
    Mistral,
    Other,
}

/// Host suffixes for each known provider, checked in order.
const PROVIDER_HOSTS: &[(&str, ProviderKind)] = &[
    ("chatgpt.com", ProviderKind::ChatGpt),
    ("chat.openai.com", ProviderKind::ChatGpt),
    ("claude.ai", ProviderKind::Claude),
    ("gemini.google.com", ProviderKind::Gemini),
    ("copilot.microsoft.com", ProviderKind::Copilot),
    ("perplexity.ai", ProviderKind::Perplexity),
    ("grok.com", ProviderKind::Grok),
    ("deepseek.com", ProviderKind::DeepSeek),
    ("mistral.ai", ProviderKind::Mistral),
];

impl ProviderKind {
    pub const KNOWN: [ProviderKind; 8] = [
        ProviderKind::ChatGpt,
        ProviderKind::Claude,
        ProviderKind::Gemini,
        ProviderKind::Copilot,
        ProviderKind::Perplexity,
        ProviderKind::Grok,
        ProviderKind::DeepSeek,
        ProviderKind::Mistral,
    ];

    /// Classify a URL by its host. Unknown hosts map to `Other`.
    pub fn from_url(url: &str) -> Self {
        let host = host_of(url);
        PROVIDER_HOSTS
            .iter()
            .find(|(suffix, _)| host == *suffix || host.ends_with(&format!(".{suffix}")))
            .map(|(_, kind)| *kind)
            .unwrap_or(ProviderKind::Other)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::ChatGpt => "ChatGPT",
            ProviderKind::Claude => "Claude",
            ProviderKind::Gemini => "Gemini",
            ProviderKind::Copilot => "Copilot",
            ProviderKind::Perplexity => "Perplexity",
            ProviderKind::Grok => "Grok",
            ProviderKind::DeepSeek => "DeepSeek",
            ProviderKind::Mistral => "Le Chat",
            ProviderKind::Other => "Web",
        }
    }

    /// Landing page opened when the user picks this provider.
    pub fn default_url(&self) -> Option<&'static str> {
        match self {
            ProviderKind::ChatGpt => Some("https://chatgpt.com"),
            ProviderKind::Claude => Some("https://claude.ai"),
            ProviderKind::Gemini => Some("https://gemini.google.com"),
            ProviderKind::Copilot => Some("https://copilot.microsoft.com"),
            ProviderKind::Perplexity => Some("https://www.perplexity.ai"),
            ProviderKind::Grok => Some("https://grok.com"),
            ProviderKind::DeepSeek => Some("https://chat.deepseek.com"),
            ProviderKind::Mistral => Some("https://chat.mistral.ai"),
            ProviderKind::Other => None,
        }
    }
}

/// Lowercased host portion of a URL, without scheme, credentials, or port.
fn host_of(url: &str) -> String {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);
    host.to_ascii_lowercase()
}
