use chorus_common::types::{PaneId, ProviderKind};

/// Metadata for one embedded chat surface.
///
/// Immutable after creation: relayout changes where the view sits, never
/// which URL or provider the pane stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    pub id: PaneId,
    pub url: String,
    pub provider: ProviderKind,
}

impl Pane {
    pub fn new(id: PaneId, url: impl Into<String>) -> Self {
        let url = url.into();
        let provider = ProviderKind::from_url(&url);
        Self { id, url, provider }
    }

    pub fn title(&self) -> &'static str {
        self.provider.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_resolved_at_creation() {
        let pane = Pane::new(PaneId(1), "https://claude.ai/new");
        assert_eq!(pane.provider, ProviderKind::Claude);
        assert_eq!(pane.title(), "Claude");
    }

    #[test]
    fn unknown_url_is_other() {
        let pane = Pane::new(PaneId(2), "https://example.com");
        assert_eq!(pane.provider, ProviderKind::Other);
        assert_eq!(pane.url, "https://example.com");
    }
}
