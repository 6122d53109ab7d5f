//! Provider startup list and catalog.

use chorus_common::ProviderKind;
use serde::{Deserialize, Serialize};

/// One entry offered by the prompt bar's "open" buttons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderEntry {
    pub name: String,
    pub url: String,
}

/// Which providers exist and which open at launch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// URLs opened at launch, left to right.
    pub startup: Vec<String>,
    pub catalog: Vec<ProviderEntry>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        let startup = [ProviderKind::ChatGpt, ProviderKind::Claude]
            .iter()
            .filter_map(|k| k.default_url())
            .map(String::from)
            .collect();
        let catalog = ProviderKind::KNOWN
            .iter()
            .filter_map(|k| {
                k.default_url().map(|url| ProviderEntry {
                    name: k.display_name().to_string(),
                    url: url.to_string(),
                })
            })
            .collect();
        Self { startup, catalog }
    }
}
