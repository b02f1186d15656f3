use std::collections::BTreeMap;

use crate::{
    foundation::error::{ScrollFxError, ScrollFxResult},
    transition::config::TransitionConfig,
};

/// Pages composed from a pinned hero and a rising content section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PagePreset {
    Menus,
    Events,
    History,
    Impressions,
    Contact,
}

impl PagePreset {
    pub const ALL: [PagePreset; 5] = [
        PagePreset::Menus,
        PagePreset::Events,
        PagePreset::History,
        PagePreset::Impressions,
        PagePreset::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Menus => "menus",
            Self::Events => "events",
            Self::History => "history",
            Self::Impressions => "impressions",
            Self::Contact => "contact",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            Self::Menus => "/menus",
            Self::Events => "/events",
            Self::History => "/history",
            Self::Impressions => "/impressions",
            Self::Contact => "/contact",
        }
    }

    /// Built-in transition options for this page.
    pub fn config(self) -> TransitionConfig {
        let (pinned, rising, y_offset) = match self {
            Self::Menus => ("", "bg-background", 50.0),
            Self::Events | Self::Impressions => {
                ("sticky top-0 h-screen", "relative h-screen bg-white", 0.0)
            }
            Self::History | Self::Contact => ("sticky top-0", "relative bg-background", 0.0),
        };
        TransitionConfig {
            section1_class_name: pinned.to_string(),
            section2_class_name: rising.to_string(),
            y_offset,
            ..TransitionConfig::default()
        }
    }
}

impl std::str::FromStr for PagePreset {
    type Err = ScrollFxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches('/').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| ScrollFxError::config(format!("unknown page '{s}'")))
    }
}

impl std::fmt::Display for PagePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-page transition options, keyed by page name.
///
/// Starts from the built-in presets; entries loaded from JSON replace them and may add
/// new pages.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SiteConfig {
    pub pages: BTreeMap<String, TransitionConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SiteConfig {
    pub fn builtin() -> Self {
        Self {
            pages: PagePreset::ALL
                .into_iter()
                .map(|p| (p.name().to_string(), p.config()))
                .collect(),
        }
    }

    /// Parse `{"pages": {...}}` and layer it over the built-ins.
    pub fn from_json(s: &str) -> ScrollFxResult<Self> {
        let overrides: SiteConfig = serde_json::from_str(s)?;
        let mut out = Self::builtin();
        for (name, cfg) in overrides.pages {
            let name = name.trim().trim_start_matches('/').to_ascii_lowercase();
            if name.is_empty() {
                return Err(ScrollFxError::config("page name must be non-empty"));
            }
            tracing::debug!(page = %name, "page transition override");
            out.pages.insert(name, cfg);
        }
        Ok(out)
    }

    pub fn page(&self, name: &str) -> ScrollFxResult<&TransitionConfig> {
        let key = name.trim().trim_start_matches('/').to_ascii_lowercase();
        self.pages
            .get(&key)
            .ok_or_else(|| ScrollFxError::config(format!("unknown page '{name}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/pages.rs"]
mod tests;
