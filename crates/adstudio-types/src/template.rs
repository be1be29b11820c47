//! Template gallery types.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::designer::Scene;

/// What a template provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    FullAd,
    Scene,
    PromptSet,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::FullAd => write!(f, "full-ad"),
            TemplateKind::Scene => write!(f, "scene"),
            TemplateKind::PromptSet => write!(f, "prompt-set"),
        }
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(' ', "-").as_str() {
            "full-ad" => Ok(TemplateKind::FullAd),
            "scene" | "scene-template" => Ok(TemplateKind::Scene),
            "prompt-set" => Ok(TemplateKind::PromptSet),
            other => Err(format!("invalid template kind: '{other}'")),
        }
    }
}

/// A reusable ad template from the gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: TemplateKind,
    pub industry: String,
    pub style: String,
    pub thumbnail: String,
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

/// Facet filter for the template gallery. Unset facets match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    pub industry: Option<String>,
    pub style: Option<String>,
    pub kind: Option<TemplateKind>,
    pub search: Option<String>,
}
