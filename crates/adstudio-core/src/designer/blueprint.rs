//! Blueprint accumulator logic.
//!
//! The `Blueprint` struct lives in `adstudio-types`; this module provides an
//! extension trait (`BlueprintExt`) with the mutations the conversation
//! engine performs on it, plus the read-only panel view the designer screen
//! renders next to the chat.

use adstudio_types::designer::{Blueprint, Scene};
use adstudio_types::template::Template;

use super::script::AiDefaults;

/// Placeholder for a field nobody has filled in.
pub const NOT_SPECIFIED: &str = "Not yet specified";

/// Hint shown under audience/tone once generation is possible.
pub const AI_FIELD_HINT: &str = "Will be AI-generated based on product type";

/// Extension trait for `Blueprint` accumulation.
pub trait BlueprintExt {
    /// Whether a product name has been captured.
    fn has_product(&self) -> bool;

    /// Capture the product name and derive the title from it.
    ///
    /// Only the first call has an effect; returns whether it did.
    fn name_product(&mut self, product: &str) -> bool;

    /// Append an asset name in upload order.
    fn add_asset(&mut self, name: &str);

    /// Whether audience, tone, or scenes still need AI defaults.
    fn needs_ai_defaults(&self) -> bool;

    /// Overwrite audience, tone, and scenes with the given defaults.
    fn apply_ai_defaults(&mut self, defaults: &AiDefaults);

    /// Replace the title (the header field is user-editable).
    fn rename(&mut self, title: &str);

    /// Discard everything and start over from the defaults.
    fn reset(&mut self);
}

impl BlueprintExt for Blueprint {
    fn has_product(&self) -> bool {
        !self.product.is_empty()
    }

    fn name_product(&mut self, product: &str) -> bool {
        if self.has_product() {
            return false;
        }
        self.product = product.to_string();
        self.title = format!("{product} Ad Campaign");
        true
    }

    fn add_asset(&mut self, name: &str) {
        self.assets.push(name.to_string());
    }

    fn needs_ai_defaults(&self) -> bool {
        self.target_audience.is_empty() || self.ad_tone.is_empty() || self.scenes.is_empty()
    }

    fn apply_ai_defaults(&mut self, defaults: &AiDefaults) {
        self.target_audience = defaults.target_audience.clone();
        self.ad_tone = defaults.ad_tone.clone();
        self.scenes = defaults.scenes.clone();
    }

    fn rename(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn reset(&mut self) {
        *self = Blueprint::default();
    }
}

/// Seed a blueprint from a gallery template.
///
/// Takes the template's title and scenes; product, audience, and tone are
/// left for the conversation to fill in.
pub fn blueprint_from_template(template: &Template) -> Blueprint {
    Blueprint {
        title: template.title.clone(),
        scenes: template.scenes.clone(),
        ..Blueprint::default()
    }
}

// ---------------------------------------------------------------------------
// Panel view
// ---------------------------------------------------------------------------

/// One labelled field of the blueprint panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelField {
    pub label: &'static str,
    pub value: String,
    pub hint: Option<&'static str>,
}

/// Display-ready rendering of a blueprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintPanel {
    pub title: String,
    pub fields: Vec<PanelField>,
    pub assets: Vec<String>,
    pub scenes: Vec<Scene>,
    /// Shown instead of the asset list when it is empty.
    pub assets_placeholder: Option<&'static str>,
    /// Shown instead of the scene list when it is empty.
    pub scenes_placeholder: Option<&'static str>,
}

impl BlueprintPanel {
    pub fn new(blueprint: &Blueprint, can_generate: bool) -> Self {
        let generated_field = |label: &'static str, value: &str| PanelField {
            label,
            value: or_placeholder(value),
            hint: (value.is_empty() && can_generate).then_some(AI_FIELD_HINT),
        };

        let fields = vec![
            PanelField {
                label: "Product",
                value: or_placeholder(&blueprint.product),
                hint: None,
            },
            generated_field("Target Audience", &blueprint.target_audience),
            generated_field("Ad Tone", &blueprint.ad_tone),
        ];

        let scenes_placeholder = match (blueprint.scenes.is_empty(), can_generate) {
            (false, _) => None,
            (true, true) => Some("Scenes will be AI-generated based on product type"),
            (true, false) => Some("No scenes defined"),
        };

        Self {
            title: blueprint.title.clone(),
            fields,
            assets: blueprint.assets.clone(),
            scenes: blueprint.scenes.clone(),
            assets_placeholder: blueprint.assets.is_empty().then_some("No assets uploaded"),
            scenes_placeholder,
        }
    }
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designer::script::ai_defaults;
    use adstudio_types::template::TemplateKind;

    #[test]
    fn test_name_product_sets_title_once() {
        let mut blueprint = Blueprint::default();

        assert!(blueprint.name_product("Cold Brew"));
        assert_eq!(blueprint.product, "Cold Brew");
        assert_eq!(blueprint.title, "Cold Brew Ad Campaign");

        assert!(!blueprint.name_product("Espresso"));
        assert_eq!(blueprint.product, "Cold Brew");
        assert_eq!(blueprint.title, "Cold Brew Ad Campaign");
    }

    #[test]
    fn test_needs_ai_defaults_until_all_three_present() {
        let mut blueprint = Blueprint::default();
        assert!(blueprint.needs_ai_defaults());

        blueprint.target_audience = "Runners".to_string();
        blueprint.ad_tone = "Upbeat".to_string();
        assert!(blueprint.needs_ai_defaults());

        blueprint.scenes.push(Scene::new("Track at dawn", "Go further."));
        assert!(!blueprint.needs_ai_defaults());
    }

    #[test]
    fn test_apply_ai_defaults_overwrites_fields() {
        let mut blueprint = Blueprint::default();
        blueprint.ad_tone = "Quirky".to_string();
        blueprint.add_asset("logo.png");

        blueprint.apply_ai_defaults(&ai_defaults());

        assert_eq!(blueprint.ad_tone, "Modern and professional");
        assert_eq!(blueprint.scenes.len(), 2);
        // Assets are not part of the defaults
        assert_eq!(blueprint.assets, vec!["logo.png".to_string()]);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut blueprint = Blueprint::default();
        blueprint.name_product("Cold Brew");
        blueprint.add_asset("logo.png");
        blueprint.rename("Summer Push");

        blueprint.reset();

        assert_eq!(blueprint, Blueprint::default());
        assert!(blueprint.name_product("Espresso"));
    }

    #[test]
    fn test_blueprint_from_template_copies_title_and_scenes() {
        let template = Template {
            id: "1".to_string(),
            title: "Energetic Fitness Campaign".to_string(),
            description: String::new(),
            kind: TemplateKind::FullAd,
            industry: "Fitness".to_string(),
            style: "Dynamic".to_string(),
            thumbnail: String::new(),
            scenes: vec![Scene::new("Montage", "Transform your life.")],
        };

        let blueprint = blueprint_from_template(&template);
        assert_eq!(blueprint.title, "Energetic Fitness Campaign");
        assert_eq!(blueprint.scenes.len(), 1);
        assert!(!blueprint.has_product());
    }

    #[test]
    fn test_panel_before_product() {
        let panel = BlueprintPanel::new(&Blueprint::default(), false);

        assert_eq!(panel.title, "Untitled Ad");
        assert!(panel.fields.iter().all(|f| f.value == NOT_SPECIFIED));
        assert!(panel.fields.iter().all(|f| f.hint.is_none()));
        assert_eq!(panel.assets_placeholder, Some("No assets uploaded"));
        assert_eq!(panel.scenes_placeholder, Some("No scenes defined"));
    }

    #[test]
    fn test_panel_hints_once_generation_possible() {
        let mut blueprint = Blueprint::default();
        blueprint.name_product("Cold Brew");

        let panel = BlueprintPanel::new(&blueprint, true);

        assert_eq!(panel.fields[0].value, "Cold Brew");
        assert_eq!(panel.fields[0].hint, None);
        assert_eq!(panel.fields[1].hint, Some(AI_FIELD_HINT));
        assert_eq!(panel.fields[2].hint, Some(AI_FIELD_HINT));
        assert_eq!(
            panel.scenes_placeholder,
            Some("Scenes will be AI-generated based on product type")
        );
    }

    #[test]
    fn test_panel_after_defaults_has_no_placeholders() {
        let mut blueprint = Blueprint::default();
        blueprint.name_product("Cold Brew");
        blueprint.apply_ai_defaults(&ai_defaults());

        let panel = BlueprintPanel::new(&blueprint, true);

        assert!(panel.fields.iter().all(|f| f.hint.is_none()));
        assert_eq!(panel.scenes.len(), 2);
        assert_eq!(panel.scenes_placeholder, None);
    }
}
