//! Template gallery queries.

use adstudio_types::error::CatalogError;
use adstudio_types::template::{Template, TemplateFilter};

use super::matches_search;

/// Industry facet values offered by the gallery filter.
pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Fitness",
    "Food & Beverage",
    "Fashion",
    "Real Estate",
];

/// Style facet values offered by the gallery filter.
pub const STYLES: &[&str] = &["Minimalist", "Dynamic", "Cinematic", "Casual", "Professional"];

/// In-memory template gallery.
#[derive(Debug, Default)]
pub struct TemplateGallery {
    templates: Vec<Template>,
}

impl TemplateGallery {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Templates matching every set facet and the search text.
    ///
    /// Facets compare case-insensitively; search looks at title and
    /// description.
    pub fn search(&self, filter: &TemplateFilter) -> Vec<&Template> {
        let search = filter.search.as_deref().unwrap_or("");
        self.templates
            .iter()
            .filter(|t| facet_matches(filter.industry.as_deref(), &t.industry))
            .filter(|t| facet_matches(filter.style.as_deref(), &t.style))
            .filter(|t| filter.kind.is_none_or(|kind| kind == t.kind))
            .filter(|t| matches_search(&t.title, search) || matches_search(&t.description, search))
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<&Template, CatalogError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::TemplateNotFound(id.to_string()))
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }
}

fn facet_matches(wanted: Option<&str>, value: &str) -> bool {
    wanted.is_none_or(|w| w.eq_ignore_ascii_case(value))
}

/// Text copied by "copy prompt" for one template: each scene as a
/// visual/voice-over pair.
pub fn prompt_text(template: &Template) -> String {
    template
        .scenes
        .iter()
        .enumerate()
        .map(|(i, scene)| {
            format!(
                "Scene {}\nVisual: {}\nVoice over: {}",
                i + 1,
                scene.visual,
                scene.voice_over
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use adstudio_types::designer::Scene;
    use adstudio_types::template::TemplateKind;

    fn template(id: &str, title: &str, kind: TemplateKind, industry: &str, style: &str) -> Template {
        Template {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} for {industry} brands"),
            kind,
            industry: industry.to_string(),
            style: style.to_string(),
            thumbnail: String::new(),
            scenes: vec![
                Scene::new("Close-up", "Introducing the future."),
                Scene::new("Split screen", "Seamlessly integrate."),
            ],
        }
    }

    fn gallery() -> TemplateGallery {
        TemplateGallery::new(vec![
            template("1", "Modern Tech Product Launch", TemplateKind::FullAd, "Technology", "Minimalist"),
            template("2", "Energetic Fitness Campaign", TemplateKind::FullAd, "Fitness", "Dynamic"),
            template("3", "Cafe Opener", TemplateKind::Scene, "Food & Beverage", "Casual"),
        ])
    }

    fn ids(items: &[&Template]) -> Vec<String> {
        items.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        assert_eq!(ids(&gallery().search(&TemplateFilter::default())), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_facets_combine() {
        let gallery = gallery();
        let filter = TemplateFilter {
            industry: Some("fitness".to_string()),
            kind: Some(TemplateKind::FullAd),
            ..Default::default()
        };
        assert_eq!(ids(&gallery.search(&filter)), vec!["2"]);

        let none = TemplateFilter {
            industry: Some("Fitness".to_string()),
            style: Some("Minimalist".to_string()),
            ..Default::default()
        };
        assert!(gallery.search(&none).is_empty());
    }

    #[test]
    fn test_search_covers_description() {
        let gallery = gallery();
        let filter = TemplateFilter {
            search: Some("beverage".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&gallery.search(&filter)), vec!["3"]);
    }

    #[test]
    fn test_get_unknown_template() {
        assert!(matches!(
            gallery().get("99"),
            Err(CatalogError::TemplateNotFound(id)) if id == "99"
        ));
    }

    #[test]
    fn test_prompt_text_numbers_scenes() {
        let gallery = gallery();
        let text = prompt_text(gallery.get("1").unwrap());
        assert!(text.starts_with("Scene 1\nVisual: Close-up\nVoice over: Introducing the future."));
        assert!(text.contains("\n\nScene 2\n"));
    }
}
