//! Canned agent lines and AI-suggested blueprint defaults.
//!
//! Nothing here is computed from the conversation: the "AI" suggestions are
//! a fixed table, and the replies only interpolate the name the user typed
//! or the file they uploaded.

use adstudio_types::designer::Scene;

/// Opening message of every designer conversation.
pub const GREETING: &str = "Hi! Let's create your video ad. What's the product or service we're \
promoting today? Just the name is enough to get started, and I can help suggest the rest!";

/// Posted immediately when generation is requested with gaps in the blueprint.
pub const GENERATION_NOTICE: &str = "I'll generate a complete draft using AI-suggested content \
based on your product. This will include target audience, tone, and scene descriptions. You can \
always modify these later.";

/// Captions the generating view cycles through.
pub const LOADING_CAPTIONS: [&str; 6] = [
    "Just a few moments more...",
    "We're generating something amazing for you!",
    "Crafting your unique visuals...",
    "Assembling the perfect scenes...",
    "Our AI is working its magic!",
    "Polishing the final details...",
];

/// Reply to the first product-naming turn.
pub fn product_acknowledgement(product: &str) -> String {
    format!(
        "Great! I have the product name \"{product}\". I can generate a complete draft video \
         using AI to create suitable advertising scenes and scripts, or we can define more \
         specific details together. Would you like me to generate a draft now, or shall we \
         customize the details?"
    )
}

/// Reply to an asset upload.
pub fn asset_acknowledgement(file_name: &str) -> String {
    format!(
        "Perfect! I've received your {file_name}. We can use this in the video. Would you like \
         to upload more assets, or shall we proceed with generating the video?"
    )
}

/// Caption shown on the given rotation tick (wraps around).
pub fn loading_caption(tick: usize) -> &'static str {
    LOADING_CAPTIONS[tick % LOADING_CAPTIONS.len()]
}

// ---------------------------------------------------------------------------
// AiDefaults
// ---------------------------------------------------------------------------

/// The blueprint fields the mocked agent fills in on generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiDefaults {
    pub target_audience: String,
    pub ad_tone: String,
    pub scenes: Vec<Scene>,
}

/// Return the AI-suggested defaults.
///
/// | Field    | Value                                   |
/// |----------|-----------------------------------------|
/// | audience | Young professionals, 25-40 years old    |
/// | tone     | Modern and professional                 |
/// | scenes   | opening product shot, lifestyle montage |
pub fn ai_defaults() -> AiDefaults {
    AiDefaults {
        target_audience: "Young professionals, 25-40 years old".to_string(),
        ad_tone: "Modern and professional".to_string(),
        scenes: vec![
            Scene::new(
                "Opening shot showcasing the product in a minimalist setting",
                "Introducing a revolutionary way to experience your daily routine.",
            ),
            Scene::new(
                "Lifestyle shots of people using the product in various settings",
                "See how our product seamlessly integrates into your life.",
            ),
        ],
    }
}
