use crate::{
    catalog::model::{Asset, AssetKind, AssetStyle, Positioning},
    foundation::error::{WardrobeError, WardrobeResult},
    foundation::hash::record_id,
};

const LAYER_SUFFIX: &str =
    ". This should be designed as a transparent PNG that can be layered on top of a character.";

/// What to ask the generation service for.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerationRequest {
    #[serde(flatten)]
    pub kind: AssetKind,
    #[serde(default)]
    pub style: AssetStyle,
    /// Free-text details from the user.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Image of the current base figure, for the service's analysis step.
    #[serde(default)]
    pub reference_image: Option<String>,
}

impl GenerationRequest {
    pub fn new(kind: AssetKind, style: AssetStyle) -> Self {
        Self {
            kind,
            style,
            prompt: None,
            reference_image: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_reference_image(mut self, image_ref: impl Into<String>) -> Self {
        self.reference_image = Some(image_ref.into());
        self
    }

    /// Prompt sent to the service.
    ///
    /// Everything other than a base figure is asked for as a transparent
    /// layer.
    pub fn prompt_text(&self) -> String {
        let subject = match self.kind.known_subtype() {
            Some(sub) => sub.as_str(),
            None => self.kind.asset_type.as_str(),
        }
        .replace('-', " ");

        let mut text = format!("Generate a {} style {subject}", self.style.as_str());
        if let Some(p) = self.prompt.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            text.push_str(" with these specifications: ");
            text.push_str(p);
        }
        if !self.kind.is_base_figure() {
            text.push_str(LAYER_SUFFIX);
        }
        text
    }
}

/// Service response: the image plus an optional placement hint from the
/// service's analysis of the reference figure.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedImage {
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub positioning: Option<Positioning>,
}

/// External image-generation collaborator.
///
/// Timeouts and retries belong to the implementation.
pub trait AssetGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> WardrobeResult<GeneratedImage>;
}

/// Stamp a catalog record for a generated image.
pub fn asset_from_generation(
    request: &GenerationRequest,
    image: GeneratedImage,
    now_ms: u64,
) -> WardrobeResult<Asset> {
    if image.url.trim().is_empty() {
        return Err(WardrobeError::generation("service returned an empty image url"));
    }
    let id = record_id(
        "gen",
        &[&image.url, request.kind.asset_type.as_str()],
        now_ms,
    );
    let mut asset = Asset::new(
        id,
        format!("AI {}", request.kind.label()),
        request.kind,
        image.url,
    )
    .with_style(request.style)
    .with_tags([
        "ai",
        request.style.as_str(),
        request.kind.asset_type.as_str(),
    ]);
    if let Some(thumb) = image.thumbnail_url {
        asset.thumbnail_url = thumb;
    }
    asset.positioning = image.positioning;
    asset.created_at_ms = now_ms;
    asset.modified_at_ms = now_ms;
    Ok(asset)
}

#[cfg(test)]
#[path = "../../tests/unit/generate/request.rs"]
mod tests;
