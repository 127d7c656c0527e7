use std::collections::BTreeMap;

use crate::foundation::core::{Placement, Point};

/// Closed set of asset categories.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AssetType {
    BaseFigure,
    Hair,
    Clothing,
    Accessory,
    FacialHair,
}

impl AssetType {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::BaseFigure => "base-figure",
            AssetType::Hair => "hair",
            AssetType::Clothing => "clothing",
            AssetType::Accessory => "accessory",
            AssetType::FacialHair => "facial-hair",
        }
    }

    pub const ALL: [AssetType; 5] = [
        AssetType::BaseFigure,
        AssetType::Hair,
        AssetType::Clothing,
        AssetType::Accessory,
        AssetType::FacialHair,
    ];

    /// Subtypes that belong to this type. Empty for base figures.
    pub fn subtypes(self) -> &'static [AssetSubtype] {
        use AssetSubtype::*;
        match self {
            AssetType::BaseFigure => &[],
            AssetType::Hair => &[HairFront, HairBack, HairFull],
            AssetType::Clothing => &[
                ClothingTop,
                ClothingBottom,
                ClothingDress,
                ClothingOuterwear,
                ClothingUndergarment,
            ],
            AssetType::Accessory => &[Glasses, Hat, Jewelry, Bag, Scarf, Watch],
            AssetType::FacialHair => &[Mustache, Beard, Goatee, Sideburns],
        }
    }
}

/// Finer classification within an [`AssetType`].
///
/// Unknown strings deserialize into [`AssetSubtype::Unrecognized`]; every
/// resolver treats that variant like a missing subtype.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AssetSubtype {
    HairFront,
    HairBack,
    /// Spans both hair bands; ranked as the front band.
    HairFull,
    ClothingTop,
    ClothingBottom,
    ClothingDress,
    ClothingOuterwear,
    ClothingUndergarment,
    Glasses,
    Hat,
    Jewelry,
    Bag,
    Scarf,
    Watch,
    Mustache,
    Beard,
    Goatee,
    Sideburns,
    #[serde(other)]
    Unrecognized,
}

impl AssetSubtype {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetSubtype::HairFront => "hair-front",
            AssetSubtype::HairBack => "hair-back",
            AssetSubtype::HairFull => "hair-full",
            AssetSubtype::ClothingTop => "clothing-top",
            AssetSubtype::ClothingBottom => "clothing-bottom",
            AssetSubtype::ClothingDress => "clothing-dress",
            AssetSubtype::ClothingOuterwear => "clothing-outerwear",
            AssetSubtype::ClothingUndergarment => "clothing-undergarment",
            AssetSubtype::Glasses => "glasses",
            AssetSubtype::Hat => "hat",
            AssetSubtype::Jewelry => "jewelry",
            AssetSubtype::Bag => "bag",
            AssetSubtype::Scarf => "scarf",
            AssetSubtype::Watch => "watch",
            AssetSubtype::Mustache => "mustache",
            AssetSubtype::Beard => "beard",
            AssetSubtype::Goatee => "goatee",
            AssetSubtype::Sideburns => "sideburns",
            AssetSubtype::Unrecognized => "unrecognized",
        }
    }

    pub fn belongs_to(self, asset_type: AssetType) -> bool {
        asset_type.subtypes().contains(&self)
    }
}

/// Visual style tag. Only used for filtering and prompt text.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AssetStyle {
    #[default]
    Cartoon,
    Realistic,
    Anime,
    Minimalist,
}

impl AssetStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetStyle::Cartoon => "cartoon",
            AssetStyle::Realistic => "realistic",
            AssetStyle::Anime => "anime",
            AssetStyle::Minimalist => "minimalist",
        }
    }
}

/// The (type, subtype) pair every resolver keys on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AssetKind {
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<AssetSubtype>,
}

impl AssetKind {
    pub const BASE_FIGURE: AssetKind = AssetKind::bare(AssetType::BaseFigure);

    pub const fn new(asset_type: AssetType, subtype: AssetSubtype) -> Self {
        Self {
            asset_type,
            subtype: Some(subtype),
        }
    }

    pub const fn bare(asset_type: AssetType) -> Self {
        Self {
            asset_type,
            subtype: None,
        }
    }

    pub fn is_base_figure(self) -> bool {
        self.asset_type == AssetType::BaseFigure
    }

    /// Subtype if it is one the type actually owns, otherwise `None`.
    pub fn known_subtype(self) -> Option<AssetSubtype> {
        self.subtype.filter(|s| s.belongs_to(self.asset_type))
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.subtype {
            Some(sub) => write!(f, "{}/{}", self.asset_type.as_str(), sub.as_str()),
            None => f.write_str(self.asset_type.as_str()),
        }
    }
}

/// Named anatomical landmarks on a reference figure.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorName {
    Center,
    Head,
    Ears,
    Eyes,
    Nose,
    Mouth,
    Neck,
    Shoulders,
    Chest,
    Waist,
    Hands,
    Hips,
    Knees,
    Ankles,
    Feet,
}

/// Landmark name to canvas-space point.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AnchorPoints(BTreeMap<AnchorName, Point>);

impl AnchorPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: AnchorName, point: Point) -> Self {
        self.0.insert(name, point);
        self
    }

    pub fn insert(&mut self, name: AnchorName, point: Point) {
        self.0.insert(name, point);
    }

    pub fn get(&self, name: AnchorName) -> Option<Point> {
        self.0.get(&name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnchorName, Point)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(AnchorName, Point)> for AnchorPoints {
    fn from_iter<I: IntoIterator<Item = (AnchorName, Point)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Placement hints attached to an asset by catalog authors or by the
/// generation service's analysis step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Positioning {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_points: Option<AnchorPoints>,
}

impl Positioning {
    pub fn placement(&self) -> Placement {
        Placement::new(self.x, self.y, self.scale)
    }
}

/// Immutable asset descriptor. Edits produce a new record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: AssetKind,
    #[serde(default)]
    pub style: AssetStyle,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub created_at_ms: u64,
    #[serde(default)]
    pub modified_at_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positioning: Option<Positioning>,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: AssetKind,
        url: impl Into<String>,
    ) -> Self {
        let url = url.into();
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            style: AssetStyle::default(),
            thumbnail_url: url.clone(),
            url,
            tags: Vec::new(),
            colors: Vec::new(),
            created_at_ms: 0,
            modified_at_ms: 0,
            positioning: None,
        }
    }

    pub fn with_style(mut self, style: AssetStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_positioning(mut self, positioning: Positioning) -> Self {
        self.positioning = Some(positioning);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn anchor_points(&self) -> Option<&AnchorPoints> {
        self.positioning.as_ref()?.anchor_points.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
