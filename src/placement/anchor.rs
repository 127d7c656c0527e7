use crate::{
    catalog::model::{AnchorName, AnchorPoints, Asset, AssetKind, AssetSubtype, AssetType},
    foundation::core::{Placement, Point},
};

/// Vertical offsets of the default anchor set, relative to the figure's own
/// placement. Used when a reference figure has no computed anchor map.
const DEFAULT_ANCHOR_OFFSETS: [(AnchorName, f64); 15] = [
    (AnchorName::Head, -100.0),
    (AnchorName::Ears, -90.0),
    (AnchorName::Eyes, -90.0),
    (AnchorName::Nose, -82.0),
    (AnchorName::Mouth, -75.0),
    (AnchorName::Neck, -65.0),
    (AnchorName::Shoulders, -60.0),
    (AnchorName::Chest, -50.0),
    (AnchorName::Center, 0.0),
    (AnchorName::Waist, 20.0),
    (AnchorName::Hands, 40.0),
    (AnchorName::Hips, 50.0),
    (AnchorName::Knees, 150.0),
    (AnchorName::Ankles, 230.0),
    (AnchorName::Feet, 250.0),
];

/// Anchor set synthesized around `figure` for figures without an anchor map.
pub fn default_anchor_points(figure: Placement) -> AnchorPoints {
    DEFAULT_ANCHOR_OFFSETS
        .iter()
        .map(|&(name, dy)| (name, Point::new(figure.x, figure.y + dy)))
        .collect()
}

/// Landmark a dependent asset attaches to.
pub fn target_anchor(kind: AssetKind) -> AnchorName {
    use AssetSubtype::*;
    match (kind.asset_type, kind.known_subtype()) {
        (AssetType::BaseFigure, _) => AnchorName::Center,
        (AssetType::Hair, _) => AnchorName::Head,
        (AssetType::Clothing, Some(ClothingTop | ClothingDress)) => AnchorName::Chest,
        (AssetType::Clothing, Some(ClothingBottom)) => AnchorName::Hips,
        (AssetType::Clothing, Some(ClothingOuterwear)) => AnchorName::Shoulders,
        (AssetType::Clothing, Some(ClothingUndergarment)) => AnchorName::Waist,
        (AssetType::Accessory, Some(Glasses)) => AnchorName::Eyes,
        (AssetType::Accessory, Some(Hat)) => AnchorName::Head,
        (AssetType::Accessory, Some(Watch | Bag)) => AnchorName::Hands,
        (AssetType::Accessory, Some(Jewelry | Scarf)) => AnchorName::Neck,
        (AssetType::FacialHair, _) => AnchorName::Mouth,
        _ => AnchorName::Center,
    }
}

/// Multiplier applied to the reference figure's scale.
pub fn scale_multiplier(kind: AssetKind) -> f64 {
    match (kind.asset_type, kind.known_subtype()) {
        (AssetType::FacialHair, _) => 0.7,
        (AssetType::Accessory, Some(AssetSubtype::Glasses)) => 0.6,
        (AssetType::Accessory, Some(AssetSubtype::Hat)) => 0.8,
        _ => 1.0,
    }
}

/// How a placement was derived; reported alongside the placement for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementSource {
    /// The asset's own positioning hint.
    AssetHint,
    /// No reference figure; canvas default.
    CanvasDefault,
    /// Anchor point on the reference figure.
    Anchor(AnchorName),
    /// Reference figure's overall placement; its anchor map lacks the target.
    FigureFallback,
}

/// Suggested placement for `asset`.
///
/// Priority: the asset's own hint; canvas default when there is no reference
/// figure; the target anchor on the figure (its own map, or the default set
/// when it has none) with a per-type scale multiplier; the figure's overall
/// placement when its map lacks the target anchor.
///
/// `canvas_default` also stands in for a reference figure that carries no
/// positioning. Pure: neither asset nor figure is touched.
pub fn suggest_placement(
    asset: &Asset,
    reference: Option<&Asset>,
    canvas_default: Placement,
) -> (Placement, PlacementSource) {
    if let Some(hint) = &asset.positioning {
        return (hint.placement(), PlacementSource::AssetHint);
    }

    let Some(figure) = reference else {
        return (canvas_default, PlacementSource::CanvasDefault);
    };

    let figure_placement = figure
        .positioning
        .as_ref()
        .map(|p| p.placement())
        .unwrap_or(canvas_default);

    let target = target_anchor(asset.kind);
    let point = match figure.anchor_points() {
        Some(anchors) => anchors.get(target),
        None => default_anchor_points(figure_placement).get(target),
    };

    match point {
        Some(p) => (
            Placement::new(
                p.x,
                p.y,
                figure_placement.scale * scale_multiplier(asset.kind),
            ),
            PlacementSource::Anchor(target),
        ),
        None => (figure_placement, PlacementSource::FigureFallback),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/anchor.rs"]
mod tests;
