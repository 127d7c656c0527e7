//! Built-in sample catalog.

use crate::{
    catalog::model::{
        AnchorName, AnchorPoints, Asset, AssetKind, AssetStyle, AssetSubtype, AssetType,
        Positioning,
    },
    catalog::store::AssetCatalog,
    foundation::core::Point,
};

const PLACEHOLDER_URL: &str = "https://placehold.co/600x400/3B82F6/FFFFFF/png";
const PLACEHOLDER_THUMB: &str = "https://placehold.co/200x200/3B82F6/FFFFFF/png";

fn entry(
    id: &str,
    name: &str,
    kind: AssetKind,
    style: AssetStyle,
    tags: &[&str],
    colors: &[&str],
) -> Asset {
    let mut a = Asset::new(id, name, kind, PLACEHOLDER_URL)
        .with_style(style)
        .with_tags(tags.iter().copied())
        .with_colors(colors.iter().copied());
    a.thumbnail_url = PLACEHOLDER_THUMB.to_string();
    a
}

fn cartoon_figure_anchors() -> AnchorPoints {
    AnchorPoints::new()
        .with(AnchorName::Center, Point::new(250.0, 300.0))
        .with(AnchorName::Head, Point::new(250.0, 195.0))
        .with(AnchorName::Eyes, Point::new(250.0, 210.0))
        .with(AnchorName::Mouth, Point::new(250.0, 228.0))
        .with(AnchorName::Neck, Point::new(250.0, 240.0))
        .with(AnchorName::Shoulders, Point::new(250.0, 248.0))
        .with(AnchorName::Chest, Point::new(250.0, 262.0))
        .with(AnchorName::Waist, Point::new(250.0, 318.0))
        .with(AnchorName::Hands, Point::new(250.0, 340.0))
        .with(AnchorName::Hips, Point::new(250.0, 350.0))
}

/// Sample assets: five base figures plus five of each dependent type.
///
/// `bd-1` carries a full anchor map; `bd-2`/`bd-3` only an overall placement;
/// the realistic figures carry nothing and fall back to canvas defaults.
#[rustfmt::skip]
pub fn sample_assets() -> Vec<Asset> {
    use AssetStyle::*;
    use AssetSubtype::*;
    use AssetType::*;

    let figure_placement = |anchors: Option<AnchorPoints>| Positioning {
        x: 250.0,
        y: 300.0,
        scale: 0.5,
        anchor_points: anchors,
    };

    vec![
        entry("bd-1", "Base Figure - Light Skin", AssetKind::BASE_FIGURE, Cartoon, &["light skin", "female"], &["#F5DEB3"])
            .with_positioning(figure_placement(Some(cartoon_figure_anchors()))),
        entry("bd-2", "Base Figure - Medium Skin", AssetKind::BASE_FIGURE, Cartoon, &["medium skin", "female"], &["#D2B48C"])
            .with_positioning(figure_placement(None)),
        entry("bd-3", "Base Figure - Dark Skin", AssetKind::BASE_FIGURE, Cartoon, &["dark skin", "female"], &["#8B4513"])
            .with_positioning(figure_placement(None)),
        entry("bd-4", "Base Figure - Light Skin", AssetKind::BASE_FIGURE, Realistic, &["light skin", "male"], &["#F5DEB3"]),
        entry("bd-5", "Base Figure - Medium Skin", AssetKind::BASE_FIGURE, Realistic, &["medium skin", "male"], &["#D2B48C"]),
        entry("h-1", "Short Curly - Black", AssetKind::new(Hair, HairFull), Cartoon, &["short", "curly", "black"], &["#000000"]),
        entry("h-2", "Long Straight - Blonde", AssetKind::new(Hair, HairBack), Cartoon, &["long", "straight", "blonde"], &["#FFD700"]),
        entry("h-3", "Medium Wavy - Brown", AssetKind::new(Hair, HairFront), Cartoon, &["medium", "wavy", "brown"], &["#8B4513"]),
        entry("h-4", "Short Spiky - Red", AssetKind::new(Hair, HairFront), Anime, &["short", "spiky", "red"], &["#FF0000"]),
        entry("h-5", "Long Flowing - Purple", AssetKind::new(Hair, HairBack), Anime, &["long", "flowing", "purple"], &["#800080"]),
        entry("c-1", "T-Shirt - White", AssetKind::new(Clothing, ClothingTop), Cartoon, &["t-shirt", "casual", "top"], &["#FFFFFF"]),
        entry("c-2", "Jeans - Blue", AssetKind::new(Clothing, ClothingBottom), Cartoon, &["jeans", "casual", "bottom"], &["#0000FF"]),
        entry("c-3", "Dress - Red", AssetKind::new(Clothing, ClothingDress), Cartoon, &["dress", "formal"], &["#FF0000"]),
        entry("c-4", "Jacket - Black", AssetKind::new(Clothing, ClothingOuterwear), Realistic, &["jacket", "outerwear"], &["#000000"]),
        entry("c-5", "Skirt - Green", AssetKind::new(Clothing, ClothingBottom), Realistic, &["skirt", "bottom"], &["#008000"]),
        entry("a-1", "Glasses - Round", AssetKind::new(Accessory, Glasses), Cartoon, &["glasses", "face"], &["#000000"]),
        entry("a-2", "Hat - Baseball Cap", AssetKind::new(Accessory, Hat), Cartoon, &["hat", "head"], &["#0000FF"]),
        entry("a-3", "Necklace - Gold", AssetKind::new(Accessory, Jewelry), Realistic, &["necklace", "jewelry"], &["#FFD700"]),
        entry("a-4", "Earrings - Silver", AssetKind::new(Accessory, Jewelry), Realistic, &["earrings", "jewelry"], &["#C0C0C0"]),
        entry("a-5", "Backpack - Red", AssetKind::new(Accessory, Bag), Cartoon, &["backpack", "bag"], &["#FF0000"]),
        entry("fh-1", "Full Beard - Brown", AssetKind::new(FacialHair, Beard), Cartoon, &["beard", "full"], &["#8B4513"]),
        entry("fh-2", "Mustache - Black", AssetKind::new(FacialHair, Mustache), Cartoon, &["mustache"], &["#000000"]),
        entry("fh-3", "Goatee - Gray", AssetKind::new(FacialHair, Goatee), Realistic, &["goatee"], &["#808080"]),
        entry("fh-4", "Stubble - Dark", AssetKind::bare(FacialHair), Realistic, &["stubble", "light"], &["#696969"]),
        entry("fh-5", "Sideburns - Red", AssetKind::new(FacialHair, Sideburns), Cartoon, &["sideburns"], &["#FF0000"]),
    ]
}

/// [`sample_assets`] as a catalog.
pub fn sample_catalog() -> AssetCatalog {
    let mut cat = AssetCatalog::new();
    for asset in sample_assets() {
        // Seed ids are unique by construction.
        if let Err(e) = cat.insert(asset) {
            tracing::warn!(error = %e, "skipping malformed seed asset");
        }
    }
    cat
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/seed.rs"]
mod tests;
