//! Draw-order bands for character layers.
//!
//! Every layer carries a [`ZIndex`] derived from its [`AssetKind`] through
//! [`rank`]. This module is the only place a rank is computed; the layer store
//! and the composer consume ranks but never derive them.
//!
//! Known approximation: `hair-full` conceptually occupies both the back and
//! front hair bands. It is placed as a single visual unit at the front band,
//! so its back portion draws above clothing and outerwear.

use crate::{
    catalog::model::{AssetKind, AssetSubtype, AssetType},
    foundation::core::ZIndex,
};

/// Compositing bands from back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Band {
    BaseFigure,
    Undergarment,
    ClothingBottom,
    ClothingDress,
    ClothingTop,
    HairBack,
    Outerwear,
    Jewelry,
    Scarf,
    Bag,
    Watch,
    FacialHair,
    /// Reserved; no subtype maps here yet.
    FaceMakeup,
    FaceMisc,
    Glasses,
    HairFront,
    Hat,
}

impl Band {
    /// All bands, back to front.
    pub const ALL: [Band; 17] = [
        Band::BaseFigure,
        Band::Undergarment,
        Band::ClothingBottom,
        Band::ClothingDress,
        Band::ClothingTop,
        Band::HairBack,
        Band::Outerwear,
        Band::Jewelry,
        Band::Scarf,
        Band::Bag,
        Band::Watch,
        Band::FacialHair,
        Band::FaceMakeup,
        Band::FaceMisc,
        Band::Glasses,
        Band::HairFront,
        Band::Hat,
    ];

    pub fn z_index(self) -> ZIndex {
        ZIndex(match self {
            Band::BaseFigure => 0.0,
            Band::Undergarment => 2.0,
            Band::ClothingBottom => 3.0,
            Band::ClothingDress => 3.5,
            Band::ClothingTop => 4.0,
            Band::HairBack => 5.0,
            Band::Outerwear => 6.0,
            Band::Jewelry => 7.0,
            Band::Scarf => 8.0,
            Band::Bag => 9.0,
            Band::Watch => 10.0,
            Band::FacialHair => 11.0,
            Band::FaceMakeup => 12.0,
            Band::FaceMisc => 13.0,
            Band::Glasses => 14.0,
            Band::HairFront => 15.0,
            Band::Hat => 16.0,
        })
    }
}

/// Band for a (type, subtype) pair.
///
/// Missing, unrecognized, or foreign subtypes take the per-type default:
/// hair → back, clothing → top, accessory → face-misc.
pub fn band_for(kind: AssetKind) -> Band {
    use AssetSubtype::*;
    match (kind.asset_type, kind.known_subtype()) {
        (AssetType::BaseFigure, _) => Band::BaseFigure,

        (AssetType::Hair, Some(HairFront | HairFull)) => Band::HairFront,
        (AssetType::Hair, _) => Band::HairBack,

        (AssetType::Clothing, Some(ClothingBottom)) => Band::ClothingBottom,
        (AssetType::Clothing, Some(ClothingDress)) => Band::ClothingDress,
        (AssetType::Clothing, Some(ClothingOuterwear)) => Band::Outerwear,
        (AssetType::Clothing, Some(ClothingUndergarment)) => Band::Undergarment,
        (AssetType::Clothing, _) => Band::ClothingTop,

        (AssetType::Accessory, Some(Glasses)) => Band::Glasses,
        (AssetType::Accessory, Some(Hat)) => Band::Hat,
        (AssetType::Accessory, Some(Jewelry)) => Band::Jewelry,
        (AssetType::Accessory, Some(Bag)) => Band::Bag,
        (AssetType::Accessory, Some(Scarf)) => Band::Scarf,
        (AssetType::Accessory, Some(Watch)) => Band::Watch,
        (AssetType::Accessory, _) => Band::FaceMisc,

        (AssetType::FacialHair, _) => Band::FacialHair,
    }
}

/// Draw-order rank for a (type, subtype) pair. Total; never fails.
pub fn rank(kind: AssetKind) -> ZIndex {
    band_for(kind).z_index()
}

/// Stable ascending sort by rank; ties keep their relative order.
pub fn sort_by_rank<T>(items: &mut [T], z: impl Fn(&T) -> ZIndex) {
    items.sort_by(|a, b| z(a).total_cmp(z(b)));
}

/// First index whose rank strictly exceeds `z`; inserting there keeps the
/// sequence ordered and puts the new item after equal-rank predecessors.
pub fn insertion_index<T>(items: &[T], z: ZIndex, z_of: impl Fn(&T) -> ZIndex) -> usize {
    items
        .iter()
        .position(|it| z_of(it).total_cmp(z).is_gt())
        .unwrap_or(items.len())
}

#[cfg(test)]
#[path = "../../tests/unit/order/z_order.rs"]
mod tests;
