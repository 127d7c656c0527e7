use crate::{
    catalog::model::{AnchorPoints, AssetKind},
    foundation::core::{Transform, ZIndex},
};

/// Store-issued layer id. Distinct from the asset id it was placed from.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct LayerId(pub u64);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// A placed, mutable instance of an asset.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    /// Originating asset; `None` for layers restored without a catalog record.
    pub asset_id: Option<String>,
    pub kind: AssetKind,
    pub image_ref: String,
    pub visible: bool,
    pub locked: bool,
    pub transform: Transform,
    pub z_index: ZIndex,
    pub anchor_points: Option<AnchorPoints>,
}

/// Insertion request for [`LayerStore::insert`](crate::LayerStore::insert).
#[derive(Clone, Debug, PartialEq)]
pub struct NewLayer {
    pub name: String,
    pub asset_id: Option<String>,
    pub kind: AssetKind,
    pub image_ref: String,
    pub transform: Transform,
    pub z_index: ZIndex,
    pub anchor_points: Option<AnchorPoints>,
}

impl NewLayer {
    /// Request with no asset link and no anchors; the rank is taken as given.
    pub fn new(
        name: impl Into<String>,
        kind: AssetKind,
        image_ref: impl Into<String>,
        transform: Transform,
        z_index: ZIndex,
    ) -> Self {
        Self {
            name: name.into(),
            asset_id: None,
            kind,
            image_ref: image_ref.into(),
            transform,
            z_index,
            anchor_points: None,
        }
    }

    pub fn with_asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.asset_id = Some(asset_id.into());
        self
    }

    pub fn with_anchor_points(mut self, anchor_points: Option<AnchorPoints>) -> Self {
        self.anchor_points = anchor_points;
        self
    }
}

/// Visual direction for [`LayerStore::move_relative`](crate::LayerStore::move_relative).
///
/// Index 0 of the store is the bottom of the stack (drawn first).
/// `Forward` moves one step toward the viewer (index + 1), `Backward` one
/// step away (index - 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Forward,
    Backward,
}
