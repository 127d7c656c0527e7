use crate::{
    catalog::model::{AnchorPoints, AssetKind},
    foundation::core::{Transform, ZIndex},
    layer::model::Layer,
};

/// Snapshot of one layer inside a [`SavedCharacter`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacterLayer {
    pub name: String,
    #[serde(flatten)]
    pub kind: AssetKind,
    pub asset_id: Option<String>,
    pub image_ref: String,
    pub visible: bool,
    pub locked: bool,
    pub transform: Transform,
    pub z_index: ZIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_points: Option<AnchorPoints>,
}

impl From<&Layer> for CharacterLayer {
    fn from(l: &Layer) -> Self {
        Self {
            name: l.name.clone(),
            kind: l.kind,
            asset_id: l.asset_id.clone(),
            image_ref: l.image_ref.clone(),
            visible: l.visible,
            locked: l.locked,
            transform: l.transform,
            z_index: l.z_index,
            anchor_points: l.anchor_points.clone(),
        }
    }
}

/// A saved composition. Layers are stored bottom of the stack first.
///
/// Immutable apart from metadata edits (name, description, tags).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SavedCharacter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub layers: Vec<CharacterLayer>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at_ms: u64,
    pub modified_at_ms: u64,
}

/// Listing view of a saved character.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CharacterPreview {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub layer_count: usize,
    pub tags: Vec<String>,
    pub created_at_ms: u64,
    pub modified_at_ms: u64,
}

impl From<&SavedCharacter> for CharacterPreview {
    fn from(c: &SavedCharacter) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
            thumbnail: c.thumbnail.clone(),
            layer_count: c.layers.len(),
            tags: c.tags.clone(),
            created_at_ms: c.created_at_ms,
            modified_at_ms: c.modified_at_ms,
        }
    }
}

/// Metadata edit; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterEdit {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl SavedCharacter {
    pub fn apply(&mut self, edit: CharacterEdit, now_ms: u64) {
        if let Some(name) = edit.name {
            self.name = name;
        }
        if let Some(description) = edit.description {
            self.description = description;
        }
        if let Some(tags) = edit.tags {
            self.tags = tags;
        }
        self.modified_at_ms = now_ms;
    }
}
