use std::collections::BTreeMap;

use crate::{
    catalog::model::{Asset, AssetStyle, AssetType},
    foundation::error::{WardrobeError, WardrobeResult},
};

/// In-memory asset catalog keyed by asset id.
///
/// Iteration order is catalog insertion order so listings stay stable.
#[derive(Clone, Debug, Default)]
pub struct AssetCatalog {
    order: Vec<String>,
    by_id: BTreeMap<String, Asset>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records, rejecting duplicate or malformed entries.
    pub fn from_assets(assets: impl IntoIterator<Item = Asset>) -> WardrobeResult<Self> {
        let mut out = Self::new();
        for asset in assets {
            out.insert(asset)?;
        }
        Ok(out)
    }

    pub fn insert(&mut self, asset: Asset) -> WardrobeResult<()> {
        if asset.id.trim().is_empty() {
            return Err(WardrobeError::validation("asset id must be non-empty"));
        }
        if self.by_id.contains_key(&asset.id) {
            return Err(WardrobeError::validation(format!(
                "duplicate asset id '{}'",
                asset.id
            )));
        }
        if asset.kind.is_base_figure() && asset.kind.subtype.is_some() {
            return Err(WardrobeError::validation(format!(
                "base figure '{}' must not carry a subtype",
                asset.id
            )));
        }
        self.order.push(asset.id.clone());
        self.by_id.insert(asset.id.clone(), asset);
        Ok(())
    }

    /// Remove a record. Placed layers referencing it are unaffected.
    pub fn remove(&mut self, id: &str) -> Option<Asset> {
        let removed = self.by_id.remove(id)?;
        self.order.retain(|k| k != id);
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> + '_ {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn by_type(&self, asset_type: AssetType) -> impl Iterator<Item = &Asset> + '_ {
        self.iter().filter(move |a| a.kind.asset_type == asset_type)
    }

    pub fn by_style(&self, style: AssetStyle) -> impl Iterator<Item = &Asset> + '_ {
        self.iter().filter(move |a| a.style == style)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/store.rs"]
mod tests;
