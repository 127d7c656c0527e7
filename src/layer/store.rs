use std::collections::HashMap;

use crate::{
    foundation::core::{Transform, ZIndex},
    foundation::error::{WardrobeError, WardrobeResult},
    layer::model::{Direction, Layer, LayerId, NewLayer},
    order::z_order,
    surface::{DrawingSurface, SurfaceHandle},
};

/// Raised when a manual move puts a lower band above a higher one (or the
/// reverse). The move still happens.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OrderAdvisory {
    pub layer: LayerId,
    pub layer_z: ZIndex,
    pub neighbor: LayerId,
    pub neighbor_z: ZIndex,
    pub direction: Direction,
}

impl std::fmt::Display for OrderAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (above, above_z, below, below_z) = match self.direction {
            Direction::Forward => (self.layer, self.layer_z, self.neighbor, self.neighbor_z),
            Direction::Backward => (self.neighbor, self.neighbor_z, self.layer, self.layer_z),
        };
        write!(
            f,
            "{above} (z {above_z}) now draws above {below} (z {below_z}), against the band order"
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct MoveOutcome {
    /// False when the layer was already at the end of the stack.
    pub moved: bool,
    pub advisory: Option<OrderAdvisory>,
}

/// Authoritative ordered sequence of placed layers.
///
/// Index 0 is the bottom of the visual stack. Without manual moves the
/// sequence is non-decreasing in z-index regardless of insertion order.
#[derive(Debug, Default)]
pub struct LayerStore {
    layers: Vec<Layer>,
    handles: HashMap<LayerId, SurfaceHandle>,
    active: Option<LayerId>,
    next_id: u64,
    order_overridden: bool,
}

impl LayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn handle(&self, id: LayerId) -> Option<SurfaceHandle> {
        self.handles.get(&id).copied()
    }

    pub fn active(&self) -> Option<LayerId> {
        self.active
    }

    /// True once a manual move has broken band order; cleared by
    /// [`LayerStore::sort_by_z_index`].
    pub fn order_overridden(&self) -> bool {
        self.order_overridden
    }

    pub fn is_z_ordered(&self) -> bool {
        self.layers
            .windows(2)
            .all(|w| w[0].z_index.total_cmp(w[1].z_index).is_le())
    }

    fn index_of(&self, id: LayerId) -> WardrobeResult<usize> {
        self.layers
            .iter()
            .position(|l| l.id == id)
            .ok_or(WardrobeError::UnknownLayer(id))
    }

    fn allocate_id(&mut self) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn sync_order(&self, surface: &mut dyn DrawingSurface) {
        let handles: Vec<_> = self
            .layers
            .iter()
            .filter_map(|l| self.handles.get(&l.id).copied())
            .collect();
        surface.reorder(&handles);
    }

    fn attach(&mut self, surface: &mut dyn DrawingSurface, idx: usize) {
        let layer = &self.layers[idx];
        let handle = surface.add_drawable(&layer.image_ref, &layer.transform);
        if !layer.visible {
            surface.set_visible(handle, false);
        }
        if layer.locked {
            surface.set_interactive(handle, false);
        }
        self.handles.insert(layer.id, handle);
    }

    fn build(&mut self, new: NewLayer, visible: bool, locked: bool) -> Layer {
        Layer {
            id: self.allocate_id(),
            name: new.name,
            asset_id: new.asset_id,
            kind: new.kind,
            image_ref: new.image_ref,
            visible,
            locked,
            transform: new.transform.normalized(),
            z_index: new.z_index,
            anchor_points: new.anchor_points,
        }
    }

    /// Insert before the first layer whose z-index exceeds the new one, so
    /// equal ranks keep arrival order. The new layer becomes active.
    pub fn insert(&mut self, surface: &mut dyn DrawingSurface, new: NewLayer) -> &Layer {
        let layer = self.build(new, true, false);
        let idx = z_order::insertion_index(&self.layers, layer.z_index, |l| l.z_index);
        let id = layer.id;
        tracing::debug!(%id, z = %layer.z_index, idx, "insert layer");

        self.layers.insert(idx, layer);
        self.attach(surface, idx);
        self.active = Some(id);
        self.sync_order(surface);
        surface.render();
        &self.layers[idx]
    }

    /// Append at the top without consulting z-index, keeping the given flags.
    /// Used for bulk restore; call [`LayerStore::sort_by_z_index`] to repair.
    pub fn restore(
        &mut self,
        surface: &mut dyn DrawingSurface,
        new: NewLayer,
        visible: bool,
        locked: bool,
    ) -> LayerId {
        let layer = self.build(new, visible, locked);
        let id = layer.id;
        self.layers.push(layer);
        self.attach(surface, self.layers.len() - 1);
        if !self.is_z_ordered() {
            self.order_overridden = true;
        }
        id
    }

    pub fn remove(
        &mut self,
        surface: &mut dyn DrawingSurface,
        id: LayerId,
    ) -> WardrobeResult<Layer> {
        let idx = self.index_of(id)?;
        let layer = self.layers.remove(idx);
        if let Some(handle) = self.handles.remove(&id) {
            surface.remove_drawable(handle);
        }
        if self.active == Some(id) {
            self.active = None;
        }
        if self.order_overridden && self.is_z_ordered() {
            self.order_overridden = false;
        }
        surface.render();
        Ok(layer)
    }

    pub fn select(&mut self, id: LayerId) -> WardrobeResult<()> {
        self.index_of(id)?;
        self.active = Some(id);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.active = None;
    }

    pub fn set_visible(
        &mut self,
        surface: &mut dyn DrawingSurface,
        id: LayerId,
        visible: bool,
    ) -> WardrobeResult<()> {
        let idx = self.index_of(id)?;
        self.layers[idx].visible = visible;
        if let Some(handle) = self.handle(id) {
            surface.set_visible(handle, visible);
        }
        surface.render();
        Ok(())
    }

    /// Locked layers are non-interactive on the surface.
    pub fn set_locked(
        &mut self,
        surface: &mut dyn DrawingSurface,
        id: LayerId,
        locked: bool,
    ) -> WardrobeResult<()> {
        let idx = self.index_of(id)?;
        self.layers[idx].locked = locked;
        if let Some(handle) = self.handle(id) {
            surface.set_interactive(handle, !locked);
        }
        surface.render();
        Ok(())
    }

    /// UI-driven transform edit, pushed to the surface. Locked layers refuse.
    pub fn set_transform(
        &mut self,
        surface: &mut dyn DrawingSurface,
        id: LayerId,
        transform: Transform,
    ) -> WardrobeResult<()> {
        let idx = self.index_of(id)?;
        if self.layers[idx].locked {
            return Err(WardrobeError::validation(format!("{id} is locked")));
        }
        let transform = transform.normalized();
        self.layers[idx].transform = transform;
        if let Some(handle) = self.handle(id) {
            surface.set_transform(handle, &transform);
        }
        surface.render();
        Ok(())
    }

    /// Surface-originated notification: the drawable was dragged, scaled or
    /// rotated. Only the store's record is updated.
    pub fn on_transform_changed(
        &mut self,
        id: LayerId,
        transform: Transform,
    ) -> WardrobeResult<()> {
        let idx = self.index_of(id)?;
        self.layers[idx].transform = transform.normalized();
        Ok(())
    }

    /// Swap with the neighbor one step toward (`Forward`) or away from
    /// (`Backward`) the viewer. Crossing bands is allowed but advised.
    pub fn move_relative(
        &mut self,
        surface: &mut dyn DrawingSurface,
        id: LayerId,
        direction: Direction,
    ) -> WardrobeResult<MoveOutcome> {
        let idx = self.index_of(id)?;
        let neighbor_idx = match direction {
            Direction::Forward if idx + 1 < self.layers.len() => idx + 1,
            Direction::Backward if idx > 0 => idx - 1,
            _ => return Ok(MoveOutcome::default()),
        };

        let layer_z = self.layers[idx].z_index;
        let neighbor_z = self.layers[neighbor_idx].z_index;
        let crosses = match direction {
            Direction::Forward => layer_z.total_cmp(neighbor_z).is_lt(),
            Direction::Backward => layer_z.total_cmp(neighbor_z).is_gt(),
        };
        let advisory = crosses.then(|| OrderAdvisory {
            layer: id,
            layer_z,
            neighbor: self.layers[neighbor_idx].id,
            neighbor_z,
            direction,
        });
        if let Some(adv) = &advisory {
            tracing::warn!(%adv, "manual reorder overrides band order");
        }

        self.layers.swap(idx, neighbor_idx);
        self.order_overridden = !self.is_z_ordered();
        self.sync_order(surface);
        surface.render();

        Ok(MoveOutcome {
            moved: true,
            advisory,
        })
    }

    /// Stable-sort by z-index and rebuild the surface's stacking by removing
    /// and re-adding every drawable in the new order.
    pub fn sort_by_z_index(&mut self, surface: &mut dyn DrawingSurface) {
        z_order::sort_by_rank(&mut self.layers, |l| l.z_index);

        for layer in &self.layers {
            if let Some(handle) = self.handles.remove(&layer.id) {
                surface.remove_drawable(handle);
            }
        }
        for idx in 0..self.layers.len() {
            self.attach(surface, idx);
        }
        self.sync_order(surface);
        self.order_overridden = false;
        surface.render();
    }

    /// Remove every layer and clear the selection.
    pub fn clear(&mut self, surface: &mut dyn DrawingSurface) {
        for layer in self.layers.drain(..) {
            if let Some(handle) = self.handles.remove(&layer.id) {
                surface.remove_drawable(handle);
            }
        }
        self.handles.clear();
        self.active = None;
        self.order_overridden = false;
        surface.render();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/store.rs"]
mod tests;
