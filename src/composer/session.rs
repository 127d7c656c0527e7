use crate::{
    catalog::{model::{Asset, Positioning}, store::AssetCatalog},
    compat::rules::{CompatibilityReport, CompatibilityRules},
    composer::config::ComposerConfig,
    foundation::core::{Placement, Point, Transform, Vec2},
    foundation::error::{WardrobeError, WardrobeResult},
    foundation::hash::{record_id, unix_millis_now},
    generate::request::{AssetGenerator, GenerationRequest, asset_from_generation},
    layer::{
        model::{Direction, Layer, LayerId, NewLayer},
        store::{LayerStore, MoveOutcome},
    },
    order::z_order,
    persist::{
        model::{CharacterLayer, SavedCharacter},
        store::PersistenceStore,
    },
    placement::anchor::{PlacementSource, suggest_placement},
    surface::DrawingSurface,
};

/// Whether compatibility conflicts block an add.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddMode {
    Checked,
    /// User override. A conflicting base figure is replaced instead of
    /// stacked; other conflicts are ignored.
    Forced,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedLayer {
    pub layer: LayerId,
    pub placement: Placement,
    pub source: PlacementSource,
    /// Prior base figure removed to make room.
    pub replaced: Option<LayerId>,
    /// Advisories (and, for forced adds, the overridden conflicts).
    pub report: CompatibilityReport,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum AddOutcome {
    Placed(PlacedLayer),
    Rejected(CompatibilityReport),
    /// The canvas or reference figure changed while the add was in flight.
    Aborted,
}

impl AddOutcome {
    pub fn placed(&self) -> Option<&PlacedLayer> {
        match self {
            AddOutcome::Placed(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ContextEpoch {
    canvas: u64,
    reference: u64,
}

/// An add waiting on its image decode.
///
/// Obtained from [`Composer::begin_add`]; hand it back to
/// [`Composer::complete_add`] once the image is ready.
#[derive(Clone, Debug)]
pub struct AddTicket {
    asset: Asset,
    mode: AddMode,
    epoch: ContextEpoch,
}

impl AddTicket {
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn mode(&self) -> AddMode {
        self.mode
    }
}

#[derive(Clone, Debug)]
struct ReferenceFigure {
    layer: LayerId,
    asset: Asset,
}

/// One composer session: owns the layer store and drives the surface.
pub struct Composer<S: DrawingSurface> {
    config: ComposerConfig,
    surface: S,
    layers: LayerStore,
    rules: CompatibilityRules,
    reference: Option<ReferenceFigure>,
    epoch: ContextEpoch,
}

impl<S: DrawingSurface> Composer<S> {
    pub fn new(config: ComposerConfig, surface: S) -> WardrobeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            surface,
            layers: LayerStore::new(),
            rules: CompatibilityRules::standard(),
            reference: None,
            epoch: ContextEpoch::default(),
        })
    }

    pub fn with_rules(mut self, rules: CompatibilityRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn layers(&self) -> &LayerStore {
        &self.layers
    }

    pub fn rules(&self) -> &CompatibilityRules {
        &self.rules
    }

    /// Base figure dependents are positioned against.
    pub fn reference(&self) -> Option<&Asset> {
        self.reference.as_ref().map(|r| &r.asset)
    }

    pub fn reference_layer(&self) -> Option<LayerId> {
        self.reference.as_ref().map(|r| r.layer)
    }

    /// Dropping or replacing a reference invalidates in-flight adds; setting
    /// one on a canvas that had none does not.
    fn set_reference(&mut self, reference: Option<ReferenceFigure>) {
        if self.reference.is_some() {
            self.epoch.reference += 1;
        }
        self.reference = reference;
    }

    /// Evaluate `asset` against every placed layer without changing anything.
    pub fn check_add(&self, asset: &Asset) -> CompatibilityReport {
        self.rules.evaluate(
            asset.kind,
            self.layers.layers().iter().map(|l| (l.id, l.kind)),
        )
    }

    /// Add `asset` whose image is already available.
    pub fn add_asset(&mut self, asset: &Asset, mode: AddMode) -> AddOutcome {
        let ticket = self.begin_add(asset.clone(), mode);
        self.complete_add(ticket)
    }

    /// Capture the current context for an add whose image is still loading.
    pub fn begin_add(&self, asset: Asset, mode: AddMode) -> AddTicket {
        AddTicket {
            asset,
            mode,
            epoch: self.epoch,
        }
    }

    /// Resume an add. Aborts if the canvas was cleared or the reference
    /// figure was removed or replaced since [`Composer::begin_add`].
    #[tracing::instrument(
        skip(self, ticket),
        fields(asset = %ticket.asset.id, mode = ?ticket.mode)
    )]
    pub fn complete_add(&mut self, ticket: AddTicket) -> AddOutcome {
        if ticket.epoch != self.epoch {
            tracing::warn!("context changed while the image loaded; add discarded");
            return AddOutcome::Aborted;
        }
        let AddTicket { asset, mode, .. } = ticket;

        let report = self.check_add(&asset);
        if !report.is_compatible() && mode == AddMode::Checked {
            tracing::debug!(conflicts = report.conflicts.len(), "add rejected");
            return AddOutcome::Rejected(report);
        }
        for f in report.conflicts.iter() {
            tracing::warn!(rule = f.rule, reason = %f.reason, "conflict overridden");
        }
        for f in report.advisories.iter() {
            tracing::warn!(rule = f.rule, reason = %f.reason, "compatibility advisory");
        }

        let mut replaced = None;
        if asset.kind.is_base_figure() {
            let prior: Vec<LayerId> = self
                .layers
                .layers()
                .iter()
                .filter(|l| l.kind.is_base_figure())
                .map(|l| l.id)
                .collect();
            for id in prior {
                if self.layers.remove(&mut self.surface, id).is_ok() {
                    tracing::debug!(%id, "prior base figure removed");
                    replaced = Some(id);
                }
            }
            if replaced.is_some() {
                self.set_reference(None);
            }
        }

        let (placement, source) =
            suggest_placement(&asset, self.reference(), self.config.default_placement());
        let z_index = z_order::rank(asset.kind);
        tracing::debug!(?placement, ?source, z = %z_index, "placement resolved");

        let new = NewLayer::new(
            asset.name.clone(),
            asset.kind,
            asset.url.clone(),
            placement.to_transform(),
            z_index,
        )
        .with_asset_id(asset.id.clone())
        .with_anchor_points(asset.anchor_points().cloned());
        let layer = self.layers.insert(&mut self.surface, new).id;

        if asset.kind.is_base_figure() {
            self.set_reference(Some(ReferenceFigure { layer, asset }));
        }

        AddOutcome::Placed(PlacedLayer {
            layer,
            placement,
            source,
            replaced,
            report,
        })
    }

    #[tracing::instrument(skip(self))]
    pub fn remove_layer(&mut self, id: LayerId) -> WardrobeResult<Layer> {
        let layer = self.layers.remove(&mut self.surface, id)?;
        if self.reference_layer() == Some(id) {
            self.set_reference(None);
        }
        Ok(layer)
    }

    pub fn select(&mut self, id: LayerId) -> WardrobeResult<()> {
        self.layers.select(id)
    }

    pub fn deselect(&mut self) {
        self.layers.deselect();
    }

    pub fn set_visible(&mut self, id: LayerId, visible: bool) -> WardrobeResult<()> {
        self.layers.set_visible(&mut self.surface, id, visible)
    }

    pub fn set_locked(&mut self, id: LayerId, locked: bool) -> WardrobeResult<()> {
        self.layers.set_locked(&mut self.surface, id, locked)
    }

    /// Returns the new visibility.
    pub fn toggle_visibility(&mut self, id: LayerId) -> WardrobeResult<bool> {
        let visible = !self.layer(id)?.visible;
        self.set_visible(id, visible)?;
        Ok(visible)
    }

    /// Returns the new lock state.
    pub fn toggle_lock(&mut self, id: LayerId) -> WardrobeResult<bool> {
        let locked = !self.layer(id)?.locked;
        self.set_locked(id, locked)?;
        Ok(locked)
    }

    #[tracing::instrument(skip(self))]
    pub fn move_layer(&mut self, id: LayerId, direction: Direction) -> WardrobeResult<MoveOutcome> {
        self.layers.move_relative(&mut self.surface, id, direction)
    }

    #[tracing::instrument(skip(self))]
    pub fn sort_layers(&mut self) {
        self.layers.sort_by_z_index(&mut self.surface);
    }

    /// Empty the canvas. In-flight adds abort on completion.
    #[tracing::instrument(skip(self))]
    pub fn clear(&mut self) {
        self.layers.clear(&mut self.surface);
        self.epoch.canvas += 1;
        self.set_reference(None);
    }

    /// Surface notification after a drag, scale or rotate gesture.
    pub fn on_transform_changed(
        &mut self,
        id: LayerId,
        transform: Transform,
    ) -> WardrobeResult<()> {
        self.layers.on_transform_changed(id, transform)
    }

    pub fn set_position(&mut self, id: LayerId, position: Point) -> WardrobeResult<()> {
        let t = Transform {
            position,
            ..self.layer(id)?.transform
        };
        self.layers.set_transform(&mut self.surface, id, t)
    }

    /// Uniform scale.
    pub fn set_scale(&mut self, id: LayerId, scale: f64) -> WardrobeResult<()> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(WardrobeError::validation("scale must be finite and > 0"));
        }
        let t = Transform {
            scale: Vec2::new(scale, scale),
            ..self.layer(id)?.transform
        };
        self.layers.set_transform(&mut self.surface, id, t)
    }

    pub fn set_angle(&mut self, id: LayerId, rotation_deg: f64) -> WardrobeResult<()> {
        let t = Transform {
            rotation_deg,
            ..self.layer(id)?.transform
        };
        self.layers.set_transform(&mut self.surface, id, t)
    }

    fn layer(&self, id: LayerId) -> WardrobeResult<&Layer> {
        self.layers.get(id).ok_or(WardrobeError::UnknownLayer(id))
    }

    /// Snapshot the current stack, bottom first.
    pub fn snapshot(&self, name: &str, description: &str, thumbnail: &str) -> SavedCharacter {
        let now = unix_millis_now();
        SavedCharacter {
            id: record_id("char", &[name], now),
            name: name.to_string(),
            description: description.to_string(),
            thumbnail: thumbnail.to_string(),
            layers: self.layers.layers().iter().map(CharacterLayer::from).collect(),
            tags: Vec::new(),
            created_at_ms: now,
            modified_at_ms: now,
        }
    }

    #[tracing::instrument(skip(self, store, description, thumbnail))]
    pub fn save_character(
        &self,
        store: &mut dyn PersistenceStore,
        name: &str,
        description: &str,
        thumbnail: &str,
    ) -> WardrobeResult<SavedCharacter> {
        if name.trim().is_empty() {
            return Err(WardrobeError::validation("character name must be non-empty"));
        }
        let character = self.snapshot(name, description, thumbnail);
        store.save_character(character.clone())?;
        Ok(character)
    }

    /// Replace the canvas with `character`'s layers, in saved order.
    ///
    /// Saved z-indexes and flags are kept; the stack is not re-sorted, so
    /// call [`Composer::sort_layers`] to repair an overridden order. The
    /// first base-figure layer becomes the reference, using its catalog
    /// record when `catalog` has one.
    #[tracing::instrument(skip(self, character, catalog), fields(character = %character.id))]
    pub fn load_character(&mut self, character: &SavedCharacter, catalog: &AssetCatalog) {
        self.clear();

        let mut reference = None;
        for saved in &character.layers {
            let mut new = NewLayer::new(
                saved.name.clone(),
                saved.kind,
                saved.image_ref.clone(),
                saved.transform,
                saved.z_index,
            )
            .with_anchor_points(saved.anchor_points.clone());
            new.asset_id = saved.asset_id.clone();
            let id = self
                .layers
                .restore(&mut self.surface, new, saved.visible, saved.locked);

            if reference.is_none() && saved.kind.is_base_figure() {
                let asset = saved
                    .asset_id
                    .as_deref()
                    .and_then(|a| catalog.get(a))
                    .cloned()
                    .unwrap_or_else(|| figure_from_saved(saved));
                reference = Some(ReferenceFigure { layer: id, asset });
            }
        }
        self.surface.render();
        if reference.is_some() {
            self.set_reference(reference);
        }
        if self.layers.order_overridden() {
            tracing::warn!("loaded stack is out of band order");
        }
    }

    /// Load by id. Returns `false` when the store has no such character.
    pub fn open_character(
        &mut self,
        store: &dyn PersistenceStore,
        id: &str,
        catalog: &AssetCatalog,
    ) -> WardrobeResult<bool> {
        let Some(character) = store.get_character(id)? else {
            return Ok(false);
        };
        self.load_character(&character, catalog);
        Ok(true)
    }

    /// Ask `generator` for a new asset. Failures are logged and yield `None`.
    ///
    /// The current reference figure's image is attached when the request
    /// carries none.
    #[tracing::instrument(skip(self, generator, request), fields(kind = %request.kind))]
    pub fn generate_asset(
        &self,
        generator: &mut dyn AssetGenerator,
        mut request: GenerationRequest,
    ) -> Option<Asset> {
        if request.reference_image.is_none() {
            request.reference_image = self.reference().map(|r| r.url.clone());
        }
        let result = generator
            .generate(&request)
            .and_then(|image| asset_from_generation(&request, image, unix_millis_now()));
        match result {
            Ok(asset) => {
                tracing::debug!(asset = %asset.id, "asset generated");
                Some(asset)
            }
            Err(e) => {
                tracing::warn!(error = %e, "asset generation failed");
                None
            }
        }
    }
}

fn figure_from_saved(saved: &CharacterLayer) -> Asset {
    let mut asset = Asset::new(
        saved.asset_id.clone().unwrap_or_default(),
        saved.name.clone(),
        saved.kind,
        saved.image_ref.clone(),
    );
    asset.positioning = Some(Positioning {
        x: saved.transform.position.x,
        y: saved.transform.position.y,
        scale: saved.transform.scale.x,
        anchor_points: saved.anchor_points.clone(),
    });
    asset
}

#[cfg(test)]
#[path = "../../tests/unit/composer/session.rs"]
mod tests;
