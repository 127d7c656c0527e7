//! Wardrobe is the layer-compositing core of a 2D character dress-up composer.
//!
//! A character is a stack of layers placed from catalog assets (base figure,
//! hair, clothing, accessories, facial hair). The crate decides where each
//! layer goes in the stack and on the canvas; drawing is left to a
//! [`DrawingSurface`] collaborator.
//!
//! # Add flow
//!
//! 1. **Gate**: [`CompatibilityRules::evaluate`] reports conflicts and advisories
//!    against every placed layer. Conflicts block unless the add is forced.
//! 2. **Place**: [`suggest_placement`] derives `{x, y, scale}` from the asset's
//!    own hint, the reference figure's anchor points, or the canvas default.
//! 3. **Rank**: [`rank`] maps `(type, subtype)` to a fixed z-band.
//! 4. **Insert**: [`LayerStore::insert`] keeps the stack non-decreasing in
//!    z-index regardless of arrival order.
//!
//! [`Composer`] wires these together and adds base-figure replacement,
//! stale-context aborts for in-flight adds, save/load through a
//! [`PersistenceStore`], and asset generation through an [`AssetGenerator`].
//!
//! Resolvers are total: unknown subtypes and missing reference data fall back
//! to documented defaults instead of erroring.
#![forbid(unsafe_code)]

mod catalog;
mod compat;
mod composer;
mod foundation;
mod generate;
mod layer;
mod order;
mod persist;
mod placement;
mod surface;

pub use catalog::model::{
    AnchorName, AnchorPoints, Asset, AssetKind, AssetStyle, AssetSubtype, AssetType, Positioning,
};
pub use catalog::naming::{display_name, suggest_asset_type};
pub use catalog::seed::{sample_assets, sample_catalog};
pub use catalog::store::AssetCatalog;
pub use compat::rules::{
    Compatibility, CompatibilityReport, CompatibilityRules, Finding, PairRule, Requirement,
    Selector, Verdict,
};
pub use composer::config::ComposerConfig;
pub use composer::session::{AddMode, AddOutcome, AddTicket, Composer, PlacedLayer};
pub use foundation::core::{Canvas, Placement, Point, Transform, Vec2, ZIndex, normalize_degrees};
pub use foundation::error::{WardrobeError, WardrobeResult};
pub use generate::request::{
    AssetGenerator, GeneratedImage, GenerationRequest, asset_from_generation,
};
pub use layer::model::{Direction, Layer, LayerId, NewLayer};
pub use layer::store::{LayerStore, MoveOutcome, OrderAdvisory};
pub use order::z_order::{Band, band_for, insertion_index, rank, sort_by_rank};
pub use persist::model::{CharacterEdit, CharacterLayer, CharacterPreview, SavedCharacter};
pub use persist::store::{JsonDirStore, MemoryStore, PersistenceStore};
pub use placement::anchor::{
    PlacementSource, default_anchor_points, scale_multiplier, suggest_placement, target_anchor,
};
pub use surface::recording::{Drawable, RecordingSurface, SurfaceCall};
pub use surface::{DrawingSurface, SurfaceHandle};
