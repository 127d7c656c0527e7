use super::*;
use crate::{
    catalog::{
        model::{AnchorName, AssetKind, AssetStyle, AssetSubtype, AssetType},
        seed::sample_catalog,
    },
    generate::request::GeneratedImage,
    persist::store::MemoryStore,
    surface::recording::RecordingSurface,
};

fn composer() -> Composer<RecordingSurface> {
    Composer::new(ComposerConfig::default(), RecordingSurface::new()).unwrap()
}

fn asset(id: &str) -> Asset {
    sample_catalog().get(id).unwrap().clone()
}

fn placed(outcome: AddOutcome) -> PlacedLayer {
    match outcome {
        AddOutcome::Placed(p) => p,
        other => panic!("expected placement, got {other:?}"),
    }
}

#[test]
fn rejects_invalid_config() {
    let cfg = ComposerConfig {
        default_scale: -1.0,
        ..ComposerConfig::default()
    };
    assert!(Composer::new(cfg, RecordingSurface::new()).is_err());
}

#[test]
fn dependents_follow_the_reference_anchor() {
    let mut c = composer();
    let figure = placed(c.add_asset(&asset("bd-1"), AddMode::Checked));
    assert_eq!(figure.source, PlacementSource::AssetHint);
    assert_eq!(c.reference_layer(), Some(figure.layer));

    let hat = placed(c.add_asset(&asset("a-2"), AddMode::Checked));
    assert_eq!(hat.source, PlacementSource::Anchor(AnchorName::Head));
    assert_eq!(hat.placement, Placement::new(250.0, 195.0, 0.5 * 0.8));
    assert!(hat.report.advisories.is_empty());

    let layer = c.layers().get(hat.layer).unwrap();
    assert_eq!(layer.asset_id.as_deref(), Some("a-2"));
    assert_eq!(layer.z_index, z_order::rank(layer.kind));
}

#[test]
fn without_a_figure_dependents_use_canvas_default_and_advise() {
    let mut c = composer();
    let top = placed(c.add_asset(&asset("c-1"), AddMode::Checked));
    assert_eq!(top.source, PlacementSource::CanvasDefault);
    assert_eq!(top.placement, Placement::new(250.0, 300.0, 0.5));
    assert_eq!(top.report.advisories.len(), 1);
    assert_eq!(top.report.advisories[0].rule, "anchored-to-base-figure");
}

#[test]
fn checked_conflict_leaves_store_untouched() {
    let mut c = composer();
    c.add_asset(&asset("c-1"), AddMode::Checked);
    let before = c.surface().calls().len();
    let out = c.add_asset(&asset("c-3"), AddMode::Checked);
    let AddOutcome::Rejected(report) = out else {
        panic!("dress over top should be rejected");
    };
    assert!(!report.is_compatible());
    assert_eq!(c.layers().len(), 1);
    assert_eq!(c.surface().calls().len(), before);
}

#[test]
fn forced_base_figure_replaces_prior_one() {
    let mut c = composer();
    let first = placed(c.add_asset(&asset("bd-1"), AddMode::Checked)).layer;
    c.add_asset(&asset("h-2"), AddMode::Checked);

    assert!(matches!(
        c.add_asset(&asset("bd-4"), AddMode::Checked),
        AddOutcome::Rejected(_)
    ));
    let second = placed(c.add_asset(&asset("bd-4"), AddMode::Forced));
    assert_eq!(second.replaced, Some(first));
    assert_eq!(second.source, PlacementSource::CanvasDefault);
    assert_eq!(c.reference().unwrap().id, "bd-4");

    let figures = c
        .layers()
        .layers()
        .iter()
        .filter(|l| l.kind.is_base_figure())
        .count();
    assert_eq!(figures, 1);
    assert_eq!(c.layers().len(), 2);
}

#[test]
fn forced_dress_keeps_separates() {
    let mut c = composer();
    c.add_asset(&asset("c-1"), AddMode::Checked);
    let dress = placed(c.add_asset(&asset("c-3"), AddMode::Forced));
    assert_eq!(dress.report.conflicts.len(), 1);
    assert_eq!(c.layers().len(), 2);
    assert!(c.layers().is_z_ordered());
}

#[test]
fn stale_ticket_aborts_after_clear() {
    let mut c = composer();
    c.add_asset(&asset("bd-1"), AddMode::Checked);
    let ticket = c.begin_add(asset("h-3"), AddMode::Checked);
    c.clear();
    assert_eq!(c.complete_add(ticket), AddOutcome::Aborted);
    assert!(c.layers().is_empty());
    assert!(c.surface().stack().is_empty());
}

#[test]
fn stale_ticket_aborts_after_reference_removed() {
    let mut c = composer();
    let figure = placed(c.add_asset(&asset("bd-1"), AddMode::Checked)).layer;
    let ticket = c.begin_add(asset("c-1"), AddMode::Checked);
    c.remove_layer(figure).unwrap();
    assert_eq!(c.reference(), None);
    assert_eq!(c.complete_add(ticket), AddOutcome::Aborted);
}

#[test]
fn first_figure_does_not_abort_pending_adds() {
    // Figure decodes first.
    let mut c = composer();
    let figure = c.begin_add(asset("bd-1"), AddMode::Checked);
    let hair = c.begin_add(asset("h-2"), AddMode::Checked);
    placed(c.complete_add(figure));
    let hair = placed(c.complete_add(hair));
    assert!(matches!(hair.source, PlacementSource::Anchor(_)));
    assert_eq!(c.layers().len(), 2);
    assert_eq!(c.reference().unwrap().id, "bd-1");

    // Hair decodes first.
    let mut c = composer();
    let figure = c.begin_add(asset("bd-1"), AddMode::Checked);
    let hair = c.begin_add(asset("h-2"), AddMode::Checked);
    placed(c.complete_add(hair));
    placed(c.complete_add(figure));
    assert_eq!(c.layers().len(), 2);
    assert_eq!(c.reference().unwrap().id, "bd-1");
    assert!(c.layers().is_z_ordered());
}

#[test]
fn replacing_the_figure_aborts_pending_adds() {
    let mut c = composer();
    c.add_asset(&asset("bd-1"), AddMode::Checked);
    let ticket = c.begin_add(asset("c-1"), AddMode::Checked);
    placed(c.add_asset(&asset("bd-4"), AddMode::Forced));
    assert_eq!(c.complete_add(ticket), AddOutcome::Aborted);
    assert_eq!(c.layers().len(), 1);
}

#[test]
fn overtaken_tickets_still_land_in_band_order() {
    let mut c = composer();
    c.add_asset(&asset("bd-1"), AddMode::Checked);
    let slow = c.begin_add(asset("h-2"), AddMode::Checked);
    let fast = c.begin_add(asset("c-2"), AddMode::Checked);
    assert!(c.complete_add(fast).placed().is_some());
    assert!(c.complete_add(slow).placed().is_some());
    let ids: Vec<_> = c
        .layers()
        .layers()
        .iter()
        .map(|l| l.asset_id.clone().unwrap())
        .collect();
    assert_eq!(ids, vec!["bd-1", "c-2", "h-2"]);
}

#[test]
fn toggles_and_transform_edits() {
    let mut c = composer();
    let id = placed(c.add_asset(&asset("a-1"), AddMode::Checked)).layer;
    assert!(!c.toggle_visibility(id).unwrap());
    assert!(c.toggle_lock(id).unwrap());
    assert!(c.set_angle(id, 45.0).is_err());
    assert!(!c.toggle_lock(id).unwrap());

    c.set_position(id, Point::new(10.0, 20.0)).unwrap();
    c.set_scale(id, 2.0).unwrap();
    c.set_angle(id, -90.0).unwrap();
    let t = c.layers().get(id).unwrap().transform;
    assert_eq!(t.position, Point::new(10.0, 20.0));
    assert_eq!(t.scale, Vec2::new(2.0, 2.0));
    assert_eq!(t.rotation_deg, 270.0);
    assert!(c.set_scale(id, 0.0).is_err());
    assert!(matches!(
        c.toggle_visibility(LayerId(77)),
        Err(WardrobeError::UnknownLayer(_))
    ));
}

#[test]
fn save_then_load_restores_stack_and_reference() {
    let mut c = composer();
    c.add_asset(&asset("bd-1"), AddMode::Checked);
    let top = placed(c.add_asset(&asset("c-1"), AddMode::Checked)).layer;
    c.set_locked(top, true).unwrap();

    let mut store = MemoryStore::new();
    assert!(c.save_character(&mut store, " ", "", "").is_err());
    let saved = c.save_character(&mut store, "Ada", "first try", "").unwrap();
    assert_eq!(saved.layers.len(), 2);

    let mut other = composer();
    assert!(!other.open_character(&store, "missing", &sample_catalog()).unwrap());
    assert!(other.open_character(&store, &saved.id, &sample_catalog()).unwrap());
    assert_eq!(other.layers().len(), 2);
    assert_eq!(other.reference().unwrap().id, "bd-1");
    let restored_top = &other.layers().layers()[1];
    assert!(restored_top.locked);
    assert_eq!(other.surface().stack().len(), 2);
}

#[test]
fn load_without_catalog_record_derives_reference_from_layer() {
    let mut c = composer();
    c.add_asset(&asset("bd-2"), AddMode::Checked);
    let saved = c.snapshot("Bo", "", "");

    let mut other = composer();
    other.load_character(&saved, &AssetCatalog::new());
    let figure = other.reference().unwrap();
    let hint = figure.positioning.as_ref().unwrap();
    assert_eq!((hint.x, hint.y, hint.scale), (250.0, 300.0, 0.5));
}

struct FixedGenerator {
    fail: bool,
    seen: Vec<GenerationRequest>,
}

impl AssetGenerator for FixedGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> WardrobeResult<GeneratedImage> {
        self.seen.push(request.clone());
        if self.fail {
            return Err(WardrobeError::generation("quota exceeded"));
        }
        Ok(GeneratedImage {
            url: "https://cdn/gen.png".to_string(),
            thumbnail_url: None,
            positioning: None,
        })
    }
}

#[test]
fn generation_attaches_reference_and_swallows_failures() {
    let mut c = composer();
    c.add_asset(&asset("bd-1"), AddMode::Checked);
    let kind = AssetKind::new(AssetType::Accessory, AssetSubtype::Hat);

    let mut ok = FixedGenerator {
        fail: false,
        seen: Vec::new(),
    };
    let generated = c
        .generate_asset(&mut ok, GenerationRequest::new(kind, AssetStyle::Cartoon))
        .unwrap();
    assert_eq!(generated.kind, kind);
    assert_eq!(
        ok.seen[0].reference_image.as_deref(),
        Some(c.reference().unwrap().url.as_str())
    );

    let mut failing = FixedGenerator {
        fail: true,
        seen: Vec::new(),
    };
    assert!(
        c.generate_asset(&mut failing, GenerationRequest::new(kind, AssetStyle::Cartoon))
            .is_none()
    );
}
