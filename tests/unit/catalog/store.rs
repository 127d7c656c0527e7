use super::*;
use crate::catalog::model::{AssetKind, AssetSubtype};

fn hair(id: &str) -> Asset {
    Asset::new(id, id, AssetKind::new(AssetType::Hair, AssetSubtype::HairBack), "u")
}

#[test]
fn rejects_duplicate_ids() {
    let mut cat = AssetCatalog::new();
    cat.insert(hair("h-1")).unwrap();
    let err = cat.insert(hair("h-1")).unwrap_err();
    assert!(err.to_string().contains("duplicate asset id"));
    assert_eq!(cat.len(), 1);
}

#[test]
fn rejects_base_figure_with_subtype() {
    let bad = Asset::new(
        "bd",
        "bd",
        AssetKind {
            asset_type: AssetType::BaseFigure,
            subtype: Some(AssetSubtype::Hat),
        },
        "u",
    );
    assert!(AssetCatalog::from_assets([bad]).is_err());
}

#[test]
fn lookups_preserve_insertion_order() {
    let cat = AssetCatalog::from_assets([
        hair("h-2"),
        Asset::new("bd-1", "Base", AssetKind::BASE_FIGURE, "u").with_style(AssetStyle::Realistic),
        hair("h-1"),
    ])
    .unwrap();
    let ids: Vec<_> = cat.by_type(AssetType::Hair).map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["h-2", "h-1"]);
    let realistic: Vec<_> = cat
        .by_style(AssetStyle::Realistic)
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(realistic, vec!["bd-1"]);
    assert!(cat.get("bd-1").is_some());
}

#[test]
fn remove_drops_from_listing() {
    let mut cat = AssetCatalog::from_assets([hair("h-1"), hair("h-2")]).unwrap();
    assert!(cat.remove("h-1").is_some());
    assert!(cat.remove("h-1").is_none());
    let ids: Vec<_> = cat.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["h-2"]);
}
