use super::*;
use crate::catalog::model::{AssetKind, AssetSubtype, AssetType};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "wardrobe_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn character(id: &str, name: &str) -> SavedCharacter {
    SavedCharacter {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        thumbnail: String::new(),
        layers: Vec::new(),
        tags: Vec::new(),
        created_at_ms: 1,
        modified_at_ms: 1,
    }
}

fn hat() -> Asset {
    Asset::new(
        "a-9",
        "Cap",
        AssetKind::new(AssetType::Accessory, AssetSubtype::Hat),
        "img://cap",
    )
}

#[test]
fn memory_store_is_last_write_wins() {
    let mut store = MemoryStore::new();
    store.save_character(character("c1", "first")).unwrap();
    store.save_character(character("c2", "second")).unwrap();
    store.save_character(character("c1", "renamed")).unwrap();

    let all = store.list_characters().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "renamed");
    assert_eq!(store.get_character("c2").unwrap().unwrap().name, "second");
    assert!(store.get_character("nope").unwrap().is_none());
}

#[test]
fn memory_store_rejects_blank_ids() {
    let mut store = MemoryStore::new();
    assert!(matches!(
        store.save_character(character(" ", "x")),
        Err(WardrobeError::Persistence(_))
    ));
}

#[test]
fn metadata_edit_touches_only_named_fields() {
    let mut store = MemoryStore::new();
    store.save_character(character("c1", "first")).unwrap();
    let edit = CharacterEdit {
        description: Some("brave".to_string()),
        ..CharacterEdit::default()
    };
    assert!(store.update_character_metadata("c1", edit.clone()).unwrap());
    assert!(!store.update_character_metadata("c9", edit).unwrap());

    let c = store.get_character("c1").unwrap().unwrap();
    assert_eq!(c.name, "first");
    assert_eq!(c.description, "brave");
    assert!(c.modified_at_ms >= c.created_at_ms);
}

#[test]
fn previews_count_layers() {
    let mut store = MemoryStore::new();
    store.save_character(character("c1", "first")).unwrap();
    let previews = store.list_previews().unwrap();
    assert_eq!(previews.len(), 1);
    assert_eq!(previews[0].layer_count, 0);
}

#[test]
fn asset_crud_round_trips_through_memory() {
    let mut store = MemoryStore::new();
    store.save_asset(hat()).unwrap();
    assert_eq!(store.list_assets().unwrap().len(), 1);
    assert!(store.delete_asset("a-9").unwrap());
    assert!(!store.delete_asset("a-9").unwrap());
    assert!(store.list_assets().unwrap().is_empty());
}

#[test]
fn json_dir_store_persists_across_instances() {
    let root = temp_dir("json_dir_persist");
    let mut store = JsonDirStore::new(&root);
    assert!(store.list_characters().unwrap().is_empty());

    store.save_character(character("c1", "first")).unwrap();
    store.save_asset(hat()).unwrap();

    let reopened = JsonDirStore::new(&root);
    assert_eq!(reopened.list_characters().unwrap()[0].name, "first");
    assert_eq!(reopened.list_assets().unwrap()[0].id, "a-9");

    let mut store = reopened;
    assert!(store.delete_character("c1").unwrap());
    assert!(store.list_characters().unwrap().is_empty());
    assert!(!root.join("characters.json.tmp").exists());

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn json_dir_store_reads_corrupt_document_as_empty() {
    let root = temp_dir("json_dir_corrupt");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join(CHARACTERS_FILE), "{ not json").unwrap();

    let mut store = JsonDirStore::new(&root);
    assert!(store.list_characters().unwrap().is_empty());
    store.save_character(character("c1", "fresh")).unwrap();
    assert_eq!(store.list_characters().unwrap().len(), 1);

    std::fs::remove_dir_all(&root).unwrap();
}
