use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    catalog::model::Asset,
    foundation::error::{WardrobeError, WardrobeResult},
    foundation::hash::unix_millis_now,
    persist::model::{CharacterEdit, CharacterPreview, SavedCharacter},
};

/// Durable key-value collaborator for characters and assets.
///
/// Records are keyed by id; a save with an existing id replaces the stored
/// record (last write wins). Listing order is first-save order.
pub trait PersistenceStore {
    fn save_character(&mut self, character: SavedCharacter) -> WardrobeResult<()>;
    fn list_characters(&self) -> WardrobeResult<Vec<SavedCharacter>>;
    /// Returns whether a record was removed.
    fn delete_character(&mut self, id: &str) -> WardrobeResult<bool>;

    fn save_asset(&mut self, asset: Asset) -> WardrobeResult<()>;
    fn list_assets(&self) -> WardrobeResult<Vec<Asset>>;
    fn delete_asset(&mut self, id: &str) -> WardrobeResult<bool>;

    fn get_character(&self, id: &str) -> WardrobeResult<Option<SavedCharacter>> {
        Ok(self.list_characters()?.into_iter().find(|c| c.id == id))
    }

    fn list_previews(&self) -> WardrobeResult<Vec<CharacterPreview>> {
        Ok(self
            .list_characters()?
            .iter()
            .map(CharacterPreview::from)
            .collect())
    }

    /// Apply a metadata edit. Returns `false` when no record has `id`.
    fn update_character_metadata(
        &mut self,
        id: &str,
        edit: CharacterEdit,
    ) -> WardrobeResult<bool> {
        let Some(mut character) = self.get_character(id)? else {
            return Ok(false);
        };
        character.apply(edit, unix_millis_now());
        self.save_character(character)?;
        Ok(true)
    }
}

trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for SavedCharacter {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Asset {
    fn key(&self) -> &str {
        &self.id
    }
}

fn upsert<T: Keyed>(records: &mut Vec<T>, record: T) {
    match records.iter_mut().find(|r| r.key() == record.key()) {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
}

fn remove_by_key<T: Keyed>(records: &mut Vec<T>, id: &str) -> bool {
    let before = records.len();
    records.retain(|r| r.key() != id);
    records.len() != before
}

fn check_id(id: &str) -> WardrobeResult<()> {
    if id.trim().is_empty() {
        return Err(WardrobeError::persistence("record id must be non-empty"));
    }
    Ok(())
}

/// In-process store, used by tests and the CLI.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    characters: Vec<SavedCharacter>,
    assets: Vec<Asset>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceStore for MemoryStore {
    fn save_character(&mut self, character: SavedCharacter) -> WardrobeResult<()> {
        check_id(&character.id)?;
        upsert(&mut self.characters, character);
        Ok(())
    }

    fn list_characters(&self) -> WardrobeResult<Vec<SavedCharacter>> {
        Ok(self.characters.clone())
    }

    fn delete_character(&mut self, id: &str) -> WardrobeResult<bool> {
        Ok(remove_by_key(&mut self.characters, id))
    }

    fn save_asset(&mut self, asset: Asset) -> WardrobeResult<()> {
        check_id(&asset.id)?;
        upsert(&mut self.assets, asset);
        Ok(())
    }

    fn list_assets(&self) -> WardrobeResult<Vec<Asset>> {
        Ok(self.assets.clone())
    }

    fn delete_asset(&mut self, id: &str) -> WardrobeResult<bool> {
        Ok(remove_by_key(&mut self.assets, id))
    }
}

const CHARACTERS_FILE: &str = "characters.json";
const ASSETS_FILE: &str = "assets.json";

/// One JSON array document per collection under `root`.
///
/// A missing document reads as empty. So does an unparseable one, after a
/// warning; the next save overwrites it.
#[derive(Clone, Debug)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_collection<T>(&self, file: &str) -> WardrobeResult<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let path = self.root.join(file);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("read '{}'", path.display()))
                    .into());
            }
        };
        match serde_json::from_str(&text) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable collection, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn write_collection<T: serde::Serialize>(
        &self,
        file: &str,
        records: &[T],
    ) -> WardrobeResult<()> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("create store dir '{}'", self.root.display()))?;
        let path = self.root.join(file);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(records)?;
        std::fs::write(&tmp, bytes).with_context(|| format!("write '{}'", tmp.display()))?;
        std::fs::rename(&tmp, &path).with_context(|| format!("replace '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), count = records.len(), "collection written");
        Ok(())
    }
}

impl PersistenceStore for JsonDirStore {
    fn save_character(&mut self, character: SavedCharacter) -> WardrobeResult<()> {
        check_id(&character.id)?;
        let mut all: Vec<SavedCharacter> = self.read_collection(CHARACTERS_FILE)?;
        upsert(&mut all, character);
        self.write_collection(CHARACTERS_FILE, &all)
    }

    fn list_characters(&self) -> WardrobeResult<Vec<SavedCharacter>> {
        self.read_collection(CHARACTERS_FILE)
    }

    fn delete_character(&mut self, id: &str) -> WardrobeResult<bool> {
        let mut all: Vec<SavedCharacter> = self.read_collection(CHARACTERS_FILE)?;
        if !remove_by_key(&mut all, id) {
            return Ok(false);
        }
        self.write_collection(CHARACTERS_FILE, &all)?;
        Ok(true)
    }

    fn save_asset(&mut self, asset: Asset) -> WardrobeResult<()> {
        check_id(&asset.id)?;
        let mut all: Vec<Asset> = self.read_collection(ASSETS_FILE)?;
        upsert(&mut all, asset);
        self.write_collection(ASSETS_FILE, &all)
    }

    fn list_assets(&self) -> WardrobeResult<Vec<Asset>> {
        self.read_collection(ASSETS_FILE)
    }

    fn delete_asset(&mut self, id: &str) -> WardrobeResult<bool> {
        let mut all: Vec<Asset> = self.read_collection(ASSETS_FILE)?;
        if !remove_by_key(&mut all, id) {
            return Ok(false);
        }
        self.write_collection(ASSETS_FILE, &all)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/persist/store.rs"]
mod tests;
