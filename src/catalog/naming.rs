use crate::catalog::model::{AssetKind, AssetSubtype, AssetType};

impl AssetKind {
    /// Human-readable label for listings and layer names.
    pub fn label(self) -> &'static str {
        use AssetSubtype::*;
        match (self.asset_type, self.known_subtype()) {
            (AssetType::BaseFigure, _) => "Base figure",
            (AssetType::Hair, Some(HairFront)) => "Hair (front)",
            (AssetType::Hair, Some(HairBack)) => "Hair (back)",
            (AssetType::Hair, Some(HairFull)) => "Hair (full)",
            (AssetType::Hair, _) => "Hair",
            (AssetType::Clothing, Some(ClothingTop)) => "Clothing (top)",
            (AssetType::Clothing, Some(ClothingBottom)) => "Clothing (bottom)",
            (AssetType::Clothing, Some(ClothingDress)) => "Dress",
            (AssetType::Clothing, Some(ClothingOuterwear)) => "Jacket/Coat",
            (AssetType::Clothing, Some(ClothingUndergarment)) => "Undergarment",
            (AssetType::Clothing, _) => "Clothing",
            (AssetType::Accessory, Some(Glasses)) => "Glasses",
            (AssetType::Accessory, Some(Hat)) => "Hat",
            (AssetType::Accessory, Some(Jewelry)) => "Jewelry",
            (AssetType::Accessory, Some(Bag)) => "Bag",
            (AssetType::Accessory, Some(Scarf)) => "Scarf",
            (AssetType::Accessory, Some(Watch)) => "Watch",
            (AssetType::Accessory, _) => "Accessory",
            (AssetType::FacialHair, Some(Mustache)) => "Mustache",
            (AssetType::FacialHair, Some(Beard)) => "Beard",
            (AssetType::FacialHair, Some(Goatee)) => "Goatee",
            (AssetType::FacialHair, Some(Sideburns)) => "Sideburns",
            (AssetType::FacialHair, _) => "Facial hair",
        }
    }
}

fn fallback_word(asset_type: AssetType) -> &'static str {
    match asset_type {
        AssetType::BaseFigure => "Figure",
        AssetType::Hair => "Hair",
        AssetType::Clothing => "Clothing",
        AssetType::Accessory => "Accessory",
        AssetType::FacialHair => "Facial Hair",
    }
}

/// Display name for an uploaded file.
///
/// Drops the extension and punctuation, turns underscores into spaces and
/// title-cases each word. An empty result becomes `"<Type> <suffix>"`.
pub fn display_name(file_name: &str, asset_type: AssetType, suffix: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(i) if i > 0 => &file_name[..i],
        _ => file_name,
    };

    let cleaned: String = stem
        .chars()
        .filter_map(|c| match c {
            '_' => Some(' '),
            c if c.is_alphanumeric() || c.is_whitespace() => Some(c),
            _ => None,
        })
        .collect();

    let name = cleaned
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        return format!("{} {suffix}", fallback_word(asset_type));
    }
    name
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Guess an asset type from keywords in a file name. Defaults to accessory.
pub fn suggest_asset_type(file_name: &str) -> AssetType {
    const RULES: &[(AssetType, &[&str])] = &[
        (AssetType::Hair, &["hair", "cheveux", "coiffure"]),
        (
            AssetType::Clothing,
            &["clothing", "clothes", "vetement", "vêtement", "shirt", "pants"],
        ),
        (
            AssetType::Accessory,
            &["accessory", "accessoire", "hat", "glasses"],
        ),
        (AssetType::FacialHair, &["beard", "moustache", "barbe"]),
        (
            AssetType::BaseFigure,
            &["doll", "figure", "character", "personnage", "base"],
        ),
    ];

    let lower = file_name.to_lowercase();
    RULES
        .iter()
        .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(ty, _)| *ty)
        .unwrap_or(AssetType::Accessory)
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/naming.rs"]
mod tests;
