use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WardrobeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WardrobeError::persistence("x")
            .to_string()
            .contains("persistence error:")
    );
    assert!(
        WardrobeError::generation("x")
            .to_string()
            .contains("generation error:")
    );
    assert!(
        WardrobeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        WardrobeError::UnknownLayer(LayerId(7))
            .to_string()
            .contains("unknown layer: layer#7")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WardrobeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: WardrobeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, WardrobeError::Serde(_)));
}
