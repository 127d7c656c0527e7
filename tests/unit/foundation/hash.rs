use super::*;

#[test]
fn fnv_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"wardrobe");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"ward");
    b.write_bytes(b"robe");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn record_id_separates_parts() {
    let a = record_id("char", &["ab", "c"], 1);
    let b = record_id("char", &["a", "bc"], 1);
    assert_ne!(a, b);
    assert!(a.starts_with("char-"));
    assert_eq!(a.len(), "char-".len() + 16);
    assert_eq!(a, record_id("char", &["ab", "c"], 1));
    assert_ne!(a, record_id("char", &["ab", "c"], 2));
}
