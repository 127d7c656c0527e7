use super::*;

fn clothing(sub: AssetSubtype) -> AssetKind {
    AssetKind::new(AssetType::Clothing, sub)
}

#[test]
fn two_base_figures_conflict() {
    let rules = CompatibilityRules::standard();
    let c = rules.check_compatible(AssetKind::BASE_FIGURE, AssetKind::BASE_FIGURE);
    assert!(!c.compatible);
    assert!(c.reason.unwrap().contains("base figure"));
}

#[test]
fn dress_conflicts_are_symmetric() {
    let rules = CompatibilityRules::standard();
    let dress = clothing(AssetSubtype::ClothingDress);
    for other in [AssetSubtype::ClothingTop, AssetSubtype::ClothingBottom] {
        let fwd = rules.check_compatible(dress, clothing(other));
        let rev = rules.check_compatible(clothing(other), dress);
        assert_eq!(fwd.compatible, rev.compatible);
        assert!(!fwd.compatible);
        assert!(!fwd.reason.unwrap().is_empty());
        assert!(!rev.reason.unwrap().is_empty());
    }
}

#[test]
fn hat_over_front_hair_is_advisory() {
    let rules = CompatibilityRules::standard();
    let c = rules.check_compatible(
        AssetKind::new(AssetType::Accessory, AssetSubtype::Hat),
        AssetKind::new(AssetType::Hair, AssetSubtype::HairFront),
    );
    assert!(c.compatible);
    assert!(c.reason.is_some());
}

#[test]
fn unrelated_kinds_are_compatible_without_reason() {
    let rules = CompatibilityRules::standard();
    let c = rules.check_compatible(
        clothing(AssetSubtype::ClothingTop),
        clothing(AssetSubtype::ClothingBottom),
    );
    assert_eq!(c, Compatibility::ok());
    // Dress with outerwear is fine.
    assert!(
        rules
            .check_compatible(
                clothing(AssetSubtype::ClothingDress),
                clothing(AssetSubtype::ClothingOuterwear)
            )
            .compatible
    );
}

#[test]
fn first_matching_rule_decides() {
    let rules = CompatibilityRules::empty()
        .with_pair(PairRule {
            name: "warn",
            candidate: Selector::any(AssetType::Hair),
            existing: Selector::any(AssetType::Accessory),
            verdict: Verdict::Advisory,
            reason: "first".to_string(),
        })
        .with_pair(PairRule {
            name: "block",
            candidate: Selector::any(AssetType::Hair),
            existing: Selector::any(AssetType::Accessory),
            verdict: Verdict::Conflict,
            reason: "second".to_string(),
        });
    let c = rules.check_compatible(
        AssetKind::bare(AssetType::Hair),
        AssetKind::bare(AssetType::Accessory),
    );
    assert!(c.compatible);
    assert_eq!(c.reason.as_deref(), Some("first"));
}

#[test]
fn evaluate_collects_conflicts_per_layer() {
    let rules = CompatibilityRules::standard();
    let placed = [
        (LayerId(1), AssetKind::BASE_FIGURE),
        (LayerId(2), clothing(AssetSubtype::ClothingTop)),
        (LayerId(3), clothing(AssetSubtype::ClothingBottom)),
    ];
    let report = rules.evaluate(clothing(AssetSubtype::ClothingDress), placed);
    assert!(!report.is_compatible());
    let ids: Vec<_> = report.conflicting_layers().collect();
    assert_eq!(ids, vec![LayerId(2), LayerId(3)]);
    assert!(report.advisories.is_empty());
}

#[test]
fn unmet_requirement_is_advisory() {
    let rules = CompatibilityRules::standard();
    let report = rules.evaluate(AssetKind::bare(AssetType::Hair), []);
    assert!(report.is_compatible());
    assert_eq!(report.advisories.len(), 1);
    assert_eq!(report.advisories[0].layer, None);
    assert_eq!(report.advisories[0].rule, "anchored-to-base-figure");

    let with_figure = rules.evaluate(
        AssetKind::bare(AssetType::Hair),
        [(LayerId(1), AssetKind::BASE_FIGURE)],
    );
    assert!(with_figure.advisories.is_empty());
}

#[test]
fn selector_subtype_filter_ignores_foreign_subtypes() {
    let sel = Selector::of(AssetType::Accessory, [AssetSubtype::Hat]);
    assert!(sel.matches(AssetKind::new(AssetType::Accessory, AssetSubtype::Hat)));
    assert!(!sel.matches(AssetKind::bare(AssetType::Accessory)));
    assert!(!sel.matches(AssetKind::new(AssetType::Hair, AssetSubtype::Hat)));
    assert!(Selector::any(AssetType::Hair).matches(AssetKind::bare(AssetType::Hair)));
}
