//! Table-driven compatibility rules.
//!
//! Pair rules are evaluated in registration order and the first match decides.
//! A conflict is advisory: callers may always force the placement.

use crate::{
    catalog::model::{AssetKind, AssetSubtype, AssetType},
    layer::model::LayerId,
};

/// Matches a type and, optionally, a set of its subtypes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    pub asset_type: AssetType,
    /// Empty matches any subtype, including none.
    pub subtypes: Vec<AssetSubtype>,
}

impl Selector {
    pub fn any(asset_type: AssetType) -> Self {
        Self {
            asset_type,
            subtypes: Vec::new(),
        }
    }

    pub fn of(asset_type: AssetType, subtypes: impl IntoIterator<Item = AssetSubtype>) -> Self {
        Self {
            asset_type,
            subtypes: subtypes.into_iter().collect(),
        }
    }

    pub fn matches(&self, kind: AssetKind) -> bool {
        if kind.asset_type != self.asset_type {
            return false;
        }
        if self.subtypes.is_empty() {
            return true;
        }
        kind.known_subtype().is_some_and(|s| self.subtypes.contains(&s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// Reported incompatible; the caller decides whether to force.
    Conflict,
    /// Compatible, with a warning attached.
    Advisory,
}

/// Relation between a candidate and one already-placed asset.
#[derive(Clone, Debug)]
pub struct PairRule {
    pub name: &'static str,
    pub candidate: Selector,
    pub existing: Selector,
    pub verdict: Verdict,
    pub reason: String,
}

/// Candidate expects something matching `requires` to be placed already.
/// Unmet requirements are advisories.
#[derive(Clone, Debug)]
pub struct Requirement {
    pub name: &'static str,
    pub candidate: Selector,
    pub requires: Selector,
    pub reason: String,
}

/// Outcome of a single pairwise check.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Compatibility {
    pub compatible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Compatibility {
    pub fn ok() -> Self {
        Self {
            compatible: true,
            reason: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Finding {
    pub rule: &'static str,
    /// Placed layer the finding concerns; `None` for unmet requirements.
    pub layer: Option<LayerId>,
    pub reason: String,
}

/// Everything the checker found for one candidate against the placed set.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CompatibilityReport {
    pub conflicts: Vec<Finding>,
    pub advisories: Vec<Finding>,
}

impl CompatibilityReport {
    pub fn is_compatible(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn conflicting_layers(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.conflicts.iter().filter_map(|f| f.layer)
    }
}

/// Rule registry.
#[derive(Clone, Debug, Default)]
pub struct CompatibilityRules {
    pairs: Vec<PairRule>,
    requirements: Vec<Requirement>,
}

impl CompatibilityRules {
    /// Registry with no rules: everything is compatible.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in rule set.
    pub fn standard() -> Self {
        use AssetSubtype::*;

        let split_outfit = || {
            Selector::of(AssetType::Clothing, [ClothingTop, ClothingBottom])
        };
        let dress = || Selector::of(AssetType::Clothing, [ClothingDress]);

        let mut rules = Self::empty()
            .with_pair(PairRule {
                name: "single-base-figure",
                candidate: Selector::any(AssetType::BaseFigure),
                existing: Selector::any(AssetType::BaseFigure),
                verdict: Verdict::Conflict,
                reason: "Only one base figure can be used at a time.".to_string(),
            })
            .with_pair(PairRule {
                name: "dress-excludes-separates",
                candidate: dress(),
                existing: split_outfit(),
                verdict: Verdict::Conflict,
                reason: "A dress cannot be worn with a separate top or bottom.".to_string(),
            })
            .with_pair(PairRule {
                name: "separates-exclude-dress",
                candidate: split_outfit(),
                existing: dress(),
                verdict: Verdict::Conflict,
                reason: "A top or bottom cannot be worn with a dress.".to_string(),
            })
            .with_pair(PairRule {
                name: "hat-over-front-hair",
                candidate: Selector::of(AssetType::Accessory, [Hat]),
                existing: Selector::of(AssetType::Hair, [HairFront]),
                verdict: Verdict::Advisory,
                reason: "Some hats may not sit well over this hairstyle.".to_string(),
            });

        for ty in [
            AssetType::Hair,
            AssetType::Clothing,
            AssetType::Accessory,
            AssetType::FacialHair,
        ] {
            rules = rules.with_requirement(Requirement {
                name: "anchored-to-base-figure",
                candidate: Selector::any(ty),
                requires: Selector::any(AssetType::BaseFigure),
                reason: format!(
                    "No base figure is placed; the {} uses the canvas default position.",
                    AssetKind::bare(ty).label().to_lowercase()
                ),
            });
        }
        rules
    }

    pub fn with_pair(mut self, rule: PairRule) -> Self {
        self.pairs.push(rule);
        self
    }

    pub fn with_requirement(mut self, req: Requirement) -> Self {
        self.requirements.push(req);
        self
    }

    pub fn pairs(&self) -> &[PairRule] {
        &self.pairs
    }

    fn first_match(&self, candidate: AssetKind, existing: AssetKind) -> Option<&PairRule> {
        self.pairs
            .iter()
            .find(|r| r.candidate.matches(candidate) && r.existing.matches(existing))
    }

    /// Check `candidate` against one already-placed asset.
    pub fn check_compatible(&self, candidate: AssetKind, existing: AssetKind) -> Compatibility {
        match self.first_match(candidate, existing) {
            None => Compatibility::ok(),
            Some(rule) => Compatibility {
                compatible: rule.verdict == Verdict::Advisory,
                reason: Some(rule.reason.clone()),
            },
        }
    }

    /// Check `candidate` against every placed layer plus the requirement table.
    pub fn evaluate(
        &self,
        candidate: AssetKind,
        placed: impl IntoIterator<Item = (LayerId, AssetKind)>,
    ) -> CompatibilityReport {
        let mut report = CompatibilityReport::default();
        let mut placed_kinds = Vec::new();

        for (layer, kind) in placed {
            placed_kinds.push(kind);
            let Some(rule) = self.first_match(candidate, kind) else {
                continue;
            };
            let finding = Finding {
                rule: rule.name,
                layer: Some(layer),
                reason: rule.reason.clone(),
            };
            match rule.verdict {
                Verdict::Conflict => report.conflicts.push(finding),
                Verdict::Advisory => report.advisories.push(finding),
            }
        }

        for req in &self.requirements {
            if !req.candidate.matches(candidate) {
                continue;
            }
            if placed_kinds.iter().any(|k| req.requires.matches(*k)) {
                continue;
            }
            report.advisories.push(Finding {
                rule: req.name,
                layer: None,
                reason: req.reason.clone(),
            });
        }

        report
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compat/rules.rs"]
mod tests;
