//! # Relationship Resolver
//!
//! Names a path: `Path` → [`Shape`] → [`Term`] → [`RelationshipLabel`].
//!
//! Lineage comes from the first parent edge crossed going from the younger
//! to the elder generation: A's first step up for ancestral and collateral
//! shapes, B's first step up (the path's last step down) for descendants.
//! Ambiguity is settled by that rule, never reported.
//!
//! Special edges anywhere on the path override the plain name. When several
//! kinds appear, in-law wins over step, step over adoptive.
//!
//! Resolution never fails: shapes without a dedicated term use the generic
//! `Term::Distant` template.

pub mod shape;

use std::sync::Arc;

use crate::dict::{FamilyDict, Region, Term};
use crate::model::*;

pub use shape::{classify, Shape, SiblingPair};

#[derive(Debug, Clone)]
pub struct Resolver {
    dict: Arc<FamilyDict>,
    region: Region,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(FamilyDict::shared(), Region::default())
    }
}

impl Resolver {
    pub fn new(dict: Arc<FamilyDict>, region: Region) -> Self {
        Self { dict, region }
    }

    /// Built-in names in the given region.
    pub fn for_region(region: Region) -> Self {
        Self::new(FamilyDict::shared(), region)
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn dict(&self) -> &FamilyDict {
        &self.dict
    }

    /// How the path's last member relates to its first.
    pub fn resolve(&self, path: &Path) -> RelationshipLabel {
        let term = term_for(path);
        let special = path
            .steps
            .iter()
            .filter_map(|s| s.special)
            .max_by_key(|s| s.precedence());

        let mut label = RelationshipLabel {
            text: self.dict.name(&term, self.region),
            gloss: term.to_string(),
            term,
            classification: term.classification(),
            generation_delta: path.generation_delta(),
            lineage: term.lineage(),
            special,
            cross_family: path.crosses_families(),
        };

        if let Some(special) = special {
            self.apply_special(&mut label, special);
        }
        label
    }

    fn apply_special(&self, label: &mut RelationshipLabel, special: SpecialRelation) {
        match special {
            SpecialRelation::InLaw => {
                if label.term.classification() == Classification::Blood {
                    label.text = format!("{} (theo hôn nhân)", label.text);
                }
                if !label.gloss.ends_with("-in-law") && !label.gloss.contains("by marriage") {
                    label.gloss = format!("{}-in-law", label.gloss);
                }
                label.classification = Classification::ByMarriage;
            }
            SpecialRelation::Step => {
                let step_term = match label.term {
                    Term::Parent { gender } => Some(Term::StepParent { gender }),
                    Term::Child { gender } => Some(Term::StepChild { gender }),
                    _ => None,
                };
                match step_term {
                    Some(term) => {
                        label.text = self.dict.name(&term, self.region);
                        label.term = term;
                    }
                    None if label.term.is_special() => {}
                    None => label.text = format!("{} kế", label.text),
                }
                if !label.gloss.starts_with("step") {
                    label.gloss = format!("step-{}", label.gloss);
                }
                label.classification = Classification::Special;
            }
            SpecialRelation::Adoptive => {
                label.text = format!("{} nuôi", label.text);
                label.gloss = format!("adoptive {}", label.gloss);
                label.classification = Classification::Special;
            }
        }
    }
}

/// The plain term for a path, before special-edge overrides.
pub fn term_for(path: &Path) -> Term {
    let gender = path.end().gender;
    let lineage = lineage_of(path);

    match classify(&path.kinds()) {
        Shape::Myself => Term::Myself,
        Shape::Parent => Term::Parent { gender },
        Shape::Child => Term::Child { gender },
        Shape::Spouse => Term::Spouse { gender },
        Shape::Sibling { pair } => Term::Sibling { gender, seniority: seniority(path, pair) },
        Shape::Grandparent => Term::Grandparent { gender, lineage },
        Shape::Grandchild => Term::Grandchild { gender, lineage },
        Shape::GreatGrandparent => Term::GreatGrandparent { gender, lineage },
        Shape::GreatGrandchild => Term::GreatGrandchild { gender },
        Shape::ParentSibling { pair } => Term::ParentSibling {
            gender,
            lineage,
            seniority: seniority(path, pair),
        },
        Shape::ParentSiblingSpouse { pair } => Term::ParentSiblingSpouse {
            gender,
            lineage,
            seniority: seniority(path, pair),
        },
        Shape::SiblingChild => Term::SiblingChild { gender },
        Shape::Cousin { pair } => Term::Cousin {
            gender,
            lineage,
            seniority: cousin_seniority(path, pair),
        },
        Shape::StepParent => Term::StepParent { gender },
        Shape::StepChild => Term::StepChild { gender },
        Shape::ParentInLaw => Term::ParentInLaw { gender, via: path.nodes[1].gender },
        Shape::ChildInLaw => Term::ChildInLaw { gender },
        Shape::SiblingSpouse { pair } => Term::SiblingSpouse { gender, seniority: seniority(path, pair) },
        Shape::SpouseSibling { pair } => Term::SpouseSibling {
            gender,
            seniority: seniority(path, pair),
            via: path.nodes[1].gender,
        },
        Shape::Distant { ascent, descent, by_marriage } => Term::Distant {
            ascent,
            descent,
            lineage,
            by_marriage,
        },
    }
}

/// Side of the family the path climbs through.
pub fn lineage_of(path: &Path) -> Lineage {
    let parent = match (path.steps.first(), path.steps.last()) {
        (Some(first), _) if first.kind == StepKind::Up => &path.nodes[1],
        (_, Some(last)) if last.kind == StepKind::Down => &path.nodes[path.nodes.len() - 2],
        _ => return Lineage::Neutral,
    };
    match parent.gender {
        Gender::Male => Lineage::Paternal,
        Gender::Female => Lineage::Maternal,
        Gender::Unknown => Lineage::Neutral,
    }
}

/// Seniority of sibling `j` relative to sibling `i`. A run of sibling
/// edges that all agree on a known seniority settles it without birth data.
fn seniority(path: &Path, (i, j): SiblingPair) -> Seniority {
    let run = &path.steps[i..j];
    if let Some(first) = run.first() {
        let agreed = first.seniority != Seniority::Unknown
            && run.iter().all(|s| s.kind == StepKind::Sibling && s.seniority == first.seniority);
        if agreed {
            return first.seniority;
        }
    }
    Seniority::between(path.nodes[i].birth_rank(), path.nodes[j].birth_rank())
}

/// Cousins rank by their parents; own ages only break a tie the parents leave open.
fn cousin_seniority(path: &Path, pair: SiblingPair) -> Seniority {
    match seniority(path, pair) {
        Seniority::Unknown => Seniority::between(path.start().birth_rank(), path.end().birth_rank()),
        known => known,
    }
}

// ============================================================================
// Tests
// ============================================================================
