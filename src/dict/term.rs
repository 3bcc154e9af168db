//! Term: the closed set of named relationships.
//!
//! A term is the canonical key of the naming table: the path shape plus the
//! qualifiers (gender of B, lineage side, seniority) naming depends on.

use serde::{Deserialize, Serialize};
use crate::model::{Classification, Gender, Lineage, Seniority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Term {
    Myself,
    Parent { gender: Gender },
    Child { gender: Gender },
    Spouse { gender: Gender },
    Sibling { gender: Gender, seniority: Seniority },
    Grandparent { gender: Gender, lineage: Lineage },
    Grandchild { gender: Gender, lineage: Lineage },
    GreatGrandparent { gender: Gender, lineage: Lineage },
    GreatGrandchild { gender: Gender },
    /// Uncle or aunt by blood. `seniority` compares them with A's parent.
    ParentSibling { gender: Gender, lineage: Lineage, seniority: Seniority },
    /// Spouse of an uncle or aunt. `seniority` is the blood relative's.
    ParentSiblingSpouse { gender: Gender, lineage: Lineage, seniority: Seniority },
    SiblingChild { gender: Gender },
    /// First cousin. `seniority` follows the parents' rank, not the cousins' ages.
    Cousin { gender: Gender, lineage: Lineage, seniority: Seniority },
    StepParent { gender: Gender },
    StepChild { gender: Gender },
    /// `via` is the gender of A's spouse (husband's or wife's side).
    ParentInLaw { gender: Gender, via: Gender },
    ChildInLaw { gender: Gender },
    /// Spouse of a sibling. `seniority` is the sibling's, relative to A.
    SiblingSpouse { gender: Gender, seniority: Seniority },
    /// Sibling of a spouse. `seniority` is relative to the spouse.
    SpouseSibling { gender: Gender, seniority: Seniority, via: Gender },
    /// Generic template for shapes without a dedicated name.
    Distant { ascent: u32, descent: u32, lineage: Lineage, by_marriage: bool },
}

impl Term {
    pub fn classification(&self) -> Classification {
        match self {
            Term::Myself
            | Term::Parent { .. }
            | Term::Child { .. }
            | Term::Sibling { .. }
            | Term::Grandparent { .. }
            | Term::Grandchild { .. }
            | Term::GreatGrandparent { .. }
            | Term::GreatGrandchild { .. }
            | Term::ParentSibling { .. }
            | Term::SiblingChild { .. }
            | Term::Cousin { .. } => Classification::Blood,
            Term::Spouse { .. }
            | Term::ParentSiblingSpouse { .. }
            | Term::ParentInLaw { .. }
            | Term::ChildInLaw { .. }
            | Term::SiblingSpouse { .. }
            | Term::SpouseSibling { .. } => Classification::ByMarriage,
            Term::StepParent { .. } | Term::StepChild { .. } => Classification::Special,
            Term::Distant { by_marriage, .. } => {
                if *by_marriage { Classification::ByMarriage } else { Classification::Blood }
            }
        }
    }

    pub fn lineage(&self) -> Lineage {
        match self {
            Term::Grandparent { lineage, .. }
            | Term::Grandchild { lineage, .. }
            | Term::GreatGrandparent { lineage, .. }
            | Term::ParentSibling { lineage, .. }
            | Term::ParentSiblingSpouse { lineage, .. }
            | Term::Cousin { lineage, .. }
            | Term::Distant { lineage, .. } => *lineage,
            _ => Lineage::Neutral,
        }
    }

    /// Whether the naming table distinguishes paternal and maternal sides.
    pub fn lineage_sensitive(&self) -> bool {
        matches!(
            self,
            Term::Grandparent { .. }
                | Term::Grandchild { .. }
                | Term::GreatGrandparent { .. }
                | Term::ParentSibling { .. }
                | Term::ParentSiblingSpouse { .. }
                | Term::Cousin { .. }
        )
    }

    /// Names that do not follow the regular generational pattern.
    pub fn is_special(&self) -> bool {
        matches!(self, Term::StepParent { .. } | Term::StepChild { .. })
    }
}

impl std::fmt::Display for Term {
    /// English gloss.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Term::Myself => f.write_str("self"),
            Term::Parent { gender } => f.write_str(gendered(gender, "father", "mother", "parent")),
            Term::Child { gender } => f.write_str(gendered(gender, "son", "daughter", "child")),
            Term::Spouse { gender } => f.write_str(gendered(gender, "husband", "wife", "spouse")),
            Term::Sibling { gender, seniority } => write!(
                f,
                "{}{}",
                match seniority {
                    Seniority::Elder => "older ",
                    Seniority::Younger => "younger ",
                    Seniority::Unknown => "",
                },
                gendered(gender, "brother", "sister", "sibling"),
            ),
            Term::Grandparent { gender, lineage } => write!(
                f, "{}{}", side(lineage), gendered(gender, "grandfather", "grandmother", "grandparent"),
            ),
            Term::Grandchild { gender, lineage } => write!(
                f, "{}{}", side(lineage), gendered(gender, "grandson", "granddaughter", "grandchild"),
            ),
            Term::GreatGrandparent { gender, lineage } => write!(
                f,
                "{}{}",
                side(lineage),
                gendered(gender, "great-grandfather", "great-grandmother", "great-grandparent"),
            ),
            Term::GreatGrandchild { gender } => f.write_str(gendered(
                gender, "great-grandson", "great-granddaughter", "great-grandchild",
            )),
            Term::ParentSibling { gender, lineage, .. } => write!(
                f, "{}{}", side(lineage), gendered(gender, "uncle", "aunt", "uncle or aunt"),
            ),
            Term::ParentSiblingSpouse { gender, lineage, .. } => write!(
                f,
                "{}{} by marriage",
                side(lineage),
                gendered(gender, "uncle", "aunt", "uncle or aunt"),
            ),
            Term::SiblingChild { gender } => f.write_str(gendered(gender, "nephew", "niece", "nephew or niece")),
            Term::Cousin { lineage, .. } => write!(f, "{}cousin", side(lineage)),
            Term::StepParent { gender } => f.write_str(gendered(gender, "stepfather", "stepmother", "step-parent")),
            Term::StepChild { gender } => f.write_str(gendered(gender, "stepson", "stepdaughter", "stepchild")),
            Term::ParentInLaw { gender, .. } => f.write_str(gendered(
                gender, "father-in-law", "mother-in-law", "parent-in-law",
            )),
            Term::ChildInLaw { gender } => f.write_str(gendered(
                gender, "son-in-law", "daughter-in-law", "child-in-law",
            )),
            Term::SiblingSpouse { gender, .. } | Term::SpouseSibling { gender, .. } => f.write_str(
                gendered(gender, "brother-in-law", "sister-in-law", "sibling-in-law"),
            ),
            Term::Distant { ascent, descent, by_marriage, .. } => {
                write!(f, "{}", distant_gloss(ascent, descent))?;
                if by_marriage {
                    f.write_str(" by marriage")?;
                }
                Ok(())
            }
        }
    }
}

pub(crate) fn gendered(gender: Gender, male: &'static str, female: &'static str, unknown: &'static str) -> &'static str {
    match gender {
        Gender::Male => male,
        Gender::Female => female,
        Gender::Unknown => unknown,
    }
}

fn side(lineage: Lineage) -> &'static str {
    match lineage {
        Lineage::Paternal => "paternal ",
        Lineage::Maternal => "maternal ",
        Lineage::Neutral => "",
    }
}

fn distant_gloss(ascent: u32, descent: u32) -> String {
    match (ascent, descent) {
        (0, 0) => "relative".to_string(),
        (a, 0) => format!("{}-generation ancestor", ordinal(a)),
        (0, d) => format!("{}-generation descendant", ordinal(d)),
        (a, d) => {
            let degree = a.min(d) - 1;
            let removed = a.abs_diff(d);
            let base = if degree == 0 {
                "collateral relative".to_string()
            } else {
                format!("{} cousin", ordinal(degree))
            };
            match removed {
                0 => base,
                1 => format!("{base}, once removed"),
                2 => format!("{base}, twice removed"),
                n => format!("{base}, {n} times removed"),
            }
        }
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
