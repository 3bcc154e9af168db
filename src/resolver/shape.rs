//! Shape: the edge-type-only form of a path.
//!
//! Classification is an exhaustive slice match over step kinds. A sibling
//! edge and an up-down pair through a shared parent name the same relative,
//! so both spellings of each shape are listed. Anything not listed falls
//! through to [`Shape::Distant`].

use crate::model::StepKind;

/// Node positions `(i, j)` of two siblings on the path; naming needs the
/// seniority of `j` relative to `i`.
pub type SiblingPair = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Myself,
    Parent,
    Child,
    Spouse,
    Sibling { pair: SiblingPair },
    Grandparent,
    Grandchild,
    GreatGrandparent,
    GreatGrandchild,
    ParentSibling { pair: SiblingPair },
    ParentSiblingSpouse { pair: SiblingPair },
    SiblingChild,
    Cousin { pair: SiblingPair },
    StepParent,
    StepChild,
    ParentInLaw,
    ChildInLaw,
    SiblingSpouse { pair: SiblingPair },
    SpouseSibling { pair: SiblingPair },
    Distant { ascent: u32, descent: u32, by_marriage: bool },
}

pub fn classify(kinds: &[StepKind]) -> Shape {
    use StepKind::{Down, Sibling, Spouse, Up};

    match kinds {
        [] => Shape::Myself,
        [Up] => Shape::Parent,
        [Down] => Shape::Child,
        [Spouse] => Shape::Spouse,
        [Sibling] => Shape::Sibling { pair: (0, 1) },
        [Up, Down] => Shape::Sibling { pair: (0, 2) },
        [Sibling, Sibling] => Shape::Sibling { pair: (0, 2) },
        [Up, Down, Sibling] | [Sibling, Up, Down] => Shape::Sibling { pair: (0, 3) },
        [Up, Up] => Shape::Grandparent,
        [Down, Down] => Shape::Grandchild,
        [Up, Up, Up] => Shape::GreatGrandparent,
        [Down, Down, Down] => Shape::GreatGrandchild,
        [Up, Sibling] => Shape::ParentSibling { pair: (1, 2) },
        [Up, Up, Down] => Shape::ParentSibling { pair: (1, 3) },
        [Up, Sibling, Spouse] => Shape::ParentSiblingSpouse { pair: (1, 2) },
        [Up, Up, Down, Spouse] => Shape::ParentSiblingSpouse { pair: (1, 3) },
        [Sibling, Down] | [Up, Down, Down] => Shape::SiblingChild,
        [Up, Sibling, Down] => Shape::Cousin { pair: (1, 2) },
        [Up, Up, Down, Down] => Shape::Cousin { pair: (1, 3) },
        [Up, Spouse] => Shape::StepParent,
        [Spouse, Down] => Shape::StepChild,
        [Spouse, Up] => Shape::ParentInLaw,
        [Down, Spouse] => Shape::ChildInLaw,
        [Sibling, Spouse] => Shape::SiblingSpouse { pair: (0, 1) },
        [Up, Down, Spouse] => Shape::SiblingSpouse { pair: (0, 2) },
        [Spouse, Sibling] => Shape::SpouseSibling { pair: (1, 2) },
        [Spouse, Up, Down] => Shape::SpouseSibling { pair: (1, 3) },
        _ => distant(kinds),
    }
}

/// Generic template parameters: the height of the highest generation
/// reached (ascent) and how far B sits below it (descent). Marriage steps
/// or a climb after a descent make the relation one by marriage; sibling
/// steps stay within one generation and never do.
fn distant(kinds: &[StepKind]) -> Shape {
    let mut level: i64 = 0;
    let mut peak: i64 = 0;
    let mut descended = false;
    let mut by_marriage = false;

    for kind in kinds {
        match kind {
            StepKind::Up => {
                if descended {
                    by_marriage = true;
                }
                level -= 1;
            }
            StepKind::Down => {
                descended = true;
                level += 1;
            }
            // Lateral: touches the shared parent's generation, ends level.
            StepKind::Sibling => peak = peak.min(level - 1),
            StepKind::Spouse => by_marriage = true,
        }
        peak = peak.min(level);
    }

    let ascent = (-peak) as u32;
    let descent = (level - peak) as u32;
    Shape::Distant { ascent, descent, by_marriage }
}
