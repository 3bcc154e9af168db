//! Built-in Vietnamese names per region.
//!
//! Every `Term` has a name in every region; qualifiers the table cannot
//! resolve (unknown gender or seniority) fall back to a combined form such
//! as "Bác/chú" rather than a guess.

use crate::model::{Gender, Lineage, Seniority};
use super::term::{gendered, Term};
use super::Region;

pub(super) fn builtin_name(term: &Term, region: Region) -> String {
    match *term {
        Term::Myself => "Bản thân".into(),
        Term::Parent { gender } => parent_word(gender, region).into(),
        Term::Child { gender } => gendered(gender, "Con trai", "Con gái", "Con").into(),
        Term::Spouse { gender } => gendered(gender, "Chồng", "Vợ", "Vợ/chồng").into(),
        Term::Sibling { gender, seniority } => match seniority {
            Seniority::Elder => gendered(gender, "Anh trai", "Chị gái", "Anh/chị"),
            Seniority::Younger => gendered(gender, "Em trai", "Em gái", "Em"),
            Seniority::Unknown => gendered(gender, "Anh/em trai", "Chị/em gái", "Anh chị em ruột"),
        }
        .into(),
        Term::Grandparent { gender, lineage } => {
            format!("{}{}", gendered(gender, "Ông", "Bà", "Ông/bà"), side(lineage))
        }
        Term::Grandchild { gender, lineage } => match lineage {
            Lineage::Neutral => gendered(gender, "Cháu trai", "Cháu gái", "Cháu").into(),
            _ => format!("Cháu{}", side(lineage)),
        },
        Term::GreatGrandparent { gender, lineage } => match region {
            Region::North => format!("Cụ{}", side(lineage)),
            Region::Central | Region::South => {
                format!("{}{}", gendered(gender, "Ông cố", "Bà cố", "Ông/bà cố"), side(lineage))
            }
        },
        Term::GreatGrandchild { .. } => pick(region, "Chắt", "Chắt", "Cháu cố"),
        Term::ParentSibling { gender, lineage, seniority } => parent_sibling(gender, lineage, seniority, region),
        Term::ParentSiblingSpouse { gender, lineage, seniority } => {
            parent_sibling_spouse(gender, lineage, seniority, region)
        }
        Term::SiblingChild { gender } => gendered(gender, "Cháu trai", "Cháu gái", "Cháu").into(),
        Term::Cousin { gender, seniority, .. } => match seniority {
            Seniority::Elder => gendered(gender, "Anh họ", "Chị họ", "Anh/chị họ"),
            Seniority::Younger => "Em họ",
            Seniority::Unknown => gendered(gender, "Anh/em họ", "Chị/em họ", "Anh chị em họ"),
        }
        .into(),
        Term::StepParent { gender } => match gender {
            Gender::Male => pick(region, "Bố dượng", "Cha dượng", "Ba dượng"),
            Gender::Female => pick(region, "Mẹ kế", "Mạ kế", "Má kế"),
            Gender::Unknown => pick(region, "Bố dượng/mẹ kế", "Cha dượng/mạ kế", "Ba dượng/má kế"),
        },
        Term::StepChild { .. } => "Con riêng".into(),
        Term::ParentInLaw { gender, via } => {
            format!("{} {}", parent_word(gender, region), spouse_side(via))
        }
        Term::ChildInLaw { gender } => gendered(gender, "Con rể", "Con dâu", "Con dâu/rể").into(),
        Term::SiblingSpouse { gender, seniority } => match (gender, seniority) {
            (Gender::Male, Seniority::Elder) => "Anh rể",
            (Gender::Male, Seniority::Younger) => "Em rể",
            (Gender::Male, Seniority::Unknown) => "Anh/em rể",
            (Gender::Female, Seniority::Elder) => "Chị dâu",
            (Gender::Female, Seniority::Younger) => "Em dâu",
            (Gender::Female, Seniority::Unknown) => "Chị/em dâu",
            (Gender::Unknown, _) => "Anh chị em dâu rể",
        }
        .into(),
        Term::SpouseSibling { gender, seniority, via } => {
            let base = match seniority {
                Seniority::Elder => gendered(gender, "Anh", "Chị", "Anh/chị"),
                Seniority::Younger => "Em",
                Seniority::Unknown => gendered(gender, "Anh/em", "Chị/em", "Anh/chị/em"),
            };
            format!("{base} {}", spouse_side(via))
        }
        Term::Distant { ascent, descent, by_marriage, .. } => {
            let base = match (ascent, descent) {
                (0, 0) => "Họ hàng".to_string(),
                (a, 0) => format!("Tổ tiên đời thứ {a}"),
                (0, d) => format!("Hậu duệ đời thứ {d}"),
                (a, d) => format!("Họ hàng (lên {a} đời, xuống {d} đời)"),
            };
            if by_marriage { format!("{base} (theo hôn nhân)") } else { base }
        }
    }
}

/// Regional word for father/mother, reused by in-law names.
fn parent_word(gender: Gender, region: Region) -> &'static str {
    match (gender, region) {
        (Gender::Male, Region::North) => "Bố",
        (Gender::Male, Region::Central) => "Cha",
        (Gender::Male, Region::South) => "Ba",
        (Gender::Female, Region::North) => "Mẹ",
        (Gender::Female, Region::Central) => "Mạ",
        (Gender::Female, Region::South) => "Má",
        (Gender::Unknown, Region::North) => "Bố/mẹ",
        (Gender::Unknown, Region::Central) => "Cha/mạ",
        (Gender::Unknown, Region::South) => "Ba/má",
    }
}

fn parent_sibling(gender: Gender, lineage: Lineage, seniority: Seniority, region: Region) -> String {
    use Gender::*;
    use Lineage::*;

    match (lineage, gender, seniority) {
        (Paternal, Male, Seniority::Elder) => "Bác".into(),
        (Paternal, Male, Seniority::Younger) => "Chú".into(),
        (Paternal, Male, Seniority::Unknown) => "Bác/chú".into(),
        (Paternal, Female, Seniority::Elder) => pick(region, "Bác", "O", "Cô"),
        (Paternal, Female, _) => pick(region, "Cô", "O", "Cô"),
        (Paternal, Unknown, _) => pick(region, "Bác/chú/cô", "Bác/chú/o", "Bác/chú/cô"),
        (Maternal, Male, Seniority::Elder) => pick(region, "Bác", "Cậu", "Cậu"),
        (Maternal, Male, _) => "Cậu".into(),
        (Maternal, Female, Seniority::Elder) => pick(region, "Bác", "Dì", "Dì"),
        (Maternal, Female, _) => "Dì".into(),
        (Maternal, Unknown, _) => pick(region, "Bác/cậu/dì", "Cậu/dì", "Cậu/dì"),
        (Neutral, Male, _) => "Bác/chú/cậu".into(),
        (Neutral, Female, _) => pick(region, "Cô/dì", "O/dì", "Cô/dì"),
        (Neutral, Unknown, _) => "Bác/chú/cô/cậu/dì".into(),
    }
}

fn parent_sibling_spouse(gender: Gender, lineage: Lineage, seniority: Seniority, region: Region) -> String {
    use Gender::*;
    use Lineage::*;

    match (lineage, gender, seniority) {
        (Paternal, Female, Seniority::Elder) => pick(region, "Bác gái", "Bác", "Bác gái"),
        (Paternal, Female, _) => "Thím".into(),
        (Paternal, Male, Seniority::Elder) => pick(region, "Bác trai", "Bác", "Dượng"),
        (Paternal, Male, _) => pick(region, "Chú", "Dượng", "Dượng"),
        (Maternal, Female, Seniority::Elder) => pick(region, "Bác gái", "Mợ", "Mợ"),
        (Maternal, Female, _) => "Mợ".into(),
        (Maternal, Male, Seniority::Elder) => pick(region, "Bác trai", "Dượng", "Dượng"),
        (Maternal, Male, _) => pick(region, "Chú", "Dượng", "Dượng"),
        _ => "Bác/chú/thím/mợ/dượng".into(),
    }
}

fn side(lineage: Lineage) -> &'static str {
    match lineage {
        Lineage::Paternal => " nội",
        Lineage::Maternal => " ngoại",
        Lineage::Neutral => "",
    }
}

fn spouse_side(via: Gender) -> &'static str {
    gendered(via, "chồng", "vợ", "vợ/chồng")
}

fn pick(region: Region, north: &str, central: &str, south: &str) -> String {
    match region {
        Region::North => north,
        Region::Central => central,
        Region::South => south,
    }
    .to_string()
}
