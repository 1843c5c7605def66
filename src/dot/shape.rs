use std::fmt;

use serde::Deserialize;

/// Graphviz node shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Box,
    Polygon,
    Ellipse,
    Oval,
    Circle,
    Point,
    Egg,
    Triangle,
    Plaintext,
    Plain,
    Diamond,
    Trapezium,
    Parallelogram,
    House,
    Pentagon,
    Hexagon,
    Septagon,
    Octagon,
    DoubleCircle,
    DoubleOctagon,
    TripleOctagon,
    InvTriangle,
    InvTrapezium,
    InvHouse,
    #[serde(rename = "Mdiamond")]
    MDiamond,
    #[serde(rename = "Msquare")]
    MSquare,
    #[serde(rename = "Mcircle")]
    MCircle,
    Rect,
    Rectangle,
    Square,
    Star,
    None,
    Underline,
    Cylinder,
    Note,
    Tab,
    Folder,
    Box3d,
    Component,
    Promoter,
    Cds,
    Terminator,
    Utr,
    PrimerSite,
    RestrictionSite,
    FivePOverhang,
    ThreePOverhang,
    NOverhang,
    Assembly,
    Signature,
    Insulator,
    RiboSite,
    RnaStab,
    ProteaseSite,
    ProteinStab,
    RPromoter,
    RArrow,
    LArrow,
    LPromoter,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Box => "box",
            Shape::Polygon => "polygon",
            Shape::Ellipse => "ellipse",
            Shape::Oval => "oval",
            Shape::Circle => "circle",
            Shape::Point => "point",
            Shape::Egg => "egg",
            Shape::Triangle => "triangle",
            Shape::Plaintext => "plaintext",
            Shape::Plain => "plain",
            Shape::Diamond => "diamond",
            Shape::Trapezium => "trapezium",
            Shape::Parallelogram => "parallelogram",
            Shape::House => "house",
            Shape::Pentagon => "pentagon",
            Shape::Hexagon => "hexagon",
            Shape::Septagon => "septagon",
            Shape::Octagon => "octagon",
            Shape::DoubleCircle => "doublecircle",
            Shape::DoubleOctagon => "doubleoctagon",
            Shape::TripleOctagon => "tripleoctagon",
            Shape::InvTriangle => "invtriangle",
            Shape::InvTrapezium => "invtrapezium",
            Shape::InvHouse => "invhouse",
            Shape::MDiamond => "Mdiamond",
            Shape::MSquare => "Msquare",
            Shape::MCircle => "Mcircle",
            Shape::Rect => "rect",
            Shape::Rectangle => "rectangle",
            Shape::Square => "square",
            Shape::Star => "star",
            Shape::None => "none",
            Shape::Underline => "underline",
            Shape::Cylinder => "cylinder",
            Shape::Note => "note",
            Shape::Tab => "tab",
            Shape::Folder => "folder",
            Shape::Box3d => "box3d",
            Shape::Component => "component",
            Shape::Promoter => "promoter",
            Shape::Cds => "cds",
            Shape::Terminator => "terminator",
            Shape::Utr => "utr",
            Shape::PrimerSite => "primersite",
            Shape::RestrictionSite => "restrictionsite",
            Shape::FivePOverhang => "fivepoverhang",
            Shape::ThreePOverhang => "threepoverhang",
            Shape::NOverhang => "noverhang",
            Shape::Assembly => "assembly",
            Shape::Signature => "signature",
            Shape::Insulator => "insulator",
            Shape::RiboSite => "ribosite",
            Shape::RnaStab => "rnastab",
            Shape::ProteaseSite => "proteasesite",
            Shape::ProteinStab => "proteinstab",
            Shape::RPromoter => "rpromoter",
            Shape::RArrow => "rarrow",
            Shape::LArrow => "larrow",
            Shape::LPromoter => "lpromoter",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
