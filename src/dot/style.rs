use std::fmt;

use serde::Deserialize;

/// Node and edge styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Solid,
    Dashed,
    Filled,
    Diagonals,
    Rounded,
    Dotted,
    Bold,
    Invis,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Solid => "solid",
            Style::Dashed => "dashed",
            Style::Filled => "filled",
            Style::Diagonals => "diagonals",
            Style::Rounded => "rounded",
            Style::Dotted => "dotted",
            Style::Bold => "bold",
            Style::Invis => "invis",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names() {
        assert_eq!(Style::Dotted.to_string(), "dotted");
        assert_eq!(Style::Invis.to_string(), "invis");
        assert_eq!(Style::Filled.as_str(), "filled");
    }
}
