use std::fmt;

use serde::Deserialize;

use crate::constants::graph::DEFAULT_HEADER_FONT_SIZE;

/// Vertical placement of the graph label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelLocation {
    #[default]
    Top,
    Bottom,
}

impl fmt::Display for LabelLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LabelLocation::Top => "t",
            LabelLocation::Bottom => "b",
        })
    }
}

/// Horizontal justification of the graph label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelJustification {
    Left,
    #[default]
    Center,
    Right,
}

impl fmt::Display for LabelJustification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LabelJustification::Left => "l",
            LabelJustification::Center => "c",
            LabelJustification::Right => "r",
        })
    }
}

/// Header text displayed around the whole graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphLabel {
    pub text: String,
    pub font_size: Option<u32>,
    /// Graph `height` in inches, unset unless asked for
    pub height: Option<u32>,
    pub location: LabelLocation,
    pub justification: LabelJustification,
}

impl GraphLabel {
    /// A top-centered header with the default header font size
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: Some(DEFAULT_HEADER_FONT_SIZE),
            height: None,
            location: LabelLocation::default(),
            justification: LabelJustification::default(),
        }
    }

    pub fn with_font_size(mut self, font_size: Option<u32>) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_height(mut self, height: Option<u32>) -> Self {
        self.height = height;
        self
    }

    pub fn with_location(mut self, location: LabelLocation) -> Self {
        self.location = location;
        self
    }

    pub fn with_justification(mut self, justification: LabelJustification) -> Self {
        self.justification = justification;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_defaults() {
        let label = GraphLabel::new("my custom header");
        assert_eq!(label.font_size, Some(24));
        assert_eq!(label.height, None);
        assert_eq!(label.location.to_string(), "t");
        assert_eq!(label.justification.to_string(), "c");
    }

    #[test]
    fn test_label_overrides() {
        let label = GraphLabel::new("header")
            .with_location(LabelLocation::Bottom)
            .with_justification(LabelJustification::Left)
            .with_font_size(None)
            .with_height(Some(5));
        assert_eq!(label.location.to_string(), "b");
        assert_eq!(label.justification.to_string(), "l");
        assert_eq!(label.font_size, None);
        assert_eq!(label.height, Some(5));
    }
}
