use super::{Color, Shape, Style};

/// Per-node rendering attributes
///
/// Every field is optional; unset fields are left out of the DOT output so
/// Graphviz (or the graph-wide node defaults) decide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeAttributes {
    pub label: Option<String>,
    pub shape: Option<Shape>,
    pub style: Option<Style>,
    pub color: Option<Color>,
    pub fill_color: Option<Color>,
    pub font_name: Option<String>,
}

impl NodeAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_fill_color(mut self, fill_color: Color) -> Self {
        self.fill_color = Some(fill_color);
        self
    }

    pub fn with_font_name(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = Some(font_name.into());
        self
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(self, other: NodeAttributes) -> Self {
        Self {
            label: other.label.or(self.label),
            shape: other.shape.or(self.shape),
            style: other.style.or(self.style),
            color: other.color.or(self.color),
            fill_color: other.fill_color.or(self.fill_color),
            font_name: other.font_name.or(self.font_name),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Set attributes as DOT `(key, value)` pairs in rendering order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if let Some(label) = &self.label {
            entries.push(("label", label.clone()));
        }
        if let Some(shape) = self.shape {
            entries.push(("shape", shape.to_string()));
        }
        if let Some(style) = self.style {
            entries.push(("style", style.to_string()));
        }
        if let Some(color) = &self.color {
            entries.push(("color", color.to_string()));
        }
        if let Some(fill_color) = &self.fill_color {
            entries.push(("fillcolor", fill_color.to_string()));
        }
        if let Some(font_name) = &self.font_name {
            entries.push(("fontname", font_name.clone()));
        }
        entries
    }
}

/// Per-edge rendering attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeAttributes {
    pub style: Option<Style>,
    pub color: Option<Color>,
}

impl EdgeAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn merge(self, other: EdgeAttributes) -> Self {
        Self {
            style: other.style.or(self.style),
            color: other.color.or(self.color),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.color.is_none()
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if let Some(style) = self.style {
            entries.push(("style", style.to_string()));
        }
        if let Some(color) = &self.color {
            entries.push(("color", color.to_string()));
        }
        entries
    }
}
