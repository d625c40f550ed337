/// Paragraph-level formatting applied to styled text as a single
/// attribute value.
///
/// Fields set to `None` fall back to the renderer's defaults. Note that
/// the builder applies a paragraph style wholesale: setting line spacing
/// after line height (or vice versa) replaces the whole value rather
/// than merging fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphStyle {
    line_spacing: Option<f32>,
    minimum_line_height: Option<f32>,
    maximum_line_height: Option<f32>,
}

impl ParagraphStyle {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn line_spacing(&self) -> Option<f32> {
        self.line_spacing
    }

    pub fn minimum_line_height(&self) -> Option<f32> {
        self.minimum_line_height
    }

    pub fn maximum_line_height(&self) -> Option<f32> {
        self.maximum_line_height
    }

    pub fn set_line_spacing(&mut self, spacing: f32) {
        self.line_spacing = Some(spacing);
    }

    pub fn set_minimum_line_height(&mut self, height: f32) {
        self.minimum_line_height = Some(height);
    }

    pub fn set_maximum_line_height(&mut self, height: f32) {
        self.maximum_line_height = Some(height);
    }
}
