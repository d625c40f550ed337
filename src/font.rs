use fontdb::Weight;

/// Cap height assumed for fonts created without explicit metrics,
/// as a fraction of the point size.
const DEFAULT_CAP_HEIGHT_RATIO: f32 = 0.7;

/// Describes the font applied over a range of styled text.
///
/// This is a descriptor, not a loaded face: matching it against an
/// actual font database happens at render time, outside this crate.
/// The cap height defaults to a fixed fraction of the point size and
/// can be overridden with real metrics via [`Font::set_cap_height`].
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: Option<String>,
    weight: Weight,
    italic: bool,
    point_size: f32,
    cap_height: f32,
}

impl Font {
    /// Creates a regular-weight font of the given point size.
    pub fn system(point_size: f32) -> Self {
        Self {
            family: None,
            weight: Weight::NORMAL,
            italic: false,
            point_size,
            cap_height: point_size * DEFAULT_CAP_HEIGHT_RATIO,
        }
    }

    /// Creates a bold font of the given point size.
    pub fn bold(point_size: f32) -> Self {
        let mut font = Self::system(point_size);
        font.weight = Weight::BOLD;
        font
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn cap_height(&self) -> f32 {
        self.cap_height
    }

    pub fn set_family(&mut self, family: impl Into<String>) {
        self.family = Some(family.into());
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    pub fn set_cap_height(&mut self, cap_height: f32) {
        self.cap_height = cap_height;
    }
}
