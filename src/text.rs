//! The attributed-string representation underlying the builder.

use std::{fmt, ops::Range};

use ahash::AHashMap;
use image::RgbaImage;
use smallvec::SmallVec;

use crate::{
    attribute::{AttributeKey, AttributeValue},
    Rect,
};

/// The placeholder character standing in for an inline attachment
/// (U+FFFC OBJECT REPLACEMENT CHARACTER, 3 bytes in UTF-8).
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// Error returned when an attribute range does not fit the current text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("range {start}..{end} out of bounds for text of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("byte {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

/// A run of one attribute value over a byte range of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRun {
    range: Range<usize>,
    value: AttributeValue,
}

impl AttributeRun {
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }
}

/// An inline image embedded in styled text behind a placeholder
/// character, together with its bounding box relative to the baseline.
#[derive(Clone)]
pub struct ImageAttachment {
    image: RgbaImage,
    bounds: Rect,
}

impl ImageAttachment {
    pub fn new(image: RgbaImage, bounds: Rect) -> Self {
        Self { image, bounds }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("image", &self.image.dimensions())
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl PartialEq for ImageAttachment {
    fn eq(&self, other: &Self) -> bool {
        self.bounds == other.bounds
            && self.image.dimensions() == other.image.dimensions()
            && self.image.as_raw() == other.image.as_raw()
    }
}

/// A character sequence annotated with ranges of style attributes.
///
/// Ranges are byte ranges into the text and must lie on `char`
/// boundaries. For every attribute key the stored runs are disjoint and
/// sorted by start; writing a value over a range that overlaps existing
/// runs overrides the overlapping portion only, splitting the existing
/// runs where needed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    text: String,
    runs: AHashMap<AttributeKey, SmallVec<[AttributeRun; 1]>>,
}

impl StyledText {
    /// Creates an empty styled text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a styled text from `content` with every value in
    /// `attributes` applied over its full range.
    ///
    /// Empty content stores no runs.
    pub fn with_attributes(
        content: impl Into<String>,
        attributes: impl IntoIterator<Item = AttributeValue>,
    ) -> Self {
        let mut this = Self {
            text: content.into(),
            runs: AHashMap::new(),
        };
        let len = this.text.len();
        for value in attributes {
            this.splice(value.key(), 0..len, Some(value));
        }
        this
    }

    /// Creates a styled text holding just `attachment` behind a single
    /// [`OBJECT_REPLACEMENT`] placeholder character.
    pub fn from_attachment(attachment: ImageAttachment) -> Self {
        let mut this = Self {
            text: OBJECT_REPLACEMENT.to_string(),
            runs: AHashMap::new(),
        };
        let len = this.text.len();
        this.splice(
            AttributeKey::Attachment,
            0..len,
            Some(AttributeValue::Attachment(attachment)),
        );
        this
    }

    /// Gets the plain character sequence.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gets the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Applies `value` over `range`, overriding the overlapping portion
    /// of any existing runs for the same key.
    ///
    /// An empty range is a successful no-op.
    pub fn set_attribute(
        &mut self,
        range: Range<usize>,
        value: AttributeValue,
    ) -> Result<(), RangeError> {
        self.check_range(&range)?;
        self.splice(value.key(), range, Some(value));
        Ok(())
    }

    /// Removes the attribute stored under `key` from `range`, splitting
    /// partially overlapped runs.
    pub fn clear_attribute(
        &mut self,
        range: Range<usize>,
        key: AttributeKey,
    ) -> Result<(), RangeError> {
        self.check_range(&range)?;
        self.splice(key, range, None);
        Ok(())
    }

    /// Appends another styled text, shifting its runs past the current
    /// text. Existing runs are untouched.
    pub fn append(&mut self, other: StyledText) {
        let shift = self.text.len();
        self.text.push_str(&other.text);
        for (key, runs) in other.runs {
            self.runs
                .entry(key)
                .or_default()
                .extend(runs.into_iter().map(|mut run| {
                    run.range.start += shift;
                    run.range.end += shift;
                    run
                }));
        }
    }

    /// Gets the runs stored under `key`, sorted by start.
    pub fn runs(&self, key: AttributeKey) -> &[AttributeRun] {
        self.runs.get(&key).map(|runs| runs.as_slice()).unwrap_or(&[])
    }

    /// Gets the value stored under `key` at byte position `index`, if any.
    pub fn attribute_at(&self, key: AttributeKey, index: usize) -> Option<&AttributeValue> {
        self.runs(key)
            .iter()
            .find(|run| run.range.contains(&index))
            .map(AttributeRun::value)
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), RangeError> {
        if range.start > range.end || range.end > self.text.len() {
            return Err(RangeError::OutOfBounds {
                start: range.start,
                end: range.end,
                len: self.text.len(),
            });
        }
        for index in [range.start, range.end] {
            if !self.text.is_char_boundary(index) {
                return Err(RangeError::NotCharBoundary(index));
            }
        }
        Ok(())
    }

    /// Carves `range` out of the runs for `key`, keeping the
    /// non-overlapping remainders of split runs, then inserts `value`
    /// (if any) at its sorted position.
    fn splice(&mut self, key: AttributeKey, range: Range<usize>, value: Option<AttributeValue>) {
        if range.start >= range.end {
            return;
        }

        let runs = self.runs.entry(key).or_default();
        let mut spliced: SmallVec<[AttributeRun; 1]> = SmallVec::new();
        for run in runs.drain(..) {
            if run.range.end <= range.start || run.range.start >= range.end {
                spliced.push(run);
            } else {
                if run.range.start < range.start {
                    spliced.push(AttributeRun {
                        range: run.range.start..range.start,
                        value: run.value.clone(),
                    });
                }
                if run.range.end > range.end {
                    spliced.push(AttributeRun {
                        range: range.end..run.range.end,
                        value: run.value,
                    });
                }
            }
        }

        if let Some(value) = value {
            let insert_at = spliced
                .iter()
                .position(|run| run.range.start >= range.end)
                .unwrap_or(spliced.len());
            spliced.insert(insert_at, AttributeRun { range, value });
        }

        *runs = spliced;
    }
}
