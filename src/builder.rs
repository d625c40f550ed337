//! Builder-like API for composing styled text.

use ahash::AHashMap;
use glam::vec2;
use image::RgbaImage;

use crate::{
    attribute::{Attribute, AttributeKey, AttributeValue},
    scale::scaled,
    text::{ImageAttachment, StyledText},
    Font, ParagraphStyle, Rect,
};

/// Accumulates a [`StyledText`] value through chained calls.
///
/// Every operation mutates the builder in place and returns it again,
/// so calls compose fluently:
///
/// ```
/// use quill::StyledTextBuilder;
///
/// let mut builder = StyledTextBuilder::new();
/// builder
///     .set_text("Hello World")
///     .set_line_spacing(4.)
///     .bold(["World"], 20.);
/// assert_eq!(builder.current_value().text(), "Hello World");
/// ```
///
/// Malformed input degrades silently rather than erroring: a missing
/// image or an absent bold substring leaves the text unchanged.
#[derive(Debug, Clone, Default)]
pub struct StyledTextBuilder {
    value: StyledText,
}

impl StyledTextBuilder {
    /// Creates a builder holding empty text with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current styled text with `content`, unstyled.
    pub fn set_text(&mut self, content: impl Into<String>) -> &mut Self {
        self.set_text_with_attributes(content, [])
    }

    /// Replaces the current styled text with `content`, styled
    /// uniformly by `attributes`.
    ///
    /// Attributes are resolved in order and a later attribute with the
    /// same key overwrites an earlier one, including an explicit clear
    /// such as [`Attribute::TextColor`]`(None)`.
    pub fn set_text_with_attributes(
        &mut self,
        content: impl Into<String>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> &mut Self {
        let mut resolved: AHashMap<AttributeKey, Option<AttributeValue>> = AHashMap::new();
        for attribute in attributes {
            resolved.insert(attribute.key(), attribute.value());
        }
        self.value = StyledText::with_attributes(
            content,
            resolved.into_iter().filter_map(|(_, value)| value),
        );
        self
    }

    /// Applies a paragraph style with the given line spacing over the
    /// whole text.
    ///
    /// The paragraph style attribute is replaced wholesale; a line
    /// height configured earlier is lost unless re-applied.
    pub fn set_line_spacing(&mut self, spacing: f32) -> &mut Self {
        let mut style = ParagraphStyle::empty();
        style.set_line_spacing(spacing);
        self.apply_paragraph_style(style)
    }

    /// Applies a paragraph style with minimum and maximum line height
    /// both set to `height` over the whole text.
    ///
    /// Replaces any previously applied paragraph style, symmetric with
    /// [`Self::set_line_spacing`].
    pub fn set_line_height(&mut self, height: f32) -> &mut Self {
        let mut style = ParagraphStyle::empty();
        style.set_minimum_line_height(height);
        style.set_maximum_line_height(height);
        self.apply_paragraph_style(style)
    }

    /// Emboldens the first occurrence of each of `substrings` with a
    /// bold font of the given point size.
    ///
    /// The search is a literal, case-sensitive forward search; only the
    /// first occurrence of each substring is affected. A substring that
    /// does not occur in the current text is skipped.
    pub fn bold<'a>(
        &mut self,
        substrings: impl IntoIterator<Item = &'a str>,
        size: f32,
    ) -> &mut Self {
        for substring in substrings {
            match self.value.text().find(substring) {
                Some(start) => {
                    let range = start..start + substring.len();
                    self.value
                        .set_attribute(range, AttributeValue::Font(Font::bold(size)))
                        .ok();
                }
                None => log::warn!("no occurrence of {:?} to embolden", substring),
            }
        }
        self
    }

    /// Scales `image` to the width of `font`'s point size and appends
    /// it to the end of the text as an inline attachment.
    ///
    /// The attachment is offset horizontally by half the font's cap
    /// height and centered vertically against it. A missing image, or
    /// one the scaler cannot render, is a no-op.
    pub fn append_image(&mut self, image: Option<&RgbaImage>, font: &Font) -> &mut Self {
        let scaled = match image.and_then(|image| scaled(image, Some(font.point_size()))) {
            Some(scaled) => scaled,
            None => return self,
        };

        let cap_height = font.cap_height();
        let bounds = Rect::new(
            vec2(cap_height / 2., (cap_height - scaled.size.y).round() / 2.),
            scaled.size,
        );
        self.value
            .append(StyledText::from_attachment(ImageAttachment::new(
                scaled.image,
                bounds,
            )));
        self
    }

    /// Read-only access to the builder's current state.
    pub fn current_value(&self) -> &StyledText {
        &self.value
    }

    fn apply_paragraph_style(&mut self, style: ParagraphStyle) -> &mut Self {
        // The full range of the builder's own text is always valid.
        let range = 0..self.value.len();
        self.value
            .set_attribute(range, AttributeValue::ParagraphStyle(style))
            .ok();
        self
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;
    use palette::Srgba;

    use super::*;
    use crate::OBJECT_REPLACEMENT;

    fn red() -> Srgba<u8> {
        Srgba::new(255, 0, 0, 255)
    }

    #[test]
    fn set_text_replaces_content() {
        let mut builder = StyledTextBuilder::new();
        builder.set_text("Hello");
        assert_eq!(builder.current_value().text(), "Hello");
        assert!(builder.current_value().runs(AttributeKey::Font).is_empty());
        assert!(builder
            .current_value()
            .runs(AttributeKey::ForegroundColor)
            .is_empty());

        builder.set_line_spacing(4.).set_text("Goodbye");
        assert_eq!(builder.current_value().text(), "Goodbye");
        assert!(builder
            .current_value()
            .runs(AttributeKey::ParagraphStyle)
            .is_empty());
    }

    #[test]
    fn attributes_apply_over_the_full_range() {
        let mut builder = StyledTextBuilder::new();
        builder.set_text_with_attributes(
            "Hello",
            [
                Attribute::Font(Font::system(14.)),
                Attribute::TextColor(Some(red())),
            ],
        );

        let value = builder.current_value();
        let fonts = value.runs(AttributeKey::Font);
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0].range(), 0..5);
        assert_eq!(fonts[0].value(), &AttributeValue::Font(Font::system(14.)));

        let colors = value.runs(AttributeKey::ForegroundColor);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].range(), 0..5);
        assert_eq!(colors[0].value(), &AttributeValue::ForegroundColor(red()));
    }

    #[test]
    fn duplicate_attribute_keys_resolve_last_wins() {
        let mut builder = StyledTextBuilder::new();
        builder.set_text_with_attributes(
            "x",
            [
                Attribute::Font(Font::system(10.)),
                Attribute::Font(Font::system(16.)),
            ],
        );

        let fonts = builder.current_value().runs(AttributeKey::Font);
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0].value(), &AttributeValue::Font(Font::system(16.)));
    }

    #[test]
    fn absent_color_clears_an_earlier_color() {
        let mut builder = StyledTextBuilder::new();
        builder.set_text_with_attributes(
            "x",
            [
                Attribute::TextColor(Some(red())),
                Attribute::TextColor(None),
            ],
        );
        assert!(builder
            .current_value()
            .runs(AttributeKey::ForegroundColor)
            .is_empty());
    }

    #[test]
    fn line_height_replaces_line_spacing() {
        let mut builder = StyledTextBuilder::new();
        builder.set_text("hello").set_line_spacing(4.).set_line_height(18.);

        let mut expected = ParagraphStyle::empty();
        expected.set_minimum_line_height(18.);
        expected.set_maximum_line_height(18.);

        let runs = builder.current_value().runs(AttributeKey::ParagraphStyle);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].range(), 0..5);
        assert_eq!(runs[0].value(), &AttributeValue::ParagraphStyle(expected));
    }

    #[test]
    fn line_spacing_replaces_line_height() {
        let mut builder = StyledTextBuilder::new();
        builder.set_text("hello").set_line_height(18.).set_line_spacing(4.);

        let mut expected = ParagraphStyle::empty();
        expected.set_line_spacing(4.);

        let runs = builder.current_value().runs(AttributeKey::ParagraphStyle);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].value(), &AttributeValue::ParagraphStyle(expected));
    }

    #[test]
    fn bold_applies_to_the_first_occurrence() {
        let mut builder = StyledTextBuilder::new();
        builder.set_text("Hello World").bold(["World"], 20.);

        let fonts = builder.current_value().runs(AttributeKey::Font);
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0].range(), 6..11);
        assert_eq!(fonts[0].value(), &AttributeValue::Font(Font::bold(20.)));
    }

    #[test]
    fn bold_missing_substring_changes_nothing() {
        let mut builder = StyledTextBuilder::new();
        builder.set_text("Hello World");
        let before = builder.current_value().clone();

        builder.bold(["xyz"], 20.);
        assert_eq!(builder.current_value(), &before);
    }

    #[test]
    fn bold_disjoint_substrings_do_not_interfere() {
        let mut builder = StyledTextBuilder::new();
        builder.set_text("AB").bold(["A"], 10.).bold(["B"], 12.);

        let fonts = builder.current_value().runs(AttributeKey::Font);
        assert_eq!(fonts.len(), 2);
        assert_eq!(fonts[0].range(), 0..1);
        assert_eq!(fonts[0].value(), &AttributeValue::Font(Font::bold(10.)));
        assert_eq!(fonts[1].range(), 1..2);
        assert_eq!(fonts[1].value(), &AttributeValue::Font(Font::bold(12.)));
    }

    #[test]
    fn append_image_none_is_a_noop() {
        let mut builder = StyledTextBuilder::new();
        builder.set_text("Hello");
        let before = builder.current_value().clone();

        builder.append_image(None, &Font::system(20.));
        assert_eq!(builder.current_value(), &before);
    }

    #[test]
    fn append_image_scales_to_the_point_size() {
        let mut builder = StyledTextBuilder::new();
        let image = RgbaImage::new(40, 20);
        // Point size 20, default cap height 14.
        let font = Font::system(20.);
        builder.set_text("Price: ").append_image(Some(&image), &font);

        let value = builder.current_value();
        assert_eq!(value.text(), format!("Price: {}", OBJECT_REPLACEMENT));

        let runs = value.runs(AttributeKey::Attachment);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].range(), 7..7 + OBJECT_REPLACEMENT.len_utf8());

        let attachment = match runs[0].value() {
            AttributeValue::Attachment(attachment) => attachment,
            other => panic!("expected an attachment, got {:?}", other),
        };
        // Width is the point size exactly; height follows the ratio.
        assert_eq!(attachment.bounds().size, vec2(20., 10.));
        assert_eq!(attachment.bounds().pos, vec2(7., 2.));
        assert_eq!(attachment.image().dimensions(), (20, 10));
    }

    #[test]
    fn append_image_leaves_earlier_runs_untouched() {
        let mut builder = StyledTextBuilder::new();
        let image = RgbaImage::new(40, 20);
        builder
            .set_text("Hello World")
            .bold(["World"], 20.)
            .append_image(Some(&image), &Font::system(20.));

        let fonts = builder.current_value().runs(AttributeKey::Font);
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0].range(), 6..11);
    }

    #[test]
    fn paragraph_style_on_empty_text_stores_nothing() {
        let mut builder = StyledTextBuilder::new();
        builder.set_line_spacing(4.);
        assert!(builder
            .current_value()
            .runs(AttributeKey::ParagraphStyle)
            .is_empty());
    }
}
