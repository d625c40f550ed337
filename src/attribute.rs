use palette::Srgba;

use crate::{text::ImageAttachment, Font, ParagraphStyle};

/// An identifier naming one formatting dimension of styled text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Font,
    ForegroundColor,
    ParagraphStyle,
    Attachment,
}

/// A value stored for one attribute key over a range of text.
///
/// Each variant belongs to exactly one [`AttributeKey`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Font(Font),
    ForegroundColor(Srgba<u8>),
    ParagraphStyle(ParagraphStyle),
    Attachment(ImageAttachment),
}

impl AttributeValue {
    /// Gets the key this value is stored under.
    pub fn key(&self) -> AttributeKey {
        match self {
            AttributeValue::Font(_) => AttributeKey::Font,
            AttributeValue::ForegroundColor(_) => AttributeKey::ForegroundColor,
            AttributeValue::ParagraphStyle(_) => AttributeKey::ParagraphStyle,
            AttributeValue::Attachment(_) => AttributeKey::Attachment,
        }
    }
}

/// A style attribute accepted by
/// [`StyledTextBuilder::set_text_with_attributes`](crate::StyledTextBuilder::set_text_with_attributes).
///
/// `TextColor(None)` is a valid, explicit instruction to clear the
/// color attribute rather than an omission.
///
/// New formatting dimensions are added as new variants with one arm in
/// the key/value mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Font(Font),
    TextColor(Option<Srgba<u8>>),
}

impl Attribute {
    /// Gets the attribute key this attribute sets or clears.
    pub fn key(&self) -> AttributeKey {
        self.key_and_value().0
    }

    /// Gets the value to store, or `None` for an explicit clear.
    pub fn value(&self) -> Option<AttributeValue> {
        self.key_and_value().1
    }

    fn key_and_value(&self) -> (AttributeKey, Option<AttributeValue>) {
        match self {
            Attribute::Font(font) => (AttributeKey::Font, Some(AttributeValue::Font(font.clone()))),
            Attribute::TextColor(Some(color)) => (
                AttributeKey::ForegroundColor,
                Some(AttributeValue::ForegroundColor(*color)),
            ),
            Attribute::TextColor(None) => (AttributeKey::ForegroundColor, None),
        }
    }
}
