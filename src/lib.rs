//! A fluent builder for composing styled text: font and color runs,
//! paragraph spacing, bold substrings, and inline scaled images,
//! layered over a plain attributed-string representation.
//!
//! This crate does no layout or rendering. It assembles a [`StyledText`]
//! value (a character sequence plus disjoint attribute runs) that a
//! renderer can consume.

mod attribute;
mod builder;
mod font;
mod paragraph;
mod rect;
mod scale;
mod text;

pub use attribute::{Attribute, AttributeKey, AttributeValue};
pub use builder::StyledTextBuilder;
pub use font::Font;
pub use paragraph::ParagraphStyle;
pub use rect::Rect;
pub use scale::{scaled, ScaledImage};
pub use text::{AttributeRun, ImageAttachment, RangeError, StyledText, OBJECT_REPLACEMENT};

pub use fontdb::Weight;
pub use glam::Vec2;
pub use image::RgbaImage;
pub use palette::Srgba;
