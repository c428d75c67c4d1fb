//! Resolved text styling: font handle, colors, and attributes.
//!
//! Styles arrive on stylized row elements already resolved by the external
//! theme layer; the engine only consumes them. The one operation the engine
//! performs itself is [`Style::merge`], which overlays the selection style
//! on an element's style while rendering the selected sub-range.
//!
//! # Examples
//!
//! ```
//! use docpane::{Rgba, Style};
//!
//! let keyword = Style::fg(Rgba::BLUE).with_bold();
//! let selection = Style::bg(Rgba::from_hex("#316ac5").unwrap());
//!
//! // Selection attributes win, element attributes fill in the rest.
//! let selected_keyword = keyword.merge(selection);
//! assert_eq!(selected_keyword.fg, keyword.fg);
//! assert_eq!(selected_keyword.bg, selection.bg);
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

/// Opaque handle to a host-resolved font.
///
/// The engine never inspects fonts; it passes the handle back to the host
/// with every measure and draw call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

bitflags! {
    /// Text rendering attributes (bold, italic, underline, strikethrough).
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased weight.
        const BOLD          = 0x01;
        /// Italic.
        const ITALIC        = 0x02;
        /// Underlined text.
        const UNDERLINE     = 0x04;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x08;
    }
}

/// Complete resolved style: font, foreground, background, attributes.
///
/// Styles are immutable and cheap to copy. `None` for a color or font means
/// "inherit the host default" rather than a specific value, which is what
/// makes [`Style::merge`] a useful overlay operation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Font handle (None = host default font).
    pub font: Option<FontId>,
    /// Foreground color (None = host default).
    pub fg: Option<Rgba>,
    /// Background color (None = no background fill).
    pub bg: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no font, colors, or attributes.
    pub const NONE: Self = Self {
        font: None,
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a new style builder.
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Create a style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self {
            font: None,
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only a background color.
    #[must_use]
    pub const fn bg(color: Rgba) -> Self {
        Self {
            font: None,
            fg: None,
            bg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only a font handle.
    #[must_use]
    pub const fn font(font: FontId) -> Self {
        Self {
            font: Some(font),
            fg: None,
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Return a new style with the specified font handle.
    #[must_use]
    pub const fn with_font(self, font: FontId) -> Self {
        Self {
            font: Some(font),
            ..self
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Return a new style with the italic attribute added.
    #[must_use]
    pub const fn with_italic(self) -> Self {
        self.with_attributes(TextAttributes::ITALIC)
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.font.is_none() && self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Merge two styles, with `other` taking precedence for set values.
    ///
    /// Attributes are OR-ed; fonts and colors fall back to `self` when
    /// `other` leaves them unset.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            font: other.font.or(self.font),
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes.union(other.attributes),
        }
    }
}

/// Builder for creating styles fluently.
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Set the font handle.
    #[must_use]
    pub fn font(mut self, font: FontId) -> Self {
        self.style.font = Some(font);
        self
    }

    /// Set foreground color.
    #[must_use]
    pub fn fg(mut self, color: Rgba) -> Self {
        self.style.fg = Some(color);
        self
    }

    /// Set background color.
    #[must_use]
    pub fn bg(mut self, color: Rgba) -> Self {
        self.style.bg = Some(color);
        self
    }

    /// Add bold attribute.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.attributes |= TextAttributes::BOLD;
        self
    }

    /// Add italic attribute.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.style.attributes |= TextAttributes::ITALIC;
        self
    }

    /// Add underline attribute.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.style.attributes |= TextAttributes::UNDERLINE;
        self
    }

    /// Add strikethrough attribute.
    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        self.style.attributes |= TextAttributes::STRIKETHROUGH;
        self
    }

    /// Build the final style.
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}
